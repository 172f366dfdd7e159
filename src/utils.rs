//! Sharing the item list through the page URL (`?items=...`).

use crate::config::ITEMS_QUERY_PARAM;
use gloo_utils::window;
use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::Url;

/// Item text from the current URL, if present and non-empty.
pub fn read_items_query() -> Option<String> {
    let href = window().location().href().ok()?;
    let url = Url::new(&href).ok()?;
    let raw = url.search_params().get(ITEMS_QUERY_PARAM)?;
    if raw.is_empty() {
        None
    } else {
        debug!("Loaded item list from URL");
        Some(raw)
    }
}

/// Mirror `raw` into the URL without adding a history entry. Last write wins.
pub fn write_items_query(raw: &str) {
    if let Err(err) = replace_items_query(raw) {
        warn!("Failed to update URL query: {:?}", err);
    }
}

fn replace_items_query(raw: &str) -> Result<(), JsValue> {
    let window = window();
    let url = Url::new(&window.location().href()?)?;
    url.search_params().set(ITEMS_QUERY_PARAM, raw);
    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url.href()))
}
