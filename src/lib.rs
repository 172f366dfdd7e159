use log::{debug, warn};
use rand::Rng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod error;
pub mod geometry;
pub mod items;
pub mod planner;
pub mod session;
pub mod shortcuts;

pub use error::SpinError;
pub use items::{parse_items, Item, Preset, PRESETS};
pub use planner::{SpinParams, SpinPlan};
pub use session::{PlannedSpin, SpinSession};

/// Default spin parameters
pub mod defaults {
    pub const MIN_FULL_TURNS: u32 = 6;
    pub const MAX_FULL_TURNS: u32 = 8;
    pub const JITTER_FRACTION: f64 = 0.1;
    pub const POINTER_REFERENCE_DEG: f64 = crate::geometry::POINTER_REFERENCE_DEG;
    pub const RECENT_WINNERS_CAPACITY: usize = 12;
}

/// Labels cleaned the same way as typed text: trimmed, blanks dropped.
fn items_from_labels(labels: &[String]) -> Vec<Item> {
    labels.iter().filter_map(Item::new).collect()
}

fn items_from_js(items_js: JsValue) -> Result<Vec<Item>, String> {
    let labels: Vec<String> = serde_wasm_bindgen::from_value(items_js)
        .map_err(|e| format!("Failed to deserialize items: {}", e))?;
    Ok(items_from_labels(&labels))
}

#[derive(Debug, Serialize)]
struct JsSpin {
    target: Item,
    next_angle: f64,
    plan: SpinPlan,
}

fn plan_for_items<R: Rng + ?Sized>(
    items: &[Item],
    current_angle: f64,
    last_winner: Option<&str>,
    exclude_most_recent: bool,
    rng: &mut R,
) -> Result<JsSpin, SpinError> {
    let params = SpinParams::default();
    let last_winner = last_winner.and_then(Item::new);
    let target =
        planner::choose_target(items, exclude_most_recent, last_winner.as_ref(), rng)
            .ok_or(SpinError::NoItems)?;

    let segment_count = geometry::segment_count_for(items.len());
    let plan = planner::plan_spin(current_angle, target, segment_count, &params, rng);
    debug!("JS spin planned for {} items", items.len());

    Ok(JsSpin {
        target: items[target].clone(),
        next_angle: plan.to_angle(),
        plan,
    })
}

fn item_under_pointer(items: &[Item], angle: f64) -> Option<&Item> {
    if items.is_empty() || !angle.is_finite() {
        return None;
    }
    let index =
        geometry::index_under_pointer(angle, items.len(), defaults::POINTER_REFERENCE_DEG);
    items.get(index)
}

/// Plan a spin for a JavaScript-driven wheel.
///
/// # Arguments
/// * `items_js` - Array of labels, in wheel order
/// * `current_angle` - Rotation the wheel currently rests at, in degrees
/// * `last_winner` - Label of the previous winner, if any
/// * `exclude_most_recent` - Apply the non-repeat rule
///
/// # Returns
/// `{ target, next_angle, plan }` on success. On failure an error message
/// string instead: `"Failed to deserialize items: ..."` when `items_js` is not
/// an array of strings, or `"Cannot spin an empty wheel"` when every label is
/// blank.
#[wasm_bindgen]
pub fn plan_wheel_spin(
    items_js: JsValue,
    current_angle: f64,
    last_winner: Option<String>,
    exclude_most_recent: bool,
) -> JsValue {
    let items = match items_from_js(items_js) {
        Ok(items) => items,
        Err(e) => return serde_wasm_bindgen::to_value(&e).unwrap_or(JsValue::NULL),
    };

    let mut rng = rand::rng();
    match plan_for_items(
        &items,
        current_angle,
        last_winner.as_deref(),
        exclude_most_recent,
        &mut rng,
    ) {
        Ok(spin) => serde_wasm_bindgen::to_value(&spin).unwrap_or(JsValue::NULL),
        Err(e) => {
            warn!("plan_wheel_spin rejected: {}", e);
            serde_wasm_bindgen::to_value(&e.to_string()).unwrap_or(JsValue::NULL)
        }
    }
}

/// Label under the pointer for a wheel of `items_js` rotated by `angle`.
///
/// # Returns
/// The label, `null` for an empty list or a non-finite angle, or
/// `"Failed to deserialize items: ..."` when `items_js` is not an array of
/// strings.
#[wasm_bindgen]
pub fn resolve_wheel_angle(items_js: JsValue, angle: f64) -> JsValue {
    let items = match items_from_js(items_js) {
        Ok(items) => items,
        Err(e) => return serde_wasm_bindgen::to_value(&e).unwrap_or(JsValue::NULL),
    };

    match item_under_pointer(&items, angle) {
        Some(item) => serde_wasm_bindgen::to_value(item).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}
