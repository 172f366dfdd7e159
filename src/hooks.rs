use crate::config::{DEFAULT_WHEEL_SIZE_PX, EDITOR_ID};
use gloo_events::EventListener;
use gloo_utils::{document, window};
use lunch_roulette::geometry::wheel_diameter_for_viewport;
use lunch_roulette::shortcuts::{KeyPress, Shortcut};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

fn viewport_wheel_size() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(wheel_diameter_for_viewport)
        .unwrap_or(DEFAULT_WHEEL_SIZE_PX)
}

/// Wheel diameter in pixels, following the viewport width.
#[hook]
pub fn use_wheel_size() -> u32 {
    let size = use_state(|| DEFAULT_WHEEL_SIZE_PX);

    {
        let size = size.clone();
        use_effect_with((), move |_| {
            size.set(viewport_wheel_size());
            let listener = EventListener::new(&window(), "resize", move |_| {
                size.set(viewport_wheel_size());
            });
            // Listener is removed when dropped
            move || drop(listener)
        });
    }

    *size
}

fn editor_has_focus() -> bool {
    document()
        .active_element()
        .map(|el| el.id() == EDITOR_ID)
        .unwrap_or(false)
}

/// Listen for page-wide keyboard shortcuts and hand them to `on_shortcut`.
#[hook]
pub fn use_shortcuts(on_shortcut: Callback<Shortcut>) {
    use_effect_with(on_shortcut, move |on_shortcut| {
        let on_shortcut = on_shortcut.clone();
        let listener = EventListener::new(&window(), "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = event.key();
            let code = event.code();
            let press = KeyPress {
                key: &key,
                code: &code,
                ctrl: event.ctrl_key(),
                meta: event.meta_key(),
                in_editor: editor_has_focus(),
            };
            if let Some(shortcut) = Shortcut::classify(&press) {
                event.prevent_default();
                on_shortcut.emit(shortcut);
            }
        });
        move || drop(listener)
    });
}
