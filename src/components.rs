//! Yew view components for the roulette page.
//!
//! All of them are driven by props; state lives in the root component.

use crate::config::{EDITOR_ID, SPIN_TRANSITION, SPIN_TRANSITION_PROPERTY, WHEEL_HALO_PX};
use lunch_roulette::geometry::wheel_background;
use lunch_roulette::{Item, PRESETS};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{HtmlTextAreaElement, TransitionEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelProps {
    /// Items the wheel is drawn with (the spin snapshot while spinning).
    pub items: Rc<Vec<Item>>,
    pub angle: f64,
    pub spinning: bool,
    pub size: u32,
    pub on_spin: Callback<()>,
    /// Fired once the wheel's own rotation transition has finished.
    pub on_spin_end: Callback<()>,
}

#[function_component(Wheel)]
pub fn wheel(props: &WheelProps) -> Html {
    let wheel_ref = use_node_ref();

    let ontransitionend = {
        let wheel_ref = wheel_ref.clone();
        let on_spin_end = props.on_spin_end.clone();
        Callback::from(move |e: TransitionEvent| {
            if e.property_name() != SPIN_TRANSITION_PROPERTY {
                return;
            }
            // Transitions of children bubble up here too
            let from_wheel = match (e.target(), wheel_ref.get()) {
                (Some(target), Some(node)) => {
                    let target: &JsValue = target.as_ref();
                    let node: &JsValue = node.as_ref();
                    target == node
                }
                _ => false,
            };
            if from_wheel {
                on_spin_end.emit(());
            }
        })
    };

    let disabled = props.spinning || props.items.is_empty();
    let onclick = {
        let on_spin = props.on_spin.clone();
        Callback::from(move |_: MouseEvent| on_spin.emit(()))
    };

    let transition = if props.spinning { SPIN_TRANSITION } else { "none" };
    let wheel_style = format!(
        "width: {size}px; height: {size}px; background: {bg}; transform: rotate({angle}deg); transition: {transition};",
        size = props.size,
        bg = wheel_background(props.items.len()),
        angle = props.angle,
    );
    let frame = props.size + WHEEL_HALO_PX;

    html! {
        <div class="wheel-side">
            <div class="wheel-pointer" aria-hidden="true"></div>
            <div class="wheel-frame" style={format!("width: {frame}px; height: {frame}px;")}>
                <div
                    ref={wheel_ref}
                    class="wheel"
                    role="img"
                    aria-label="Lunch roulette wheel"
                    style={wheel_style}
                    {ontransitionend}
                >
                    <button class="wheel-hub" aria-label="Spin" {onclick} {disabled}>
                        <span class="wheel-hub-face">
                            <span class="wheel-hub-caption">{ "Lunch spin" }</span>
                            <span class="wheel-hub-action">
                                { if props.spinning { "Spinning..." } else { "Spin! 🎯" } }
                            </span>
                        </span>
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Renders the current winner, or a hint when there is none yet.
pub fn render_result(winner: Option<&Item>) -> Html {
    match winner {
        Some(item) => html! {
            <div class="result" aria-live="polite">
                <div class="result-badge">
                    <span class="result-caption">{ "Today's lunch" }</span>
                    <strong class="result-winner">{ item.label() }</strong>
                    <span>{ "😋" }</span>
                </div>
            </div>
        },
        None => html! {
            <div class="result" aria-live="polite">
                <p class="result-hint">{ "Spin to pick today's menu!" }</p>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ItemEditorProps {
    pub raw: AttrValue,
    pub editor_ref: NodeRef,
    pub on_change: Callback<String>,
}

#[function_component(ItemEditor)]
pub fn item_editor(props: &ItemEditorProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="editor">
            <h2>{ "Edit menu" }</h2>
            <p class="editor-help">
                { "Separate items with commas, e.g. " }
                <code>{ "Kimchi stew, Spicy pork, Tonkatsu" }</code>
            </p>
            <textarea
                id={EDITOR_ID}
                ref={props.editor_ref.clone()}
                value={props.raw.clone()}
                {oninput}
                placeholder="Type your menu here"
            />
            <div class="presets">
                { PRESETS.iter().map(|preset| {
                    let on_change = props.on_change.clone();
                    let items = preset.items;
                    html! {
                        <button class="preset" onclick={Callback::from(move |_: MouseEvent| on_change.emit(items.to_string()))}>
                            { preset.label }
                        </button>
                    }
                }).collect::<Html>() }
                <button
                    class="preset-clear"
                    onclick={
                        let on_change = props.on_change.clone();
                        Callback::from(move |_: MouseEvent| on_change.emit(String::new()))
                    }
                >
                    { "Clear" }
                </button>
            </div>
        </div>
    }
}

/// Renders the parsed items as chips, plus the recent winners when there are any.
pub fn render_item_lists(items: &[Item], recent: &[Item]) -> Html {
    html! {
        <div class="item-lists">
            <h3>{ format!("Current items ({})", items.len()) }</h3>
            if items.is_empty() {
                <p class="item-empty">{ "Items you type will show up here." }</p>
            } else {
                <ul class="chips">
                    { items.iter().map(|item| html! {
                        <li class="chip">{ item.label() }</li>
                    }).collect::<Html>() }
                </ul>
            }
            if !recent.is_empty() {
                <h3>{ "Recent results" }</h3>
                <ul class="chips recent">
                    { recent.iter().map(|item| html! {
                        <li class="chip chip-recent">{ item.label() }</li>
                    }).collect::<Html>() }
                </ul>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToggleProps {
    pub label: AttrValue,
    pub checked: bool,
    pub on_toggle: Callback<bool>,
}

/// Labelled checkbox used for the header options.
#[function_component(Toggle)]
pub fn toggle(props: &ToggleProps) -> Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_toggle.emit(input.checked());
        })
    };

    html! {
        <label class="toggle">
            <input type="checkbox" checked={props.checked} {onchange} />
            { props.label.clone() }
        </label>
    }
}
