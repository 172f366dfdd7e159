//! Lunch Roulette front-end using Yew.
//! Wires the spin session, side effects, and UI components.

use log::debug;
use lunch_roulette::shortcuts::Shortcut;
use lunch_roulette::{parse_items, SpinSession};
use std::rc::Rc;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

mod components;
mod config;
mod feedback;
mod hooks;
mod utils;

use components::{render_item_lists, render_result, ItemEditor, Toggle, Wheel};
use config::*;
use feedback::Feedback;
use hooks::{use_shortcuts, use_wheel_size};
use utils::{read_items_query, write_items_query};

/// Bump the render version so the UI picks up changes made to the session.
fn update_render_version(version: &UseStateHandle<usize>) {
    version.set(version.wrapping_add(1));
}

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let raw_items = use_state(|| read_items_query().unwrap_or_else(|| DEFAULT_ITEMS.to_string()));
    let items = use_memo((*raw_items).clone(), |raw| parse_items(raw));

    // The session and feedback are mutated from callbacks, outside of render
    let session = use_mut_ref(|| {
        let mut session = SpinSession::default();
        session.set_exclude_most_recent(DEFAULT_NO_REPEAT);
        session
    });
    let feedback = use_mut_ref(|| Feedback::new(DEFAULT_MUTE));
    let render_version = use_state(|| 0usize);

    let no_repeat = use_state(|| DEFAULT_NO_REPEAT);
    let mute = use_state(|| DEFAULT_MUTE);
    let wheel_size = use_wheel_size();
    let editor_ref = use_node_ref();

    // Keep URL in sync so the current list can be shared
    use_effect_with((*raw_items).clone(), |raw| {
        write_items_query(raw);
    });

    let spin = {
        let session = session.clone();
        let feedback = feedback.clone();
        let items = items.clone();
        let render_version = render_version.clone();
        Callback::from(move |_: ()| {
            let started = session
                .borrow_mut()
                .spin(&items, &mut rand::rng())
                .map(|planned| planned.plan.target_index);
            match started {
                Ok(_) => {
                    feedback.borrow_mut().spin_started();
                    update_render_version(&render_version);
                }
                Err(err) => debug!("Spin request ignored: {}", err),
            }
        })
    };

    let on_spin_end = {
        let session = session.clone();
        let feedback = feedback.clone();
        let render_version = render_version.clone();
        Callback::from(move |_: ()| {
            let resolved = session.borrow_mut().resolve_spin();
            match resolved {
                Ok(_) => {
                    feedback.borrow_mut().spin_finished();
                    update_render_version(&render_version);
                }
                Err(err) => debug!("Spin end ignored: {}", err),
            }
        })
    };

    {
        let spin = spin.clone();
        let editor_ref = editor_ref.clone();
        use_shortcuts(Callback::from(move |shortcut| match shortcut {
            Shortcut::Spin => spin.emit(()),
            Shortcut::FocusEditor => {
                if let Some(editor) = editor_ref.cast::<HtmlTextAreaElement>() {
                    let _ = editor.focus();
                }
            }
        }));
    }

    let on_items_change = {
        let raw_items = raw_items.clone();
        Callback::from(move |raw: String| raw_items.set(raw))
    };

    let on_no_repeat = {
        let session = session.clone();
        let no_repeat = no_repeat.clone();
        Callback::from(move |checked: bool| {
            session.borrow_mut().set_exclude_most_recent(checked);
            no_repeat.set(checked);
        })
    };

    let on_mute = {
        let feedback = feedback.clone();
        let mute = mute.clone();
        Callback::from(move |checked: bool| {
            feedback.borrow_mut().set_muted(checked);
            mute.set(checked);
        })
    };

    let session_view = session.borrow();
    let wheel_items = Rc::new(session_view.wheel_items(&items).to_vec());
    let recent: Vec<_> = session_view.recent_winners().cloned().collect();

    html! {
        <main class="page">
            <header class="page-header">
                <h1>{ "Lunch Roulette" }</h1>
                <div class="options">
                    <Toggle label="No repeat" checked={*no_repeat} on_toggle={on_no_repeat} />
                    <Toggle label="Mute" checked={*mute} on_toggle={on_mute} />
                </div>
            </header>

            <section class="page-body">
                <div class="wheel-column">
                    <Wheel
                        items={wheel_items}
                        angle={session_view.cumulative_angle()}
                        spinning={session_view.is_spinning()}
                        size={wheel_size}
                        on_spin={spin}
                        {on_spin_end}
                    />
                    { render_result(session_view.winner()) }
                </div>

                <div class="editor-column">
                    <ItemEditor
                        raw={AttrValue::from((*raw_items).clone())}
                        editor_ref={editor_ref}
                        on_change={on_items_change}
                    />
                    { render_item_lists(&items, &recent) }
                </div>
            </section>

            <footer class="page-footer">
                { "Decide lunch as fast as you ship code ✨" }
            </footer>
        </main>
    }
}

/// Entry point: installs logging and renders the app.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<Main>::new().render();
}
