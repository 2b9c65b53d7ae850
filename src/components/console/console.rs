//! Console view component.
//!
//! A window-framed scripted console: title bar, welcome lines, transcript
//! and the input line.

use leptos::prelude::*;

use crate::app::ConsoleState;
use crate::components::console::{Entry, Input};
use crate::core::AutocompleteResult;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/console/console.module.css");

// ============================================================================
// Console Component
// ============================================================================

/// Mounts one console.
///
/// Seeded commands start playing on mount and stop when the component is
/// cleaned up.
#[component]
pub fn Console(state: ConsoleState) -> impl IntoView {
    let (title, height, welcome) = state
        .config
        .with_value(|c| (c.title.clone(), c.height_hint.clone(), c.welcome.clone()));

    let output_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    state.start_autoplay();
    setup_autoscroll_effect(state, output_ref);

    // Derived signals
    let value = Signal::derive(move || state.input());

    // Callbacks
    let on_input = Callback::new(move |text: String| state.set_input(text));
    let on_submit = Callback::new(move |_: ()| state.submit());
    let on_history_nav =
        Callback::new(move |direction: i32| state.navigate_history(direction));
    let on_autocomplete =
        Callback::new(move |_: ()| -> AutocompleteResult { state.autocomplete() });
    let on_get_hint = Callback::new(move |input: String| state.hint(&input));
    let on_interrupt = Callback::new(move |_: ()| state.interrupt());
    let on_clear_screen = Callback::new(move |_: ()| state.clear_screen());

    let handle_click = move |_| {
        if let Some(input) = input_ref.get() {
            dom::focus(&input);
        }
    };

    let welcome_view = welcome
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let class = if i == 0 { css::welcomeTitle } else { css::welcomeLine };
            view! { <div class=class>{line}</div> }
        })
        .collect_view();

    view! {
        <div class=css::window>
            <div class=css::titleBar>
                <div class=css::dots>
                    <span class=css::dotRed></span>
                    <span class=css::dotYellow></span>
                    <span class=css::dotGreen></span>
                </div>
                <span class=css::title>{title}</span>
            </div>

            <div
                node_ref=output_ref
                class=css::body
                style:height=height
                on:click=handle_click
            >
                <div class=css::welcome>{welcome_view}</div>

                <For
                    each=move || state.session.with(|s| s.transcript().to_vec())
                    key=|entry| entry.id
                    children=|entry| view! { <Entry entry=entry /> }
                />

                <Input
                    input_ref=input_ref
                    value=value
                    on_input=on_input
                    on_submit=on_submit
                    on_history_nav=on_history_nav
                    on_autocomplete=on_autocomplete
                    on_get_hint=on_get_hint
                    on_interrupt=on_interrupt
                    on_clear_screen=on_clear_screen
                />
            </div>
        </div>
    }
}

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Auto-scroll the console body to the bottom when the transcript changes.
fn setup_autoscroll_effect(state: ConsoleState, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        state.session.track();
        if let Some(el) = output_ref.get() {
            dom::scroll_to_bottom(&el);
        }
    });
}
