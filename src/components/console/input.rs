//! Console input line with completion, history recall and ghost hints.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use super::hooks::{HintState, TabCycleState};
use crate::config::PROMPT;
use crate::core::AutocompleteResult;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/console/input.module.css");

/// Prompt line bound to a session's input buffer.
///
/// The buffer lives in the session; this component only forwards edits and
/// key presses. Enter submits, ↑/↓ recall history, Tab completes against the
/// command table, → accepts the ghost hint, Ctrl+C discards the line and
/// Ctrl+L clears the screen.
#[component]
pub fn Input(
    input_ref: NodeRef<leptos::html::Input>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
    on_history_nav: Callback<i32, Option<String>>,
    on_autocomplete: Callback<(), AutocompleteResult>,
    on_get_hint: Callback<String, Option<String>>,
    on_interrupt: Callback<()>,
    on_clear_screen: Callback<()>,
) -> impl IntoView {
    // State management using custom hooks
    let tab_state = TabCycleState::new();
    let hint_state = HintState::new();

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            dom::move_cursor_to_end(&input);
        }
    };

    // Reset all transient state
    let reset_state = move || {
        tab_state.clear();
        hint_state.clear();
    };

    let handle_tab = move || {
        if tab_state.is_active() {
            // Already cycling through matches - advance to next
            if let Some(next) = tab_state.advance() {
                on_input.run(next);
            }
            return;
        }

        match on_autocomplete.run(()) {
            AutocompleteResult::Single(_) => hint_state.clear(),
            AutocompleteResult::Multiple(_, matches) => {
                hint_state.clear();
                tab_state.start(matches);
            }
            AutocompleteResult::None => {}
        }
    };

    // Accept the ghost hint when the caret is at the end of the line
    let handle_arrow_right = move |current: &str| -> Option<String> {
        let input = input_ref.get()?;
        let pos = input.selection_start().ok().flatten().unwrap_or(0) as usize;
        if pos == current.chars().count()
            && let Some(h) = hint_state.get()
        {
            hint_state.clear();
            return Some(format!("{}{}", current, h));
        }
        None
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            reset_state();
            on_submit.run(());
        }
        "Tab" => {
            ev.prevent_default();
            handle_tab();
            move_cursor_to_end();
        }
        "ArrowUp" => {
            ev.prevent_default();
            reset_state();
            if on_history_nav.run(-1).is_some() {
                move_cursor_to_end();
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            reset_state();
            on_history_nav.run(1);
        }
        "ArrowRight" => {
            if let Some(completed) = handle_arrow_right(&value.get()) {
                ev.prevent_default();
                on_input.run(completed);
                move_cursor_to_end();
            }
        }
        "c" if ev.ctrl_key() => {
            reset_state();
            on_interrupt.run(());
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            reset_state();
            on_clear_screen.run(());
        }
        "Escape" => reset_state(),
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        let text = input.value();
        tab_state.clear();

        if text.is_empty() {
            hint_state.clear();
        } else {
            hint_state.set(on_get_hint.run(text.clone()));
        }
        on_input.run(text);
    };

    let suggestions_view = move || {
        let matches = tab_state.matches.get();
        let idx = tab_state.index.get();
        if matches.is_empty() {
            None
        } else {
            Some(view! {
                <div class=css::suggestions>
                    {matches.into_iter().enumerate().map(|(i, s)| {
                        let class_name = if i == idx {
                            format!("{} {}", css::suggestion, css::suggestionActive)
                        } else {
                            css::suggestion.to_string()
                        };
                        view! { <span class=class_name>{s}</span> }
                    }).collect_view()}
                </div>
            })
        }
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{PROMPT}</span>
                <div class=css::field>
                    // Ghost text overlay (shows input value + hint)
                    <div class=css::ghostOverlay>
                        <span class=css::ghostText>{move || value.get()}</span>
                        <span class=css::ghostHint>
                            {move || hint_state.hint.get().unwrap_or_default()}
                        </span>
                    </div>
                    <input
                        node_ref=input_ref
                        type="text"
                        class=css::input
                        placeholder="Enter command..."
                        autocomplete="off"
                        spellcheck="false"
                        prop:value=value
                        on:input=handle_input
                        on:keydown=handle_keydown
                    />
                </div>
            </div>

            {suggestions_view}
        </div>
    }
}
