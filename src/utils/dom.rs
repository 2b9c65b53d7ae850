//! DOM and Web API utility functions.
//!
//! Thin wrappers that swallow the `Result`s of browser calls whose failure
//! is harmless for the UI (focus, scroll, selection).

use web_sys::{Element, HtmlElement, HtmlInputElement};

/// Focus an element, returning `true` on success.
pub fn focus(element: &HtmlElement) -> bool {
    element.focus().is_ok()
}

/// Scroll a container so its last child is visible.
pub fn scroll_to_bottom(element: &Element) {
    element.set_scroll_top(element.scroll_height());
}

/// Move the caret of an input field to the end of its value.
pub fn move_cursor_to_end(input: &HtmlInputElement) {
    let len = input.value().chars().count() as u32;
    let _ = input.set_selection_range(len, len);
}
