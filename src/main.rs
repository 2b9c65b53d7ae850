mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::logging::warn;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    match document().get_element_by_id("app") {
        Some(root) => mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget(),
        None => {
            warn!("#app element not found, mounting on <body>");
            mount_to_body(App);
        }
    }
}
