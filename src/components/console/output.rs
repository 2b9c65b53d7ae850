use leptos::prelude::*;

use crate::config::PROMPT;
use crate::models::{EntryKind, TranscriptEntry};

stylance::import_crate_style!(css, "src/components/console/output.module.css");

/// One transcript line. Multi-line outputs keep their line breaks.
#[component]
pub fn Entry(entry: TranscriptEntry) -> impl IntoView {
    match entry.kind {
        EntryKind::Command => view! {
            <div class=css::command>
                <span class=css::prompt>{format!("{} ", PROMPT)}</span>
                <span>{entry.text}</span>
            </div>
        }
        .into_any(),
        EntryKind::Output => view! {
            <div class=css::output>{entry.text}</div>
        }
        .into_any(),
    }
}
