//! UI components built with Leptos.
//!
//! - [`Console`] - Scripted console window (title bar, transcript, input)
//! - [`ShellChamber`] - Guided lessons next to a practice console
//! - [`icons`] - Centralized icon definitions

pub mod chamber;
pub mod console;
pub mod icons;

pub use chamber::ShellChamber;
pub use console::Console;
