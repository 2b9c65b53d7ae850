//! Core console logic.
//!
//! This module provides:
//! - [`CommandTable`] and [`resolve`] for scripted command resolution
//! - [`ConsoleSession`], the per-console state machine
//! - [`AutoPlay`] sequences with cancellable [`AutoPlayHandle`]s
//! - [`ConsoleConfig`] profiles and the [`LessonCatalog`]
//! - [`autocomplete`] and [`get_hint`] for tab completion

mod autocomplete;
pub mod autoplay;
pub mod error;
mod lessons;
mod profile;
mod resolver;
mod session;
mod table;

pub use autocomplete::{AutocompleteResult, autocomplete, get_hint};
pub use autoplay::{AutoPlay, AutoPlayHandle, AutoPlayOutcome};
pub use error::ConfigError;
pub use lessons::{LessonCatalog, LessonProgress};
pub use profile::ConsoleConfig;
pub use resolver::{Resolution, resolve};
pub use session::ConsoleSession;
pub use table::{CommandTable, Dynamic, Fallback, Response};
