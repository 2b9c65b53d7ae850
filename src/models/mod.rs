//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`TranscriptEntry`], [`EntryKind`] - Console transcript lines
//! - [`Lesson`] - Shell Chamber lessons

mod lesson;
mod transcript;

pub use lesson::Lesson;
pub use transcript::{EntryKind, TranscriptEntry};
