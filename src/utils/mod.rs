//! Utility modules for DOM access, time and display formatting.
//!
//! Provides:
//! - [`clock`] - Current time for dynamic command output
//! - [`dom`] - Browser DOM helpers
//! - [`format`] - Date and progress formatting

pub mod clock;
pub mod dom;
pub mod format;
