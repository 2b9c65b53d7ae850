//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Console profiles and the lesson catalog are loaded at compile time using
//! `include_str!` and parsed at startup.

// =============================================================================
// Embedded Assets (loaded at compile time)
// =============================================================================

/// Console profile for the Shell Chamber lesson terminal.
pub const SHELL_CHAMBER_PROFILE: &str = include_str!("../assets/consoles/shell_chamber.toml");

/// Lessons practiced in the Shell Chamber.
pub const LESSON_CATALOG: &str = include_str!("../assets/lessons.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "The Linux Museum";

/// Tagline displayed under the application name.
pub const APP_TAGLINE: &str = "Explore the philosophy, history and inner workings of Linux";

// =============================================================================
// Console Configuration
// =============================================================================

/// Default console title shown in the title bar.
pub const DEFAULT_TITLE: &str = "terminal";

/// Shell name used in the "command not found" fallback message.
pub const DEFAULT_SHELL_NAME: &str = "bash";

/// Reserved command that wipes the transcript.
pub const CLEAR_COMMAND: &str = "clear";

/// Default height of the console body (CSS length).
pub const DEFAULT_HEIGHT_HINT: &str = "24rem";

/// Prompt symbol rendered before commands and the input field.
pub const PROMPT: &str = "$";

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Welcome lines shown above the transcript of the museum console.
pub const MUSEUM_WELCOME: &[&str] = &[
    "Welcome to the Linux Museum Terminal",
    "Type 'help' for available commands",
];

/// Auto-play timing (milliseconds).
pub mod autoplay {
    /// Delay before the first seeded command fires.
    pub const INITIAL_DELAY_MS: u64 = 0;
    /// Delay between successive seeded commands.
    pub const INTERVAL_MS: u64 = 1000;
}
