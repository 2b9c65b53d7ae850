//! Custom error types for the application.
//!
//! Resolving a command never fails: unknown input takes the fallback path.
//! The only fallible operations are loading console profiles and lesson
//! catalogs from their embedded TOML sources.

use thiserror::Error;

/// Errors raised while loading console profiles and lesson catalogs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// TOML source could not be parsed or did not match the expected shape
    #[error("invalid configuration: {0}")]
    Parse(String),
    /// A command table key was empty
    #[error("command table contains an empty command")]
    EmptyCommand,
    /// A command table key has leading or trailing whitespace and can never match
    #[error("command {0:?} has surrounding whitespace and can never match")]
    UntrimmedCommand(String),
    /// The lesson catalog has no lessons
    #[error("lesson catalog is empty")]
    EmptyCatalog,
    /// Two lessons share the same id
    #[error("duplicate lesson id: {0}")]
    DuplicateLesson(String),
    /// A lesson lists no commands to practice
    #[error("lesson {0} has no commands")]
    EmptyLesson(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ConfigError::DuplicateLesson("intro".into()).to_string(),
            "duplicate lesson id: intro"
        );
        assert_eq!(
            ConfigError::UntrimmedCommand(" ls".into()).to_string(),
            "command \" ls\" has surrounding whitespace and can never match"
        );
    }
}
