//! Command tables: the fixed mapping from literal input to canned output.
//!
//! A table is built once per console and never changes afterwards. Keys are
//! matched exactly against the trimmed input, arguments included, so
//! `echo hello` and `echo  hello` are different commands.

use std::collections::BTreeMap;

use crate::config::{CLEAR_COMMAND, DEFAULT_SHELL_NAME};
use crate::core::error::ConfigError;
use crate::utils::clock;

// =============================================================================
// Responses
// =============================================================================

/// Values computed at resolution time instead of stored literally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dynamic {
    /// Current local date and time. Not deterministic.
    Timestamp,
}

impl Dynamic {
    pub fn render(self) -> String {
        match self {
            Self::Timestamp => clock::now_locale(),
        }
    }
}

/// What a table entry produces when its command is submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Literal output. An empty string means the command is silent.
    Text(String),
    /// Wipe the transcript, including the command line itself.
    Clear,
    /// Output computed on every lookup.
    Dynamic(Dynamic),
}

impl Response {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn silent() -> Self {
        Self::Text(String::new())
    }
}

/// Message synthesized for commands missing from the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// `<shell>: <command>: command not found`
    CommandNotFound { shell: String },
    /// `Command '<command>' executed successfully`
    ExecutedSuccessfully,
}

impl Fallback {
    pub fn message(&self, command: &str) -> String {
        match self {
            Self::CommandNotFound { shell } => format!("{}: {}: command not found", shell, command),
            Self::ExecutedSuccessfully => format!("Command '{}' executed successfully", command),
        }
    }
}

impl Default for Fallback {
    fn default() -> Self {
        Self::CommandNotFound {
            shell: DEFAULT_SHELL_NAME.to_string(),
        }
    }
}

// =============================================================================
// CommandTable
// =============================================================================

/// Immutable command table with its fallback policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandTable {
    entries: BTreeMap<String, Response>,
    fallback: Fallback,
}

impl CommandTable {
    /// Build a table from `(command, response)` pairs.
    ///
    /// Keys must be non-empty and already trimmed, otherwise they could never
    /// be matched by a submitted command.
    pub fn new<I, K>(entries: I, fallback: Fallback) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, Response)>,
        K: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (key, response) in entries {
            let key = key.into();
            if key.trim().is_empty() {
                return Err(ConfigError::EmptyCommand);
            }
            if key.trim() != key {
                return Err(ConfigError::UntrimmedCommand(key));
            }
            map.insert(key, response);
        }
        Ok(Self {
            entries: map,
            fallback,
        })
    }

    /// The museum's general-purpose terminal table.
    pub fn museum() -> Self {
        let entries = [
            ("ls", Response::text("Documents  Downloads  Pictures  Music  Videos")),
            ("pwd", Response::text("/home/user")),
            ("whoami", Response::text("user")),
            ("date", Response::Dynamic(Dynamic::Timestamp)),
            ("uname", Response::text("Linux")),
            ("echo hello", Response::text("hello")),
            (CLEAR_COMMAND, Response::Clear),
            (
                "help",
                Response::text(
                    "Available commands: ls, pwd, whoami, date, uname, echo, clear, help",
                ),
            ),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            fallback: Fallback::default(),
        }
    }

    /// Exact-match lookup.
    pub fn get(&self, command: &str) -> Option<&Response> {
        self.entries.get(command)
    }

    pub fn fallback(&self) -> &Fallback {
        &self.fallback
    }

    /// All command keys in sorted order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::museum()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_museum_table_contents() {
        let table = CommandTable::museum();
        assert_eq!(table.len(), 8);
        assert_eq!(table.get("pwd"), Some(&Response::text("/home/user")));
        assert_eq!(table.get("clear"), Some(&Response::Clear));
        assert_eq!(
            table.get("date"),
            Some(&Response::Dynamic(Dynamic::Timestamp))
        );
        assert_eq!(table.get("echo"), None);
        assert_eq!(table.get("LS"), None);
    }

    #[test]
    fn test_commands_sorted() {
        let table = CommandTable::museum();
        let commands: Vec<&str> = table.commands().collect();
        assert_eq!(commands.first(), Some(&"clear"));
        assert_eq!(commands.last(), Some(&"whoami"));
    }

    #[test]
    fn test_rejects_empty_key() {
        let err = CommandTable::new([("  ", Response::silent())], Fallback::default());
        assert_eq!(err, Err(ConfigError::EmptyCommand));
    }

    #[test]
    fn test_rejects_untrimmed_key() {
        let err = CommandTable::new([("ls ", Response::silent())], Fallback::default());
        assert_eq!(err, Err(ConfigError::UntrimmedCommand("ls ".to_string())));
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(
            Fallback::default().message("foo"),
            "bash: foo: command not found"
        );
        let zsh = Fallback::CommandNotFound {
            shell: "zsh".to_string(),
        };
        assert_eq!(zsh.message("rm -rf /"), "zsh: rm -rf /: command not found");
        assert_eq!(
            Fallback::ExecutedSuccessfully.message("mkdir x"),
            "Command 'mkdir x' executed successfully"
        );
    }

    #[test]
    fn test_timestamp_is_rendered() {
        assert!(!Dynamic::Timestamp.render().is_empty());
    }
}
