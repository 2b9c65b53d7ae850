//! Console construction parameters.
//!
//! A [`ConsoleConfig`] holds everything a host view needs to mount a console:
//! the command table, the title, the seeded auto-play commands and a few
//! cosmetic hints. Profiles are either built in code ([`ConsoleConfig::museum`])
//! or parsed from TOML:
//!
//! ```toml
//! title = "shell-chamber-terminal"
//! fallback = "executed-successfully"   # or "command-not-found" (default)
//! shell = "bash"                        # used by "command-not-found"
//! initial_commands = ["whoami"]
//! welcome = ["Welcome!"]
//! height = "24rem"
//!
//! [commands]
//! "whoami" = "user"
//! "cd ~" = ""                           # silent
//! "clear" = { action = "clear" }
//! "date" = { dynamic = "timestamp" }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::{DEFAULT_HEIGHT_HINT, DEFAULT_SHELL_NAME, DEFAULT_TITLE, MUSEUM_WELCOME};
use crate::core::error::ConfigError;
use crate::core::table::{CommandTable, Dynamic, Fallback, Response};

// =============================================================================
// ConsoleConfig
// =============================================================================

/// Parameters for one mounted console.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsoleConfig {
    /// Label shown in the title bar.
    pub title: String,
    /// Commands submitted automatically after mount, in order.
    pub initial_commands: Vec<String>,
    pub table: CommandTable,
    /// CSS height of the console body. Cosmetic only.
    pub height_hint: String,
    /// Static lines shown above the transcript. Never cleared.
    pub welcome: Vec<String>,
}

impl ConsoleConfig {
    /// A console with default title and height around the given table.
    pub fn new(table: CommandTable) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            initial_commands: Vec::new(),
            table,
            height_hint: DEFAULT_HEIGHT_HINT.to_string(),
            welcome: Vec::new(),
        }
    }

    /// The museum's general-purpose terminal.
    pub fn museum() -> Self {
        Self::new(CommandTable::museum())
            .with_welcome(MUSEUM_WELCOME.iter().map(|s| s.to_string()).collect())
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_initial_commands(mut self, commands: Vec<String>) -> Self {
        self.initial_commands = commands;
        self
    }

    pub fn with_height_hint(mut self, height: impl Into<String>) -> Self {
        self.height_hint = height.into();
        self
    }

    pub fn with_welcome(mut self, lines: Vec<String>) -> Self {
        self.welcome = lines;
        self
    }

    /// Parse a console profile from TOML.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let doc: ProfileDoc = toml::from_str(source)?;

        let fallback = match doc.fallback {
            FallbackDoc::CommandNotFound => Fallback::CommandNotFound {
                shell: doc.shell.unwrap_or_else(|| DEFAULT_SHELL_NAME.to_string()),
            },
            FallbackDoc::ExecutedSuccessfully => Fallback::ExecutedSuccessfully,
        };
        let table = CommandTable::new(
            doc.commands
                .into_iter()
                .map(|(key, value)| (key, value.into_response())),
            fallback,
        )?;

        let mut config = Self::new(table)
            .with_initial_commands(doc.initial_commands)
            .with_welcome(doc.welcome);
        if let Some(title) = doc.title {
            config.title = title;
        }
        if let Some(height) = doc.height {
            config.height_hint = height;
        }
        Ok(config)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::museum()
    }
}

// =============================================================================
// TOML Document Shape
// =============================================================================

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileDoc {
    title: Option<String>,
    shell: Option<String>,
    #[serde(default)]
    fallback: FallbackDoc,
    #[serde(default)]
    initial_commands: Vec<String>,
    #[serde(default)]
    welcome: Vec<String>,
    height: Option<String>,
    #[serde(default)]
    commands: BTreeMap<String, ResponseDoc>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
enum FallbackDoc {
    #[default]
    CommandNotFound,
    ExecutedSuccessfully,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResponseDoc {
    Text(String),
    Action { action: ActionDoc },
    Dynamic { dynamic: DynamicDoc },
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ActionDoc {
    Clear,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
enum DynamicDoc {
    Timestamp,
}

impl ResponseDoc {
    fn into_response(self) -> Response {
        match self {
            Self::Text(text) => Response::Text(text),
            Self::Action {
                action: ActionDoc::Clear,
            } => Response::Clear,
            Self::Dynamic {
                dynamic: DynamicDoc::Timestamp,
            } => Response::Dynamic(Dynamic::Timestamp),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SHELL_CHAMBER_PROFILE;

    #[test]
    fn test_museum_defaults() {
        let config = ConsoleConfig::museum();
        assert_eq!(config.title, "terminal");
        assert!(config.initial_commands.is_empty());
        assert_eq!(config.height_hint, "24rem");
        assert_eq!(config.welcome.len(), 2);
        assert_eq!(config.table, CommandTable::museum());
    }

    #[test]
    fn test_builder() {
        let config = ConsoleConfig::museum()
            .with_title("demo")
            .with_initial_commands(vec!["ls".into(), "pwd".into()])
            .with_height_hint("12rem");
        assert_eq!(config.title, "demo");
        assert_eq!(config.initial_commands, vec!["ls", "pwd"]);
        assert_eq!(config.height_hint, "12rem");
    }

    #[test]
    fn test_parse_full_profile() {
        let source = r#"
            title = "demo"
            shell = "zsh"
            initial_commands = ["whoami", "date"]
            height = "10rem"

            [commands]
            "whoami" = "user"
            "cd ~" = ""
            "clear" = { action = "clear" }
            "date" = { dynamic = "timestamp" }
        "#;
        let config = ConsoleConfig::from_toml(source).unwrap();
        assert_eq!(config.title, "demo");
        assert_eq!(config.height_hint, "10rem");
        assert_eq!(config.initial_commands, vec!["whoami", "date"]);
        assert_eq!(config.table.get("whoami"), Some(&Response::text("user")));
        assert_eq!(config.table.get("cd ~"), Some(&Response::silent()));
        assert_eq!(config.table.get("clear"), Some(&Response::Clear));
        assert_eq!(
            config.table.get("date"),
            Some(&Response::Dynamic(Dynamic::Timestamp))
        );
        assert_eq!(
            config.table.fallback(),
            &Fallback::CommandNotFound {
                shell: "zsh".to_string()
            }
        );
    }

    #[test]
    fn test_parse_minimal_profile_uses_defaults() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config.title, "terminal");
        assert!(config.table.is_empty());
        assert_eq!(config.table.fallback(), &Fallback::default());
    }

    #[test]
    fn test_shell_chamber_profile() {
        let config = ConsoleConfig::from_toml(SHELL_CHAMBER_PROFILE).unwrap();
        assert_eq!(config.title, "shell-chamber-terminal");
        assert_eq!(config.table.fallback(), &Fallback::ExecutedSuccessfully);
        assert_eq!(config.welcome.len(), 3);
        assert_eq!(
            config.table.get("echo 'Hello, Shell!'"),
            Some(&Response::text("Hello, Shell!"))
        );
        match config.table.get("ls -la") {
            Some(Response::Text(text)) => {
                assert_eq!(text.lines().count(), 3);
                assert!(text.starts_with("drwxr-xr-x"));
            }
            other => panic!("Expected text response, got {:?}", other),
        }
        assert_eq!(config.table.get("rm newfile.txt"), Some(&Response::silent()));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = ConsoleConfig::from_toml("colour = \"green\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_unknown_action() {
        let err = ConsoleConfig::from_toml("[commands]\n\"x\" = { action = \"reboot\" }")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_untrimmed_key() {
        let err = ConsoleConfig::from_toml("[commands]\n\" ls\" = \"x\"").unwrap_err();
        assert_eq!(err, ConfigError::UntrimmedCommand(" ls".to_string()));
    }
}
