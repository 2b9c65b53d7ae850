//! Command resolution.
//!
//! Maps a trimmed command to what the console should do with it. There is no
//! tokenization: pipes, redirects and globs are just characters of the key.

use crate::core::table::{CommandTable, Response};

/// Outcome of resolving one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Output from the table. Empty for silent commands.
    Output(String),
    /// The reserved clear command.
    Clear,
    /// No table entry matched; carries the synthesized fallback message.
    Unrecognized(String),
}

impl Resolution {
    /// The text to append to the transcript, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Output(text) | Self::Unrecognized(text) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Resolve a command against a table.
///
/// Deterministic for a given table unless the matching entry is
/// [`Response::Dynamic`].
pub fn resolve(table: &CommandTable, command: &str) -> Resolution {
    match table.get(command) {
        Some(Response::Text(text)) => Resolution::Output(text.clone()),
        Some(Response::Dynamic(value)) => Resolution::Output(value.render()),
        Some(Response::Clear) => Resolution::Clear,
        None => Resolution::Unrecognized(table.fallback().message(command)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::Fallback;

    #[test]
    fn test_literal_lookup() {
        let table = CommandTable::museum();
        assert_eq!(resolve(&table, "whoami"), Resolution::Output("user".into()));
        assert_eq!(resolve(&table, "uname"), Resolution::Output("Linux".into()));
        assert_eq!(resolve(&table, "echo hello"), Resolution::Output("hello".into()));
        assert_eq!(
            resolve(&table, "help"),
            Resolution::Output(
                "Available commands: ls, pwd, whoami, date, uname, echo, clear, help".into()
            )
        );
    }

    #[test]
    fn test_clear_signal() {
        assert_eq!(resolve(&CommandTable::museum(), "clear"), Resolution::Clear);
    }

    #[test]
    fn test_unrecognized_uses_fallback() {
        let table = CommandTable::museum();
        assert_eq!(
            resolve(&table, "foo"),
            Resolution::Unrecognized("bash: foo: command not found".into())
        );
        // No argument parsing or prefix matching
        assert!(matches!(
            resolve(&table, "echo world"),
            Resolution::Unrecognized(_)
        ));
        assert!(matches!(resolve(&table, "l"), Resolution::Unrecognized(_)));
        assert!(matches!(
            resolve(&table, "ls | grep Music"),
            Resolution::Unrecognized(_)
        ));
    }

    #[test]
    fn test_metacharacters_are_literal_keys() {
        let table = CommandTable::new(
            [("cat *.txt > out", Response::text("ok"))],
            Fallback::ExecutedSuccessfully,
        )
        .unwrap();
        assert_eq!(resolve(&table, "cat *.txt > out"), Resolution::Output("ok".into()));
        assert_eq!(
            resolve(&table, "cat a.txt > out"),
            Resolution::Unrecognized("Command 'cat a.txt > out' executed successfully".into())
        );
    }

    #[test]
    fn test_silent_entry_has_no_output() {
        let table = CommandTable::new([("cd ~", Response::silent())], Fallback::default()).unwrap();
        let resolution = resolve(&table, "cd ~");
        assert_eq!(resolution, Resolution::Output(String::new()));
        assert_eq!(resolution.output(), None);
    }

    #[test]
    fn test_output_accessor() {
        assert_eq!(Resolution::Output("x".into()).output(), Some("x"));
        assert_eq!(Resolution::Unrecognized("y".into()).output(), Some("y"));
        assert_eq!(Resolution::Clear.output(), None);
    }

    #[test]
    fn test_date_is_dynamic() {
        match resolve(&CommandTable::museum(), "date") {
            Resolution::Output(text) => assert!(!text.is_empty()),
            other => panic!("Expected output, got {:?}", other),
        }
    }
}
