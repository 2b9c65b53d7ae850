//! Tab completion against a console's command table.
//!
//! Completion only helps the visitor type a known command; resolution stays
//! exact-match. Because table keys may include arguments (`echo hello`),
//! the whole input line is completed, not just the first word.

use crate::core::CommandTable;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Single match - complete with this value.
    Single(String),
    /// Multiple matches - (common_prefix, all_matches).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Completion
// ============================================================================

/// Complete `input` against the commands of `table`.
///
/// Empty input never completes; an input that already equals a command with
/// no longer alternatives is returned as a single match.
pub fn autocomplete(input: &str, table: &CommandTable) -> AutocompleteResult {
    if input.trim().is_empty() {
        return AutocompleteResult::None;
    }

    let matches: Vec<String> = table
        .commands()
        .filter(|cmd| cmd.starts_with(input))
        .map(str::to_string)
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(matches[0].clone()),
        _ => AutocompleteResult::Multiple(find_common_prefix(&matches), matches),
    }
}

/// Ghost-text hint: the untyped remainder of the only matching command.
pub fn get_hint(input: &str, table: &CommandTable) -> Option<String> {
    match autocomplete(input, table) {
        AutocompleteResult::Single(cmd) if cmd.len() > input.len() => {
            Some(cmd[input.len()..].to_string())
        }
        _ => None,
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Find the common prefix of multiple strings.
fn find_common_prefix(strings: &[String]) -> String {
    let Some(first) = strings.first() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for s in &strings[1..] {
        prefix_len = first
            .char_indices()
            .zip(s.chars())
            .take_while(|((i, a), b)| *i < prefix_len && a == b)
            .map(|((i, a), _)| i + a.len_utf8())
            .last()
            .unwrap_or(0);
    }

    first[..prefix_len].to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Fallback, Response};

    #[test]
    fn test_single_match() {
        let table = CommandTable::museum();
        assert_eq!(
            autocomplete("who", &table),
            AutocompleteResult::Single("whoami".to_string())
        );
        assert_eq!(
            autocomplete("echo", &table),
            AutocompleteResult::Single("echo hello".to_string())
        );
    }

    #[test]
    fn test_multiple_matches() {
        let table = CommandTable::new(
            [
                ("cd /home", Response::silent()),
                ("cd ~", Response::silent()),
                ("cat newfile.txt", Response::text("x")),
            ],
            Fallback::default(),
        )
        .unwrap();
        match autocomplete("cd", &table) {
            AutocompleteResult::Multiple(common, matches) => {
                assert_eq!(common, "cd ");
                assert_eq!(matches, vec!["cd /home".to_string(), "cd ~".to_string()]);
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_no_match() {
        let table = CommandTable::museum();
        assert_eq!(autocomplete("xyz", &table), AutocompleteResult::None);
        assert_eq!(autocomplete("", &table), AutocompleteResult::None);
        assert_eq!(autocomplete("   ", &table), AutocompleteResult::None);
    }

    #[test]
    fn test_hint() {
        let table = CommandTable::museum();
        assert_eq!(get_hint("wh", &table), Some("oami".to_string()));
        assert_eq!(get_hint("whoami", &table), None);
        assert_eq!(get_hint("zz", &table), None);
    }

    #[test]
    fn test_find_common_prefix() {
        let strings = vec![
            "hello".to_string(),
            "help".to_string(),
            "helicopter".to_string(),
        ];
        assert_eq!(find_common_prefix(&strings), "hel");
        assert_eq!(find_common_prefix(&[]), "");
        assert_eq!(find_common_prefix(&["ab".to_string(), "xy".to_string()]), "");
    }
}
