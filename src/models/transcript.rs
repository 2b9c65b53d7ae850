//! Transcript data types for console rendering.

/// Kind of a transcript line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// A command entered at the prompt (rendered with `$ `)
    Command,
    /// Output produced by a command
    Output,
}

/// Represents a single line of the console transcript.
#[derive(Clone, Debug)]
pub struct TranscriptEntry {
    /// Session-unique ID for efficient keying in For loops
    pub id: u64,
    pub kind: EntryKind,
    pub text: String,
}

impl TranscriptEntry {
    pub fn command(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            kind: EntryKind::Command,
            text: text.into(),
        }
    }

    pub fn output(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            kind: EntryKind::Output,
            text: text.into(),
        }
    }

    pub fn is_command(&self) -> bool {
        self.kind == EntryKind::Command
    }
}

impl PartialEq for TranscriptEntry {
    fn eq(&self, other: &Self) -> bool {
        // Only compare content, not ID
        self.kind == other.kind && self.text == other.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_constructors() {
        let cmd = TranscriptEntry::command(0, "whoami");
        assert_eq!(cmd.kind, EntryKind::Command);
        assert_eq!(cmd.text, "whoami");
        assert!(cmd.is_command());

        let out = TranscriptEntry::output(1, "user");
        assert_eq!(out.kind, EntryKind::Output);
        assert!(!out.is_command());
    }

    #[test]
    fn test_equality_ignores_id() {
        let a = TranscriptEntry::output(3, "hello");
        let b = TranscriptEntry::output(9, "hello");
        assert_eq!(a, b);
        assert_ne!(a, TranscriptEntry::command(3, "hello"));
    }
}
