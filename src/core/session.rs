//! Console session state machine.
//!
//! One [`ConsoleSession`] exists per mounted console. It owns the transcript,
//! the uncommitted input buffer, the set of completed commands and the recall
//! history. Every mutation goes through `&mut self`, so submissions on one
//! session are serialized and the transcript order is the submission order.

use std::collections::HashSet;

use crate::config::MAX_COMMAND_HISTORY;
use crate::core::autocomplete::{AutocompleteResult, autocomplete};
use crate::core::autoplay::{AutoPlay, AutoPlayHandle};
use crate::core::profile::ConsoleConfig;
use crate::core::resolver::{Resolution, resolve};
use crate::core::table::CommandTable;
use crate::models::TranscriptEntry;

/// State of one console instance.
#[derive(Debug)]
pub struct ConsoleSession {
    table: CommandTable,
    transcript: Vec<TranscriptEntry>,
    input: String,
    completed: HashSet<String>,
    history: Vec<String>,
    history_index: Option<usize>,
    next_id: u64,
    autoplay: Option<AutoPlayHandle>,
}

impl ConsoleSession {
    pub fn new(table: CommandTable) -> Self {
        Self {
            table,
            transcript: Vec::new(),
            input: String::new(),
            completed: HashSet::new(),
            history: Vec::new(),
            history_index: None,
            next_id: 0,
            autoplay: None,
        }
    }

    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::new(config.table.clone())
    }

    // ------------------------------------------------------------------------
    // Observed state
    // ------------------------------------------------------------------------

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Whether `command` has been submitted since the last reset.
    pub fn is_completed(&self, command: &str) -> bool {
        self.completed.contains(command)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn command_history(&self) -> &[String] {
        &self.history
    }

    // ------------------------------------------------------------------------
    // Input buffer
    // ------------------------------------------------------------------------

    /// Append typed text to the input buffer. Line breaks are dropped.
    pub fn type_text(&mut self, text: &str) {
        self.input
            .extend(text.chars().filter(|c| !matches!(c, '\n' | '\r')));
    }

    /// Replace the input buffer, as an `<input>` binding does on every edit.
    pub fn set_input(&mut self, text: &str) {
        self.input.clear();
        self.type_text(text);
    }

    /// Discard the uncommitted input (Ctrl+C).
    pub fn interrupt(&mut self) {
        self.input.clear();
        self.history_index = None;
    }

    // ------------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------------

    /// Submit the input buffer.
    ///
    /// A blank buffer is a no-op and is left untouched. Otherwise the trimmed
    /// text is executed and the buffer is emptied. Returns whether anything
    /// was submitted.
    pub fn submit(&mut self) -> bool {
        let command = self.input.trim().to_string();
        if command.is_empty() {
            return false;
        }
        self.execute(&command);
        self.input.clear();
        true
    }

    /// Execute a command without touching the input buffer.
    ///
    /// Used by auto-play so that a seeded command never clobbers what the
    /// visitor is typing. Blank commands are ignored.
    pub fn execute(&mut self, command: &str) -> Option<Resolution> {
        let command = command.trim();
        if command.is_empty() {
            return None;
        }

        self.push_entry(TranscriptEntry::command(self.next_id, command));
        let resolution = resolve(&self.table, command);
        match &resolution {
            Resolution::Clear => self.transcript.clear(),
            other => {
                if let Some(text) = other.output() {
                    self.push_entry(TranscriptEntry::output(self.next_id, text));
                }
            }
        }
        self.completed.insert(command.to_string());
        self.record_history(command);

        Some(resolution)
    }

    fn push_entry(&mut self, entry: TranscriptEntry) {
        self.transcript.push(entry);
        self.next_id += 1;
    }

    /// Empty the transcript without submitting anything (Ctrl+L).
    pub fn clear_screen(&mut self) {
        self.transcript.clear();
    }

    /// Restart the session: transcript, buffer, progress and history are
    /// emptied and any pending auto-play is cancelled.
    pub fn reset(&mut self) {
        self.cancel_autoplay();
        self.transcript.clear();
        self.input.clear();
        self.completed.clear();
        self.history.clear();
        self.history_index = None;
    }

    // ------------------------------------------------------------------------
    // History and completion
    // ------------------------------------------------------------------------

    fn record_history(&mut self, command: &str) {
        if self.history.last().map(String::as_str) != Some(command) {
            self.history.push(command.to_string());
            if self.history.len() > MAX_COMMAND_HISTORY {
                self.history.remove(0);
            }
        }
        self.history_index = None;
    }

    /// Recall an earlier (`direction < 0`) or later (`direction > 0`)
    /// command into the input buffer.
    ///
    /// Moving past the newest entry leaves recall mode and empties the buffer.
    pub fn navigate_history(&mut self, direction: i32) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }

        let last = self.history.len() - 1;
        let was_recalling = self.history_index.is_some();
        let new_index = match self.history_index {
            None if direction < 0 => Some(last),
            Some(i) if direction < 0 && i > 0 => Some(i - 1),
            Some(i) if direction > 0 && i < last => Some(i + 1),
            Some(_) if direction > 0 => None,
            current => current,
        };

        self.history_index = new_index;
        match new_index {
            Some(i) => {
                let recalled = self.history[i].clone();
                self.input = recalled.clone();
                Some(recalled)
            }
            None => {
                if was_recalling && direction > 0 {
                    self.input.clear();
                }
                None
            }
        }
    }

    /// Complete the input buffer against the command table (Tab).
    ///
    /// A single match replaces the buffer; multiple matches extend it to
    /// their common prefix when that is longer than what was typed.
    pub fn autocomplete(&mut self) -> AutocompleteResult {
        let result = autocomplete(&self.input, &self.table);
        match &result {
            AutocompleteResult::Single(completed) => self.input = completed.clone(),
            AutocompleteResult::Multiple(common, _) if common.len() > self.input.len() => {
                self.input = common.clone();
            }
            _ => {}
        }
        result
    }

    // ------------------------------------------------------------------------
    // Auto-play
    // ------------------------------------------------------------------------

    /// Prepare the auto-play sequence for `config` and keep its handle so
    /// that dropping or resetting the session cancels it.
    ///
    /// Any previous sequence is cancelled first. Returns `None` when there is
    /// nothing to play.
    pub fn start_autoplay(&mut self, config: &ConsoleConfig) -> Option<(AutoPlay, AutoPlayHandle)> {
        self.cancel_autoplay();
        if config.initial_commands.is_empty() {
            return None;
        }
        let plan = AutoPlay::new(config.initial_commands.clone());
        let handle = AutoPlayHandle::new();
        self.autoplay = Some(handle.clone());
        Some((plan, handle))
    }

    /// Cancel the pending auto-play sequence, if any.
    pub fn cancel_autoplay(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            handle.cancel();
        }
    }
}

impl Drop for ConsoleSession {
    fn drop(&mut self) {
        self.cancel_autoplay();
    }
}

// ============================================================================
// Tests
// ============================================================================
