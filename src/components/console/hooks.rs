//! Custom hooks for console components.
//!
//! Provides reusable stateful logic for console input handling.

use leptos::prelude::*;

/// State and operations for Tab-based autocompletion cycling.
///
/// When multiple commands match a Tab completion, repeated Tab presses
/// cycle through them. Completion covers the whole line, so the selected
/// match replaces the input as-is.
#[derive(Clone, Copy)]
pub struct TabCycleState {
    /// All matching commands available for cycling.
    pub matches: RwSignal<Vec<String>>,
    /// Current index in the matches list.
    pub index: RwSignal<usize>,
}

impl TabCycleState {
    /// Create a new Tab cycle state with empty values.
    pub fn new() -> Self {
        Self {
            matches: RwSignal::new(vec![]),
            index: RwSignal::new(0),
        }
    }

    /// Check if currently in Tab cycling mode (has matches).
    pub fn is_active(&self) -> bool {
        self.matches.with(|m| !m.is_empty())
    }

    /// Clear all Tab cycling state.
    pub fn clear(&self) {
        self.matches.set(vec![]);
        self.index.set(0);
    }

    /// Set up the cycle with new matches. Nothing is selected yet.
    pub fn start(&self, matches: Vec<String>) {
        self.matches.set(matches);
        self.index.set(usize::MAX);
    }

    /// Advance to the next match and return it.
    pub fn advance(&self) -> Option<String> {
        self.matches.with(|matches| {
            if matches.is_empty() {
                return None;
            }
            let new_idx = self.index.get().wrapping_add(1) % matches.len();
            self.index.set(new_idx);
            matches.get(new_idx).cloned()
        })
    }
}

impl Default for TabCycleState {
    fn default() -> Self {
        Self::new()
    }
}

/// State for ghost text hints shown while typing.
#[derive(Clone, Copy)]
pub struct HintState {
    /// Current hint text to display after user input.
    pub hint: RwSignal<Option<String>>,
}

impl HintState {
    /// Create a new hint state.
    pub fn new() -> Self {
        Self {
            hint: RwSignal::new(None),
        }
    }

    /// Get the current hint.
    pub fn get(&self) -> Option<String> {
        self.hint.get()
    }

    /// Set a new hint.
    pub fn set(&self, value: Option<String>) {
        self.hint.set(value);
    }

    /// Clear the hint.
    pub fn clear(&self) {
        self.hint.set(None);
    }
}

impl Default for HintState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        let owner = Owner::new();
        owner.with(|| {
            let tab = TabCycleState::new();
            assert!(!tab.is_active());
            assert_eq!(tab.advance(), None);

            tab.start(vec!["cd /home".to_string(), "cd ~".to_string()]);
            assert!(tab.is_active());
            assert_eq!(tab.advance(), Some("cd /home".to_string()));
            assert_eq!(tab.advance(), Some("cd ~".to_string()));
            assert_eq!(tab.advance(), Some("cd /home".to_string()));

            tab.clear();
            assert!(!tab.is_active());
        });
    }

    #[test]
    fn test_hint_state() {
        let owner = Owner::new();
        owner.with(|| {
            let hint = HintState::new();
            assert_eq!(hint.get(), None);
            hint.set(Some("oami".to_string()));
            assert_eq!(hint.get(), Some("oami".to_string()));
            hint.clear();
            assert_eq!(hint.get(), None);
        });
    }
}
