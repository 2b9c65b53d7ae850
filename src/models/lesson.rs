//! Lesson definitions for the Shell Chamber.

use serde::Deserialize;

/// A single guided lesson: a short explanation plus commands to practice.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Lesson {
    /// Stable identifier (e.g. "navigation").
    pub id: String,
    pub title: String,
    pub description: String,
    /// Commands to practice, in suggested order.
    pub commands: Vec<String>,
    pub explanation: String,
    pub philosophy: String,
}

impl Lesson {
    /// Returns true once every practice command has been submitted.
    pub fn is_complete<F>(&self, is_done: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        self.commands.iter().all(|c| is_done(c))
    }

    /// Number of practice commands already submitted.
    pub fn completed_count<F>(&self, is_done: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        self.commands.iter().filter(|c| is_done(c)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson() -> Lesson {
        Lesson {
            id: "intro".to_string(),
            title: "Intro".to_string(),
            description: String::new(),
            commands: vec!["whoami".to_string(), "pwd".to_string()],
            explanation: String::new(),
            philosophy: String::new(),
        }
    }

    #[test]
    fn test_completion_tracking() {
        let lesson = lesson();
        assert!(!lesson.is_complete(|_| false));
        assert_eq!(lesson.completed_count(|c| c == "pwd"), 1);
        assert!(lesson.is_complete(|c| c == "pwd" || c == "whoami"));
    }
}
