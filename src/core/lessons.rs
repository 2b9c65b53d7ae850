//! Shell Chamber lesson catalog and progress tracking.

use std::collections::HashSet;

use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::models::Lesson;
use crate::utils::format::format_position;

// ============================================================================
// LessonCatalog
// ============================================================================

/// Ordered, non-empty list of lessons with unique ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDoc {
    #[serde(default)]
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    pub fn new(lessons: Vec<Lesson>) -> Result<Self, ConfigError> {
        if lessons.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for lesson in &lessons {
            if !seen.insert(lesson.id.as_str()) {
                return Err(ConfigError::DuplicateLesson(lesson.id.clone()));
            }
            if lesson.commands.is_empty() {
                return Err(ConfigError::EmptyLesson(lesson.id.clone()));
            }
        }
        Ok(Self { lessons })
    }

    /// Parse a catalog from TOML (`[[lessons]]` array of tables).
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let doc: CatalogDoc = toml::from_str(source)?;
        Self::new(doc.lessons)
    }

    pub fn get(&self, index: usize) -> Option<&Lesson> {
        self.lessons.get(index)
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

// ============================================================================
// LessonProgress
// ============================================================================

/// Position within a catalog of `total` lessons.
///
/// Navigation clamps at both ends, mirroring disabled Previous/Next buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LessonProgress {
    current: usize,
    total: usize,
}

impl LessonProgress {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.total
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// "n / total" label for the progress header.
    pub fn position_label(&self) -> String {
        format_position(self.current, self.total)
    }

    /// Share of the catalog reached, counting the current lesson.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current + 1) as f64 / self.total as f64
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LESSON_CATALOG;

    fn lesson(id: &str, commands: &[&str]) -> Lesson {
        Lesson {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            commands: commands.iter().map(|s| s.to_string()).collect(),
            explanation: String::new(),
            philosophy: String::new(),
        }
    }

    #[test]
    fn test_embedded_catalog() {
        let catalog = LessonCatalog::from_toml(LESSON_CATALOG).unwrap();
        assert_eq!(catalog.len(), 3);
        let ids: Vec<&str> = catalog.lessons().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["introduction", "navigation", "file-operations"]);
        assert_eq!(
            catalog.get(1).map(|l| l.commands.len()),
            Some(4)
        );
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_embedded_lessons_are_in_chamber_table() {
        let catalog = LessonCatalog::from_toml(LESSON_CATALOG).unwrap();
        let config =
            crate::core::ConsoleConfig::from_toml(crate::config::SHELL_CHAMBER_PROFILE).unwrap();
        for lesson in catalog.lessons() {
            for cmd in &lesson.commands {
                assert!(config.table.get(cmd).is_some(), "missing {}", cmd);
            }
        }
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert_eq!(LessonCatalog::new(vec![]), Err(ConfigError::EmptyCatalog));
        assert_eq!(LessonCatalog::from_toml(""), Err(ConfigError::EmptyCatalog));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = LessonCatalog::new(vec![lesson("a", &["ls"]), lesson("a", &["pwd"])]);
        assert_eq!(result, Err(ConfigError::DuplicateLesson("a".to_string())));
    }

    #[test]
    fn test_rejects_lesson_without_commands() {
        let result = LessonCatalog::new(vec![lesson("a", &["ls"]), lesson("b", &[])]);
        assert_eq!(result, Err(ConfigError::EmptyLesson("b".to_string())));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = LessonCatalog::from_toml("[[lessons]]\nid = 3");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_progress_navigation() {
        let mut progress = LessonProgress::new(3);
        assert!(progress.is_first());
        assert_eq!(progress.position_label(), "1 / 3");

        progress.previous();
        assert_eq!(progress.current(), 0);

        progress.next();
        progress.next();
        assert!(progress.is_last());
        assert_eq!(progress.position_label(), "3 / 3");

        progress.next();
        assert_eq!(progress.current(), 2);
        assert_eq!(progress.fraction(), 1.0);

        progress.previous();
        assert_eq!(progress.current(), 1);
        assert!(!progress.is_first() && !progress.is_last());
    }

    #[test]
    fn test_progress_fraction() {
        let progress = LessonProgress::new(4);
        assert_eq!(progress.fraction(), 0.25);
        assert_eq!(LessonProgress::new(0).fraction(), 0.0);
    }
}
