// src/data.rs

use crate::model::{Framework, Pillar, QuizSection};

const QUIZ_SECTIONS_YAML: &str = include_str!("data/quiz_sections.yaml");
const PILLARS_JSON: &str = include_str!("../assets/data/pillars.json");
const FRAMEWORKS_JSON: &str = include_str!("../assets/data/frameworks.json");

/// Loads the diagnostic sections compiled into the binary.
pub fn read_quiz_sections_embedded() -> Result<Vec<QuizSection>, serde_yaml::Error> {
    serde_yaml::from_str(QUIZ_SECTIONS_YAML)
}

pub fn read_pillars_embedded() -> Result<Vec<Pillar>, serde_json::Error> {
    serde_json::from_str(PILLARS_JSON)
}

pub fn read_frameworks_embedded() -> Result<Vec<Framework>, serde_json::Error> {
    serde_json::from_str(FRAMEWORKS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn six_sections_with_four_questions_each() {
        let sections = read_quiz_sections_embedded().unwrap();
        assert_eq!(sections.len(), 6);
        assert!(sections.iter().all(|s| s.questions.len() == 4));
        let ids: HashSet<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn every_section_has_a_bundled_pillar() {
        let sections = read_quiz_sections_embedded().unwrap();
        let pillars = read_pillars_embedded().unwrap();
        for s in &sections {
            assert!(pillars.iter().any(|p| p.id == s.id), "missing pillar {}", s.id);
        }
    }

    #[test]
    fn bundled_frameworks_parse() {
        let frameworks = read_frameworks_embedded().unwrap();
        assert!(!frameworks.is_empty());
        assert!(frameworks.iter().all(|f| !f.id.is_empty()));
    }
}
