// src/view_models.rs

use crate::model::{ContentLevel, Pillar, Tier};
use crate::scoring::DEFAULT_RATING;

/// Card on the home grid.
#[derive(Clone, Debug, PartialEq)]
pub struct PillarCard {
    pub id: String,
    pub emoji: String,
    pub title: String,
    pub summary: String,
    pub quick_actions: String, // first two actions, " · " separated
}

/// Row on the diagnostic selection screen.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionChoice {
    pub section_id: String,
    pub emoji: String,
    pub title: String,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionRow {
    pub index: usize,
    pub prompt: String,
    pub rating: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DiagnosticForm {
    pub title: String,
    pub subtitle: String,
    pub section_id: Option<String>,
    pub rows: Vec<QuestionRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoreFeedback {
    pub score: u8,
    pub tier: Tier,
    pub message: &'static str,
}

impl ScoreFeedback {
    pub fn new(score: u8) -> Self {
        let tier = Tier::from_score(score);
        Self {
            score,
            tier,
            message: tier.message(),
        }
    }
}

/// Everything the detail window shows for one pillar.
#[derive(Clone, Debug, PartialEq)]
pub struct PillarDetail {
    pub pillar_id: String,
    pub title: String,
    pub summary: String,
    pub emoji: String,
    pub symptoms: Vec<String>,
    pub actions: Vec<String>,
    pub feedback: Option<ScoreFeedback>,
}

impl PillarDetail {
    pub fn new(pillar: &Pillar, score: Option<u8>) -> Self {
        Self {
            pillar_id: pillar.id.clone(),
            title: pillar.title.clone(),
            summary: pillar.summary.clone(),
            emoji: pillar.emoji.clone(),
            symptoms: pillar.symptoms.clone(),
            actions: pillar.actions.clone(),
            feedback: score.map(ScoreFeedback::new),
        }
    }

    pub fn score_text(&self) -> String {
        match &self.feedback {
            Some(f) => f.score.to_string(),
            None => "--".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameworkButton {
    pub id: String,
    pub title: String,
    pub focus: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameworkDetail {
    /// Framework id; the body's scroll position is keyed on it.
    pub id: String,
    pub title: String,
    pub focus: String,
    pub status: String,
    pub status_class: String,
    pub relevance: Vec<String>,
    pub level: ContentLevel,
    pub heading: &'static str,
    pub body: String,
}

pub(crate) fn default_ratings(questions: usize) -> Vec<u8> {
    vec![DEFAULT_RATING; questions]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_without_score_shows_placeholder() {
        let pillar = Pillar {
            id: "social".into(),
            title: "Social Connection".into(),
            emoji: "👥".into(),
            summary: String::new(),
            symptoms: vec![],
            actions: vec![],
            diag_prompt: None,
        };
        let detail = PillarDetail::new(&pillar, None);
        assert_eq!(detail.score_text(), "--");
        assert!(detail.feedback.is_none());

        let scored = PillarDetail::new(&pillar, Some(45));
        assert_eq!(scored.score_text(), "45");
        assert_eq!(scored.feedback.unwrap().tier, Tier::AreaOfFocus);
    }
}
