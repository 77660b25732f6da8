use serde::{Deserialize, Serialize};

/// One life area shown on the home grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pillar {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub actions: Vec<String>,
    /// Overrides the default diagnostic subtitle for this pillar.
    #[serde(default)]
    pub diag_prompt: Option<String>,
}

/// The fixed four-question rating form attached to one pillar.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizSection {
    pub id: String,
    pub title: String,
    pub emoji: String,
    pub questions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ModelStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub class: String,
}

/// A psychology model shown on the methodology page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Framework {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub relevance: Vec<String>,
    #[serde(default)]
    pub model_status: ModelStatus,
    #[serde(default)]
    pub easy_explanation: String,
    // Markdown
    #[serde(default)]
    pub process_application: String,
    #[serde(default)]
    pub advanced_concepts: String,
}

/// Ratings for one submitted diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResponse {
    pub section_id: String,
    pub ratings: Vec<u8>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Tier {
    AreaOfFocus,
    Moderate,
    StrongFoundation,
}

/// Depth of explanation shown for the selected framework.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ContentLevel {
    Simple,
    #[default]
    Process,
    Advanced,
}

impl ContentLevel {
    pub const ALL: [ContentLevel; 3] = [
        ContentLevel::Simple,
        ContentLevel::Process,
        ContentLevel::Advanced,
    ];

    pub fn tab_label(self) -> &'static str {
        match self {
            ContentLevel::Simple => "Simple",
            ContentLevel::Process => "Process",
            ContentLevel::Advanced => "Advanced",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Methodology,
}
