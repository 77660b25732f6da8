use crate::config::{AppConfig, ContentSource};
use crate::data::read_quiz_sections_embedded;
use crate::loader::PendingFetch;
use crate::model::{ContentLevel, Framework, Page, Pillar, QuizSection};
use egui_commonmark::CommonMarkCache;

pub mod content;
pub mod detail;
pub mod diagnostic;
pub mod methodology;
pub mod view_models;

pub use crate::view_models::{
    DiagnosticForm, FrameworkButton, FrameworkDetail, PillarCard, PillarDetail, ScoreFeedback,
    SectionChoice,
};

/// Lifecycle of one fetched content list.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> ContentState<T> {
    pub fn items(&self) -> &[T] {
        match self {
            ContentState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ContentState::Loading)
    }
}

/// Where the diagnostic flow currently is while its window is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuizStep {
    /// Selection screen.
    #[default]
    Idle,
    /// Form for one section, one rating per question.
    SectionSelected { section_id: String, ratings: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagnosticState {
    pub open: bool,
    pub step: QuizStep,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodologyState {
    pub current: Option<String>,
    pub level: ContentLevel,
    pub drawer_open: bool,
}

pub struct AlignmentApp {
    pub config: AppConfig,
    pub page: Page,
    pub pillars: ContentState<Pillar>,
    pub frameworks: ContentState<Framework>,
    pub sections: Vec<QuizSection>,
    pub diagnostic: DiagnosticState,
    pub detail: Option<PillarDetail>,
    pub methodology: MethodologyState,
    pub message: String,
    pub cm_cache: CommonMarkCache,
    pending_pillars: Option<PendingFetch<Vec<Pillar>>>,
    pending_frameworks: Option<PendingFetch<Vec<Framework>>>,
}

impl AlignmentApp {
    /// Builds the app and starts fetching both content lists.
    pub fn new(config: AppConfig) -> Self {
        let mut app = Self::empty(config);
        app.start_loading();
        app
    }

    /// App with content already in memory, nothing in flight.
    pub fn with_content(pillars: Vec<Pillar>, frameworks: Vec<Framework>) -> Self {
        let mut app = Self::empty(AppConfig {
            source: ContentSource::Embedded,
            ..AppConfig::default()
        });
        app.pillars = ContentState::Loaded(pillars);
        app.frameworks = ContentState::Loaded(frameworks);
        app.on_frameworks_loaded();
        app
    }

    fn empty(config: AppConfig) -> Self {
        let sections = match read_quiz_sections_embedded() {
            Ok(sections) => sections,
            Err(err) => {
                log::error!("embedded quiz sections are invalid: {err}");
                Vec::new()
            }
        };

        Self {
            config,
            page: Page::Home,
            pillars: ContentState::Loading,
            frameworks: ContentState::Loading,
            sections,
            diagnostic: DiagnosticState::default(),
            detail: None,
            methodology: MethodologyState::default(),
            message: String::new(),
            cm_cache: CommonMarkCache::default(),
            pending_pillars: None,
            pending_frameworks: None,
        }
    }

    pub fn go_to(&mut self, page: Page) {
        if self.page != page {
            log::debug!("page {:?} -> {:?}", self.page, page);
        }
        self.page = page;
        self.message.clear();
    }

    pub fn section(&self, id: &str) -> Option<&QuizSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn pillar(&self, id: &str) -> Option<&Pillar> {
        self.pillars.items().iter().find(|p| p.id == id)
    }

    pub fn framework(&self, id: &str) -> Option<&Framework> {
        self.frameworks.items().iter().find(|f| f.id == id)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::{Framework, ModelStatus, Pillar};

    pub fn pillar(id: &str, title: &str) -> Pillar {
        Pillar {
            id: id.into(),
            title: title.into(),
            emoji: "🔹".into(),
            summary: format!("{title} summary"),
            symptoms: vec!["tired".into()],
            actions: vec!["walk".into(), "sleep".into(), "eat".into()],
            diag_prompt: None,
        }
    }

    pub fn framework(id: &str, title: &str) -> Framework {
        Framework {
            id: id.into(),
            title: title.into(),
            focus: format!("{title} focus"),
            summary: format!("{title} summary"),
            relevance: vec!["Mental".into()],
            model_status: ModelStatus {
                status: "Established".into(),
                class: "status-established".into(),
            },
            easy_explanation: String::new(),
            process_application: "1. do it".into(),
            advanced_concepts: String::new(),
        }
    }

    pub fn pillars() -> Vec<Pillar> {
        vec![
            pillar("physical", "Physical Energy"),
            pillar("mental", "Mental Clarity"),
            pillar("career", "Career"),
        ]
    }

    pub fn frameworks() -> Vec<Framework> {
        vec![framework("cbt", "CBT"), framework("sdt", "Self-Determination")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_content_loads_embedded_sections() {
        let app = AlignmentApp::with_content(fixtures::pillars(), fixtures::frameworks());
        assert_eq!(app.sections.len(), 6);
        assert!(app.section("mental").is_some());
        assert!(app.pillar("career").is_some());
        assert!(app.framework("nope").is_none());
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn content_state_items_empty_until_loaded() {
        let loading: ContentState<u8> = ContentState::Loading;
        assert!(loading.items().is_empty());
        assert!(loading.is_loading());
        let failed: ContentState<u8> = ContentState::Failed("boom".into());
        assert!(failed.items().is_empty());
        assert!(!failed.is_loading());
    }
}
