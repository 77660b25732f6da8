use super::*;
use crate::view_models::QuestionRow;

const IDLE_TITLE: &str = "Quick Alignment Diagnostic";
const IDLE_SUBTITLE: &str =
    "First, select the element you want to focus on for your 5-minute quiz.";

impl AlignmentApp {
    pub fn pillar_cards(&self) -> Vec<PillarCard> {
        self.pillars
            .items()
            .iter()
            .map(|p| PillarCard {
                id: p.id.clone(),
                emoji: p.emoji.clone(),
                title: p.title.clone(),
                summary: p.summary.clone(),
                quick_actions: p
                    .actions
                    .iter()
                    .take(2)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" · "),
            })
            .collect()
    }

    /// Pillars that have a diagnostic, in pillar order.
    pub fn section_choices(&self) -> Vec<SectionChoice> {
        self.pillars
            .items()
            .iter()
            .filter_map(|p| {
                let section = self.section(&p.id)?;
                Some(SectionChoice {
                    section_id: section.id.clone(),
                    emoji: p.emoji.clone(),
                    title: p.title.clone(),
                    summary: p.summary.clone(),
                })
            })
            .collect()
    }

    pub fn diagnostic_form(&self) -> DiagnosticForm {
        let (section_id, ratings) = match &self.diagnostic.step {
            QuizStep::SectionSelected {
                section_id,
                ratings,
            } => (section_id, ratings),
            QuizStep::Idle => return idle_form(),
        };
        let Some(section) = self.section(section_id) else {
            return idle_form();
        };

        let subtitle = self
            .pillar(section_id)
            .and_then(|p| p.diag_prompt.clone())
            .unwrap_or_else(|| {
                format!(
                    "Rate your current state (1 low — 5 high). This short {} quiz will generate your micro-plan.",
                    section.title
                )
            });

        DiagnosticForm {
            title: format!("{} Diagnostic", section.title),
            subtitle,
            section_id: Some(section.id.clone()),
            rows: section
                .questions
                .iter()
                .zip(ratings)
                .enumerate()
                .map(|(index, (prompt, &rating))| QuestionRow {
                    index,
                    prompt: prompt.clone(),
                    rating,
                })
                .collect(),
        }
    }

    pub fn framework_buttons(&self) -> Vec<FrameworkButton> {
        let current = self.methodology.current.as_deref();
        self.frameworks
            .items()
            .iter()
            .map(|f| FrameworkButton {
                id: f.id.clone(),
                title: f.title.clone(),
                focus: f.focus.clone(),
                active: current == Some(f.id.as_str()),
            })
            .collect()
    }
}

fn idle_form() -> DiagnosticForm {
    DiagnosticForm {
        title: IDLE_TITLE.to_string(),
        subtitle: IDLE_SUBTITLE.to_string(),
        section_id: None,
        rows: Vec::new(),
    }
}
