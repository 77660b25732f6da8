use super::*;
use crate::error::QuizError;
use crate::model::QuizResponse;
use crate::scoring::{MAX_RATING, MIN_RATING, score};
use crate::view_models::default_ratings;

impl AlignmentApp {
    /// Opens the diagnostic on its selection step. Ignored while a pillar
    /// detail is showing, so only one modal is ever up.
    pub fn open_diagnostic(&mut self) -> bool {
        if self.detail.is_some() {
            log::debug!("diagnostic not opened, pillar detail is showing");
            return false;
        }
        self.diagnostic.open = true;
        self.message.clear();
        true
    }

    /// Closes the diagnostic window and drops any unsubmitted ratings.
    pub fn close_diagnostic(&mut self) {
        self.diagnostic.open = false;
        self.diagnostic.step = QuizStep::Idle;
    }

    /// Shows the form for `section_id`, every rating back at 3.
    ///
    /// Picking a section while another form is open restarts with the new one.
    pub fn select_section(&mut self, section_id: &str) -> Result<(), QuizError> {
        let Some(section) = self.section(section_id) else {
            log::warn!("no quiz section for id `{section_id}`, selection ignored");
            return Err(QuizError::UnknownSection(section_id.to_string()));
        };

        let ratings = default_ratings(section.questions.len());
        let section_id = section.id.clone();
        log::debug!("diagnostic started for `{section_id}`");
        self.diagnostic.step = QuizStep::SectionSelected {
            section_id,
            ratings,
        };
        Ok(())
    }

    pub fn set_rating(&mut self, index: usize, value: u8) -> Result<(), QuizError> {
        let QuizStep::SectionSelected { ratings, .. } = &mut self.diagnostic.step else {
            return Err(QuizError::NoSectionSelected);
        };
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(crate::error::ScoreError::RatingOutOfRange { index, value }.into());
        }
        let slot = ratings
            .get_mut(index)
            .ok_or(QuizError::QuestionOutOfRange { index })?;
        *slot = value;
        Ok(())
    }

    /// Snapshot of the in-progress form, if one is showing.
    pub fn current_response(&self) -> Option<QuizResponse> {
        match &self.diagnostic.step {
            QuizStep::SectionSelected {
                section_id,
                ratings,
            } => Some(QuizResponse {
                section_id: section_id.clone(),
                ratings: ratings.clone(),
            }),
            QuizStep::Idle => None,
        }
    }

    /// Scores the form and opens the pillar detail with the result.
    ///
    /// Any failure leaves the diagnostic exactly as it was.
    pub fn submit_diagnostic(&mut self) -> Result<u8, QuizError> {
        match self.try_submit() {
            Ok(score) => Ok(score),
            Err(err) => {
                log::error!("diagnostic submit failed: {err}");
                self.message = format!("⚠ {err}");
                Err(err)
            }
        }
    }

    fn try_submit(&mut self) -> Result<u8, QuizError> {
        let response = self.current_response().ok_or(QuizError::NoSectionSelected)?;
        let section = self
            .section(&response.section_id)
            .ok_or_else(|| QuizError::UnknownSection(response.section_id.clone()))?;

        let expected = section.questions.len();
        if response.ratings.len() != expected || expected == 0 {
            return Err(QuizError::IncompleteAnswers {
                expected,
                found: response.ratings.len(),
            });
        }

        let score = score(&response.ratings)?;
        let pillar = self
            .pillar(&response.section_id)
            .cloned()
            .ok_or_else(|| QuizError::PillarNotFound(response.section_id.clone()))?;

        log::info!("diagnostic `{}` scored {score}", response.section_id);
        self.close_diagnostic();
        self.show_pillar(&pillar, Some(score));
        self.message.clear();
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fixtures;
    use crate::model::Tier;

    fn app() -> AlignmentApp {
        AlignmentApp::with_content(fixtures::pillars(), fixtures::frameworks())
    }

    #[test]
    fn selecting_a_section_renders_default_ratings() {
        let mut app = app();
        app.open_diagnostic();
        app.select_section("physical").unwrap();
        let response = app.current_response().unwrap();
        assert_eq!(response.section_id, "physical");
        assert_eq!(response.ratings, vec![3, 3, 3, 3]);
    }

    #[test]
    fn unknown_section_leaves_selection_screen() {
        let mut app = app();
        app.open_diagnostic();
        let err = app.select_section("career").unwrap_err();
        assert_eq!(err, QuizError::UnknownSection("career".into()));
        assert_eq!(app.diagnostic.step, QuizStep::Idle);
        assert!(app.diagnostic.open);
    }

    #[test]
    fn reselecting_restarts_with_new_section() {
        let mut app = app();
        app.select_section("physical").unwrap();
        app.set_rating(0, 5).unwrap();
        app.select_section("mental").unwrap();
        let response = app.current_response().unwrap();
        assert_eq!(response.section_id, "mental");
        assert_eq!(response.ratings, vec![3, 3, 3, 3]);
    }

    #[test]
    fn close_discards_ratings() {
        let mut app = app();
        app.open_diagnostic();
        app.select_section("physical").unwrap();
        app.set_rating(2, 1).unwrap();
        app.close_diagnostic();
        assert!(!app.diagnostic.open);

        app.open_diagnostic();
        assert_eq!(app.diagnostic.step, QuizStep::Idle);
        assert!(app.current_response().is_none());
        app.select_section("physical").unwrap();
        assert_eq!(app.current_response().unwrap().ratings, vec![3, 3, 3, 3]);
    }

    #[test]
    fn set_rating_validates_input() {
        let mut app = app();
        assert_eq!(app.set_rating(0, 4), Err(QuizError::NoSectionSelected));
        app.select_section("mental").unwrap();
        assert_eq!(
            app.set_rating(4, 4),
            Err(QuizError::QuestionOutOfRange { index: 4 })
        );
        assert!(app.set_rating(1, 6).is_err());
        assert!(app.set_rating(1, 0).is_err());
        assert_eq!(app.current_response().unwrap().ratings, vec![3, 3, 3, 3]);
    }

    #[test]
    fn not_opened_over_a_pillar_detail() {
        let mut app = app();
        assert!(app.open_pillar_detail("physical"));
        assert!(!app.open_diagnostic());
        assert!(!app.diagnostic.open);

        app.close_detail();
        assert!(app.open_diagnostic());
        assert!(app.diagnostic.open);
        assert!(app.is_modal_open());
    }

    #[test]
    fn submit_without_section_is_reported() {
        let mut app = app();
        app.open_diagnostic();
        assert_eq!(app.submit_diagnostic(), Err(QuizError::NoSectionSelected));
        assert!(app.diagnostic.open);
        assert!(app.detail.is_none());
        assert!(!app.message.is_empty());
    }

    #[test]
    fn submit_scores_and_opens_detail() {
        let mut app = app();
        app.open_diagnostic();
        app.select_section("physical").unwrap();
        for (i, v) in [1, 3, 5, 3].into_iter().enumerate() {
            app.set_rating(i, v).unwrap();
        }
        assert_eq!(app.submit_diagnostic(), Ok(60));

        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.pillar_id, "physical");
        let feedback = detail.feedback.as_ref().unwrap();
        assert_eq!(feedback.score, 60);
        assert_eq!(feedback.tier, Tier::Moderate);

        // flow resets for next time
        assert!(!app.diagnostic.open);
        assert_eq!(app.diagnostic.step, QuizStep::Idle);
    }

    #[test]
    fn submit_with_missing_pillar_changes_nothing() {
        let pillars = vec![fixtures::pillar("physical", "Physical Energy")];
        let mut app = AlignmentApp::with_content(pillars, vec![]);
        app.open_diagnostic();
        // section exists in the embedded table but the loaded content lacks it
        app.select_section("social").unwrap();
        let before = app.diagnostic.clone();

        assert_eq!(
            app.submit_diagnostic(),
            Err(QuizError::PillarNotFound("social".into()))
        );
        assert_eq!(app.diagnostic, before);
        assert!(app.detail.is_none());
    }

    #[test]
    fn all_low_ratings_land_in_focus_tier() {
        let mut app = app();
        app.select_section("mental").unwrap();
        for i in 0..4 {
            app.set_rating(i, 1).unwrap();
        }
        assert_eq!(app.submit_diagnostic(), Ok(20));
        let feedback = app.detail.unwrap().feedback.unwrap();
        assert_eq!(feedback.tier, Tier::AreaOfFocus);
    }
}
