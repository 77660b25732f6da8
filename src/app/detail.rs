use super::*;

impl AlignmentApp {
    /// Fills the detail window for `pillar`; `score` adds the tier feedback.
    pub fn show_pillar(&mut self, pillar: &Pillar, score: Option<u8>) {
        self.detail = Some(PillarDetail::new(pillar, score));
    }

    /// Card click on the home grid: detail without a score.
    ///
    /// The cards sit under the diagnostic modal, so clicks are dropped while it
    /// is open.
    pub fn open_pillar_detail(&mut self, pillar_id: &str) -> bool {
        if self.diagnostic.open {
            log::debug!("card click on `{pillar_id}` ignored, diagnostic is open");
            return false;
        }
        match self.pillar(pillar_id).cloned() {
            Some(pillar) => {
                self.show_pillar(&pillar, None);
                true
            }
            None => {
                log::warn!("pillar not found for id: {pillar_id}");
                false
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// True while the diagnostic or a pillar detail covers the page.
    pub fn is_modal_open(&self) -> bool {
        self.detail.is_some() || self.diagnostic.open
    }
}
