use super::*;
use crate::data::{read_frameworks_embedded, read_pillars_embedded};
use crate::error::FetchError;
use crate::loader::spawn_fetch;

impl AlignmentApp {
    /// Kicks off one request per content list. A reload of the app re-fetches.
    pub fn start_loading(&mut self) {
        self.pillars = ContentState::Loading;
        self.frameworks = ContentState::Loading;

        match self.config.source {
            ContentSource::Remote => {
                log::info!("fetching {}", self.config.pillars_url);
                self.pending_pillars = Some(spawn_fetch(&self.config.pillars_url));
                log::info!("fetching {}", self.config.frameworks_url);
                self.pending_frameworks = Some(spawn_fetch(&self.config.frameworks_url));
            }
            ContentSource::Embedded => {
                let embedded = |source: serde_json::Error| FetchError::Parse {
                    url: "embedded".into(),
                    source,
                };
                self.pending_pillars = Some(PendingFetch::ready(
                    "embedded pillars",
                    read_pillars_embedded().map_err(embedded),
                ));
                self.pending_frameworks = Some(PendingFetch::ready(
                    "embedded frameworks",
                    read_frameworks_embedded().map_err(embedded),
                ));
            }
        }
    }

    /// Moves finished fetches into the content state. Called once per frame.
    pub fn poll_content(&mut self) {
        if let Some(result) = self.pending_pillars.as_ref().and_then(|p| p.poll()) {
            self.pending_pillars = None;
            self.pillars = loaded_or_failed("pillars", result);
        }

        if let Some(result) = self.pending_frameworks.as_ref().and_then(|p| p.poll()) {
            self.pending_frameworks = None;
            self.frameworks = loaded_or_failed("frameworks", result);
            self.on_frameworks_loaded();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_pillars.is_some() || self.pending_frameworks.is_some()
    }
}

fn loaded_or_failed<T>(what: &str, result: Result<Vec<T>, FetchError>) -> ContentState<T> {
    match result {
        Ok(items) => {
            log::info!("loaded {} {what}", items.len());
            ContentState::Loaded(items)
        }
        Err(err) => {
            log::error!("initialization error: {err}");
            ContentState::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::time::Duration;

    fn poll_until_done(app: &mut AlignmentApp) {
        for _ in 0..200 {
            app.poll_content();
            if !app.is_loading() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("content never finished loading");
    }

    #[test]
    fn embedded_source_loads_on_first_poll() {
        let mut app = AlignmentApp::new(AppConfig {
            source: ContentSource::Embedded,
            ..AppConfig::default()
        });
        assert!(app.pillars.is_loading());
        app.poll_content();
        assert!(!app.is_loading());
        assert_eq!(app.pillars.items().len(), 6);
        // first framework is shown once the list arrives
        assert_eq!(
            app.methodology.current.as_deref(),
            app.frameworks.items().first().map(|f| f.id.as_str())
        );
    }

    #[test]
    fn remote_source_reads_bundled_files() {
        let mut app = AlignmentApp::new(AppConfig::default());
        poll_until_done(&mut app);
        assert!(matches!(app.pillars, ContentState::Loaded(_)));
        assert!(matches!(app.frameworks, ContentState::Loaded(_)));
    }

    #[test]
    fn failed_fetch_leaves_page_unrendered() {
        let mut app = AlignmentApp::new(AppConfig {
            pillars_url: "assets/data/missing.json".into(),
            ..AppConfig::default()
        });
        poll_until_done(&mut app);
        assert!(matches!(app.pillars, ContentState::Failed(_)));
        assert!(app.pillar_cards().is_empty());
        assert!(app.section_choices().is_empty());
        // the other page is unaffected
        assert!(!app.frameworks.items().is_empty());
    }
}
