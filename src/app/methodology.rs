use super::*;

impl AlignmentApp {
    /// Shows the first framework as soon as the list arrives.
    pub(crate) fn on_frameworks_loaded(&mut self) {
        let first = self.frameworks.items().first().map(|f| f.id.clone());
        if let Some(id) = first {
            self.show_framework(&id);
        }
    }

    /// Selects a framework and resets the view to the process tab.
    pub fn show_framework(&mut self, id: &str) -> bool {
        if self.framework(id).is_none() {
            log::debug!("no framework with id `{id}`");
            return false;
        }
        self.methodology.current = Some(id.to_string());
        self.methodology.level = ContentLevel::Process;
        true
    }

    /// List click. Narrow viewports also close the drawer.
    pub fn framework_clicked(&mut self, id: &str, viewport_width: f32) {
        self.show_framework(id);
        if viewport_width < self.config.narrow_breakpoint {
            self.close_drawer();
        }
    }

    pub fn switch_tab(&mut self, level: ContentLevel) {
        if self.methodology.current.is_some() {
            self.methodology.level = level;
        }
    }

    pub fn open_drawer(&mut self) {
        self.methodology.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.methodology.drawer_open = false;
    }

    pub fn current_framework(&self) -> Option<&Framework> {
        self.methodology
            .current
            .as_deref()
            .and_then(|id| self.framework(id))
    }

    /// True for exactly one level while a framework is selected.
    pub fn panel_visible(&self, level: ContentLevel) -> bool {
        self.current_framework().is_some() && self.methodology.level == level
    }

    pub fn framework_detail(&self) -> Option<FrameworkDetail> {
        let f = self.current_framework()?;
        let level = self.methodology.level;
        let (heading, body) = match level {
            ContentLevel::Simple => (
                "The Core Idea (Beginner Focus):",
                non_empty_or(&f.easy_explanation, &f.summary),
            ),
            ContentLevel::Process => (
                "Process Breakdown (The How-To):",
                non_empty_or(&f.process_application, "Process details coming soon."),
            ),
            ContentLevel::Advanced => (
                "Academic Deep Dive (Context & Critique):",
                non_empty_or(
                    &f.advanced_concepts,
                    "Advanced concepts coming soon for this framework.",
                ),
            ),
        };

        Some(FrameworkDetail {
            id: f.id.clone(),
            title: f.title.clone(),
            focus: f.focus.clone(),
            status: f.model_status.status.clone(),
            status_class: f.model_status.class.clone(),
            relevance: f.relevance.clone(),
            level,
            heading,
            body,
        })
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
