mod helpers;
pub mod layout;
pub mod views;

use crate::app::AlignmentApp;
use crate::model::Page;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for AlignmentApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_content();

        top_panel(self, ctx);
        bottom_panel(ctx);

        match self.page {
            Page::Home => views::home::ui_home(self, ctx),
            Page::Methodology => views::methodology::ui_methodology(self, ctx),
        }

        // Modals over the page
        if self.diagnostic.open {
            views::diagnostic::ui_diagnostic(self, ctx);
        }
        if self.detail.is_some() {
            views::detail::ui_detail(self, ctx);
        }

        if self.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
