use crate::app::ContentState;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

/// Draws the placeholder for a list that is not ready. Returns `true` if it drew.
pub fn ui_content_placeholder<T>(ctx: &Context, what: &str, state: &ContentState<T>) -> bool {
    match state {
        ContentState::Loaded(_) => false,
        ContentState::Loading => {
            centered_panel(ctx, 120.0, 400.0, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(format!("Loading {what}…")).heading());
                    ui.add_space(20.0);
                    ui.add(Spinner::new());
                });
            });
            true
        }
        ContentState::Failed(err) => {
            centered_panel(ctx, 120.0, 480.0, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!("Could not load {what}."))
                            .heading()
                            .color(egui::Color32::YELLOW),
                    );
                    ui.add_space(10.0);
                    ui.label(RichText::new(err).small().weak());
                });
            });
            true
        }
    }
}
