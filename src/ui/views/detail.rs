use crate::AlignmentApp;
use crate::ui::helpers::{bullet_list, tier_color};
use egui::{Context, CornerRadius, Frame, Id, Margin, Modal, RichText, ScrollArea, Stroke};

pub fn ui_detail(app: &mut AlignmentApp, ctx: &Context) {
    let Some(detail) = app.detail.clone() else {
        return;
    };
    let mut close = false;

    // Backdrop click and Escape close it; the page underneath takes no input.
    let modal = Modal::new(Id::new("pillar_detail")).show(ctx, |ui| {
        ui.set_width(480.0);
        ui.heading(format!("{} {}", detail.emoji, detail.title));
        ui.add_space(4.0);
        ui.label(&detail.summary);
        ui.add_space(8.0);

        if let Some(feedback) = &detail.feedback {
            let color = tier_color(feedback.tier);
            Frame::default()
                .fill(color.gamma_multiply(0.15))
                .stroke(Stroke::new(1.5, color))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(Margin::same(10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(feedback.tier.label()).strong().color(color));
                    ui.horizontal(|ui| {
                        ui.label("Your score:");
                        ui.label(RichText::new(detail.score_text()).heading().strong());
                        ui.label("/ 100");
                    });
                    ui.label(RichText::new(feedback.message).color(color));
                });
            ui.add_space(8.0);
        }

        ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
            if !detail.symptoms.is_empty() {
                ui.label(RichText::new("Symptoms").strong());
                bullet_list(ui, &detail.symptoms);
                ui.add_space(6.0);
            }
            if !detail.actions.is_empty() {
                ui.label(RichText::new("Micro-actions").strong());
                bullet_list(ui, &detail.actions);
            }
        });

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if ui.button("Close").clicked() {
                close = true;
            }
        });
    });

    if close || modal.should_close() {
        app.close_detail();
    }
}
