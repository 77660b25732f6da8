use crate::AlignmentApp;
use crate::app::PillarCard;
use crate::ui::views::loading::ui_content_placeholder;
use egui::{CentralPanel, Context, RichText, ScrollArea, Sense};

pub fn ui_home(app: &mut AlignmentApp, ctx: &Context) {
    if ui_content_placeholder(ctx, "pillars", &app.pillars) {
        return;
    }

    let cards: Vec<PillarCard> = app.pillar_cards();
    let mut clicked: Option<String> = None;

    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Six Pillars of Alignment");
            ui.add_space(4.0);
            ui.label(RichText::new("Tap a pillar to see its symptoms and micro-actions.").weak());
        });
        ui.add_space(16.0);

        let card_w = ((ui.available_width() - 24.0) / 3.0).clamp(220.0, 340.0);

        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for card in &cards {
                    let response = ui
                        .group(|ui| {
                            ui.set_width(card_w);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&card.emoji).size(28.0));
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(&card.title).strong());
                                    ui.label(RichText::new(&card.summary).small().weak());
                                });
                            });
                            if !card.quick_actions.is_empty() {
                                ui.add_space(6.0);
                                ui.label(
                                    RichText::new(format!("Quick: {}", card.quick_actions))
                                        .small()
                                        .italics(),
                                );
                            }
                        })
                        .response
                        .interact(Sense::click())
                        .on_hover_cursor(egui::CursorIcon::PointingHand);

                    if response.clicked() {
                        clicked = Some(card.id.clone());
                    }
                }
            });
        });
    });

    if let Some(id) = clicked {
        app.open_pillar_detail(&id);
    }
}
