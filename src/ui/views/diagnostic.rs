use crate::AlignmentApp;
use crate::app::{DiagnosticForm, SectionChoice};
use crate::scoring::{MAX_RATING, MIN_RATING};
use crate::ui::helpers::big_list_button;
use crate::ui::layout::two_button_row;
use egui::{ComboBox, Context, Id, Modal, RichText, ScrollArea};

enum DiagAction {
    Select(String),
    Rate(usize, u8),
    Submit,
    Close,
}

pub fn ui_diagnostic(app: &mut AlignmentApp, ctx: &Context) {
    let form: DiagnosticForm = app.diagnostic_form();
    let choices: Vec<SectionChoice> = app.section_choices();
    let mut actions: Vec<DiagAction> = Vec::new();
    let mut open = true;

    let modal = Modal::new(Id::new("diagnostic")).show(ctx, |ui| {
        let panel_width = 520.0;
        ui.set_width(panel_width);

        ui.horizontal(|ui| {
            ui.heading(&form.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✖").clicked() {
                    open = false;
                }
            });
        });
        ui.label(RichText::new(&form.subtitle).weak());
        ui.add_space(10.0);

        ScrollArea::vertical().max_height(380.0).show(ui, |ui| {
            if form.section_id.is_none() {
                // Step 1: pick the element
                for choice in &choices {
                    let label = format!("{}  {}   →", choice.emoji, choice.title);
                    if big_list_button(ui, label, panel_width, 40.0, false) {
                        actions.push(DiagAction::Select(choice.section_id.clone()));
                    }
                    if !choice.summary.is_empty() {
                        ui.label(RichText::new(&choice.summary).small().weak());
                    }
                    ui.add_space(6.0);
                }
            } else {
                // Step 2: rate each statement
                egui::Grid::new("diag_form_grid")
                    .num_columns(2)
                    .striped(true)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        for row in &form.rows {
                            ui.add(egui::Label::new(&row.prompt).wrap());
                            let mut value = row.rating;
                            ComboBox::from_id_salt(("diag_q", row.index))
                                .width(48.0)
                                .selected_text(value.to_string())
                                .show_ui(ui, |ui| {
                                    for v in MIN_RATING..=MAX_RATING {
                                        ui.selectable_value(&mut value, v, v.to_string());
                                    }
                                });
                            if value != row.rating {
                                actions.push(DiagAction::Rate(row.index, value));
                            }
                            ui.end_row();
                        }
                    });
            }
        });

        if form.section_id.is_some() {
            ui.add_space(10.0);
            let (back, submit) = two_button_row(ui, panel_width, "Cancel", "See my result");
            if back {
                actions.push(DiagAction::Close);
            }
            if submit {
                actions.push(DiagAction::Submit);
            }
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new(&app.message).color(egui::Color32::YELLOW));
        }
    });

    if !open || modal.should_close() {
        actions.push(DiagAction::Close);
    }

    for action in actions {
        match action {
            DiagAction::Select(id) => {
                let _ = app.select_section(&id);
            }
            DiagAction::Rate(index, value) => {
                if let Err(err) = app.set_rating(index, value) {
                    log::warn!("rating ignored: {err}");
                }
            }
            DiagAction::Submit => {
                let _ = app.submit_diagnostic();
            }
            DiagAction::Close => app.close_diagnostic(),
        }
    }
}
