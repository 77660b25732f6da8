use crate::AlignmentApp;
use crate::app::{FrameworkButton, FrameworkDetail};
use crate::model::ContentLevel;
use crate::ui::helpers::{big_list_button, status_color, tag_chip};
use egui::{CentralPanel, Context, RichText, ScrollArea, Ui};
use egui_commonmark::CommonMarkViewer;

pub fn ui_methodology(app: &mut AlignmentApp, ctx: &Context) {
    if crate::ui::views::loading::ui_content_placeholder(ctx, "frameworks", &app.frameworks) {
        return;
    }

    let viewport_width = ctx.screen_rect().width();
    let narrow = viewport_width < app.config.narrow_breakpoint;
    let buttons: Vec<FrameworkButton> = app.framework_buttons();
    let mut clicked: Option<String> = None;

    if !narrow {
        egui::SidePanel::left("framework_list")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                clicked = framework_list(ui, &buttons);
            });
    } else if app.methodology.drawer_open {
        egui::SidePanel::left("framework_drawer")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Frameworks");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✖").clicked() {
                            app.close_drawer();
                        }
                    });
                });
                clicked = framework_list(ui, &buttons);
            });
    }

    let detail: Option<FrameworkDetail> = app.framework_detail();
    let mut tab: Option<ContentLevel> = None;

    CentralPanel::default().show(ctx, |ui| {
        let Some(detail) = detail else {
            ui.label("Select a framework to explore.");
            return;
        };

        // New framework, new scroll state: the body starts at the top.
        ScrollArea::vertical()
            .id_salt(("framework_detail", &detail.id))
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.heading(&detail.title);
                ui.label(RichText::new(&detail.focus).weak());
                ui.add_space(6.0);

                ui.horizontal_wrapped(|ui| {
                    if !detail.status.is_empty() {
                        tag_chip(ui, &detail.status, status_color(&detail.status_class));
                    }
                    for pillar in &detail.relevance {
                        tag_chip(ui, pillar, egui::Color32::from_rgb(0xd9, 0x77, 0x06));
                    }
                });
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    for level in ContentLevel::ALL {
                        if ui
                            .selectable_label(detail.level == level, level.tab_label())
                            .clicked()
                        {
                            tab = Some(level);
                        }
                    }
                });
                ui.separator();

                ui.label(RichText::new(detail.heading).strong());
                ui.add_space(4.0);
                CommonMarkViewer::new().show(ui, &mut app.cm_cache, &detail.body);
            });
    });

    if let Some(level) = tab {
        app.switch_tab(level);
    }
    if let Some(id) = clicked {
        app.framework_clicked(&id, viewport_width);
    }
}

fn framework_list(ui: &mut Ui, buttons: &[FrameworkButton]) -> Option<String> {
    let mut clicked = None;
    let width = ui.available_width();
    ScrollArea::vertical().show(ui, |ui| {
        for b in buttons {
            let label = RichText::new(format!("{}\n{}", b.title, b.focus));
            if big_list_button(ui, label, width, 44.0, b.active) {
                clicked = Some(b.id.clone());
            }
            ui.add_space(4.0);
        }
    });
    clicked
}
