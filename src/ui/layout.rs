use crate::AlignmentApp;
use crate::model::Page;
use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};

pub fn top_panel(app: &mut AlignmentApp, ctx: &Context) {
    let narrow = ctx.screen_rect().width() < app.config.narrow_breakpoint;

    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if narrow && app.page == Page::Methodology && ui.button("☰").clicked() {
                app.open_drawer();
            }

            if ui
                .selectable_label(app.page == Page::Home, "🏠 Pillars")
                .clicked()
            {
                app.go_to(Page::Home);
            }
            if ui
                .selectable_label(app.page == Page::Methodology, "📚 Methodology")
                .clicked()
            {
                app.go_to(Page::Methodology);
            }

            if app.page == Page::Home {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let enabled = !app.pillars.items().is_empty() && !app.is_modal_open();
                    if ui
                        .add_enabled(enabled, Button::new("🧭 Start diagnostic"))
                        .clicked()
                    {
                        app.open_diagnostic();
                    }
                });
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Central panel with its content block centred vertically, capped at `max_width`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Two equally sized buttons side by side. Returns (left clicked, right clicked).
pub fn two_button_row(ui: &mut Ui, panel_width: f32, left_label: &str, right_label: &str) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui.add_sized([btn_w, 36.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 36.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}
