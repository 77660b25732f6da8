// src/ui/helpers.rs
use crate::model::Tier;
use egui::{Button, Color32, CornerRadius, Frame, Margin, RichText, Ui, Vec2, WidgetText};

pub fn big_list_button(ui: &mut Ui, label: impl Into<WidgetText>, width: f32, height: f32, selected: bool) -> bool {
    let text: WidgetText = label.into();
    ui.add(
        Button::new(text)
            .selected(selected)
            .min_size(Vec2::new(width, height)),
    )
    .clicked()
}

pub fn tier_color(tier: Tier) -> Color32 {
    match tier {
        Tier::AreaOfFocus => Color32::from_rgb(0xef, 0x44, 0x44),
        Tier::Moderate => Color32::from_rgb(0xf5, 0x9e, 0x0b),
        Tier::StrongFoundation => Color32::from_rgb(0x22, 0xc5, 0x5e),
    }
}

/// Colour for a framework's evidence status class.
pub fn status_color(class: &str) -> Color32 {
    match class {
        "status-established" => Color32::from_rgb(0x22, 0xc5, 0x5e),
        "status-emerging" => Color32::from_rgb(0x3b, 0x82, 0xf6),
        "status-debated" => Color32::from_rgb(0xf5, 0x9e, 0x0b),
        _ => Color32::GRAY,
    }
}

pub fn tag_chip(ui: &mut Ui, text: &str, color: Color32) {
    Frame::default()
        .fill(color.gamma_multiply(0.2))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
}

pub fn bullet_list(ui: &mut Ui, items: &[String]) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label("•");
            ui.label(item);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_class_is_gray() {
        assert_eq!(status_color("status-whatever"), Color32::GRAY);
        assert_ne!(status_color("status-established"), Color32::GRAY);
    }

    #[test]
    fn tiers_have_distinct_colors() {
        let colors = [
            tier_color(Tier::AreaOfFocus),
            tier_color(Tier::Moderate),
            tier_color(Tier::StrongFoundation),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }
}
