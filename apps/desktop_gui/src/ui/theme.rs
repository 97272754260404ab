//! Dark theme with a red accent.

use eframe::egui;

#[derive(Debug, Clone, Copy)]
pub struct ContactsPalette {
    pub app_background: egui::Color32,
    pub card_background: egui::Color32,
    pub card_stroke: egui::Color32,
    pub field_background: egui::Color32,
    pub row_background: egui::Color32,

    pub title_text: egui::Color32,
    pub body_text: egui::Color32,
    pub muted_text: egui::Color32,

    pub accent: egui::Color32,
    pub accent_strong: egui::Color32,
    pub error_fill: egui::Color32,
    pub error_stroke: egui::Color32,
}

impl ContactsPalette {
    pub fn dark_red() -> Self {
        Self {
            app_background: egui::Color32::from_rgb(14, 14, 16),
            card_background: egui::Color32::from_rgb(26, 26, 26),
            card_stroke: egui::Color32::from_rgb(55, 55, 60),
            field_background: egui::Color32::from_rgb(20, 20, 22),
            row_background: egui::Color32::from_rgb(20, 20, 22),
            title_text: egui::Color32::from_rgb(251, 251, 251),
            body_text: egui::Color32::from_rgb(235, 235, 237),
            muted_text: egui::Color32::from_rgb(156, 163, 175),
            accent: egui::Color32::from_rgb(239, 68, 68),
            accent_strong: egui::Color32::from_rgb(185, 28, 28),
            error_fill: egui::Color32::from_rgb(220, 38, 38),
            error_stroke: egui::Color32::from_rgb(248, 113, 113),
        }
    }
}

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn visuals_for_palette(palette: &ContactsPalette) -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(palette.body_text);
    visuals.window_fill = palette.card_background;
    visuals.panel_fill = palette.app_background;
    visuals.extreme_bg_color = palette.field_background;
    visuals.faint_bg_color = palette.row_background;
    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.accent_strong;
    visuals.selection.stroke = egui::Stroke::new(1.0, palette.accent);
    visuals.widgets.active.bg_fill = palette.accent_strong;
    visuals.widgets.hovered.bg_fill = palette.accent.gamma_multiply(0.85);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.card_stroke);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.card_stroke);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, palette.accent);
    visuals.window_corner_radius = egui::CornerRadius::same(12);
    visuals
}
