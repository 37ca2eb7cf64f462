//! Application style configuration

use eframe::egui::{self, Color32};

/// Colors of the 2D profile canvas
pub mod palette {
    use super::Color32;

    pub const CANVAS_BG: Color32 = Color32::from_rgb(24, 24, 28);
    pub const GRID: Color32 = Color32::from_rgb(44, 44, 52);
    pub const AXIS: Color32 = Color32::from_rgb(70, 170, 80);
    pub const PROFILE: Color32 = Color32::from_rgb(220, 220, 230);
    pub const POINT: Color32 = Color32::from_rgb(90, 150, 235);
    pub const POINT_SELECTED: Color32 = Color32::from_rgb(255, 170, 40);
    pub const CAP: Color32 = Color32::from_rgb(110, 110, 125);
    pub const LABEL: Color32 = Color32::from_rgb(130, 130, 140);
}

/// Configure initial application styles with given font size
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();

    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(4);
    for w in [
        &mut style.visuals.widgets.noninteractive,
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        w.corner_radius = egui::CornerRadius::same(3);
    }

    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);
    style.spacing.menu_margin = egui::Margin::same(4);

    style.visuals.panel_fill = Color32::from_rgb(30, 30, 34);
    style.visuals.window_fill = Color32::from_rgb(35, 35, 40);
    style.visuals.selection.bg_fill = Color32::from_rgb(40, 80, 140);

    apply_text_styles(&mut style, font_size);

    ctx.set_style(style);
}

/// Apply font size to all text styles
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    apply_text_styles(&mut style, font_size);
    ctx.set_style(style);
}

fn apply_text_styles(style: &mut egui::Style, font_size: f32) {
    use egui::{FontId, TextStyle};

    let sizes = [
        (TextStyle::Body, FontId::proportional(font_size)),
        (TextStyle::Button, FontId::proportional(font_size)),
        (TextStyle::Small, FontId::proportional(font_size * 0.85)),
        (TextStyle::Heading, FontId::proportional(font_size * 1.3)),
        (TextStyle::Monospace, FontId::monospace(font_size)),
    ];
    for (text_style, font) in sizes {
        style.text_styles.insert(text_style, font);
    }
}
