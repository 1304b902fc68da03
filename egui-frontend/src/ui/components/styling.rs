//! # Styling Module
//!
//! Global style setup and color constants for the government form theme:
//! navy headings, a red accent for the form title and errors, and a light
//! gray page behind white section cards.

use eframe::egui;

/// Setup the government form styling for the entire application
pub fn setup_government_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = colors::PAGE_BACKGROUND;
        style.visuals.window_fill = colors::PAGE_BACKGROUND;
        style.visuals.button_frame = true;

        // Text edits need an explicit background to stand out on the cards
        style.visuals.extreme_bg_color = egui::Color32::WHITE;
        style.visuals.override_text_color = Some(colors::TEXT_PRIMARY);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        // Subtle rounding and roomier padding, form-like rather than playful
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(4);
        style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(4);
        style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(4);

        style
    });
}

/// Color constants for the government form theme
pub mod colors {
    use eframe::egui::Color32;

    /// Deep navy used for ministry headings and the submit button
    pub const BRAND_NAVY: Color32 = Color32::from_rgb(15, 43, 91);
    /// Darker navy for the pressed/hovered submit button
    pub const BRAND_NAVY_DARK: Color32 = Color32::from_rgb(10, 30, 62);
    /// Red accent for the form title
    pub const ACCENT_RED: Color32 = Color32::from_rgb(186, 24, 27);

    pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(248, 249, 250);
    pub const SECTION_BACKGROUND: Color32 = Color32::WHITE;
    pub const SECTION_BORDER: Color32 = Color32::from_rgb(229, 231, 235);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(33, 37, 41);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(108, 117, 125);

    // Inline errors and the error banner
    pub const ERROR_RED: Color32 = Color32::from_rgb(220, 38, 38);
    pub const ERROR_BACKGROUND: Color32 = Color32::from_rgb(254, 242, 242);

    // Success banner
    pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(22, 101, 52);
    pub const SUCCESS_BACKGROUND: Color32 = Color32::from_rgb(240, 253, 244);
    pub const SUCCESS_BORDER: Color32 = Color32::from_rgb(134, 239, 172);
}
