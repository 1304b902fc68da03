//! # Header Module
//!
//! The government heading stack above the form: ministry titles, the red
//! form title and the instruction line.

use eframe::egui;

use crate::ui::components::styling::colors;

/// Render the page header
pub fn render_header(ui: &mut egui::Ui) {
    ui.add_space(20.0);

    ui.vertical_centered(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new("Government of Nepal")
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::BRAND_NAVY),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new("Ministry of Home Affairs")
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                    .color(colors::BRAND_NAVY),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new("Department of National ID and Civil Registration")
                    .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                    .color(colors::BRAND_NAVY),
            )
            .selectable(false),
        );

        ui.add_space(14.0);

        ui.add(
            egui::Label::new(
                egui::RichText::new("Birth Certificate Registration Form")
                    .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::ACCENT_RED),
            )
            .selectable(false),
        );

        ui.add_space(6.0);

        ui.label(
            egui::RichText::new(
                "Please complete all required fields accurately. The information \
                 provided will be used for official government records.",
            )
            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
            .color(colors::TEXT_MUTED),
        );
    });

    ui.add_space(12.0);
}
