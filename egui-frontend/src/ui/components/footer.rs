//! Department footer line below the form.

use chrono::Datelike;
use eframe::egui;

use crate::ui::components::styling::colors;

/// Render the page footer
pub fn render_footer(ui: &mut egui::Ui) {
    ui.add_space(20.0);

    ui.vertical_centered(|ui| {
        let year = chrono::Local::now().year();
        ui.label(
            egui::RichText::new(format!(
                "© {} Government of Nepal. Department of National ID and Civil Registration.",
                year
            ))
            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
            .color(colors::TEXT_MUTED),
        );
        ui.label(
            egui::RichText::new(
                "For support, call: +977 1234 5678 | Email: support@civilregistration.gov.np",
            )
            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
            .color(colors::TEXT_MUTED),
        );
    });
}
