//! Titled section card framing one group of form fields.

use eframe::egui;

use crate::ui::components::styling::colors;

/// Render a bordered white card with a navy section title above a rule,
/// then the section's fields.
pub fn form_section<R>(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let inner = egui::Frame::none()
        .fill(colors::SECTION_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::SECTION_BORDER))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label(
                egui::RichText::new(title)
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::BRAND_NAVY),
            );
            ui.separator();
            ui.add_space(6.0);

            add_contents(ui)
        })
        .inner;

    ui.add_space(12.0);
    inner
}
