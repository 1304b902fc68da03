use eframe::egui;
use std::time::Duration;

use crate::backend::domain::submission::SubmissionUpdate;
use crate::ui::app_state::BirthRegistryApp;
use crate::ui::components::{footer, header, styling};

/// How long success/error banners stay on screen
const BANNER_TTL: Duration = Duration::from_secs(6);

/// Poll cadence while a submission is in flight
const SUBMIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

impl eframe::App for BirthRegistryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        styling::setup_government_style(ctx);

        // Observe the in-flight submission, if any
        if let Some(update) = self.backend.registration.poll() {
            match update {
                SubmissionUpdate::Accepted(receipt) => {
                    log::info!("✅ Registration accepted: {}", receipt.reference);
                    self.ui_state.show_notification(receipt.notification());
                    let today = chrono::Local::now().date_naive();
                    self.form.clear(today);
                }
                SubmissionUpdate::Failed(e) => {
                    log::warn!("❌ Submission failed: {}", e);
                    self.ui_state.set_error(e.to_string());
                }
            }
        }

        // Keep frames coming while waiting on the registrar so completion
        // is observed promptly
        if self.backend.registration.is_submitting() {
            ctx.request_repaint_after(SUBMIT_POLL_INTERVAL);
        }

        // Banners dismiss themselves after a delay
        if self.ui_state.has_messages() && !self.ui_state.dismiss_expired(BANNER_TTL) {
            ctx.request_repaint_after(Duration::from_millis(500));
        }

        self.render_page(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Abandon any in-flight submission instead of leaving the registrar
        // task running on a dying runtime
        self.backend.registration.cancel();
    }
}

impl BirthRegistryApp {
    fn render_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(760.0_f32.min(ui.available_width()));

                    header::render_header(ui);
                    self.render_messages(ui);
                    ui.add_space(8.0);

                    self.render_registration_page(ui);

                    footer::render_footer(ui);
                    ui.add_space(24.0);
                });
            });
        });
    }

    /// Render the success/error banner, when one is visible
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(notification) = &self.ui_state.notification {
            egui::Frame::none()
                .fill(styling::colors::SUCCESS_BACKGROUND)
                .stroke(egui::Stroke::new(1.0, styling::colors::SUCCESS_BORDER))
                .corner_radius(egui::CornerRadius::same(6))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(&notification.title)
                            .strong()
                            .color(styling::colors::SUCCESS_TEXT),
                    );
                    ui.label(
                        egui::RichText::new(&notification.description)
                            .color(styling::colors::SUCCESS_TEXT),
                    );
                });
            ui.add_space(8.0);
        }

        if let Some(error) = &self.ui_state.error_message {
            egui::Frame::none()
                .fill(styling::colors::ERROR_BACKGROUND)
                .stroke(egui::Stroke::new(1.0, styling::colors::ERROR_RED))
                .corner_radius(egui::CornerRadius::same(6))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(error).color(styling::colors::ERROR_RED));
                });
            ui.add_space(8.0);
        }
    }
}
