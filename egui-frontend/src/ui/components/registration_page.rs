//! # Registration Page
//!
//! The single form page: five titled sections, the submit row and the
//! wiring from widget edits to live revalidation and from the submit button
//! to the submission controller.

use chrono::NaiveDate;
use eframe::egui;

use shared::FieldId;

use crate::backend::domain::commands::registration::SubmitRegistrationCommand;
use crate::backend::domain::submission::SubmitAttempt;
use crate::ui::app_state::BirthRegistryApp;
use crate::ui::components::form_fields;
use crate::ui::components::form_section::form_section;
use crate::ui::components::styling::colors;

const DECLARATION_TEXT: &str = "I hereby declare that the information provided above is true \
     and correct to the best of my knowledge. I understand that providing false information \
     is punishable by law.";

impl BirthRegistryApp {
    /// Render the whole registration form
    pub fn render_registration_page(&mut self, ui: &mut egui::Ui) {
        let today = chrono::Local::now().date_naive();

        form_section(ui, "Child Information", |ui| {
            ui.columns(2, |cols| {
                self.render_text_input(
                    &mut cols[0],
                    FieldId::ChildFullName,
                    "Full Name",
                    "Enter full name",
                );
                self.render_date_of_birth(&mut cols[1], today);
            });
            ui.columns(2, |cols| {
                self.render_gender(&mut cols[0], today);
                self.render_birth_place(&mut cols[1], today);
            });
            ui.columns(2, |cols| {
                self.render_text_input(
                    &mut cols[0],
                    FieldId::ChildPlaceOfBirth,
                    "Birth Location",
                    "Hospital name or address",
                );

                // Optional field, no rule attached
                form_fields::text_field(
                    &mut cols[1],
                    "Birth Certificate Number (if available)",
                    false,
                    &mut self.form.child_birth_certificate_number,
                    "Certificate number",
                    None,
                    self.backend.config.max_field_chars,
                );
            });
        });

        form_section(ui, "Father's Information", |ui| {
            ui.columns(2, |cols| {
                self.render_text_input(
                    &mut cols[0],
                    FieldId::FatherFullName,
                    "Full Name",
                    "Enter full name",
                );
                self.render_text_input(
                    &mut cols[1],
                    FieldId::FatherNationalId,
                    "National ID Number",
                    "Enter national ID number",
                );
            });
            ui.columns(2, |cols| {
                self.render_text_input(
                    &mut cols[0],
                    FieldId::FatherOccupation,
                    "Occupation",
                    "Enter occupation",
                );
                self.render_text_input(
                    &mut cols[1],
                    FieldId::FatherContactNumber,
                    "Contact Number",
                    "Enter contact number",
                );
            });
        });

        form_section(ui, "Mother's Information", |ui| {
            ui.columns(2, |cols| {
                self.render_text_input(
                    &mut cols[0],
                    FieldId::MotherFullName,
                    "Full Name",
                    "Enter full name",
                );
                self.render_text_input(
                    &mut cols[1],
                    FieldId::MotherNationalId,
                    "National ID Number",
                    "Enter national ID number",
                );
            });
            ui.columns(2, |cols| {
                self.render_text_input(
                    &mut cols[0],
                    FieldId::MotherOccupation,
                    "Occupation",
                    "Enter occupation",
                );
                self.render_text_input(
                    &mut cols[1],
                    FieldId::MotherContactNumber,
                    "Contact Number",
                    "Enter contact number",
                );
            });
        });

        form_section(ui, "Address Details", |ui| {
            let error = self
                .form
                .error_for(FieldId::PermanentAddress)
                .map(str::to_string);
            let response = form_fields::multiline_field(
                ui,
                "Permanent Address",
                true,
                &mut self.form.permanent_address,
                "Enter permanent address",
                error.as_deref(),
                self.backend.config.max_field_chars,
            );
            if response.changed() {
                self.form
                    .revalidate(FieldId::PermanentAddress, &self.backend.config, today);
            }

            // Optional field, no rule attached
            form_fields::multiline_field(
                ui,
                "Current Address (if different from permanent address)",
                false,
                &mut self.form.current_address,
                "Enter current address",
                None,
                self.backend.config.max_field_chars,
            );
        });

        form_section(ui, "Declaration and Submit", |ui| {
            let error = self
                .form
                .error_for(FieldId::Declaration)
                .map(str::to_string);
            let changed = form_fields::declaration_checkbox(
                ui,
                DECLARATION_TEXT,
                &mut self.form.declaration,
                error.as_deref(),
            );
            if changed {
                self.form
                    .revalidate(FieldId::Declaration, &self.backend.config, today);
            }

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                self.render_submit_button(ui);
            });
        });
    }

    /// Labeled single-line input bound to one validated field, with live
    /// revalidation of an already-visible error
    fn render_text_input(
        &mut self,
        ui: &mut egui::Ui,
        field: FieldId,
        label: &str,
        placeholder: &str,
    ) {
        let error = self.form.error_for(field).map(str::to_string);
        let max_chars = self.backend.config.max_field_chars;
        let Some(value) = self.form.text_buffer_mut(field) else {
            return;
        };

        let response =
            form_fields::text_field(ui, label, true, value, placeholder, error.as_deref(), max_chars);
        if response.changed() {
            let today = chrono::Local::now().date_naive();
            self.form.revalidate(field, &self.backend.config, today);
        }
    }

    fn render_date_of_birth(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        let error = self
            .form
            .error_for(FieldId::ChildDateOfBirth)
            .map(str::to_string);
        let earliest = self.backend.config.earliest_birth_date;

        let changed = form_fields::date_of_birth_picker(
            ui,
            "Date of Birth",
            &mut self.form.child_date_of_birth,
            &mut self.form.date_picker_buffer,
            earliest,
            today,
            error.as_deref(),
        );
        if changed {
            self.form
                .revalidate(FieldId::ChildDateOfBirth, &self.backend.config, today);
        }
    }

    fn render_gender(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        let error = self
            .form
            .error_for(FieldId::ChildGender)
            .map(str::to_string);

        let changed =
            form_fields::gender_selector(ui, "Gender", &mut self.form.child_gender, error.as_deref());
        if changed {
            self.form
                .revalidate(FieldId::ChildGender, &self.backend.config, today);
        }
    }

    fn render_birth_place(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        let error = self
            .form
            .error_for(FieldId::ChildBirthPlace)
            .map(str::to_string);

        let changed = form_fields::birth_place_selector(
            ui,
            "Place of Birth",
            &mut self.form.child_birth_place,
            error.as_deref(),
        );
        if changed {
            self.form
                .revalidate(FieldId::ChildBirthPlace, &self.backend.config, today);
        }
    }

    /// Submit button, disabled while a submission is in flight
    fn render_submit_button(&mut self, ui: &mut egui::Ui) {
        let submitting = self.backend.registration.is_submitting();
        let text = if submitting {
            "Submitting..."
        } else {
            "Submit Registration"
        };

        let button = egui::Button::new(
            egui::RichText::new(text)
                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(if submitting {
            colors::TEXT_MUTED
        } else {
            colors::BRAND_NAVY
        })
        .min_size(egui::vec2(240.0, 44.0));

        if ui.add_enabled(!submitting, button).clicked() {
            self.handle_submit();
        }
    }

    /// Run the schema pass and, if the draft is valid, start the
    /// asynchronous acceptance
    fn handle_submit(&mut self) {
        let today = chrono::Local::now().date_naive();
        log::info!("📋 Submit requested");

        let command = SubmitRegistrationCommand {
            draft: self.form.to_draft(),
            today,
        };

        match self.backend.registration.submit(command, &self.backend.config) {
            Ok(SubmitAttempt::Invalid(report)) => {
                log::info!("Submission blocked by {} validation error(s)", report.len());
                self.form.apply_report(report);
            }
            Ok(SubmitAttempt::InFlight) => {
                self.form.errors.clear();
                self.ui_state.clear_messages();
            }
            Ok(SubmitAttempt::AlreadySubmitting) => {}
            Err(e) => {
                log::error!("Failed to hand the submission to the registrar: {}", e);
                self.ui_state
                    .set_error(format!("Could not submit registration: {}", e));
            }
        }
    }
}
