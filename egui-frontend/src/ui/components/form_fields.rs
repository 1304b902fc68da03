//! # Form Field Helpers
//!
//! Labeled widgets with inline error display: single and multiline text,
//! the gender radio row, the birth place combo box, the bounded date picker
//! and the declaration checkbox. Every helper renders label, widget and
//! (when present) a red error line underneath.

use chrono::{Datelike, NaiveDate};
use eframe::egui;
use egui_extras::DatePickerButton;

use shared::{BirthPlaceType, Gender};

use crate::ui::components::styling::colors;

/// Label row with the required-field asterisk
fn field_label(ui: &mut egui::Ui, label: &str, required: bool) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        ui.label(
            egui::RichText::new(label)
                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        if required {
            ui.label(egui::RichText::new("*").color(colors::ERROR_RED));
        }
    });
}

/// Inline error message below a widget
fn error_line(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(message) = error {
        ui.label(
            egui::RichText::new(message)
                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                .color(colors::ERROR_RED),
        );
    }
}

/// Labeled single-line text input
pub fn text_field(
    ui: &mut egui::Ui,
    label: &str,
    required: bool,
    value: &mut String,
    placeholder: &str,
    error: Option<&str>,
    max_chars: usize,
) -> egui::Response {
    ui.vertical(|ui| {
        field_label(ui, label, required);
        let response = ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(placeholder)
                .char_limit(max_chars)
                .desired_width(f32::INFINITY),
        );
        error_line(ui, error);
        response
    })
    .inner
}

/// Labeled multiline text input (addresses)
pub fn multiline_field(
    ui: &mut egui::Ui,
    label: &str,
    required: bool,
    value: &mut String,
    placeholder: &str,
    error: Option<&str>,
    max_chars: usize,
) -> egui::Response {
    ui.vertical(|ui| {
        field_label(ui, label, required);
        let response = ui.add(
            egui::TextEdit::multiline(value)
                .hint_text(placeholder)
                .char_limit(max_chars)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        error_line(ui, error);
        response
    })
    .inner
}

/// Three-way gender radio row. Returns true when the selection changed.
pub fn gender_selector(
    ui: &mut egui::Ui,
    label: &str,
    selected: &mut Option<Gender>,
    error: Option<&str>,
) -> bool {
    let mut changed = false;
    ui.vertical(|ui| {
        field_label(ui, label, true);
        ui.horizontal(|ui| {
            for gender in Gender::ALL {
                if ui
                    .radio_value(selected, Some(gender), gender.label())
                    .changed()
                {
                    changed = true;
                }
            }
        });
        error_line(ui, error);
    });
    changed
}

/// Birth place type combo box. Returns true when the selection changed.
pub fn birth_place_selector(
    ui: &mut egui::Ui,
    label: &str,
    selected: &mut Option<BirthPlaceType>,
    error: Option<&str>,
) -> bool {
    let mut changed = false;
    ui.vertical(|ui| {
        field_label(ui, label, true);

        let current = selected
            .map(|place| place.label())
            .unwrap_or("Select place of birth");
        egui::ComboBox::from_id_source("birth_place_type")
            .selected_text(current)
            .width(220.0)
            .show_ui(ui, |ui| {
                for place in BirthPlaceType::ALL {
                    if ui
                        .selectable_value(selected, Some(place), place.label())
                        .changed()
                    {
                        changed = true;
                    }
                }
            });

        error_line(ui, error);
    });
    changed
}

/// Date-of-birth picker bounded to [earliest, today].
///
/// The picker widget binds to `buffer`; a change is clamped into the window
/// and copied into `selected`, so out-of-range dates cannot be picked even
/// though the schema checks the window again. Returns true on change.
pub fn date_of_birth_picker(
    ui: &mut egui::Ui,
    label: &str,
    selected: &mut Option<NaiveDate>,
    buffer: &mut NaiveDate,
    earliest: NaiveDate,
    today: NaiveDate,
    error: Option<&str>,
) -> bool {
    let mut changed = false;
    ui.vertical(|ui| {
        field_label(ui, label, true);

        ui.horizontal(|ui| {
            let response = ui.add(
                DatePickerButton::new(buffer)
                    .id_source("child_date_of_birth")
                    .start_end_years(earliest.year()..=today.year())
                    .show_icon(true),
            );
            if response.changed() {
                *buffer = (*buffer).clamp(earliest, today);
                *selected = Some(*buffer);
                changed = true;
            }

            if selected.is_none() {
                ui.label(egui::RichText::new("Pick a date").color(colors::TEXT_MUTED));
            }
        });

        error_line(ui, error);
    });
    changed
}

/// Declaration checkbox with the legal sentence. Returns true on change.
pub fn declaration_checkbox(
    ui: &mut egui::Ui,
    text: &str,
    checked: &mut bool,
    error: Option<&str>,
) -> bool {
    let mut changed = false;
    ui.vertical(|ui| {
        if ui
            .checkbox(
                checked,
                egui::RichText::new(text)
                    .font(egui::FontId::new(13.0, egui::FontFamily::Proportional)),
            )
            .changed()
        {
            changed = true;
        }
        error_line(ui, error);
    });
    changed
}
