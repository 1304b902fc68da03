//! # Form State Module
//!
//! Widget-facing state for the registration form: one buffer per field,
//! the current validation report for inline errors, and the conversion to
//! the draft DTO the submission controller consumes.

use chrono::NaiveDate;
use shared::{
    BirthPlaceType, FieldId, Gender, RegistrationDraft, RegistrationFormConfig, ValidationReport,
};

use crate::backend::domain::validation;

/// All widget buffers for one form mount, plus the inline errors currently
/// on display. Created empty at mount and reset after an accepted submission.
#[derive(Debug, Clone)]
pub struct RegistrationFormState {
    // Child information
    pub child_full_name: String,
    pub child_date_of_birth: Option<NaiveDate>,
    /// Buffer behind the date picker widget; shows today until a date is picked
    pub date_picker_buffer: NaiveDate,
    pub child_gender: Option<Gender>,
    pub child_place_of_birth: String,
    pub child_birth_place: Option<BirthPlaceType>,
    pub child_birth_certificate_number: String,

    // Father's information
    pub father_full_name: String,
    pub father_national_id: String,
    pub father_occupation: String,
    pub father_contact_number: String,

    // Mother's information
    pub mother_full_name: String,
    pub mother_national_id: String,
    pub mother_occupation: String,
    pub mother_contact_number: String,

    // Address details
    pub permanent_address: String,
    pub current_address: String,

    // Declaration
    pub declaration: bool,

    /// Inline errors from the last failed submit
    pub errors: ValidationReport,
}

impl RegistrationFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            child_full_name: String::new(),
            child_date_of_birth: None,
            date_picker_buffer: today,
            child_gender: None,
            child_place_of_birth: String::new(),
            child_birth_place: None,
            child_birth_certificate_number: String::new(),
            father_full_name: String::new(),
            father_national_id: String::new(),
            father_occupation: String::new(),
            father_contact_number: String::new(),
            mother_full_name: String::new(),
            mother_national_id: String::new(),
            mother_occupation: String::new(),
            mother_contact_number: String::new(),
            permanent_address: String::new(),
            current_address: String::new(),
            declaration: false,
            errors: ValidationReport::new(),
        }
    }

    /// Reset every field and error to defaults, as after an acceptance
    pub fn clear(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Snapshot the buffers into the draft DTO the domain validates
    pub fn to_draft(&self) -> RegistrationDraft {
        RegistrationDraft {
            child_full_name: self.child_full_name.clone(),
            child_date_of_birth: self.child_date_of_birth,
            child_gender: self.child_gender,
            child_place_of_birth: self.child_place_of_birth.clone(),
            child_birth_place: self.child_birth_place,
            child_birth_certificate_number: self.child_birth_certificate_number.clone(),
            father_full_name: self.father_full_name.clone(),
            father_national_id: self.father_national_id.clone(),
            father_occupation: self.father_occupation.clone(),
            father_contact_number: self.father_contact_number.clone(),
            mother_full_name: self.mother_full_name.clone(),
            mother_national_id: self.mother_national_id.clone(),
            mother_occupation: self.mother_occupation.clone(),
            mother_contact_number: self.mother_contact_number.clone(),
            permanent_address: self.permanent_address.clone(),
            current_address: self.current_address.clone(),
            declaration: self.declaration,
        }
    }

    /// Replace the inline errors with a fresh report from a failed submit
    pub fn apply_report(&mut self, report: ValidationReport) {
        self.errors = report;
    }

    /// Inline error currently shown for one field
    pub fn error_for(&self, field: FieldId) -> Option<&str> {
        self.errors.message_for(field)
    }

    /// Re-run one field's rule after an edit, but only when that field is
    /// already showing an error. Clean fields stay clean until the next
    /// submit, matching the render-errors-on-submit behavior of the form.
    pub fn revalidate(
        &mut self,
        field: FieldId,
        config: &RegistrationFormConfig,
        today: NaiveDate,
    ) {
        if self.errors.message_for(field).is_none() {
            return;
        }

        let draft = self.to_draft();
        match validation::validate_field(&draft, config, field, today) {
            Some(message) => self.errors.set_field(field, message),
            None => self.errors.clear_field(field),
        }
    }

    /// Mutable buffer for a single-line text field, if `field` is one
    pub fn text_buffer_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::ChildFullName => Some(&mut self.child_full_name),
            FieldId::ChildPlaceOfBirth => Some(&mut self.child_place_of_birth),
            FieldId::FatherFullName => Some(&mut self.father_full_name),
            FieldId::FatherNationalId => Some(&mut self.father_national_id),
            FieldId::FatherOccupation => Some(&mut self.father_occupation),
            FieldId::FatherContactNumber => Some(&mut self.father_contact_number),
            FieldId::MotherFullName => Some(&mut self.mother_full_name),
            FieldId::MotherNationalId => Some(&mut self.mother_national_id),
            FieldId::MotherOccupation => Some(&mut self.mother_occupation),
            FieldId::MotherContactNumber => Some(&mut self.mother_contact_number),
            _ => None,
        }
    }
}
