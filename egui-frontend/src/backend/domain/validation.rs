//! Whole-record validation schema for the registration form.
//!
//! Rules are independent per field; the schema pass visits every field and
//! collects all failures into one `ValidationReport` so the page can render
//! every inline error at once. Nothing here performs I/O.

use chrono::NaiveDate;
use shared::{FieldId, RegistrationDraft, RegistrationFormConfig, ValidationReport};

use crate::backend::domain::models::registration::RegistrationRecord;

// User-facing messages, one per rule
const MSG_NAME_MIN: &str = "Name must be at least 3 characters";
const MSG_DOB_REQUIRED: &str = "Date of birth is required";
const MSG_DOB_RANGE: &str = "Date of birth must be on or after 1900-01-01 and not in the future";
const MSG_GENDER_REQUIRED: &str = "Please select a gender";
const MSG_PLACE_OF_BIRTH: &str = "Place of birth is required";
const MSG_BIRTH_PLACE_REQUIRED: &str = "Please select birth place type";
const MSG_NATIONAL_ID_MIN: &str = "National ID must be at least 5 characters";
const MSG_OCCUPATION: &str = "Occupation is required";
const MSG_CONTACT_NUMBER: &str = "Contact number is required";
const MSG_ADDRESS: &str = "Address is required";
const MSG_DECLARATION: &str = "You must agree to the declaration";

/// Minimum-length rule over a trimmed text value
struct MinChars {
    min: usize,
    message: &'static str,
}

impl MinChars {
    fn check(&self, raw: &str) -> Option<String> {
        if raw.trim().chars().count() < self.min {
            Some(self.message.to_string())
        } else {
            None
        }
    }
}

fn min_chars(min: usize, message: &'static str) -> MinChars {
    MinChars { min, message }
}

/// Presence rule for selections (enum and date fields)
fn required<T>(value: &Option<T>, message: &'static str) -> Option<String> {
    if value.is_none() {
        Some(message.to_string())
    } else {
        None
    }
}

/// The declaration checkbox must be exactly true
fn declared(value: bool, message: &'static str) -> Option<String> {
    if value {
        None
    } else {
        Some(message.to_string())
    }
}

/// Date must fall inside [floor, today]; both boundary dates are accepted
fn within_birth_window(date: NaiveDate, floor: NaiveDate, today: NaiveDate) -> Option<String> {
    if date < floor || date > today {
        Some(MSG_DOB_RANGE.to_string())
    } else {
        None
    }
}

/// Re-run the rule for a single field.
///
/// Used by the UI to refresh one inline error live after a failed submit,
/// and by `validate` as the single source of truth for every rule.
pub fn validate_field(
    draft: &RegistrationDraft,
    config: &RegistrationFormConfig,
    field: FieldId,
    today: NaiveDate,
) -> Option<String> {
    match field {
        FieldId::ChildFullName => {
            min_chars(config.name_min_chars, MSG_NAME_MIN).check(&draft.child_full_name)
        }
        FieldId::ChildDateOfBirth => match draft.child_date_of_birth {
            None => Some(MSG_DOB_REQUIRED.to_string()),
            Some(date) => within_birth_window(date, config.earliest_birth_date, today),
        },
        FieldId::ChildGender => required(&draft.child_gender, MSG_GENDER_REQUIRED),
        FieldId::ChildPlaceOfBirth => {
            min_chars(config.place_of_birth_min_chars, MSG_PLACE_OF_BIRTH)
                .check(&draft.child_place_of_birth)
        }
        FieldId::ChildBirthPlace => required(&draft.child_birth_place, MSG_BIRTH_PLACE_REQUIRED),
        FieldId::FatherFullName => {
            min_chars(config.name_min_chars, MSG_NAME_MIN).check(&draft.father_full_name)
        }
        FieldId::FatherNationalId => {
            min_chars(config.national_id_min_chars, MSG_NATIONAL_ID_MIN)
                .check(&draft.father_national_id)
        }
        FieldId::FatherOccupation => {
            min_chars(config.occupation_min_chars, MSG_OCCUPATION).check(&draft.father_occupation)
        }
        FieldId::FatherContactNumber => {
            min_chars(config.contact_number_min_chars, MSG_CONTACT_NUMBER)
                .check(&draft.father_contact_number)
        }
        FieldId::MotherFullName => {
            min_chars(config.name_min_chars, MSG_NAME_MIN).check(&draft.mother_full_name)
        }
        FieldId::MotherNationalId => {
            min_chars(config.national_id_min_chars, MSG_NATIONAL_ID_MIN)
                .check(&draft.mother_national_id)
        }
        FieldId::MotherOccupation => {
            min_chars(config.occupation_min_chars, MSG_OCCUPATION).check(&draft.mother_occupation)
        }
        FieldId::MotherContactNumber => {
            min_chars(config.contact_number_min_chars, MSG_CONTACT_NUMBER)
                .check(&draft.mother_contact_number)
        }
        FieldId::PermanentAddress => {
            min_chars(config.address_min_chars, MSG_ADDRESS).check(&draft.permanent_address)
        }
        FieldId::Declaration => declared(draft.declaration, MSG_DECLARATION),
    }
}

/// Run the full schema pass over a draft.
///
/// Never fail-fast: every field is checked and all failures are returned
/// together. On success the draft is converted into a typed record with
/// trimmed strings and blank optional fields mapped to `None`.
pub fn validate(
    draft: &RegistrationDraft,
    config: &RegistrationFormConfig,
    today: NaiveDate,
) -> Result<RegistrationRecord, ValidationReport> {
    let mut report = ValidationReport::new();

    for field in FieldId::ALL {
        if let Some(message) = validate_field(draft, config, field, today) {
            report.push(field, message);
        }
    }

    if !report.is_valid() {
        return Err(report);
    }

    // Guarded by the presence rules above
    let (Some(date_of_birth), Some(gender), Some(birth_place)) = (
        draft.child_date_of_birth,
        draft.child_gender,
        draft.child_birth_place,
    ) else {
        return Err(report);
    };

    Ok(RegistrationRecord {
        child_full_name: draft.child_full_name.trim().to_string(),
        child_date_of_birth: date_of_birth,
        child_gender: gender,
        child_place_of_birth: draft.child_place_of_birth.trim().to_string(),
        child_birth_place: birth_place,
        child_birth_certificate_number: optional(&draft.child_birth_certificate_number),
        father_full_name: draft.father_full_name.trim().to_string(),
        father_national_id: draft.father_national_id.trim().to_string(),
        father_occupation: draft.father_occupation.trim().to_string(),
        father_contact_number: draft.father_contact_number.trim().to_string(),
        mother_full_name: draft.mother_full_name.trim().to_string(),
        mother_national_id: draft.mother_national_id.trim().to_string(),
        mother_occupation: draft.mother_occupation.trim().to_string(),
        mother_contact_number: draft.mother_contact_number.trim().to_string(),
        permanent_address: draft.permanent_address.trim().to_string(),
        current_address: optional(&draft.current_address),
    })
}

/// Map a free-form optional field: blank (after trimming) means absent
fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{BirthPlaceType, Gender};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    fn config() -> RegistrationFormConfig {
        RegistrationFormConfig::default()
    }

    /// A draft where every required field sits exactly at its minimum length
    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            child_full_name: "Ram".to_string(),
            child_date_of_birth: Some(NaiveDate::from_ymd_opt(2020, 5, 14).unwrap()),
            child_gender: Some(Gender::Male),
            child_place_of_birth: "Kathmandu".to_string(),
            child_birth_place: Some(BirthPlaceType::Hospital),
            child_birth_certificate_number: String::new(),
            father_full_name: "Hari Prasad".to_string(),
            father_national_id: "12345".to_string(),
            father_occupation: "Farmer".to_string(),
            father_contact_number: "98765".to_string(),
            mother_full_name: "Sita Devi".to_string(),
            mother_national_id: "54321".to_string(),
            mother_occupation: "Teacher".to_string(),
            mother_contact_number: "91234".to_string(),
            permanent_address: "Ward 5, Kathmandu".to_string(),
            current_address: String::new(),
            declaration: true,
        }
    }

    #[test]
    fn test_valid_draft_passes_with_empty_report() {
        let record = validate(&valid_draft(), &config(), today()).unwrap();
        assert_eq!(record.child_full_name, "Ram");
        assert_eq!(record.child_gender, Gender::Male);
        assert_eq!(record.child_birth_place, BirthPlaceType::Hospital);
        // Blank optional fields come through as absent
        assert_eq!(record.child_birth_certificate_number, None);
        assert_eq!(record.current_address, None);
    }

    #[test]
    fn test_short_child_name_fails_with_name_message() {
        let mut draft = valid_draft();
        draft.child_full_name = "Al".to_string();

        let report = validate(&draft, &config(), today()).unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.message_for(FieldId::ChildFullName),
            Some("Name must be at least 3 characters")
        );
    }

    #[test]
    fn test_each_required_field_fails_alone() {
        let cases: Vec<(FieldId, Box<dyn Fn(&mut RegistrationDraft)>)> = vec![
            (
                FieldId::ChildFullName,
                Box::new(|d| d.child_full_name = "ab".to_string()),
            ),
            (
                FieldId::ChildDateOfBirth,
                Box::new(|d| d.child_date_of_birth = None),
            ),
            (FieldId::ChildGender, Box::new(|d| d.child_gender = None)),
            (
                FieldId::ChildPlaceOfBirth,
                Box::new(|d| d.child_place_of_birth = "K".to_string()),
            ),
            (
                FieldId::ChildBirthPlace,
                Box::new(|d| d.child_birth_place = None),
            ),
            (
                FieldId::FatherNationalId,
                Box::new(|d| d.father_national_id = "1234".to_string()),
            ),
            (
                FieldId::FatherOccupation,
                Box::new(|d| d.father_occupation = "F".to_string()),
            ),
            (
                FieldId::FatherContactNumber,
                Box::new(|d| d.father_contact_number = "9876".to_string()),
            ),
            (
                FieldId::MotherFullName,
                Box::new(|d| d.mother_full_name = String::new()),
            ),
            (
                FieldId::PermanentAddress,
                Box::new(|d| d.permanent_address = "Ktm".to_string()),
            ),
            (FieldId::Declaration, Box::new(|d| d.declaration = false)),
        ];

        for (field, break_field) in cases {
            let mut draft = valid_draft();
            break_field(&mut draft);

            let report = validate(&draft, &config(), today()).unwrap_err();
            assert_eq!(report.len(), 1, "expected one error for {:?}", field);
            assert!(
                report.message_for(field).is_some(),
                "missing error for {:?}",
                field
            );
        }
    }

    #[test]
    fn test_empty_draft_collects_every_error_in_schema_order() {
        let report = validate(&RegistrationDraft::default(), &config(), today()).unwrap_err();

        assert_eq!(report.len(), FieldId::ALL.len());
        let fields: Vec<FieldId> = report.iter().map(|e| e.field).collect();
        assert_eq!(fields, FieldId::ALL.to_vec());
    }

    #[test]
    fn test_national_id_message() {
        let mut draft = valid_draft();
        draft.mother_national_id = "1234".to_string();

        let report = validate(&draft, &config(), today()).unwrap_err();
        assert_eq!(
            report.message_for(FieldId::MotherNationalId),
            Some("National ID must be at least 5 characters")
        );
    }

    #[test]
    fn test_declaration_must_be_true() {
        let mut draft = valid_draft();
        draft.declaration = false;

        let report = validate(&draft, &config(), today()).unwrap_err();
        assert_eq!(
            report.message_for(FieldId::Declaration),
            Some("You must agree to the declaration")
        );

        draft.declaration = true;
        assert!(validate(&draft, &config(), today()).is_ok());
    }

    #[test]
    fn test_date_of_birth_boundaries() {
        let today = today();
        let mut draft = valid_draft();

        // Boundary dates are accepted
        draft.child_date_of_birth = Some(today);
        assert!(validate(&draft, &config(), today).is_ok());

        draft.child_date_of_birth = NaiveDate::from_ymd_opt(1900, 1, 1);
        assert!(validate(&draft, &config(), today).is_ok());

        // One day outside either bound is rejected
        draft.child_date_of_birth = today.succ_opt();
        let report = validate(&draft, &config(), today).unwrap_err();
        assert!(report.message_for(FieldId::ChildDateOfBirth).is_some());

        draft.child_date_of_birth = NaiveDate::from_ymd_opt(1899, 12, 31);
        let report = validate(&draft, &config(), today).unwrap_err();
        assert!(report.message_for(FieldId::ChildDateOfBirth).is_some());
    }

    #[test]
    fn test_missing_date_gets_required_message() {
        let mut draft = valid_draft();
        draft.child_date_of_birth = None;

        let report = validate(&draft, &config(), today()).unwrap_err();
        assert_eq!(
            report.message_for(FieldId::ChildDateOfBirth),
            Some("Date of birth is required")
        );
    }

    #[test]
    fn test_whitespace_only_input_fails_length_rules() {
        let mut draft = valid_draft();
        draft.child_full_name = "   Ram   ".to_string();
        assert!(validate(&draft, &config(), today()).is_ok());

        draft.child_full_name = "      ".to_string();
        let report = validate(&draft, &config(), today()).unwrap_err();
        assert!(report.message_for(FieldId::ChildFullName).is_some());
    }

    #[test]
    fn test_lengths_are_counted_in_characters_not_bytes() {
        let mut draft = valid_draft();
        // Three Devanagari characters, well over three bytes
        draft.child_full_name = "राम".to_string();
        assert_eq!(draft.child_full_name.chars().count(), 3);
        assert!(validate(&draft, &config(), today()).is_ok());
    }

    #[test]
    fn test_optional_fields_never_produce_errors() {
        let mut draft = valid_draft();
        draft.child_birth_certificate_number = String::new();
        draft.current_address = "   ".to_string();
        assert!(validate(&draft, &config(), today()).is_ok());

        draft.child_birth_certificate_number = "BC-OLD-1234".to_string();
        draft.current_address = "Pokhara-8".to_string();
        let record = validate(&draft, &config(), today()).unwrap();
        assert_eq!(
            record.child_birth_certificate_number.as_deref(),
            Some("BC-OLD-1234")
        );
        assert_eq!(record.current_address.as_deref(), Some("Pokhara-8"));
    }

    #[test]
    fn test_record_strings_are_trimmed() {
        let mut draft = valid_draft();
        draft.father_full_name = "  Hari Prasad  ".to_string();
        draft.permanent_address = " Ward 5, Kathmandu ".to_string();

        let record = validate(&draft, &config(), today()).unwrap();
        assert_eq!(record.father_full_name, "Hari Prasad");
        assert_eq!(record.permanent_address, "Ward 5, Kathmandu");
    }

    #[test]
    fn test_validate_field_matches_schema_pass() {
        let mut draft = valid_draft();
        draft.father_contact_number = "123".to_string();

        assert_eq!(
            validate_field(&draft, &config(), FieldId::FatherContactNumber, today()),
            Some("Contact number is required".to_string())
        );
        assert_eq!(
            validate_field(&draft, &config(), FieldId::ChildFullName, today()),
            None
        );
    }
}
