use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of the child as captured on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All variants in the order the form renders them
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Human-readable label for widget rendering
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Kind of place where the birth occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BirthPlaceType {
    Hospital,
    Home,
    Other,
}

impl BirthPlaceType {
    /// All variants in the order the form renders them
    pub const ALL: [BirthPlaceType; 3] = [
        BirthPlaceType::Hospital,
        BirthPlaceType::Home,
        BirthPlaceType::Other,
    ];

    /// Human-readable label for widget rendering
    pub fn label(&self) -> &'static str {
        match self {
            BirthPlaceType::Hospital => "Hospital",
            BirthPlaceType::Home => "Home",
            BirthPlaceType::Other => "Other",
        }
    }
}

/// The registration record exactly as entered, before any validation.
///
/// Free-form fields stay raw (untrimmed) here; optional fields use an empty
/// string to mean "not provided". Selections are `None` until the user picks
/// a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    // Child information
    pub child_full_name: String,
    pub child_date_of_birth: Option<NaiveDate>,
    pub child_gender: Option<Gender>,
    pub child_place_of_birth: String,
    pub child_birth_place: Option<BirthPlaceType>,
    /// Optional existing certificate number
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
    /// Optional, only filled when different from the permanent address
    pub current_address: String,

    // Declaration
    pub declaration: bool,
}

/// Identifier for every validated form field, used as the error-map key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    ChildFullName,
    ChildDateOfBirth,
    ChildGender,
    ChildPlaceOfBirth,
    ChildBirthPlace,
    FatherFullName,
    FatherNationalId,
    FatherOccupation,
    FatherContactNumber,
    MotherFullName,
    MotherNationalId,
    MotherOccupation,
    MotherContactNumber,
    PermanentAddress,
    Declaration,
}

impl FieldId {
    /// Every validated field, in schema declaration order. Optional fields
    /// (certificate number, current address) carry no rule and are absent.
    pub const ALL: [FieldId; 15] = [
        FieldId::ChildFullName,
        FieldId::ChildDateOfBirth,
        FieldId::ChildGender,
        FieldId::ChildPlaceOfBirth,
        FieldId::ChildBirthPlace,
        FieldId::FatherFullName,
        FieldId::FatherNationalId,
        FieldId::FatherOccupation,
        FieldId::FatherContactNumber,
        FieldId::MotherFullName,
        FieldId::MotherNationalId,
        FieldId::MotherOccupation,
        FieldId::MotherContactNumber,
        FieldId::PermanentAddress,
        FieldId::Declaration,
    ];
}

/// A single failed field with its user-facing message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

/// Outcome of a whole-record validation pass.
///
/// Entries keep schema declaration order so the UI renders errors
/// deterministically. An empty report means the record passed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    entries: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a failure for `field`. Used by the schema pass, which visits
    /// each field exactly once.
    pub fn push(&mut self, field: FieldId, message: impl Into<String>) {
        self.entries.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Message for a single field, if it failed
    pub fn message_for(&self, field: FieldId) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Replace (or insert) the entry for one field. Used by live
    /// per-field revalidation after a failed submit.
    pub fn set_field(&mut self, field: FieldId, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|e| e.field == field) {
            Some(entry) => entry.message = message,
            None => self.entries.push(FieldError { field, message }),
        }
    }

    /// Drop the entry for one field, if present
    pub fn clear_field(&mut self, field: FieldId) {
        self.entries.retain(|e| e.field != field);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter()
    }
}

/// Reference code issued on acceptance, rendered as "BC-NNNNNN"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCode(u32);

impl ReferenceCode {
    pub const MIN: u32 = 100_000;
    pub const MAX: u32 = 999_999;

    /// Wrap a raw number, rejecting values outside the 6-digit range
    pub fn new(number: u32) -> Result<Self, ReferenceCodeError> {
        if !(Self::MIN..=Self::MAX).contains(&number) {
            return Err(ReferenceCodeError::OutOfRange);
        }
        Ok(ReferenceCode(number))
    }

    /// Draw a code uniformly from [100000, 999999]
    pub fn generate<R: rand::Rng>(rng: &mut R) -> Self {
        ReferenceCode(rng.gen_range(Self::MIN..=Self::MAX))
    }

    /// Parse a "BC-NNNNNN" string back into a code
    pub fn parse(s: &str) -> Result<Self, ReferenceCodeError> {
        let number = s
            .strip_prefix("BC-")
            .ok_or(ReferenceCodeError::MissingPrefix)?;
        if number.len() != 6 || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ReferenceCodeError::InvalidNumber);
        }
        let number = number
            .parse::<u32>()
            .map_err(|_| ReferenceCodeError::InvalidNumber)?;
        Self::new(number)
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BC-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceCodeError {
    MissingPrefix,
    InvalidNumber,
    OutOfRange,
}

impl fmt::Display for ReferenceCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceCodeError::MissingPrefix => write!(f, "Reference code must start with BC-"),
            ReferenceCodeError::InvalidNumber => write!(f, "Reference code must carry 6 digits"),
            ReferenceCodeError::OutOfRange => {
                write!(f, "Reference number must be between 100000 and 999999")
            }
        }
    }
}

impl std::error::Error for ReferenceCodeError {}

/// Notification payload handed to the toast/banner collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    /// The success notification emitted after a simulated acceptance
    pub fn submission_accepted(reference: &ReferenceCode) -> Self {
        Self {
            title: "Registration Submitted".to_string(),
            description: format!(
                "Your birth certificate registration has been submitted successfully. \
                 Your reference number is {}",
                reference
            ),
        }
    }
}

/// Configuration for the registration form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationFormConfig {
    /// Simulated review delay before acceptance, in milliseconds
    pub review_delay_ms: u64,
    /// Earliest accepted date of birth
    pub earliest_birth_date: NaiveDate,
    pub name_min_chars: usize,
    pub national_id_min_chars: usize,
    pub occupation_min_chars: usize,
    pub contact_number_min_chars: usize,
    pub place_of_birth_min_chars: usize,
    pub address_min_chars: usize,
    /// Character limit applied to text widgets
    pub max_field_chars: usize,
}

impl Default for RegistrationFormConfig {
    fn default() -> Self {
        Self {
            review_delay_ms: 1500,
            earliest_birth_date: NaiveDate::from_ymd_opt(1900, 1, 1)
                .expect("1900-01-01 is a valid date"),
            name_min_chars: 3,
            national_id_min_chars: 5,
            occupation_min_chars: 2,
            contact_number_min_chars: 5,
            place_of_birth_min_chars: 2,
            address_min_chars: 5,
            max_field_chars: 200,
        }
    }
}
