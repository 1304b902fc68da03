//! Validated registration record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{BirthPlaceType, Gender};

/// A registration record that passed the whole-record schema pass.
///
/// Every required field is present and typed; free-form strings are trimmed.
/// Optional fields are `None` when left blank on the form. Instances are
/// only produced by `validation::validate`, so holding one implies the
/// constraints held at validation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    // Child information
    pub child_full_name: String,
    pub child_date_of_birth: NaiveDate,
    pub child_gender: Gender,
    pub child_place_of_birth: String,
    pub child_birth_place: BirthPlaceType,
    pub child_birth_certificate_number: Option<String>,

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
    pub current_address: Option<String>,
}
