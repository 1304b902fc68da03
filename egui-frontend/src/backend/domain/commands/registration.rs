//! Command and result types for the submit operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{Notification, ReferenceCode, RegistrationDraft};

/// Command to submit the current draft.
///
/// `today` is sampled at the UI boundary and passed in so the date-of-birth
/// window is checked against a pinned date, both in production and in tests.
#[derive(Debug, Clone)]
pub struct SubmitRegistrationCommand {
    pub draft: RegistrationDraft,
    pub today: NaiveDate,
}

/// Receipt produced by the registrar when a submission is accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    /// Internal submission id (UUID v4)
    pub submission_id: String,
    /// Human-readable reference code shown to the applicant
    pub reference: ReferenceCode,
}

impl RegistrationReceipt {
    /// The notification payload surfaced to the toast/banner collaborator
    pub fn notification(&self) -> Notification {
        Notification::submission_accepted(&self.reference)
    }
}
