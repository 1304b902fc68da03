//! Submission controller: the state machine behind the submit button.
//!
//! One controller exists per form instance. A submit call validates the
//! draft atomically; a valid record is handed to the gateway and tracked as
//! the single in-flight submission until `poll` observes its outcome. While
//! in flight, further submit calls are no-ops (idempotency guard).

use anyhow::Result;
use log::{info, warn};
use thiserror::Error;

use shared::{RegistrationFormConfig, ValidationReport};

use crate::backend::domain::commands::registration::{
    RegistrationReceipt, SubmitRegistrationCommand,
};
use crate::backend::domain::gateway::{PendingSubmission, RegistrationGateway, SubmissionOutcome};
use crate::backend::domain::validation;

/// Failure of an in-flight submission. The draft is left intact and the
/// guard is released so the applicant can retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("Registration was rejected: {0}")]
    Rejected(String),
    #[error("Registration service is unavailable, please try again")]
    GatewayUnavailable,
}

/// What a submit call did
#[derive(Debug)]
pub enum SubmitAttempt {
    /// Validation failed; all field errors collected in one report
    Invalid(ValidationReport),
    /// The record passed validation and is now in flight
    InFlight,
    /// Ignored: another submission is already in flight
    AlreadySubmitting,
}

/// Outcome observed by `poll`
#[derive(Debug)]
pub enum SubmissionUpdate {
    Accepted(RegistrationReceipt),
    Failed(SubmissionError),
}

enum Phase {
    Idle,
    Submitting(PendingSubmission),
}

pub struct SubmissionController {
    gateway: Box<dyn RegistrationGateway>,
    phase: Phase,
}

impl SubmissionController {
    pub fn new(gateway: Box<dyn RegistrationGateway>) -> Self {
        Self {
            gateway,
            phase: Phase::Idle,
        }
    }

    /// Whether a submission is in flight; drives the disabled submit button
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting(_))
    }

    /// Validate the draft and, if it passes, start the asynchronous
    /// acceptance through the gateway.
    pub fn submit(
        &mut self,
        command: SubmitRegistrationCommand,
        config: &RegistrationFormConfig,
    ) -> Result<SubmitAttempt> {
        if self.is_submitting() {
            warn!("Submit ignored: a submission is already in flight");
            return Ok(SubmitAttempt::AlreadySubmitting);
        }

        let record = match validation::validate(&command.draft, config, command.today) {
            Ok(record) => record,
            Err(report) => {
                info!("Submission blocked by {} validation error(s)", report.len());
                return Ok(SubmitAttempt::Invalid(report));
            }
        };

        let pending = self.gateway.submit(record)?;
        self.phase = Phase::Submitting(pending);
        info!("Submission in flight, awaiting registrar review");
        Ok(SubmitAttempt::InFlight)
    }

    /// Non-blocking check on the in-flight submission. Any terminal outcome
    /// returns the phase to idle, releasing the submit guard.
    pub fn poll(&mut self) -> Option<SubmissionUpdate> {
        let Phase::Submitting(pending) = &mut self.phase else {
            return None;
        };

        let outcome = pending.try_outcome()?;
        self.phase = Phase::Idle;

        match outcome {
            Ok(SubmissionOutcome::Accepted(receipt)) => {
                info!("Submission accepted with reference {}", receipt.reference);
                Some(SubmissionUpdate::Accepted(receipt))
            }
            Ok(SubmissionOutcome::Rejected(reason)) => {
                warn!("Submission rejected: {}", reason);
                Some(SubmissionUpdate::Failed(SubmissionError::Rejected(reason)))
            }
            Err(e) => {
                warn!("Submission failed: {}", e);
                Some(SubmissionUpdate::Failed(e))
            }
        }
    }

    /// Cancel the in-flight submission, if any. No outcome is reported;
    /// the phase simply returns to idle.
    pub fn cancel(&mut self) {
        if let Phase::Submitting(pending) = &self.phase {
            pending.cancel();
            self.phase = Phase::Idle;
            info!("In-flight submission cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::oneshot;
    use tokio_util::sync::CancellationToken;

    use crate::backend::domain::gateway::SimulatedRegistrar;
    use shared::{BirthPlaceType, FieldId, Gender, ReferenceCode, RegistrationDraft};

    /// Gateway whose outcomes are resolved by hand from the test body
    #[derive(Clone, Default)]
    struct MockGateway {
        senders: Arc<Mutex<Vec<oneshot::Sender<SubmissionOutcome>>>>,
        submit_count: Arc<AtomicUsize>,
    }

    impl MockGateway {
        fn resolve(&self, outcome: SubmissionOutcome) {
            let sender = self.senders.lock().unwrap().remove(0);
            sender.send(outcome).unwrap();
        }

        fn drop_next(&self) {
            self.senders.lock().unwrap().remove(0);
        }

        fn submissions(&self) -> usize {
            self.submit_count.load(Ordering::SeqCst)
        }
    }

    impl RegistrationGateway for MockGateway {
        fn submit(
            &self,
            _record: crate::backend::domain::models::registration::RegistrationRecord,
        ) -> Result<PendingSubmission> {
            let (tx, rx) = oneshot::channel();
            self.senders.lock().unwrap().push(tx);
            self.submit_count.fetch_add(1, Ordering::SeqCst);
            Ok(PendingSubmission::new(rx, CancellationToken::new()))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            child_full_name: "Ram Bahadur".to_string(),
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

    fn command(draft: RegistrationDraft) -> SubmitRegistrationCommand {
        SubmitRegistrationCommand {
            draft,
            today: today(),
        }
    }

    fn receipt() -> RegistrationReceipt {
        RegistrationReceipt {
            submission_id: "test-submission".to_string(),
            reference: ReferenceCode::new(123456).unwrap(),
        }
    }

    #[test]
    fn test_invalid_draft_never_reaches_gateway() {
        let gateway = MockGateway::default();
        let mut controller = SubmissionController::new(Box::new(gateway.clone()));

        let mut draft = valid_draft();
        draft.child_full_name = "Al".to_string();

        let attempt = controller
            .submit(command(draft), &RegistrationFormConfig::default())
            .unwrap();

        match attempt {
            SubmitAttempt::Invalid(report) => {
                assert!(report.message_for(FieldId::ChildFullName).is_some());
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert!(!controller.is_submitting());
        assert_eq!(gateway.submissions(), 0);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_a_no_op() {
        let gateway = MockGateway::default();
        let mut controller = SubmissionController::new(Box::new(gateway.clone()));
        let config = RegistrationFormConfig::default();

        let attempt = controller.submit(command(valid_draft()), &config).unwrap();
        assert!(matches!(attempt, SubmitAttempt::InFlight));
        assert!(controller.is_submitting());

        let attempt = controller.submit(command(valid_draft()), &config).unwrap();
        assert!(matches!(attempt, SubmitAttempt::AlreadySubmitting));

        // The guard held: only one task was ever started
        assert_eq!(gateway.submissions(), 1);
    }

    #[test]
    fn test_acceptance_is_reported_exactly_once() {
        let gateway = MockGateway::default();
        let mut controller = SubmissionController::new(Box::new(gateway.clone()));

        controller
            .submit(command(valid_draft()), &RegistrationFormConfig::default())
            .unwrap();
        assert!(controller.poll().is_none());

        gateway.resolve(SubmissionOutcome::Accepted(receipt()));

        match controller.poll() {
            Some(SubmissionUpdate::Accepted(receipt)) => {
                assert_eq!(receipt.reference.to_string(), "BC-123456");
            }
            other => panic!("expected acceptance, got {:?}", other),
        }

        // Guard released, no duplicate update
        assert!(!controller.is_submitting());
        assert!(controller.poll().is_none());
    }

    #[test]
    fn test_rejection_releases_guard_for_retry() {
        let gateway = MockGateway::default();
        let mut controller = SubmissionController::new(Box::new(gateway.clone()));
        let config = RegistrationFormConfig::default();

        controller.submit(command(valid_draft()), &config).unwrap();
        gateway.resolve(SubmissionOutcome::Rejected("records office closed".to_string()));

        match controller.poll() {
            Some(SubmissionUpdate::Failed(SubmissionError::Rejected(reason))) => {
                assert_eq!(reason, "records office closed");
            }
            other => panic!("expected rejection, got {:?}", other),
        }

        // Retry submits a second task
        let attempt = controller.submit(command(valid_draft()), &config).unwrap();
        assert!(matches!(attempt, SubmitAttempt::InFlight));
        assert_eq!(gateway.submissions(), 2);
    }

    #[test]
    fn test_lost_gateway_task_surfaces_as_failure() {
        let gateway = MockGateway::default();
        let mut controller = SubmissionController::new(Box::new(gateway.clone()));

        controller
            .submit(command(valid_draft()), &RegistrationFormConfig::default())
            .unwrap();
        gateway.drop_next();

        match controller.poll() {
            Some(SubmissionUpdate::Failed(SubmissionError::GatewayUnavailable)) => {}
            other => panic!("expected gateway failure, got {:?}", other),
        }
        assert!(!controller.is_submitting());
    }

    #[test]
    fn test_cancel_releases_guard_without_update() {
        let gateway = MockGateway::default();
        let mut controller = SubmissionController::new(Box::new(gateway.clone()));
        let config = RegistrationFormConfig::default();

        controller.submit(command(valid_draft()), &config).unwrap();
        controller.cancel();

        assert!(!controller.is_submitting());
        assert!(controller.poll().is_none());

        // Cancel when idle is a no-op
        controller.cancel();
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_end_to_end_with_simulated_registrar() {
        let registrar = SimulatedRegistrar::new(
            tokio::runtime::Handle::current(),
            Duration::from_millis(20),
        );
        let mut controller = SubmissionController::new(Box::new(registrar));

        let attempt = controller
            .submit(command(valid_draft()), &RegistrationFormConfig::default())
            .unwrap();
        assert!(matches!(attempt, SubmitAttempt::InFlight));

        let mut accepted = None;
        for _ in 0..200 {
            if let Some(update) = controller.poll() {
                accepted = Some(update);
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        match accepted {
            Some(SubmissionUpdate::Accepted(receipt)) => {
                let notification = receipt.notification();
                assert_eq!(notification.title, "Registration Submitted");
                assert!(notification.description.contains("BC-"));
            }
            other => panic!("expected acceptance, got {:?}", other),
        }

        // Exactly one update per submission
        assert!(controller.poll().is_none());
        assert!(!controller.is_submitting());
    }
}
