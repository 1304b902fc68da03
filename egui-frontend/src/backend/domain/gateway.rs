//! Registrar gateway: the single side-effecting seam of the domain.
//!
//! A gateway accepts a validated record and returns a `PendingSubmission`
//! handle; the controller polls that handle each frame. The shipped
//! `SimulatedRegistrar` never rejects - it sleeps for the configured review
//! delay and sends back an acceptance receipt.

use anyhow::Result;
use log::{debug, info};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::backend::domain::commands::registration::RegistrationReceipt;
use crate::backend::domain::models::registration::RegistrationRecord;
use crate::backend::domain::reference;
use crate::backend::domain::submission::SubmissionError;

/// Terminal outcome reported by a registrar
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Accepted(RegistrationReceipt),
    /// Carries the registrar's reason; unused by the simulated registrar
    Rejected(String),
}

/// Handle to one in-flight submission.
///
/// Owns the receiving half of the outcome channel plus the token that can
/// cancel the registrar task. Dropping the handle abandons the submission.
pub struct PendingSubmission {
    outcome_rx: oneshot::Receiver<SubmissionOutcome>,
    cancel: CancellationToken,
    submitted_at: Instant,
}

impl PendingSubmission {
    pub fn new(outcome_rx: oneshot::Receiver<SubmissionOutcome>, cancel: CancellationToken) -> Self {
        Self {
            outcome_rx,
            cancel,
            submitted_at: Instant::now(),
        }
    }

    /// Non-blocking check for the outcome.
    ///
    /// `None` while the registrar is still working. A closed channel means
    /// the task went away without reporting, surfaced as a gateway error.
    pub fn try_outcome(&mut self) -> Option<Result<SubmissionOutcome, SubmissionError>> {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => Some(Ok(outcome)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(SubmissionError::GatewayUnavailable)),
        }
    }

    /// Signal the registrar task to stop without reporting an outcome
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Time spent in flight so far
    pub fn elapsed(&self) -> Duration {
        self.submitted_at.elapsed()
    }
}

/// Boundary to whatever service reviews registrations
pub trait RegistrationGateway {
    fn submit(&self, record: RegistrationRecord) -> Result<PendingSubmission>;
}

/// The shipped gateway: simulates a registrar by sleeping for a fixed
/// review delay (no jitter) and then accepting with a fresh receipt.
pub struct SimulatedRegistrar {
    handle: Handle,
    review_delay: Duration,
}

impl SimulatedRegistrar {
    pub fn new(handle: Handle, review_delay: Duration) -> Self {
        Self {
            handle,
            review_delay,
        }
    }
}

impl RegistrationGateway for SimulatedRegistrar {
    fn submit(&self, record: RegistrationRecord) -> Result<PendingSubmission> {
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let delay = self.review_delay;

        self.handle.spawn(async move {
            tokio::select! {
                _ = task_cancel.cancelled() => {
                    debug!("Registration review cancelled for {}", record.child_full_name);
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }

            let receipt = RegistrationReceipt {
                submission_id: Uuid::new_v4().to_string(),
                reference: reference::issue_reference(),
            };
            info!(
                "Accepted registration for {} with reference {}",
                record.child_full_name, receipt.reference
            );

            // Receiver may have been dropped while we slept; nothing to do then
            let _ = outcome_tx.send(SubmissionOutcome::Accepted(receipt));
        });

        Ok(PendingSubmission::new(outcome_rx, cancel))
    }
}
