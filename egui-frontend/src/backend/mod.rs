//! # Backend Module for egui Frontend
//!
//! This backend module hosts the registration domain directly inside the
//! desktop app. There is no server and no storage behind it:
//! - Validation runs synchronously on the UI thread
//! - The only asynchronous piece is the simulated registrar task
//! - The submission controller is polled once per frame

use anyhow::Result;
use std::time::Duration;
use tokio::runtime::Handle;

use shared::RegistrationFormConfig;

pub mod domain;

use domain::gateway::SimulatedRegistrar;
use domain::submission::SubmissionController;

/// Main backend struct that wires the form configuration to the
/// submission controller and its gateway
pub struct Backend {
    pub config: RegistrationFormConfig,
    pub registration: SubmissionController,
}

impl Backend {
    /// Create a new backend instance with the simulated registrar
    pub fn new(handle: Handle) -> Result<Self> {
        let config = RegistrationFormConfig::default();

        let registrar =
            SimulatedRegistrar::new(handle, Duration::from_millis(config.review_delay_ms));
        let registration = SubmissionController::new(Box::new(registrar));

        Ok(Backend {
            config,
            registration,
        })
    }
}
