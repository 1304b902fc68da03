//! # App State Module
//!
//! Central application state for the birth registry app: the embedded
//! backend (form config + submission controller), the widget state of the
//! single registration page, and the banner state.
//!
//! The app owns the tokio runtime the simulated registrar runs on; the egui
//! event loop itself stays synchronous.

use log::info;

use crate::backend::Backend;
use crate::ui::state::{RegistrationFormState, UiState};

/// Main application struct for the egui birth registry
pub struct BirthRegistryApp {
    pub backend: Backend,

    /// Widget buffers and inline errors for the registration form
    pub form: RegistrationFormState,

    /// Banner state (success notification / error message)
    pub ui_state: UiState,

    /// Keeps the registrar's runtime alive for the app's lifetime
    _runtime: tokio::runtime::Runtime,
}

impl BirthRegistryApp {
    /// Create a new BirthRegistryApp with an empty form
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
    ) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing BirthRegistryApp");

        let backend = Backend::new(runtime.handle().clone())?;
        let today = chrono::Local::now().date_naive();

        Ok(Self {
            backend,
            form: RegistrationFormState::new(today),
            ui_state: UiState::new(),
            _runtime: runtime,
        })
    }
}
