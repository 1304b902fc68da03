pub mod form_state;
pub mod ui_state;

pub use form_state::RegistrationFormState;
pub use ui_state::UiState;
