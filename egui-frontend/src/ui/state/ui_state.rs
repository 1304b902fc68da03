//! # UI State Module
//!
//! Banner state for user feedback: the success notification after an
//! accepted submission and error messages from a failed one. At most one
//! banner shows at a time, dismissed automatically after a delay.

use shared::Notification;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct UiState {
    /// Success notification to display
    pub notification: Option<Notification>,

    /// Error message to display
    pub error_message: Option<String>,

    shown_at: Option<Instant>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success notification, replacing any visible banner
    pub fn show_notification(&mut self, notification: Notification) {
        self.notification = Some(notification);
        self.error_message = None;
        self.shown_at = Some(Instant::now());
    }

    /// Show an error banner, replacing any visible banner
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.notification = None;
        self.shown_at = Some(Instant::now());
    }

    pub fn has_messages(&self) -> bool {
        self.notification.is_some() || self.error_message.is_some()
    }

    /// Clear any visible banner
    pub fn clear_messages(&mut self) {
        self.notification = None;
        self.error_message = None;
        self.shown_at = None;
    }

    /// Drop the banner once it has been visible longer than `ttl`.
    /// Returns true when something was dismissed.
    pub fn dismiss_expired(&mut self, ttl: Duration) -> bool {
        match self.shown_at {
            Some(shown_at) if shown_at.elapsed() >= ttl => {
                self.clear_messages();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ReferenceCode;

    #[test]
    fn test_banners_replace_each_other() {
        let mut state = UiState::new();
        assert!(!state.has_messages());

        let code = ReferenceCode::new(123456).unwrap();
        state.show_notification(Notification::submission_accepted(&code));
        assert!(state.notification.is_some());
        assert!(state.error_message.is_none());

        state.set_error("Registration service is unavailable".to_string());
        assert!(state.notification.is_none());
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_dismiss_expired_clears_after_ttl() {
        let mut state = UiState::new();
        state.set_error("boom".to_string());

        // Far from expired
        assert!(!state.dismiss_expired(Duration::from_secs(60)));
        assert!(state.has_messages());

        // Zero ttl expires immediately
        assert!(state.dismiss_expired(Duration::ZERO));
        assert!(!state.has_messages());
    }
}
