//! # App Module
//!
//! Thin re-export shim so `main.rs` can pull in the application type without
//! reaching into the UI module tree directly.

pub use crate::ui::app_state::BirthRegistryApp;
