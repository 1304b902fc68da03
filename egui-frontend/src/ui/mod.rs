//! # UI Module
//!
//! egui presentation layer for the registration form: application state,
//! the eframe update loop, per-field widget state and the page components.

pub mod app_implementation;
pub mod app_state;
pub mod components;
pub mod state;
