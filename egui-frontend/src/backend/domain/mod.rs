//! Registration domain: validation schema, submission state machine and the
//! gateway seam that stands in for a real registrar service.

pub mod commands;
pub mod gateway;
pub mod models;
pub mod reference;
pub mod submission;
pub mod validation;
