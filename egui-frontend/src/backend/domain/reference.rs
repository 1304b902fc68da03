//! Reference code issuance.

use shared::ReferenceCode;

/// Draw a fresh reference code from the thread-local RNG.
///
/// Codes are uniform in [100000, 999999]; uniqueness is not guaranteed,
/// matching the reference-number behavior of the registrar being simulated.
pub fn issue_reference() -> ReferenceCode {
    ReferenceCode::generate(&mut rand::thread_rng())
}
