//! Invoice status constants and validation.
//!
//! Invoices are either awaiting payment (`pendente`) or settled (`pago`).
//! The database enforces the same set with a CHECK constraint.

use validator::ValidationError;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Invoice issued but not yet paid.
pub const STATUS_PENDING: &str = "pendente";
/// Invoice settled.
pub const STATUS_PAID: &str = "pago";

/// All valid invoice statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_PAID];

// ---------------------------------------------------------------------------
// Listing constants
// ---------------------------------------------------------------------------

/// Number of invoices returned by the "latest invoices" listing.
pub const LATEST_INVOICES_LIMIT: i64 = 5;

/// Amount matched by the diagnostic `/query` endpoint.
pub const DIAGNOSTIC_AMOUNT: i64 = 666;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid invoice status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

/// Field-rule form of [`validate_status`] for `#[validate(custom(...))]`.
pub fn status_rule(status: &str) -> Result<(), ValidationError> {
    validate_status(status).map_err(|_| {
        let mut err = ValidationError::new("status");
        err.message = Some("Please select an invoice status.".into());
        err
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
