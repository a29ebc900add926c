//! Claims domain errors

use thiserror::Error;

use core_kernel::{ClaimId, PortError};

use crate::work_entry::WorkEntryViolation;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Claim validation failed: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),

    #[error("Supporting documents are required for claim processing")]
    MissingDocuments,

    #[error("Unknown claim status: {0}")]
    UnknownStatus(String),

    #[error("Invalid work entry at position {index}: {violation}")]
    InvalidWorkEntry {
        index: usize,
        violation: WorkEntryViolation,
    },

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Claim {0} has already been resolved")]
    AlreadyResolved(String),

    #[error("Store error: {0}")]
    Store(#[from] PortError),
}

impl ClaimError {
    /// Maps a store lookup failure, turning NotFound into ClaimNotFound
    pub fn from_lookup(id: ClaimId, error: PortError) -> Self {
        if error.is_not_found() {
            ClaimError::ClaimNotFound(id.to_string())
        } else {
            ClaimError::Store(error)
        }
    }
}
