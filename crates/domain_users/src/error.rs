//! User domain errors

use thiserror::Error;

use core_kernel::PortError;

use crate::duplicate::DuplicateField;

/// Errors that can occur in the user domain
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("A user with this {0} already exists.")]
    DuplicateUser(DuplicateField),

    #[error("Invalid user data: {0}")]
    InvalidData(String),

    #[error("Store error: {0}")]
    Store(#[from] PortError),
}
