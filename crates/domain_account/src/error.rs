//! Account domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur in the account domain
#[derive(Debug, Error)]
pub enum AccountError {
    /// Email (or username) already belongs to another account
    #[error("Email already registered")]
    AlreadyRegistered,

    /// Unknown account or wrong password; the two are not distinguished
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Role string is neither `admin` nor `user`
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Registration data failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Password hashing failed
    #[error("Password hashing error: {0}")]
    Hashing(String),

    /// The account store failed
    #[error(transparent)]
    Storage(#[from] PortError),
}

impl AccountError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        AccountError::Validation(message.into())
    }
}
