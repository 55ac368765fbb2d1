//! Rating domain errors

use core_kernel::MoneyError;
use thiserror::Error;

/// Errors that can occur in the rating domain
#[derive(Debug, Error)]
pub enum RatingError {
    /// Vehicle value below zero
    #[error("Vehicle value cannot be negative: {0}")]
    NegativeVehicleValue(String),

    /// Rate card carries a negative rate
    #[error("Rate card '{company}' has a negative rate: {rate}%")]
    NegativeRate {
        company: String,
        rate: String,
    },

    /// Rate card carries a negative minimum premium
    #[error("Rate card '{company}' has a negative minimum premium: {min_premium}")]
    NegativeMinimumPremium {
        company: String,
        min_premium: i64,
    },

    /// Money arithmetic failed
    #[error("Financial error: {0}")]
    Money(#[from] MoneyError),

    /// Upsert command failed validation
    #[error("Validation error: {0}")]
    Validation(String),
}

impl RatingError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        RatingError::Validation(message.into())
    }
}
