//! Quotation domain errors

use domain_rating::RatingError;
use thiserror::Error;

/// Errors that can occur while composing a quotation
#[derive(Debug, Error)]
pub enum QuotationError {
    /// Nothing to compare
    #[error("No rate cards configured")]
    NoRateCards,

    /// Request fields failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Premium calculation failed
    #[error(transparent)]
    Rating(#[from] RatingError),

    /// The renderer could not produce a document
    #[error("Render error: {0}")]
    Render(String),
}

impl QuotationError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        QuotationError::Validation(message.into())
    }

    /// Creates a render error
    pub fn render(message: impl std::fmt::Display) -> Self {
        QuotationError::Render(message.to_string())
    }
}
