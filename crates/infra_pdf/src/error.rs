//! PDF rendering errors

use domain_quotation::QuotationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// printpdf failed to build or serialise the document
    #[error("PDF error: {0}")]
    Pdf(String),

    /// A font could not be registered
    #[error("Font error: {0}")]
    Font(String),

    /// The document has nothing to draw
    #[error("Empty document")]
    EmptyDocument,
}

impl From<RenderError> for QuotationError {
    fn from(err: RenderError) -> Self {
        QuotationError::render(err)
    }
}
