//! Rendering port

use crate::error::QuotationError;
use crate::layout::QuoteDocument;

/// Turns a composed quotation into document bytes
///
/// Rendering is all-or-nothing: an implementation either returns the whole
/// document or an error.
pub trait DocumentRenderer: Send + Sync {
    /// MIME type of the produced bytes
    fn content_type(&self) -> &'static str;

    fn render(&self, document: &QuoteDocument) -> Result<Vec<u8>, QuotationError>;
}

/// A rendered quotation ready for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedQuote {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
