//! PDF Rendering Infrastructure
//!
//! A small typesetter that implements [`domain_quotation::DocumentRenderer`]
//! on top of `printpdf`.
//!
//! # Features
//!
//! - Built-in Helvetica and Helvetica-Bold, measured with the AFM widths,
//!   covering ASCII and the Latin-1 supplement
//! - Greedy word wrapping inside paragraphs and table cells
//! - Tables with column spans, row and cell backgrounds, and grid lines
//! - Page breaks between table rows, repeating the table's header rows
//! - Rows taller than a page continue line by line on the next page
//! - PNG images; undecodable images are logged and left out
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_pdf::PdfRenderer;
//! use domain_quotation::DocumentRenderer;
//!
//! let bytes = PdfRenderer::new().render(&document)?;
//! assert!(bytes.starts_with(b"%PDF"));
//! ```

pub mod error;
pub mod metrics;
pub mod renderer;

pub use error::RenderError;
pub use renderer::{PdfRenderer, RenderOutput, RenderStats};
