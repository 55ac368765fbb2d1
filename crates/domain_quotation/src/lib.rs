//! Quotation Domain
//!
//! Turns a client's vehicle details and the insurers' rate cards into a
//! side-by-side comparison quotation.
//!
//! # Pipeline
//!
//! Each section of the document is built by an independent function in
//! [`sections`] that returns an immutable [`Fragment`]. [`QuoteComposer`]
//! runs them in a fixed order:
//!
//! ```text
//! Header -> Title -> Scope -> VehicleDetails -> Comparison
//!        -> Excess -> ValueAdditions -> Disclaimer -> PreparedBy
//! ```
//!
//! The resulting [`QuoteDocument`] is pure layout data. Turning it into
//! bytes is the job of a [`DocumentRenderer`] (see the `infra_pdf` crate).
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_quotation::{QuoteComposer, Branding};
//!
//! let composer = QuoteComposer::new(PremiumCalculator::standard(), Branding::default());
//! let document = composer.compose(&request, &cards, today)?;
//! let pdf = renderer.render(&document)?;
//! ```

pub mod layout;
pub mod branding;
pub mod request;
pub mod sections;
pub mod composer;
pub mod render;
pub mod error;

pub use layout::{
    Align, Block, Cell, CellContent, Color, FontWeight, Fragment, GridLines, ImageBlock,
    Padding, PageGeometry, Paragraph, QuoteDocument, Row, Rule, SectionKind, Table,
    TextStyle,
};
pub use branding::{Branding, Logo};
pub use request::QuoteRequest;
pub use composer::QuoteComposer;
pub use render::{DocumentRenderer, RenderedQuote};
pub use error::QuotationError;
