//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! quotation back office test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built rate cards, quote requests and money amounts
//! - `builders`: Builder patterns for rate card commands and quote requests
//! - `database`: In-memory SQLite database with migrations applied
//! - `assertions`: Custom assertion helpers for premiums and rendered output
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
