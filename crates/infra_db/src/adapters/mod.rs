//! Domain Adapters
//!
//! This module provides adapter implementations for domain ports,
//! connecting domain interfaces to the SQLite database layer.
//!
//! Each adapter:
//! - Implements the domain's port trait
//! - Translates between domain models and database row types
//! - Uses the repository layer for database operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::SqliteRateCardAdapter;
//! use domain_rating::RateCardPort;
//!
//! let adapter = SqliteRateCardAdapter::new(&database);
//! let cards = adapter.list_rate_cards().await?;
//! ```

pub mod accounts;
pub mod rate_cards;

pub use accounts::SqliteAccountAdapter;
pub use rate_cards::SqliteRateCardAdapter;
