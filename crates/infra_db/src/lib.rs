//! Infrastructure Database Layer
//!
//! This crate provides the storage for the quotation back office: user
//! accounts and insurer rate cards in a single SQLite file, accessed
//! through SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern. Repositories own the SQL and
//! return plain row structs; adapters implement the domain ports
//! (`AccountPort`, `RateCardPort`) by mapping rows to domain types.
//!
//! The schema lives in `migrations/` and is embedded into the binary; it is
//! applied by [`Database::open`].
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{Database, DatabaseConfig, SqliteRateCardAdapter};
//!
//! let db = Database::open(DatabaseConfig::new("sqlite://pacific.db")).await?;
//! let cards = SqliteRateCardAdapter::new(&db);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{Database, DatabaseConfig, DatabasePool};
pub use error::{db_to_port_error, DatabaseError};
pub use adapters::{SqliteAccountAdapter, SqliteRateCardAdapter};
