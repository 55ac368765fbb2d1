//! Repository implementations for stored entities
//!
//! Repositories own the SQL. They speak in plain row structs; mapping to
//! domain types happens in [`crate::adapters`].

pub mod accounts;
pub mod rate_cards;

pub use accounts::{AccountRepository, AccountRow};
pub use rate_cards::{RateCardRepository, RateCardRow};
