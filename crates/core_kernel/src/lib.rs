//! Core Kernel - Foundational types for the motor quotation back office
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Money types with precise decimal arithmetic and display grouping
//! - Strongly-typed identifiers
//! - The port error type returned by every storage adapter

pub mod money;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use money::{Money, Currency, MoneyError, Rate};
pub use identifiers::{AccountId, RateCardId};
pub use ports::{PortError, DomainPort};
pub use error::CoreError;
