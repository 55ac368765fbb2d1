//! Rating Domain
//!
//! This crate holds the insurer rate cards the brokerage compares, and the
//! premium rule applied to each of them.
//!
//! # Premium rule
//!
//! ```text
//! basic   = vehicle value × rate% / 100
//! charged = max(basic, minimum premium)      rounded to whole units
//! total   = charged + levy
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::{PremiumCalculator, RateCard};
//! use core_kernel::{Currency, Money};
//!
//! let calculator = PremiumCalculator::standard();
//! let breakdown = calculator.calculate(&Money::from_major(1_000_000, Currency::KES), &card)?;
//! assert_eq!(breakdown.total.grouped(0), "35,400");
//! ```

pub mod rate_card;
pub mod premium;
pub mod ports;
pub mod error;

pub use rate_card::{RateCard, RateCardUpsert, CoverageLimits, ExcessTerms, DEFAULT_PVT_STATUS, NOT_APPLICABLE};
pub use premium::{PremiumCalculator, PremiumBreakdown, STANDARD_LEVY};
pub use ports::RateCardPort;
pub use error::RatingError;
