//! Request and response bodies
//!
//! Field names follow the JSON used by the existing web front end.

pub mod accounts;
pub mod rate_cards;
pub mod quotes;
