//! Request handlers

pub mod health;
pub mod accounts;
pub mod rate_cards;
pub mod quotes;
