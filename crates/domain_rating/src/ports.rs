//! Rating Domain Ports
//!
//! The rate card store is an external collaborator. `RateCardPort` is the
//! seam the API layer talks to; `infra_db` provides the SQLite adapter.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::rate_card::{RateCard, RateCardUpsert};

/// Storage operations for rate cards
#[async_trait]
pub trait RateCardPort: DomainPort {
    /// Returns every stored card in storage (insertion) order
    async fn list_rate_cards(&self) -> Result<Vec<RateCard>, PortError>;

    /// Creates the card if the company is unknown, otherwise overwrites
    /// every field of the existing card
    async fn upsert_rate_card(&self, upsert: RateCardUpsert) -> Result<RateCard, PortError>;
}
