//! SQLite Rate Card Adapter
//!
//! Implements `RateCardPort` on top of [`RateCardRepository`], translating
//! between `RateCard` and [`RateCardRow`].

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use core_kernel::{DomainPort, PortError, RateCardId};
use domain_rating::{CoverageLimits, ExcessTerms, RateCard, RateCardPort, RateCardUpsert};

use crate::error::db_to_port_error;
use crate::pool::Database;
use crate::repositories::rate_cards::{RateCardRepository, RateCardRow};

/// SQLite-backed implementation of the RateCardPort trait
#[derive(Debug, Clone)]
pub struct SqliteRateCardAdapter {
    repository: RateCardRepository,
}

impl SqliteRateCardAdapter {
    pub fn new(database: &Database) -> Self {
        Self {
            repository: RateCardRepository::new(database.pool().clone()),
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &RateCardRepository {
        &self.repository
    }
}

impl DomainPort for SqliteRateCardAdapter {}

#[async_trait]
impl RateCardPort for SqliteRateCardAdapter {
    #[instrument(skip(self))]
    async fn list_rate_cards(&self) -> Result<Vec<RateCard>, PortError> {
        let rows = self.repository.list_all().await.map_err(db_to_port_error)?;
        debug!(count = rows.len(), "Loaded rate cards");
        rows.into_iter().map(row_to_rate_card).collect()
    }

    #[instrument(skip(self, upsert), fields(company = %upsert.company_name))]
    async fn upsert_rate_card(&self, upsert: RateCardUpsert) -> Result<RateCard, PortError> {
        let candidate = RateCard::from_upsert(upsert, Utc::now());
        let stored = self
            .repository
            .upsert(&rate_card_to_row(&candidate))
            .await
            .map_err(db_to_port_error)?;

        let card = row_to_rate_card(stored)?;
        info!(
            company = %card.company_name,
            created = card.id == candidate.id,
            "Stored rate card"
        );
        Ok(card)
    }
}

fn rate_card_to_row(card: &RateCard) -> RateCardRow {
    RateCardRow {
        id: *card.id.as_uuid(),
        company_name: card.company_name.clone(),
        rate_percent: card.rate_percent.normalize().to_string(),
        min_premium: card.min_premium,
        levies: card.levies.clone(),
        company_color: card.company_color.clone(),
        limit_windscreen: card.limits.windscreen.clone(),
        limit_entertainment: card.limits.entertainment.clone(),
        limit_towing: card.limits.towing.clone(),
        limit_repair: card.limits.repair.clone(),
        limit_medical: card.limits.medical.clone(),
        limit_tppd: card.limits.third_party_property.clone(),
        excess_own_damage: card.excess.own_damage.clone(),
        excess_theft_tracker: card.excess.theft_with_tracker.clone(),
        excess_theft_no_tracker: card.excess.theft_without_tracker.clone(),
        excess_young_driver: card.excess.young_driver.clone(),
        pvt_status: card.pvt_status.clone(),
        created_at: card.created_at,
        updated_at: card.updated_at,
    }
}

fn row_to_rate_card(row: RateCardRow) -> Result<RateCard, PortError> {
    let rate_percent = Decimal::from_str(&row.rate_percent).map_err(|e| {
        PortError::transformation(format!(
            "rate_percent '{}' for {} is not a decimal: {}",
            row.rate_percent, row.company_name, e
        ))
    })?;

    Ok(RateCard {
        id: RateCardId::from(row.id),
        company_name: row.company_name,
        rate_percent,
        min_premium: row.min_premium,
        levies: row.levies,
        company_color: row.company_color,
        limits: CoverageLimits {
            windscreen: row.limit_windscreen,
            entertainment: row.limit_entertainment,
            towing: row.limit_towing,
            repair: row.limit_repair,
            medical: row.limit_medical,
            third_party_property: row.limit_tppd,
        },
        excess: ExcessTerms {
            own_damage: row.excess_own_damage,
            theft_with_tracker: row.excess_theft_tracker,
            theft_without_tracker: row.excess_theft_no_tracker,
            young_driver: row.excess_young_driver,
        },
        pvt_status: row.pvt_status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_row_mapping_keeps_every_field() {
        let mut upsert = RateCardUpsert::new("Jubilee", dec!(3.50), 20_000);
        upsert.limits.third_party_property = "20,000,000".to_string();
        upsert.excess.theft_without_tracker = "20% of value".to_string();
        upsert.company_color = Some("#0A2E73".to_string());
        let card = RateCard::from_upsert(upsert, Utc::now());

        let row = rate_card_to_row(&card);
        assert_eq!(row.rate_percent, "3.5");
        assert_eq!(row.limit_tppd, "20,000,000");

        let back = row_to_rate_card(row).unwrap();
        assert_eq!(back, RateCard { rate_percent: dec!(3.5), ..card });
    }

    #[test]
    fn test_bad_decimal_is_transformation_error() {
        let card = RateCard::from_upsert(RateCardUpsert::new("APA", dec!(3), 1), Utc::now());
        let mut row = rate_card_to_row(&card);
        row.rate_percent = "three".to_string();
        assert!(matches!(
            row_to_rate_card(row),
            Err(PortError::Transformation { .. })
        ));
    }
}
