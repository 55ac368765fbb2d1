//! Rate card (product) DTOs
//!
//! The wire shape is flat: limits are `limit_*` and excesses `excess_*`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::RateCardId;
use domain_rating::{
    CoverageLimits, ExcessTerms, RateCard, RateCardUpsert, DEFAULT_PVT_STATUS, NOT_APPLICABLE,
};

fn not_applicable() -> String {
    NOT_APPLICABLE.to_string()
}

fn default_pvt_status() -> String {
    DEFAULT_PVT_STATUS.to_string()
}

/// Body of `POST /admin/update-product`
///
/// Omitted limits default to `N/A`, omitted excesses to empty text and
/// an omitted PVT status to `Inclusive`. Explicit `null` behaves like an
/// omitted field.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub company_name: String,
    pub rate_percent: Decimal,
    pub min_premium: i64,
    #[serde(default)]
    pub levies: Option<String>,
    #[serde(default)]
    pub company_color: Option<String>,

    #[serde(default)]
    pub limit_windscreen: Option<String>,
    #[serde(default)]
    pub limit_entertainment: Option<String>,
    #[serde(default)]
    pub limit_towing: Option<String>,
    #[serde(default)]
    pub limit_repair: Option<String>,
    #[serde(default)]
    pub limit_medical: Option<String>,
    #[serde(default)]
    pub limit_tppd: Option<String>,

    #[serde(default)]
    pub excess_own_damage: Option<String>,
    #[serde(default)]
    pub excess_theft_tracker: Option<String>,
    #[serde(default)]
    pub excess_theft_no_tracker: Option<String>,
    #[serde(default)]
    pub excess_young_driver: Option<String>,

    #[serde(default)]
    pub pvt_status: Option<String>,
}

impl ProductRequest {
    pub fn into_upsert(self) -> RateCardUpsert {
        let limit = |value: Option<String>| value.unwrap_or_else(not_applicable);
        let excess = |value: Option<String>| value.unwrap_or_default();

        RateCardUpsert {
            company_name: self.company_name,
            rate_percent: self.rate_percent,
            min_premium: self.min_premium,
            levies: self.levies,
            company_color: self.company_color,
            limits: CoverageLimits {
                windscreen: limit(self.limit_windscreen),
                entertainment: limit(self.limit_entertainment),
                towing: limit(self.limit_towing),
                repair: limit(self.limit_repair),
                medical: limit(self.limit_medical),
                third_party_property: limit(self.limit_tppd),
            },
            excess: ExcessTerms {
                own_damage: excess(self.excess_own_damage),
                theft_with_tracker: excess(self.excess_theft_tracker),
                theft_without_tracker: excess(self.excess_theft_no_tracker),
                young_driver: excess(self.excess_young_driver),
            },
            pvt_status: self.pvt_status.unwrap_or_else(default_pvt_status),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductUpdatedResponse {
    pub status: String,
    pub company: String,
}

/// One entry of `GET /products`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: RateCardId,
    pub company_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate_percent: Decimal,
    pub min_premium: i64,
    pub levies: Option<String>,
    pub company_color: Option<String>,
    pub limit_windscreen: String,
    pub limit_entertainment: String,
    pub limit_towing: String,
    pub limit_repair: String,
    pub limit_medical: String,
    pub limit_tppd: String,
    pub excess_own_damage: String,
    pub excess_theft_tracker: String,
    pub excess_theft_no_tracker: String,
    pub excess_young_driver: String,
    pub pvt_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RateCard> for ProductResponse {
    fn from(card: RateCard) -> Self {
        Self {
            id: card.id,
            company_name: card.company_name,
            rate_percent: card.rate_percent,
            min_premium: card.min_premium,
            levies: card.levies,
            company_color: card.company_color,
            limit_windscreen: card.limits.windscreen,
            limit_entertainment: card.limits.entertainment,
            limit_towing: card.limits.towing,
            limit_repair: card.limits.repair,
            limit_medical: card.limits.medical,
            limit_tppd: card.limits.third_party_property,
            excess_own_damage: card.excess.own_damage,
            excess_theft_tracker: card.excess.theft_with_tracker,
            excess_theft_no_tracker: card.excess.theft_without_tracker,
            excess_young_driver: card.excess.young_driver,
            pvt_status: card.pvt_status,
            created_at: card.created_at,
            updated_at: card.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omitted_fields_take_defaults() {
        let request: ProductRequest = serde_json::from_str(
            r#"{"company_name": "Jubilee", "rate_percent": 3.5, "min_premium": 20000,
                "limit_windscreen": "50,000", "excess_young_driver": null}"#,
        )
        .unwrap();
        let upsert = request.into_upsert();

        assert_eq!(upsert.limits.windscreen, "50,000");
        assert_eq!(upsert.limits.towing, "N/A");
        assert_eq!(upsert.excess.young_driver, "");
        assert_eq!(upsert.pvt_status, "Inclusive");
        assert_eq!(upsert.rate_percent.to_string(), "3.5");
    }
}
