//! Insurer rate cards
//!
//! A rate card is one insurer's pricing rule (rate on vehicle value plus a
//! minimum premium) together with the coverage limits and excess wording
//! printed on the comparison quotation. Limits and excesses are display text,
//! not numbers: insurers quote them as "50,000", "N/A" or "Unlimited".
//!
//! The company name is the natural key. Cards are only ever created or fully
//! overwritten through [`RateCardUpsert`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use core_kernel::{Rate, RateCardId};

use crate::error::RatingError;

/// Placeholder shown for a coverage limit the insurer does not offer
pub const NOT_APPLICABLE: &str = "N/A";

/// Political violence & terrorism status used when none is supplied
pub const DEFAULT_PVT_STATUS: &str = "Inclusive";

/// Coverage sub-limits printed in the benefits block of the quotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CoverageLimits {
    /// Windscreen replacement limit
    #[validate(length(max = 120))]
    pub windscreen: String,
    /// Radio, audio and entertainment unit limit
    #[validate(length(max = 120))]
    pub entertainment: String,
    /// Towing charges limit
    #[validate(length(max = 120))]
    pub towing: String,
    /// Authorized repair limit
    #[validate(length(max = 120))]
    pub repair: String,
    /// Medical expenses limit
    #[validate(length(max = 120))]
    pub medical: String,
    /// Third-party property damage limit
    #[validate(length(max = 120))]
    pub third_party_property: String,
}

impl Default for CoverageLimits {
    fn default() -> Self {
        Self {
            windscreen: NOT_APPLICABLE.to_string(),
            entertainment: NOT_APPLICABLE.to_string(),
            towing: NOT_APPLICABLE.to_string(),
            repair: NOT_APPLICABLE.to_string(),
            medical: NOT_APPLICABLE.to_string(),
            third_party_property: NOT_APPLICABLE.to_string(),
        }
    }
}

/// Excess wording, one free-text description per claim category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ExcessTerms {
    /// Own damage / partial theft excess
    #[validate(length(max = 2000))]
    pub own_damage: String,
    /// Theft excess when a tracking device is fitted
    #[validate(length(max = 500))]
    pub theft_with_tracker: String,
    /// Theft excess when no tracking device is fitted
    #[validate(length(max = 500))]
    pub theft_without_tracker: String,
    /// Young or inexperienced driver excess
    #[validate(length(max = 500))]
    pub young_driver: String,
}

/// A stored insurer rate card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    pub id: RateCardId,
    /// Insurer name, unique across all cards
    pub company_name: String,
    /// Rate applied to the vehicle value, as a percentage
    pub rate_percent: Decimal,
    /// Premium floor in whole currency units
    pub min_premium: i64,
    /// Free-text levy note kept alongside the card
    pub levies: Option<String>,
    /// Insurer brand colour as `#RRGGBB`
    pub company_color: Option<String>,
    pub limits: CoverageLimits,
    pub excess: ExcessTerms,
    /// Political violence & terrorism cover status
    pub pvt_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RateCard {
    /// Builds a new card from an upsert command
    pub fn from_upsert(upsert: RateCardUpsert, now: DateTime<Utc>) -> Self {
        Self {
            id: RateCardId::new_v7(),
            company_name: upsert.company_name,
            rate_percent: upsert.rate_percent,
            min_premium: upsert.min_premium,
            levies: upsert.levies,
            company_color: upsert.company_color,
            limits: upsert.limits,
            excess: upsert.excess,
            pvt_status: upsert.pvt_status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the premium rate as a [`Rate`]
    pub fn rate(&self) -> Rate {
        Rate::from_percentage(self.rate_percent)
    }
}

/// Admin command creating or fully overwriting the card for one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RateCardUpsert {
    #[validate(length(min = 1, max = 120, message = "company name must be 1-120 characters"))]
    pub company_name: String,
    #[validate(custom(function = "non_negative_rate"))]
    pub rate_percent: Decimal,
    #[validate(range(min = 0, message = "minimum premium cannot be negative"))]
    pub min_premium: i64,
    pub levies: Option<String>,
    pub company_color: Option<String>,
    #[validate(nested)]
    pub limits: CoverageLimits,
    #[validate(nested)]
    pub excess: ExcessTerms,
    #[validate(length(min = 1, max = 60, message = "PVT status must be 1-60 characters"))]
    pub pvt_status: String,
}

impl RateCardUpsert {
    /// Creates a command with default limits, excesses and PVT status
    pub fn new(company_name: impl Into<String>, rate_percent: Decimal, min_premium: i64) -> Self {
        Self {
            company_name: company_name.into(),
            rate_percent,
            min_premium,
            levies: None,
            company_color: None,
            limits: CoverageLimits::default(),
            excess: ExcessTerms::default(),
            pvt_status: DEFAULT_PVT_STATUS.to_string(),
        }
    }

    /// Trims the key fields and checks every constraint
    ///
    /// # Errors
    ///
    /// Returns `RatingError::Validation` describing every failed field.
    pub fn validated(mut self) -> Result<Self, RatingError> {
        self.company_name = self.company_name.trim().to_string();
        self.pvt_status = self.pvt_status.trim().to_string();
        self.company_color = self
            .company_color
            .map(|color| color.trim().to_string())
            .filter(|color| !color.is_empty());

        self.validate()
            .map_err(|errors| RatingError::validation(errors.to_string()))?;

        if let Some(color) = &self.company_color {
            if !is_hex_color(color) {
                return Err(RatingError::validation(format!(
                    "company_color must look like #RRGGBB, got '{}'",
                    color
                )));
            }
        }

        Ok(self)
    }
}

fn non_negative_rate(rate: &Decimal) -> Result<(), ValidationError> {
    if rate.is_sign_negative() && !rate.is_zero() {
        let mut error = ValidationError::new("negative_rate");
        error.message = Some("rate percent cannot be negative".into());
        return Err(error);
    }
    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
