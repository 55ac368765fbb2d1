//! Premium calculation
//!
//! Every rate card is priced the same way: the card's rate is applied to
//! the vehicle value, the card's minimum premium acts as a floor, and a flat
//! per-policy levy is added on top.
//!
//! The charged premium is rounded to whole currency units (half away from
//! zero) before the levy is added, so the printed total always equals the
//! printed premium plus the printed levy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Currency, Money, Rate};

use crate::error::RatingError;
use crate::rate_card::RateCard;

/// Flat levy and stamp duty added to every policy, in KES
pub const STANDARD_LEVY: i64 = 400;

/// Premium figures for one rate card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    /// Vehicle value × rate, held by `Money` at 4 decimal places
    pub basic: Money,
    /// max(basic, floor), rounded to whole units
    pub charged: Money,
    /// Flat levy
    pub levy: Money,
    /// charged + levy
    pub total: Money,
    /// True when the minimum premium replaced the computed premium
    pub floor_applied: bool,
}

/// Applies rate cards to a vehicle value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PremiumCalculator {
    levy: Money,
}

impl Default for PremiumCalculator {
    fn default() -> Self {
        Self::standard()
    }
}

impl PremiumCalculator {
    /// Creates a calculator charging the given levy per policy
    pub fn new(levy: Money) -> Self {
        Self { levy: levy.round_whole() }
    }

    /// Creates a calculator with the standard KES 400 levy
    pub fn standard() -> Self {
        Self::new(Money::from_major(STANDARD_LEVY, Currency::KES))
    }

    /// Returns the levy added to every policy
    pub fn levy(&self) -> Money {
        self.levy
    }

    /// Prices one rate card
    ///
    /// # Arguments
    ///
    /// * `vehicle_value` - Insured value of the vehicle
    /// * `card` - The insurer's rate card
    ///
    /// # Errors
    ///
    /// Negative vehicle values, rates or minimum premiums are rejected, as is
    /// a vehicle value in a different currency from the levy.
    pub fn calculate(
        &self,
        vehicle_value: &Money,
        card: &RateCard,
    ) -> Result<PremiumBreakdown, RatingError> {
        if card.rate_percent.is_sign_negative() && !card.rate_percent.is_zero() {
            return Err(RatingError::NegativeRate {
                company: card.company_name.clone(),
                rate: card.rate_percent.to_string(),
            });
        }
        if card.min_premium < 0 {
            return Err(RatingError::NegativeMinimumPremium {
                company: card.company_name.clone(),
                min_premium: card.min_premium,
            });
        }

        let breakdown = self.calculate_terms(vehicle_value, card.rate_percent, card.min_premium)?;

        debug!(
            company = %card.company_name,
            rate = %card.rate(),
            charged = %breakdown.charged,
            floor_applied = breakdown.floor_applied,
            "Priced rate card"
        );

        Ok(breakdown)
    }

    /// Prices raw terms without a stored card
    pub fn calculate_terms(
        &self,
        vehicle_value: &Money,
        rate_percent: Decimal,
        min_premium: i64,
    ) -> Result<PremiumBreakdown, RatingError> {
        if vehicle_value.is_negative() {
            return Err(RatingError::NegativeVehicleValue(vehicle_value.to_string()));
        }

        let basic = Rate::from_percentage(rate_percent).apply(vehicle_value)?;
        let floor = Money::from_major(min_premium, vehicle_value.currency());
        let floor_applied = basic.amount() < floor.amount();
        let charged = basic.max(&floor)?.round_whole();
        let total = charged.checked_add(&self.levy)?;

        Ok(PremiumBreakdown {
            basic,
            charged,
            levy: self.levy,
            total,
            floor_applied,
        })
    }

    /// Prices every card, preserving the order of `cards`
    pub fn quote_all(
        &self,
        vehicle_value: &Money,
        cards: &[RateCard],
    ) -> Result<Vec<PremiumBreakdown>, RatingError> {
        cards
            .iter()
            .map(|card| self.calculate(vehicle_value, card))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn kes(units: i64) -> Money {
        Money::from_major(units, Currency::KES)
    }

    #[test]
    fn test_proportional_premium() {
        let calculator = PremiumCalculator::standard();
        let breakdown = calculator
            .calculate_terms(&kes(1_000_000), dec!(3.5), 20_000)
            .unwrap();

        assert_eq!(breakdown.basic.amount(), dec!(35000));
        assert_eq!(breakdown.charged.amount(), dec!(35000));
        assert_eq!(breakdown.total.amount(), dec!(35400));
        assert!(!breakdown.floor_applied);
    }

    #[test]
    fn test_floor_premium() {
        let calculator = PremiumCalculator::standard();
        let breakdown = calculator
            .calculate_terms(&kes(500_000), dec!(2.0), 15_000)
            .unwrap();

        assert_eq!(breakdown.basic.amount(), dec!(10000));
        assert_eq!(breakdown.charged.amount(), dec!(15000));
        assert_eq!(breakdown.total.amount(), dec!(15400));
        assert!(breakdown.floor_applied);
    }

    #[test]
    fn test_custom_levy() {
        let calculator = PremiumCalculator::new(kes(650));
        let breakdown = calculator
            .calculate_terms(&kes(1_000_000), dec!(3.5), 0)
            .unwrap();
        assert_eq!(breakdown.total.amount(), dec!(35650));
    }

    #[test]
    fn test_negative_value_rejected() {
        let calculator = PremiumCalculator::standard();
        let result = calculator.calculate_terms(&kes(-1), dec!(3.5), 0);
        assert!(matches!(result, Err(RatingError::NegativeVehicleValue(_))));
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let calculator = PremiumCalculator::standard();
        let value = Money::from_major(1_000_000, Currency::UGX);
        let result = calculator.calculate_terms(&value, dec!(3.5), 0);
        assert!(matches!(result, Err(RatingError::Money(_))));
    }
}
