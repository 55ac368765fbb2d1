//! Property-Based Test Generators
//!
//! Proptest strategies that respect the rate card and quote request
//! constraints.

use chrono::Utc;
use domain_quotation::QuoteRequest;
use domain_rating::{RateCard, RateCardUpsert};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Vehicle values from 1 KES to 50,000,000 KES
pub fn vehicle_value_strategy() -> impl Strategy<Value = i64> {
    1i64..50_000_000i64
}

/// Rates from 0.000% to 15.000% in steps of 0.001
pub fn rate_percent_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=15_000i64).prop_map(|n| Decimal::new(n, 3))
}

/// Minimum premiums up to 200,000 KES
pub fn min_premium_strategy() -> impl Strategy<Value = i64> {
    0i64..=200_000i64
}

/// Upsert command with a generated name and pricing terms
pub fn rate_card_upsert_strategy() -> impl Strategy<Value = RateCardUpsert> {
    ("[A-Z][a-z]{2,12}", rate_percent_strategy(), min_premium_strategy())
        .prop_map(|(name, rate, min)| RateCardUpsert::new(name, rate, min))
}

/// 1..=`max` stored cards with distinct names, in generation order
pub fn rate_cards_strategy(max: usize) -> impl Strategy<Value = Vec<RateCard>> {
    prop::collection::vec((rate_percent_strategy(), min_premium_strategy()), 1..=max).prop_map(
        |terms| {
            let now = Utc::now();
            terms
                .into_iter()
                .enumerate()
                .map(|(i, (rate, min))| {
                    RateCard::from_upsert(
                        RateCardUpsert::new(format!("Insurer {}", i + 1), rate, min),
                        now,
                    )
                })
                .collect()
        },
    )
}

/// Valid quote requests with printable client names
pub fn quote_request_strategy() -> impl Strategy<Value = QuoteRequest> {
    (
        "[A-Za-z][A-Za-z &.-]{0,40}",
        vehicle_value_strategy(),
        "K[A-Z]{2} [0-9]{3}[A-Z]",
        1990i32..=2026i32,
    )
        .prop_map(|(client, value, reg, year)| QuoteRequest {
            client_name: client,
            vehicle_value: value,
            registration_number: reg,
            make_model: "Toyota Fielder".to_string(),
            year_of_manufacture: year,
            underwriter_name: "Peter Otieno".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_generated_upserts_validate(upsert in rate_card_upsert_strategy()) {
            prop_assert!(upsert.validated().is_ok());
        }

        #[test]
        fn test_generated_cards_have_unique_names(cards in rate_cards_strategy(10)) {
            let mut names: Vec<&str> = cards.iter().map(|c| c.company_name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            prop_assert_eq!(names.len(), cards.len());
        }
    }
}
