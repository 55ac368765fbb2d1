//! Premium Calculation Tests
//!
//! Covers the floor and proportional invariants, the levy invariant, and
//! order preservation when pricing several cards at once.

use core_kernel::{Currency, Money};
use domain_rating::{PremiumCalculator, RateCard, RatingError};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::{
    assert_kes, assert_premium_rule, rate_cards_strategy, vehicle_value_strategy, MoneyFixtures,
    RateCardFixtures, RateCardUpsertBuilder,
};

fn card(company: &str, rate: Decimal, min_premium: i64) -> RateCard {
    RateCardUpsertBuilder::new(company)
        .rate(rate)
        .min_premium(min_premium)
        .build_card()
}

fn kes(units: i64) -> Money {
    MoneyFixtures::kes(units)
}

// ============================================================================
// WORKED EXAMPLES
// ============================================================================

mod examples {
    use super::*;

    #[test]
    fn test_rate_above_floor() {
        let breakdown = PremiumCalculator::standard()
            .calculate(&MoneyFixtures::vehicle_value(), &card("Jubilee", dec!(3.5), 20_000))
            .unwrap();

        assert_kes(&breakdown.charged, 35_000);
        assert_eq!(breakdown.levy, MoneyFixtures::levy());
        assert_kes(&breakdown.total, 35_400);
    }

    #[test]
    fn test_market_fixtures_follow_premium_rule() {
        let cards = RateCardFixtures::stored_market();
        let breakdowns = PremiumCalculator::standard()
            .quote_all(&MoneyFixtures::vehicle_value(), &cards)
            .unwrap();

        for (card, breakdown) in cards.iter().zip(&breakdowns) {
            assert_premium_rule(card, breakdown);
        }
        assert_kes(&breakdowns[1].charged, 20_000);
        assert_kes(&breakdowns[2].charged, 40_000);
    }

    #[test]
    fn test_floor_above_rate() {
        let breakdown = PremiumCalculator::standard()
            .calculate(&kes(500_000), &card("Britam", dec!(2.0), 15_000))
            .unwrap();

        assert_eq!(breakdown.charged, kes(15_000));
        assert_eq!(breakdown.total, kes(15_400));
        assert!(breakdown.floor_applied);
    }

    #[test]
    fn test_fractional_premium_rounds_half_up() {
        // 1,234,567 × 2.5% = 30,864.175
        let breakdown = PremiumCalculator::standard()
            .calculate(&kes(1_234_567), &card("APA", dec!(2.5), 0))
            .unwrap();

        assert_eq!(breakdown.basic.amount(), dec!(30864.175));
        assert_eq!(breakdown.charged, kes(30_864));
        assert_eq!(breakdown.total, kes(31_264));
    }

    #[test]
    fn test_basic_premium_held_at_four_places() {
        // 1 × 0.12345% = 0.0012345
        let breakdown = PremiumCalculator::standard()
            .calculate(&kes(1), &card("Tiny", dec!(0.12345), 0))
            .unwrap();

        assert_eq!(breakdown.basic.amount(), dec!(0.0012));
        assert!(!breakdown.floor_applied);
        assert_eq!(breakdown.charged, Money::zero(Currency::KES));
    }

    #[test]
    fn test_zero_vehicle_value_charges_floor() {
        let breakdown = PremiumCalculator::standard()
            .calculate(&kes(0), &card("CIC", dec!(3), 18_000))
            .unwrap();
        assert_eq!(breakdown.charged, kes(18_000));
    }

    #[test]
    fn test_negative_minimum_premium_rejected() {
        let bad = card("Madison", dec!(3), -1);
        let result = PremiumCalculator::standard().calculate(&kes(100), &bad);
        assert!(matches!(result, Err(RatingError::NegativeMinimumPremium { .. })));
    }

    #[test]
    fn test_quote_all_preserves_order() {
        let cards = vec![
            card("Zeta", dec!(5), 0),
            card("Alpha", dec!(1), 0),
            card("Mu", dec!(3), 0),
        ];
        let breakdowns = PremiumCalculator::standard()
            .quote_all(&kes(100_000), &cards)
            .unwrap();

        let charged: Vec<Money> = breakdowns.iter().map(|b| b.charged).collect();
        assert_eq!(charged, vec![kes(5_000), kes(1_000), kes(3_000)]);
    }
}

// ============================================================================
// INVARIANTS
// ============================================================================

proptest! {
    #[test]
    fn floor_wins_when_basic_below_minimum(
        value in 1i64..5_000_000i64,
        rate_bp in 1u32..1_000u32,
        min_premium in 0i64..200_000i64
    ) {
        let rate = Decimal::new(rate_bp as i64, 2);
        let basic = Decimal::from(value) * rate / dec!(100);
        prop_assume!(basic < Decimal::from(min_premium));

        let breakdown = PremiumCalculator::standard()
            .calculate(&kes(value), &card("Floor", rate, min_premium))
            .unwrap();
        prop_assert_eq!(breakdown.charged, kes(min_premium));
        prop_assert!(breakdown.floor_applied);
    }

    #[test]
    fn rate_wins_when_basic_at_or_above_minimum(
        value in 1i64..50_000_000i64,
        rate_bp in 1u32..1_000u32,
        min_premium in 0i64..50_000i64
    ) {
        let rate = Decimal::new(rate_bp as i64, 2);
        let basic = Decimal::from(value) * rate / dec!(100);
        prop_assume!(basic >= Decimal::from(min_premium));

        let breakdown = PremiumCalculator::standard()
            .calculate(&kes(value), &card("Rate", rate, min_premium))
            .unwrap();
        prop_assert_eq!(breakdown.charged, Money::new(basic, Currency::KES).round_whole());
        prop_assert!(!breakdown.floor_applied);
    }

    #[test]
    fn total_is_charged_plus_levy(
        value in 0i64..100_000_000i64,
        rate_bp in 0u32..2_000u32,
        min_premium in 0i64..500_000i64,
        levy in 0i64..5_000i64
    ) {
        let rate = Decimal::new(rate_bp as i64, 2);
        let calculator = PremiumCalculator::new(kes(levy));
        let breakdown = calculator
            .calculate(&kes(value), &card("Levy", rate, min_premium))
            .unwrap();
        prop_assert_eq!(breakdown.total, breakdown.charged.checked_add(&kes(levy)).unwrap());
    }

    #[test]
    fn premium_rule_holds_for_every_card(
        value in vehicle_value_strategy(),
        cards in rate_cards_strategy(10)
    ) {
        let breakdowns = PremiumCalculator::standard()
            .quote_all(&kes(value), &cards)
            .unwrap();

        prop_assert_eq!(breakdowns.len(), cards.len());
        for (card, breakdown) in cards.iter().zip(&breakdowns) {
            assert_premium_rule(card, breakdown);
        }
    }
}
