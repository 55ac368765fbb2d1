//! Custom Test Assertions
//!
//! Assertion helpers with messages that name the insurer and the amounts
//! involved.

use core_kernel::{Currency, Money};
use domain_rating::{PremiumBreakdown, RateCard};

/// Asserts a money value equals a whole-shilling amount
pub fn assert_kes(actual: &Money, expected_units: i64) {
    let expected = Money::from_major(expected_units, Currency::KES);
    assert_eq!(
        actual, &expected,
        "Expected {}, got {}",
        expected.to_document_string(),
        actual.to_document_string()
    );
}

/// Asserts the premium rule holds for one priced card
///
/// * charged is whole and never below the card's minimum premium
/// * the floor flag is set exactly when the basic premium is below the minimum
/// * total is charged plus levy
pub fn assert_premium_rule(card: &RateCard, breakdown: &PremiumBreakdown) {
    let floor = Money::from_major(card.min_premium, breakdown.charged.currency());

    assert!(
        breakdown.charged.amount() >= floor.amount(),
        "{}: charged {} below minimum {}",
        card.company_name,
        breakdown.charged,
        floor
    );
    assert_eq!(
        breakdown.charged.amount().fract(),
        rust_decimal::Decimal::ZERO,
        "{}: charged {} is not whole",
        card.company_name,
        breakdown.charged
    );
    assert_eq!(
        breakdown.floor_applied,
        breakdown.basic.amount() < floor.amount(),
        "{}: floor flag disagrees with basic {} vs minimum {}",
        card.company_name,
        breakdown.basic,
        floor
    );
    if breakdown.floor_applied {
        assert_eq!(breakdown.charged, floor, "{}: floor not charged", card.company_name);
    } else {
        assert_eq!(
            breakdown.charged,
            breakdown.basic.round_whole(),
            "{}: charged is not the rounded basic premium",
            card.company_name
        );
    }

    let total = breakdown
        .charged
        .checked_add(&breakdown.levy)
        .expect("levy currency matches premium");
    assert_eq!(breakdown.total, total, "{}: total != charged + levy", card.company_name);
}

/// Asserts bytes look like a PDF file
pub fn assert_pdf(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"%PDF"),
        "Expected PDF header, got {:?}",
        &bytes[..bytes.len().min(8)]
    );
    assert!(bytes.len() > 500, "PDF suspiciously small: {} bytes", bytes.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::RateCardUpsertBuilder;
    use domain_rating::PremiumCalculator;
    use rust_decimal_macros::dec;

    #[test]
    fn test_assert_kes() {
        assert_kes(&Money::from_major(35_400, Currency::KES), 35_400);
    }

    #[test]
    fn test_premium_rule_on_worked_examples() {
        let calculator = PremiumCalculator::standard();
        let value = Money::from_major(1_000_000, Currency::KES);

        for card in [
            RateCardUpsertBuilder::new("A").rate(dec!(3.5)).min_premium(20_000).build_card(),
            RateCardUpsertBuilder::new("B").rate(dec!(1.0)).min_premium(37_500).build_card(),
        ] {
            let breakdown = calculator.calculate(&value, &card).unwrap();
            assert_premium_rule(&card, &breakdown);
        }
    }

    #[test]
    #[should_panic(expected = "Expected PDF header")]
    fn test_assert_pdf_rejects_other_bytes() {
        assert_pdf(b"<html></html>");
    }
}
