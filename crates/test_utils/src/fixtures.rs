//! Pre-built Test Fixtures
//!
//! Ready-to-use data for the brokerage's everyday scenarios. The numbers
//! match the worked examples used across the test suite.

use chrono::{NaiveDate, Utc};
use core_kernel::{Currency, Money};
use domain_quotation::QuoteRequest;
use domain_rating::{RateCard, RateCardUpsert};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Whole-shilling amount
    pub fn kes(units: i64) -> Money {
        Money::from_major(units, Currency::KES)
    }

    /// Vehicle value used in most examples
    pub fn vehicle_value() -> Money {
        Self::kes(1_000_000)
    }

    /// Standard levy
    pub fn levy() -> Money {
        Self::kes(400)
    }
}

/// Fixture for insurer rate cards
pub struct RateCardFixtures;

impl RateCardFixtures {
    /// 3.5% with a 20,000 floor; 1,000,000 prices at 35,000
    pub fn jubilee() -> RateCardUpsert {
        let mut upsert = RateCardUpsert::new("Jubilee", dec!(3.5), 20_000);
        upsert.limits.windscreen = "50,000".to_string();
        upsert.limits.entertainment = "30,000".to_string();
        upsert.limits.towing = "30,000".to_string();
        upsert.limits.repair = "50,000".to_string();
        upsert.limits.medical = "100,000".to_string();
        upsert.limits.third_party_property = "20,000,000".to_string();
        upsert.excess.own_damage = "2.5% of sum insured, min 15,000".to_string();
        upsert.excess.theft_without_tracker = "20% of sum insured".to_string();
        upsert.excess.young_driver = "Additional 10,000".to_string();
        upsert.company_color = Some("#0A2E73".to_string());
        upsert
    }

    /// 2.0% with a 15,000 floor
    pub fn apa() -> RateCardUpsert {
        let mut upsert = RateCardUpsert::new("APA", dec!(2.0), 15_000);
        upsert.limits.windscreen = "40,000".to_string();
        upsert.excess.own_damage = "2.5% of sum insured".to_string();
        upsert
    }

    /// 4.0% with a 37,500 floor
    pub fn britam() -> RateCardUpsert {
        let mut upsert = RateCardUpsert::new("Britam", dec!(4.0), 37_500);
        upsert.levies = Some("0.45% training levy".to_string());
        upsert.pvt_status = "Excluded".to_string();
        upsert
    }

    /// Three insurers in a fixed order
    pub fn market() -> Vec<RateCardUpsert> {
        vec![Self::jubilee(), Self::apa(), Self::britam()]
    }

    /// Stored-form cards for tests that never touch a database
    pub fn stored_market() -> Vec<RateCard> {
        let now = Utc::now();
        Self::market()
            .into_iter()
            .map(|upsert| RateCard::from_upsert(upsert, now))
            .collect()
    }
}

/// Fixture for quote requests
pub struct QuoteFixtures;

impl QuoteFixtures {
    pub fn request() -> QuoteRequest {
        QuoteRequest {
            client_name: "Jane Wanjiru".to_string(),
            vehicle_value: 1_000_000,
            registration_number: "KDA 123A".to_string(),
            make_model: "Toyota Axio".to_string(),
            year_of_manufacture: 2018,
            underwriter_name: "Peter Otieno".to_string(),
        }
    }

    /// Fixed issue date; prints as 05.11.2024
    pub fn issue_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 5).expect("valid date")
    }
}
