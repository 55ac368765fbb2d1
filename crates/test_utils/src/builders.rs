//! Test Data Builders
//!
//! Builders let a test state only the fields it cares about and take
//! defaults for everything else.

use chrono::Utc;
use domain_quotation::QuoteRequest;
use domain_rating::{RateCard, RateCardUpsert};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::QuoteFixtures;

/// Builder for rate card upsert commands
pub struct RateCardUpsertBuilder {
    upsert: RateCardUpsert,
}

impl Default for RateCardUpsertBuilder {
    fn default() -> Self {
        Self::new("Test Insurer")
    }
}

impl RateCardUpsertBuilder {
    /// 3.5% with a 20,000 floor and default limits
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            upsert: RateCardUpsert::new(company_name, dec!(3.5), 20_000),
        }
    }

    pub fn rate(mut self, rate_percent: Decimal) -> Self {
        self.upsert.rate_percent = rate_percent;
        self
    }

    pub fn min_premium(mut self, min_premium: i64) -> Self {
        self.upsert.min_premium = min_premium;
        self
    }

    pub fn levies(mut self, levies: impl Into<String>) -> Self {
        self.upsert.levies = Some(levies.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.upsert.company_color = Some(color.into());
        self
    }

    pub fn windscreen(mut self, limit: impl Into<String>) -> Self {
        self.upsert.limits.windscreen = limit.into();
        self
    }

    pub fn third_party_property(mut self, limit: impl Into<String>) -> Self {
        self.upsert.limits.third_party_property = limit.into();
        self
    }

    pub fn own_damage_excess(mut self, text: impl Into<String>) -> Self {
        self.upsert.excess.own_damage = text.into();
        self
    }

    pub fn young_driver_excess(mut self, text: impl Into<String>) -> Self {
        self.upsert.excess.young_driver = text.into();
        self
    }

    pub fn pvt_status(mut self, status: impl Into<String>) -> Self {
        self.upsert.pvt_status = status.into();
        self
    }

    /// Returns the command
    pub fn build(self) -> RateCardUpsert {
        self.upsert
    }

    /// Returns a stored-form card stamped with the current time
    pub fn build_card(self) -> RateCard {
        RateCard::from_upsert(self.upsert, Utc::now())
    }
}

/// Builder for quote requests
pub struct QuoteRequestBuilder {
    request: QuoteRequest,
}

impl Default for QuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: QuoteFixtures::request(),
        }
    }

    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.request.client_name = name.into();
        self
    }

    pub fn vehicle_value(mut self, value: i64) -> Self {
        self.request.vehicle_value = value;
        self
    }

    pub fn registration_number(mut self, reg: impl Into<String>) -> Self {
        self.request.registration_number = reg.into();
        self
    }

    pub fn make_model(mut self, make_model: impl Into<String>) -> Self {
        self.request.make_model = make_model.into();
        self
    }

    pub fn year_of_manufacture(mut self, year: i32) -> Self {
        self.request.year_of_manufacture = year;
        self
    }

    pub fn underwriter_name(mut self, name: impl Into<String>) -> Self {
        self.request.underwriter_name = name.into();
        self
    }

    pub fn build(self) -> QuoteRequest {
        self.request
    }
}

/// Builds `count` stored cards named `Insurer 1..=count`
pub fn numbered_cards(count: usize) -> Vec<RateCard> {
    (1..=count)
        .map(|n| {
            RateCardUpsertBuilder::new(format!("Insurer {}", n))
                .rate(Decimal::new(200 + (n as i64 % 7) * 25, 2))
                .min_premium(15_000 + (n as i64 % 5) * 2_500)
                .build_card()
        })
        .collect()
}
