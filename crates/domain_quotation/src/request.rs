//! Quote request

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Currency, Money};

use crate::error::QuotationError;

/// A client's vehicle details for one comparison quotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(length(min = 1, max = 200, message = "client name is required"))]
    pub client_name: String,
    /// Insured value in whole KES
    #[validate(range(min = 1, message = "vehicle value must be positive"))]
    pub vehicle_value: i64,
    #[validate(length(min = 1, max = 40, message = "registration number is required"))]
    pub registration_number: String,
    #[validate(length(min = 1, max = 120, message = "make and model is required"))]
    pub make_model: String,
    #[validate(range(min = 1900, max = 2100, message = "year of manufacture out of range"))]
    pub year_of_manufacture: i32,
    /// Display name printed under "Quotation Prepared by:"
    #[validate(length(min = 1, max = 120, message = "underwriter name is required"))]
    pub underwriter_name: String,
}

impl QuoteRequest {
    /// Trims every text field and checks every constraint
    pub fn validated(mut self) -> Result<Self, QuotationError> {
        self.client_name = self.client_name.trim().to_string();
        self.registration_number = self.registration_number.trim().to_string();
        self.make_model = self.make_model.trim().to_string();
        self.underwriter_name = self.underwriter_name.trim().to_string();

        self.validate()
            .map_err(|errors| QuotationError::validation(errors.to_string()))?;
        Ok(self)
    }

    pub fn vehicle_value_money(&self) -> Money {
        Money::from_major(self.vehicle_value, Currency::KES)
    }

    /// Download name for the rendered quotation, `Quote_{client}.pdf`
    ///
    /// Characters that are unsafe in a file name or a quoted header value
    /// are replaced with `_`.
    pub fn attachment_file_name(&self) -> String {
        let client: String = self
            .client_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.' | '&') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("Quote_{}.pdf", client)
    }
}
