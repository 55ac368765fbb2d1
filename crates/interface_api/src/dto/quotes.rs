//! Quotation DTOs

use serde::Deserialize;

use domain_quotation::QuoteRequest;

/// Body of `POST /generate-quote`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuoteRequest {
    pub client_name: String,
    /// Vehicle value in whole KES
    pub car_value: i64,
    pub reg_number: String,
    pub make_model: String,
    /// Year of manufacture
    pub yom: i32,
    pub underwriter_name: String,
}

impl From<GenerateQuoteRequest> for QuoteRequest {
    fn from(body: GenerateQuoteRequest) -> Self {
        QuoteRequest {
            client_name: body.client_name,
            vehicle_value: body.car_value,
            registration_number: body.reg_number,
            make_model: body.make_model,
            year_of_manufacture: body.yom,
            underwriter_name: body.underwriter_name,
        }
    }
}
