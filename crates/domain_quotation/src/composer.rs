//! Quotation composition pipeline

use chrono::NaiveDate;
use tracing::{debug, info};

use domain_rating::{PremiumCalculator, RateCard};

use crate::branding::Branding;
use crate::error::QuotationError;
use crate::layout::{PageGeometry, QuoteDocument};
use crate::render::{DocumentRenderer, RenderedQuote};
use crate::request::QuoteRequest;
use crate::sections::{self, PricedCard};

/// Page margin on every side, in points
pub const PAGE_MARGIN: f32 = 25.0;

/// Builds comparison quotations from rate cards
#[derive(Debug, Clone)]
pub struct QuoteComposer {
    calculator: PremiumCalculator,
    branding: Branding,
}

impl Default for QuoteComposer {
    fn default() -> Self {
        Self::new(PremiumCalculator::standard(), Branding::default())
    }
}

impl QuoteComposer {
    pub fn new(calculator: PremiumCalculator, branding: Branding) -> Self {
        Self {
            calculator,
            branding,
        }
    }

    pub fn calculator(&self) -> &PremiumCalculator {
        &self.calculator
    }

    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    /// Composes the quotation for `request` against `cards`
    ///
    /// Columns appear in the order of `cards`. `issued_on` is printed as the
    /// quotation date.
    ///
    /// # Errors
    ///
    /// * `QuotationError::NoRateCards` - `cards` is empty
    /// * `QuotationError::Rating` - a card could not be priced
    pub fn compose(
        &self,
        request: &QuoteRequest,
        cards: &[RateCard],
        issued_on: NaiveDate,
    ) -> Result<QuoteDocument, QuotationError> {
        if cards.is_empty() {
            return Err(QuotationError::NoRateCards);
        }

        let value = request.vehicle_value_money();
        let premiums = self.calculator.quote_all(&value, cards)?;
        let priced: Vec<PricedCard<'_>> = cards
            .iter()
            .zip(premiums)
            .map(|(card, premium)| PricedCard { card, premium })
            .collect();

        let sections = vec![
            sections::header(&self.branding),
            sections::title(&request.client_name, issued_on),
            sections::scope(),
            sections::vehicle_details(request),
            sections::comparison(&priced),
            sections::excess(cards),
            sections::value_additions(&self.branding),
            sections::disclaimer(&self.branding),
            sections::prepared_by(&request.underwriter_name, &self.branding),
        ];

        debug!(
            client = %request.client_name,
            insurers = cards.len(),
            sections = sections.len(),
            "Composed quotation"
        );

        Ok(QuoteDocument {
            title: format!("Quotation - {}", request.client_name),
            page: PageGeometry::a4(PAGE_MARGIN),
            sections,
        })
    }

    /// Composes and renders in one step
    pub fn compose_and_render(
        &self,
        request: &QuoteRequest,
        cards: &[RateCard],
        issued_on: NaiveDate,
        renderer: &dyn DocumentRenderer,
    ) -> Result<RenderedQuote, QuotationError> {
        let document = self.compose(request, cards, issued_on)?;
        let bytes = renderer.render(&document)?;

        info!(
            client = %request.client_name,
            insurers = cards.len(),
            size = bytes.len(),
            "Rendered quotation"
        );

        Ok(RenderedQuote {
            file_name: request.attachment_file_name(),
            bytes,
        })
    }
}
