//! Quote Composer Tests
//!
//! Covers the section pipeline, column ordering across every table, the
//! empty-input precondition and the compose-and-render path.

use chrono::{NaiveDate, Utc};
use domain_quotation::{
    Block, Branding, DocumentRenderer, Logo, QuotationError, QuoteComposer, QuoteDocument,
    QuoteRequest, SectionKind,
};
use domain_rating::{PremiumCalculator, RateCard, RateCardUpsert};
use proptest::prelude::*;
use rust_decimal_macros::dec;

fn request() -> QuoteRequest {
    QuoteRequest {
        client_name: "Jane Wanjiru".to_string(),
        vehicle_value: 1_000_000,
        registration_number: "KDA 123A".to_string(),
        make_model: "Toyota Axio".to_string(),
        year_of_manufacture: 2018,
        underwriter_name: "Peter Otieno".to_string(),
    }
}

fn cards(names: &[&str]) -> Vec<RateCard> {
    names
        .iter()
        .map(|name| RateCard::from_upsert(RateCardUpsert::new(*name, dec!(3.5), 20_000), Utc::now()))
        .collect()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 5).unwrap()
}

/// Renderer that records how many blocks it saw
struct CountingRenderer;

impl DocumentRenderer for CountingRenderer {
    fn content_type(&self) -> &'static str {
        "text/plain"
    }

    fn render(&self, document: &QuoteDocument) -> Result<Vec<u8>, QuotationError> {
        Ok(document.blocks().count().to_string().into_bytes())
    }
}

struct FailingRenderer;

impl DocumentRenderer for FailingRenderer {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn render(&self, _document: &QuoteDocument) -> Result<Vec<u8>, QuotationError> {
        Err(QuotationError::render("page tree exhausted"))
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

mod pipeline {
    use super::*;

    #[test]
    fn test_sections_in_fixed_order() {
        let document = QuoteComposer::default()
            .compose(&request(), &cards(&["Jubilee"]), today())
            .unwrap();

        assert_eq!(
            document.section_kinds(),
            vec![
                SectionKind::Header,
                SectionKind::Title,
                SectionKind::Scope,
                SectionKind::VehicleDetails,
                SectionKind::Comparison,
                SectionKind::Excess,
                SectionKind::ValueAdditions,
                SectionKind::Disclaimer,
                SectionKind::PreparedBy,
            ]
        );
    }

    #[test]
    fn test_a4_with_margins() {
        let document = QuoteComposer::default()
            .compose(&request(), &cards(&["Jubilee"]), today())
            .unwrap();

        assert!((document.page.width - 595.28).abs() < 0.01);
        assert_eq!(document.page.margin_left, 25.0);
        assert_eq!(document.page.margin_top, 25.0);
    }

    #[test]
    fn test_no_rate_cards() {
        let result = QuoteComposer::default().compose(&request(), &[], today());
        assert!(matches!(result, Err(QuotationError::NoRateCards)));
    }

    #[test]
    fn test_every_table_well_formed() {
        let document = QuoteComposer::default()
            .compose(&request(), &cards(&["Jubilee", "Britam", "CIC"]), today())
            .unwrap();

        for block in document.blocks() {
            if let Block::Table(table) = block {
                assert!(table.is_well_formed(), "malformed table: {:?}", table.row_labels());
            }
        }
    }

    #[test]
    fn test_issue_date_printed() {
        let document = QuoteComposer::default()
            .compose(&request(), &cards(&["Jubilee"]), today())
            .unwrap();

        let title = document.section(SectionKind::Title).unwrap();
        let meta = title.tables().next().unwrap();
        assert_eq!(meta.row_texts(0), vec!["DATE", "05.11.2024"]);
    }

    #[test]
    fn test_logo_slot_follows_branding() {
        let without = QuoteComposer::default()
            .compose(&request(), &cards(&["Jubilee"]), today())
            .unwrap();
        let with = QuoteComposer::new(
            PremiumCalculator::standard(),
            Branding::default().with_logo(Some(Logo::from_png(vec![0x89, b'P', b'N', b'G']))),
        )
        .compose(&request(), &cards(&["Jubilee"]), today())
        .unwrap();

        let slot = |document: &QuoteDocument| {
            let header = document.section(SectionKind::Header).unwrap();
            header.tables().next().unwrap().rows[0].cells[1].content.clone()
        };

        assert!(matches!(slot(&without), domain_quotation::CellContent::Empty));
        assert!(matches!(slot(&with), domain_quotation::CellContent::Image(_)));
    }
}

// ============================================================================
// COMPARISON CONTENT
// ============================================================================

mod comparison {
    use super::*;

    #[test]
    fn test_worked_example_figures() {
        let document = QuoteComposer::default()
            .compose(&request(), &cards(&["Jubilee"]), today())
            .unwrap();

        let table = document
            .section(SectionKind::Comparison)
            .unwrap()
            .tables()
            .next()
            .unwrap();

        assert_eq!(table.row_texts(1), vec!["Basic Premium", "Kes. 35,000/-"]);
        assert_eq!(table.row_texts(2), vec!["Levies & Stamp", "Kes. 400"]);
        assert_eq!(table.row_texts(5), vec!["Total Payable", "Kes. 35,400/-"]);
    }

    #[test]
    fn test_floor_applied_in_document() {
        let mut request = request();
        request.vehicle_value = 500_000;
        let cards = vec![RateCard::from_upsert(
            RateCardUpsert::new("APA", dec!(2.0), 15_000),
            Utc::now(),
        )];

        let document = QuoteComposer::default()
            .compose(&request, &cards, today())
            .unwrap();
        let table = document
            .section(SectionKind::Comparison)
            .unwrap()
            .tables()
            .next()
            .unwrap();

        assert_eq!(table.row_texts(1)[1], "Kes. 15,000/-");
        assert_eq!(table.row_texts(5)[1], "Kes. 15,400/-");
    }

    #[test]
    fn test_row_labels() {
        let document = QuoteComposer::default()
            .compose(&request(), &cards(&["Jubilee"]), today())
            .unwrap();
        let table = document
            .section(SectionKind::Comparison)
            .unwrap()
            .tables()
            .next()
            .unwrap();

        assert_eq!(
            table.row_labels(),
            vec![
                "BENEFIT\nSUMMARY",
                "Basic Premium",
                "Levies & Stamp",
                "Excess Protector",
                "Political Violence",
                "Total Payable",
                "",
                "Windscreen",
                "Radio / Audio",
                "Towing Charges",
                "Authorized Repair",
                "Medical Expenses",
                "Third-Party Property",
                "Passenger Liability",
                "No Blame No Excess",
                "Valuation",
                "Territorial Limits",
            ]
        );
    }

    #[test]
    fn test_custom_levy_flows_into_table() {
        let composer = QuoteComposer::new(
            PremiumCalculator::new(core_kernel::Money::from_major(650, core_kernel::Currency::KES)),
            Branding::default(),
        );
        let document = composer
            .compose(&request(), &cards(&["Jubilee"]), today())
            .unwrap();
        let table = document
            .section(SectionKind::Comparison)
            .unwrap()
            .tables()
            .next()
            .unwrap();

        assert_eq!(table.row_texts(2)[1], "Kes. 650");
        assert_eq!(table.row_texts(5)[1], "Kes. 35,650/-");
    }
}

// ============================================================================
// RENDERING
// ============================================================================

mod rendering {
    use super::*;

    #[test]
    fn test_compose_and_render() {
        let rendered = QuoteComposer::default()
            .compose_and_render(&request(), &cards(&["Jubilee"]), today(), &CountingRenderer)
            .unwrap();

        assert_eq!(rendered.file_name, "Quote_Jane Wanjiru.pdf");
        assert!(!rendered.bytes.is_empty());
    }

    #[test]
    fn test_render_failure_propagates() {
        let result = QuoteComposer::default().compose_and_render(
            &request(),
            &cards(&["Jubilee"]),
            today(),
            &FailingRenderer,
        );
        assert!(matches!(result, Err(QuotationError::Render(_))));
    }

    #[test]
    fn test_no_cards_never_reaches_renderer() {
        let result = QuoteComposer::default().compose_and_render(
            &request(),
            &[],
            today(),
            &FailingRenderer,
        );
        assert!(matches!(result, Err(QuotationError::NoRateCards)));
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn column_order_matches_card_order(count in 1usize..8) {
        let names: Vec<String> = (0..count).map(|i| format!("Insurer{:02}", i)).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let document = QuoteComposer::default()
            .compose(&request(), &cards(&name_refs), today())
            .unwrap();

        let comparison = document.section(SectionKind::Comparison).unwrap().tables().next().unwrap();
        let headers: Vec<String> = comparison.row_texts(0).into_iter().skip(1).collect();
        let expected: Vec<String> = names.iter().map(|n| format!("{}\nINSURANCE", n)).collect();
        prop_assert_eq!(headers, expected);

        let excess = document.section(SectionKind::Excess).unwrap().tables().next().unwrap();
        let headers: Vec<String> = excess.row_texts(0).into_iter().skip(1).collect();
        prop_assert_eq!(headers, names.clone());

        prop_assert_eq!(comparison.column_count(), count + 1);
        prop_assert_eq!(&comparison.column_widths, &excess.column_widths);
    }
}
