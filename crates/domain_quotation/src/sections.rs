//! Section builders
//!
//! One function per section of the quotation. Each takes only the data it
//! prints and returns a self-contained [`Fragment`]; none of them reads
//! another section's output.

use chrono::NaiveDate;

use domain_rating::{CoverageLimits, PremiumBreakdown, RateCard, NOT_APPLICABLE};

use crate::branding::{
    Branding, ACCENT, BODY, BODY_BOLD, CLASS_LABEL, GREY, INTRO, META, META_BOLD,
    PRIMARY, SCOPE_OF_COVER, SMALL_PRINT, TABLE, TABLE_BOLD, TABLE_HEADER, TABLE_TOTAL,
    TITLE, TOTAL_TINT, WHITESMOKE,
};
use crate::layout::{
    Align, Block, Cell, Color, Fragment, ImageBlock, Padding, Paragraph, Row, Rule,
    SectionKind, Table, TextStyle, INCH,
};
use crate::request::QuoteRequest;

/// Width of the full-width tables and the header rule
pub const TABLE_WIDTH: f32 = 7.5 * INCH;
/// Width of the label column in the comparison and excess tables
pub const LABEL_COLUMN_WIDTH: f32 = 1.5 * INCH;

pub const LOGO_WIDTH: f32 = 2.0 * INCH;
pub const LOGO_HEIGHT: f32 = 0.7 * INCH;

/// Date format printed next to DATE
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A rate card together with its computed premium
#[derive(Debug, Clone, Copy)]
pub struct PricedCard<'a> {
    pub card: &'a RateCard,
    pub premium: PremiumBreakdown,
}

/// Label column followed by one equal-width column per insurer
pub fn column_widths(insurers: usize) -> Vec<f32> {
    let insurers = insurers.max(1);
    let share = (TABLE_WIDTH - LABEL_COLUMN_WIDTH) / insurers as f32;
    std::iter::once(LABEL_COLUMN_WIDTH)
        .chain(std::iter::repeat(share).take(insurers))
        .collect()
}

fn heading(text: &str) -> Block {
    Block::Paragraph(Paragraph::new(text, BODY_BOLD))
}

fn labelled_row(label: &str, values: impl IntoIterator<Item = String>, style: TextStyle) -> Row {
    let mut cells = vec![Cell::text(label, style)];
    cells.extend(values.into_iter().map(|value| Cell::text(value, style)));
    Row::new(cells)
}

/// Broker identity on the left, logo on the right, then the brand rule
pub fn header(branding: &Branding) -> Fragment {
    let mut identity = vec![Paragraph::new(branding.broker_name.as_str(), BODY_BOLD)];
    identity.extend(
        branding
            .address_lines
            .iter()
            .map(|line| Paragraph::new(line.as_str(), BODY)),
    );
    identity.push(Paragraph::new(branding.telephone_line(), BODY));
    identity.push(Paragraph::new(branding.contact_line(), BODY));

    let logo = match &branding.logo {
        Some(logo) => Cell::image(ImageBlock {
            png: logo.png.clone(),
            width: LOGO_WIDTH,
            height: LOGO_HEIGHT,
            align: Align::Right,
        }),
        None => Cell::empty(),
    };

    let table = Table::new(vec![3.5 * INCH, 3.5 * INCH])
        .with_rows(vec![Row::new(vec![Cell::paragraphs(identity), logo])]);

    Fragment::new(
        SectionKind::Header,
        vec![
            Block::Table(table),
            Block::Spacer(5.0),
            Block::Rule(Rule {
                width: TABLE_WIDTH,
                thickness: 3.0,
                color: PRIMARY,
            }),
            Block::Spacer(10.0),
        ],
    )
}

/// "Quotation" title and the DATE / CLIENT / CLASS table
pub fn title(client_name: &str, issued_on: NaiveDate) -> Fragment {
    let meta = [
        ("DATE", issued_on.format(DATE_FORMAT).to_string()),
        ("CLIENT", client_name.to_string()),
        ("CLASS", CLASS_LABEL.to_string()),
    ]
    .into_iter()
    .map(|(label, value)| Row::new(vec![Cell::text(label, META_BOLD), Cell::text(value, META)]))
    .collect();

    let table = Table::new(vec![0.8 * INCH, 4.0 * INCH])
        .with_rows(meta)
        .with_padding(Padding::new(3.0, 6.0, 6.0, 6.0));

    Fragment::new(
        SectionKind::Title,
        vec![
            Block::Paragraph(Paragraph::new("Quotation", TITLE)),
            Block::Spacer(10.0),
            Block::Table(table),
            Block::Spacer(10.0),
        ],
    )
}

/// Intro sentence and the scope of cover
pub fn scope() -> Fragment {
    let table = Table::new(vec![1.0 * INCH, 6.0 * INCH])
        .with_rows(vec![Row::new(vec![
            Cell::text("SCOPE OF COVER", BODY_BOLD),
            Cell::text(SCOPE_OF_COVER, BODY),
        ])]);

    Fragment::new(
        SectionKind::Scope,
        vec![
            Block::Paragraph(Paragraph::new(INTRO, BODY)),
            Block::Spacer(10.0),
            Block::Table(table),
            Block::Spacer(15.0),
        ],
    )
}

/// The insured and vehicle details grid
pub fn vehicle_details(request: &QuoteRequest) -> Fragment {
    let label = |text: &str| Cell::text(text, BODY_BOLD).with_background(WHITESMOKE);
    let value = |text: String| Cell::text(text, BODY);

    let vehicle_value = format!("{}/-", request.vehicle_value_money().grouped(0));

    let rows = vec![
        Row::new(vec![
            label("Insured Full Names"),
            value(request.client_name.clone()).spanning(3),
        ]),
        Row::new(vec![
            label("Policy Start Date"),
            value("TBA".to_string()),
            label("Policy End Date"),
            value("TBA".to_string()),
        ]),
        Row::new(vec![
            label("Vehicle Registration"),
            value(request.registration_number.clone()),
            label("Make & Model"),
            value(request.make_model.clone()),
        ]),
        Row::new(vec![
            label("Vehicle Value (Kes)"),
            value(vehicle_value),
            label("Y.O.M"),
            value(request.year_of_manufacture.to_string()),
        ]),
    ];

    let table = Table::new(vec![1.2 * INCH, 2.3 * INCH, 1.2 * INCH, 2.3 * INCH])
        .with_rows(rows)
        .with_grid(1.0, Color::BLACK)
        .with_padding(Padding::uniform(4.0));

    Fragment::new(
        SectionKind::VehicleDetails,
        vec![
            heading("INSURED AND VEHICLE DETAILS"),
            Block::Spacer(5.0),
            Block::Table(table),
            Block::Spacer(15.0),
        ],
    )
}

/// The side-by-side premium and benefits table
///
/// Columns follow the order of `priced`.
pub fn comparison(priced: &[PricedCard<'_>]) -> Fragment {
    let fixed = |text: &str| priced.iter().map(|_| text.to_string()).collect::<Vec<_>>();
    let limit = |label: &str, pick: &dyn Fn(&CoverageLimits) -> &str| {
        labelled_row(
            label,
            priced.iter().map(|p| format!("Kes. {}", pick(&p.card.limits))),
            TABLE,
        )
    };

    let header = labelled_row(
        "BENEFIT\nSUMMARY",
        priced
            .iter()
            .map(|p| format!("{}\nINSURANCE", p.card.company_name)),
        TABLE_HEADER,
    )
    .with_background(PRIMARY);

    let basic = priced
        .iter()
        .map(|p| p.premium.charged.to_document_string())
        .collect::<Vec<_>>();
    let levies = priced
        .iter()
        .map(|p| format!("{} {}", p.premium.levy.currency().symbol(), p.premium.levy.grouped(0)))
        .collect::<Vec<_>>();
    let totals = priced
        .iter()
        .map(|p| p.premium.total.to_document_string())
        .collect::<Vec<_>>();
    let pvt = priced
        .iter()
        .map(|p| p.card.pvt_status.clone())
        .collect::<Vec<_>>();

    let spacer = Row::new(vec![Cell::empty().spanning(priced.len() + 1)])
        .with_background(Color::WHITE)
        .with_min_height(10.0)
        .unruled();

    let rows = vec![
        header,
        labelled_row("Basic Premium", basic, TABLE),
        labelled_row("Levies & Stamp", levies, TABLE),
        labelled_row("Excess Protector", fixed("Inclusive"), TABLE),
        labelled_row("Political Violence", pvt, TABLE),
        labelled_row("Total Payable", totals, TABLE_TOTAL).with_background(TOTAL_TINT),
        spacer,
        limit("Windscreen", &|l| l.windscreen.as_str()),
        limit("Radio / Audio", &|l| l.entertainment.as_str()),
        limit("Towing Charges", &|l| l.towing.as_str()),
        limit("Authorized Repair", &|l| l.repair.as_str()),
        limit("Medical Expenses", &|l| l.medical.as_str()),
        limit("Third-Party Property", &|l| l.third_party_property.as_str()),
        labelled_row("Passenger Liability", fixed("Kes. 3M per person"), TABLE),
        labelled_row("No Blame No Excess", fixed("Inclusive"), TABLE),
        labelled_row("Valuation", fixed("Free with letter"), TABLE),
        labelled_row("Territorial Limits", fixed("East Africa"), TABLE),
    ];

    let table = Table::new(column_widths(priced.len()))
        .with_rows(rows)
        .with_header_rows(1)
        .with_grid(0.5, Color::BLACK)
        .with_padding(Padding::new(3.0, 3.0, 6.0, 6.0));

    Fragment::new(
        SectionKind::Comparison,
        vec![Block::Table(table), Block::Spacer(15.0)],
    )
}

/// Excess wording per insurer
pub fn excess(cards: &[RateCard]) -> Fragment {
    let header = labelled_row(
        "Category",
        cards.iter().map(|card| card.company_name.clone()),
        TABLE_BOLD,
    )
    .with_background(WHITESMOKE);

    let own_damage = cards.iter().map(|card| {
        let text = card.excess.own_damage.trim();
        if text.is_empty() {
            NOT_APPLICABLE.to_string()
        } else {
            text.to_string()
        }
    });

    let rows = vec![
        header,
        labelled_row("Own Damage / Partial Theft", own_damage, TABLE),
        labelled_row(
            "Theft with Tracking Device",
            cards.iter().map(|_| "Nil Theft Excess".to_string()),
            TABLE,
        ),
    ];

    let table = Table::new(column_widths(cards.len()))
        .with_rows(rows)
        .with_header_rows(1)
        .with_grid(0.5, GREY);

    Fragment::new(
        SectionKind::Excess,
        vec![
            heading("EXCESS APPLICABLE"),
            Block::Spacer(5.0),
            Block::Table(table),
            Block::Spacer(15.0),
        ],
    )
}

pub fn value_additions(branding: &Branding) -> Fragment {
    Fragment::new(
        SectionKind::ValueAdditions,
        vec![
            heading("VALUE ADDITIONS"),
            Block::Paragraph(Paragraph::new(branding.value_additions().join("\n"), BODY)),
            Block::Spacer(15.0),
        ],
    )
}

pub fn disclaimer(branding: &Branding) -> Fragment {
    Fragment::new(
        SectionKind::Disclaimer,
        vec![
            Block::Paragraph(Paragraph::new(branding.disclaimer(), SMALL_PRINT)),
            Block::Spacer(15.0),
        ],
    )
}

pub fn prepared_by(underwriter_name: &str, branding: &Branding) -> Fragment {
    Fragment::new(
        SectionKind::PreparedBy,
        vec![
            Block::Paragraph(Paragraph::new("Quotation Prepared by:", BODY)),
            Block::Spacer(2.0),
            Block::Paragraph(Paragraph::new(underwriter_name, BODY_BOLD)),
            Block::Paragraph(Paragraph::new(branding.department.as_str(), BODY)),
        ],
    )
}
