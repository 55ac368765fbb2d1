//! Broker identity, colours, type styles and boilerplate wording

use std::sync::Arc;

use crate::layout::{Align, Color, TextStyle};

/// Deep navy used for the rule, title and comparison header
pub const PRIMARY: Color = Color::rgb(0.0, 0.12, 0.45);
/// Red used for the total payable figures
pub const ACCENT: Color = Color::rgb(0.8, 0.1, 0.1);
/// Background of the total payable row
pub const TOTAL_TINT: Color = Color::rgb(0.9, 0.9, 1.0);
/// Background of label cells
pub const WHITESMOKE: Color = Color::rgb(0.96, 0.96, 0.96);
pub const GREY: Color = Color::rgb(0.5, 0.5, 0.5);

pub const BODY: TextStyle = TextStyle::new(8.0, 10.0);
pub const BODY_BOLD: TextStyle = BODY.bold();
pub const TITLE: TextStyle = TextStyle::new(14.0, 17.0)
    .bold()
    .colored(PRIMARY)
    .aligned(Align::Right);
pub const META: TextStyle = TextStyle::new(9.0, 11.0);
pub const META_BOLD: TextStyle = META.bold();
pub const TABLE: TextStyle = TextStyle::new(7.0, 8.5);
pub const TABLE_BOLD: TextStyle = TABLE.bold();
pub const TABLE_HEADER: TextStyle = TABLE.bold().colored(Color::WHITE).aligned(Align::Center);
pub const TABLE_TOTAL: TextStyle = TABLE.bold().colored(ACCENT);
pub const SMALL_PRINT: TextStyle = TextStyle::new(6.0, 7.5).colored(GREY);

pub const CLASS_LABEL: &str = "MOTOR PRIVATE COMPREHENSIVE";

pub const INTRO: &str = "Thank you for the opportunity to assist you in assessing your motor \
vehicle insurance needs, we are pleased to present to you the following personal insurance quote:";

pub const SCOPE_OF_COVER: &str = "Indemnity against loss of or damage to motor vehicles arising \
from accidental collision or overturning, fire, external explosion, self-ignition or lightning, \
burglary, housebreaking or theft, or malicious acts, and liability to third parties.";

/// PNG logo bytes
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub png: Arc<[u8]>,
}

impl Logo {
    pub fn from_png(bytes: Vec<u8>) -> Self {
        Self { png: bytes.into() }
    }
}

/// The broker printed at the top and bottom of every quotation
#[derive(Debug, Clone, PartialEq)]
pub struct Branding {
    pub broker_name: String,
    pub address_lines: Vec<String>,
    pub telephones: Vec<String>,
    pub email: String,
    pub website: String,
    /// 24 hour support line
    pub support_line: String,
    pub underwriting_email: String,
    pub department: String,
    pub logo: Option<Logo>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            broker_name: "Pacific Insurance Brokers (EA) Ltd".to_string(),
            address_lines: vec![
                "The Insurance Centre, Rose Avenue, Kilimani".to_string(),
                "Nairobi, Kenya".to_string(),
            ],
            telephones: vec![
                "0722 204478".to_string(),
                "0712 658 629".to_string(),
                "0790 870 870".to_string(),
            ],
            email: "info@pacific-group.co.ke".to_string(),
            website: "www.pacific-group.co.ke".to_string(),
            support_line: "+254 712 658629".to_string(),
            underwriting_email: "underwriting@pacific-group.co.ke".to_string(),
            department: "Underwriting & Claims Department".to_string(),
            logo: None,
        }
    }
}

impl Branding {
    pub fn with_logo(mut self, logo: Option<Logo>) -> Self {
        self.logo = logo;
        self
    }

    pub fn telephone_line(&self) -> String {
        format!("Tel: {}", self.telephones.join(" | "))
    }

    pub fn contact_line(&self) -> String {
        format!("{} | {}", self.email, self.website)
    }

    pub fn value_additions(&self) -> Vec<String> {
        vec![
            "1. Faster claims processing".to_string(),
            format!("2. 24 hr support {}", self.support_line),
            "3. Valuation Facilitation".to_string(),
        ]
    }

    pub fn disclaimer(&self) -> String {
        format!(
            "The premium estimates and coverage limits outlined in the proposal above are based \
             upon the accuracy of the information you provided. This proposal does not constitute \
             a contract and premium amounts cannot be guaranteed until coverage is purchased. For \
             additional information please contact {} or email {}",
            self.support_line, self.underwriting_email
        )
    }
}
