// src/listing.rs
//! Listing records and their construction from the feed document.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::document::{parse_document, Element};
use crate::error::{ReportError, Result};

/// Format of `DateListed` in the feed.
pub const DATE_LISTED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub mls_id: String,
    pub mls_name: String,
    /// Raw DateListed text, the sort and display key.
    pub date_listed: String,
    pub listed_at: NaiveDateTime,
    pub price: String,
    pub street_address: String,
    pub bedrooms: String,
    pub full_bathrooms: Option<String>,
    pub half_bathrooms: Option<String>,
    pub three_quarter_bathrooms: Option<String>,
    pub description: String,
    pub appliances: Option<Vec<String>>,
    pub rooms: Option<Vec<String>>,
}

/// Parse feed XML into listings, in document order.
pub fn parse_listings(xml: &str) -> Result<Vec<Listing>> {
    let root = parse_document(xml)?;
    let listings = root
        .find_all("Listing")
        .enumerate()
        .map(|(index, el)| Listing::from_element(index, el))
        .collect::<Result<Vec<_>>>()?;
    debug!(target: "parser", root = %root.name, count = listings.len(), "feed parsed");
    Ok(listings)
}

/// Parse a DateListed value.
///
/// chrono skips whitespace before numeric fields and lets `%Y` take a sign or
/// more than four digits, so the outline is checked first: a four-digit year
/// followed by `-`, no whitespace after a `-`/`:` separator or at either end.
pub fn parse_date_listed(raw: &str) -> Option<NaiveDateTime> {
    if !has_date_listed_shape(raw) {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, DATE_LISTED_FORMAT).ok()
}

fn has_date_listed_shape(raw: &str) -> bool {
    let b = raw.as_bytes();
    let year = b.len() > 5 && b[..4].iter().all(u8::is_ascii_digit) && b[4] == b'-';
    let padded = b
        .windows(2)
        .any(|w| matches!(w[0], b'-' | b':') && w[1].is_ascii_whitespace());
    year && !padded && !raw.ends_with(char::is_whitespace)
}

impl Listing {
    /// Build one listing from its `<Listing>` element. `index` is the position
    /// among the root's listings and only feeds error messages.
    pub fn from_element(index: usize, el: &Element) -> Result<Self> {
        let section = move |name: &'static str| {
            el.find(name)
                .ok_or(ReportError::MissingField { index, field: name })
        };
        let details = section("ListingDetails")?;
        let location = section("Location")?;
        let basic = section("BasicDetails")?;

        let required = move |parent: &Element, field: &'static str| {
            parent
                .child_text(field)
                .map(str::to_string)
                .ok_or(ReportError::MissingField { index, field })
        };
        let optional = |parent: &Element, field: &str| parent.child_text(field).map(str::to_string);

        let mls_id = required(details, "MlsId")?;
        let mls_name = required(details, "MlsName")?;
        let date_listed = required(details, "DateListed")?;
        let price = required(details, "Price")?;
        let street_address = required(location, "StreetAddress")?;
        let bedrooms = required(basic, "Bedrooms")?;
        let description = required(basic, "Description")?;

        let listed_at = parse_date_listed(&date_listed).ok_or_else(|| ReportError::DateFormat {
            index,
            value: date_listed.clone(),
        })?;

        let rich = el.find("RichDetails");
        let items = move |container: &str| {
            rich.and_then(|r| r.find(container))
                .map(|c| c.children.iter().map(|i| i.text.clone()).collect::<Vec<_>>())
        };

        Ok(Self {
            mls_id,
            mls_name,
            date_listed,
            listed_at,
            price,
            street_address,
            bedrooms,
            full_bathrooms: optional(basic, "FullBathrooms"),
            half_bathrooms: optional(basic, "HalfBathrooms"),
            three_quarter_bathrooms: optional(basic, "ThreeQuarterBathrooms"),
            description,
            appliances: items("Appliances"),
            rooms: items("Rooms"),
        })
    }
}
