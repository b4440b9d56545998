// src/filter.rs
//! Order-preserving listing filters. Each takes ownership of the sequence and
//! returns the survivors; the input is never mutated while being walked.

use chrono::Datelike;

use crate::listing::Listing;

/// Keep listings whose DateListed year equals `year` exactly.
pub fn filter_by_year(listings: Vec<Listing>, year: i32) -> Vec<Listing> {
    listings
        .into_iter()
        .filter(|l| l.listed_at.year() == year)
        .collect()
}

/// Keep listings whose description contains `phrase` as a literal,
/// case-sensitive substring.
pub fn filter_by_phrase(listings: Vec<Listing>, phrase: &str) -> Vec<Listing> {
    listings
        .into_iter()
        .filter(|l| l.description.contains(phrase))
        .collect()
}
