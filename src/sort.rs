// src/sort.rs
use crate::listing::Listing;

/// A listing paired with its date-key: the raw DateListed string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedListing {
    pub date_key: String,
    pub listing: Listing,
}

/// Order listings ascending by the raw DateListed string.
///
/// The comparison is on the text, not the parsed timestamp. For zero-padded
/// dates both orders agree; for anything else the string order wins. The sort
/// is stable, so equal keys keep their input order.
pub fn sort_by_date_listed(listings: Vec<Listing>) -> Vec<DatedListing> {
    let mut dated: Vec<DatedListing> = listings
        .into_iter()
        .map(|listing| DatedListing {
            date_key: listing.date_listed.clone(),
            listing,
        })
        .collect();
    dated.sort_by(|a, b| a.date_key.cmp(&b.date_key));
    dated
}
