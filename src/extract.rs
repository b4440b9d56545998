// src/extract.rs
//! Per-listing field extractors used by the report writer.

use crate::listing::Listing;

pub const FULL_BATHROOMS: &str = "Full Bathrooms";
pub const HALF_BATHROOMS: &str = "Half Bathrooms";
pub const THREE_QUARTER_BATHROOMS: &str = "Three Quarter Bathrooms";

/// Appliance names in source order; empty when the listing has none.
pub fn appliances(listing: &Listing) -> &[String] {
    listing.appliances.as_deref().unwrap_or(&[])
}

/// Room names in source order; empty when the listing has none.
pub fn rooms(listing: &Listing) -> &[String] {
    listing.rooms.as_deref().unwrap_or(&[])
}

/// `(label, count)` for each bathroom field present, always in the order
/// full, half, three-quarter. Absent fields are skipped.
pub fn bathrooms(listing: &Listing) -> Vec<(&'static str, &str)> {
    [
        (FULL_BATHROOMS, &listing.full_bathrooms),
        (HALF_BATHROOMS, &listing.half_bathrooms),
        (THREE_QUARTER_BATHROOMS, &listing.three_quarter_bathrooms),
    ]
    .into_iter()
    .filter_map(|(label, count)| count.as_deref().map(|c| (label, c)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::parse_date_listed;

    fn bare() -> Listing {
        Listing {
            mls_id: "1".into(),
            mls_name: "2".into(),
            date_listed: "2016-08-29 00:00:00".into(),
            listed_at: parse_date_listed("2016-08-29 00:00:00").unwrap(),
            price: "3".into(),
            street_address: "123 Test St.".into(),
            bedrooms: "4".into(),
            full_bathrooms: None,
            half_bathrooms: None,
            three_quarter_bathrooms: None,
            description: "sample description".into(),
            appliances: None,
            rooms: None,
        }
    }

    #[test]
    fn absent_containers_give_empty_lists() {
        let l = bare();
        assert!(appliances(&l).is_empty());
        assert!(rooms(&l).is_empty());
        assert!(bathrooms(&l).is_empty());
    }

    #[test]
    fn bathrooms_skip_absent_and_keep_fixed_order() {
        let mut l = bare();
        l.three_quarter_bathrooms = Some("1".into());
        l.full_bathrooms = Some("2".into());
        assert_eq!(
            bathrooms(&l),
            vec![(FULL_BATHROOMS, "2"), (THREE_QUARTER_BATHROOMS, "1")]
        );
    }

    #[test]
    fn lists_keep_source_order() {
        let mut l = bare();
        l.rooms = Some(vec!["Room1".into(), "Room2".into()]);
        assert_eq!(rooms(&l), ["Room1".to_string(), "Room2".to_string()]);
    }
}
