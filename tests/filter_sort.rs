// tests/filter_sort.rs
use listing_feed_report::filter::{filter_by_phrase, filter_by_year};
use listing_feed_report::parse_listings;
use listing_feed_report::sort::sort_by_date_listed;

const LISTINGS_XML: &str = include_str!("fixtures/listings.xml");

#[test]
fn year_filter_keeps_only_2016_listing() {
    let kept = filter_by_year(parse_listings(LISTINGS_XML).unwrap(), 2016);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].mls_id, "1");
    assert_eq!(kept[0].street_address, "123 Test St.");
}

#[test]
fn phrase_filter_keeps_only_and_listing() {
    let kept = filter_by_phrase(parse_listings(LISTINGS_XML).unwrap(), "and");
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].mls_id, "8");
    assert_eq!(kept[0].description, "and another sample description");
}

#[test]
fn both_filters_can_empty_the_set() {
    let listings = parse_listings(LISTINGS_XML).unwrap();
    let kept = filter_by_phrase(filter_by_year(listings, 2016), "and");
    assert!(kept.is_empty());
}

#[test]
fn unfiltered_sort_puts_2015_first() {
    let ordered = sort_by_date_listed(parse_listings(LISTINGS_XML).unwrap());
    assert_eq!(ordered.len(), 2);
    assert_eq!(ordered[0].date_key, "2015-09-18 00:00:00");
    assert_eq!(ordered[0].listing.mls_id, "8");
    assert_eq!(ordered[1].date_key, "2016-08-29 00:00:00");
    assert_eq!(ordered[1].listing.mls_id, "1");
    assert_eq!(
        ordered[1].listing.rooms,
        Some(vec!["Room1".to_string(), "Room2".to_string()])
    );
}
