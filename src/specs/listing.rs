// src/specs/listing.rs
//
// Raw field extraction from a Redfin home detail page.

use crate::config::consts::*;
use crate::core::sanitize::split_lines;
use crate::data::{FieldMap, FieldValue};
use crate::snapshot::PageSnapshot;

/// Street line, from the `title` of the first `.street-address`.
pub fn street_address(page: &dyn PageSnapshot) -> Option<String> {
    page.first_attr(STREET_ADDRESS_CLASS, "title")
}

/// "City, ST 00000" under the street line.
pub fn city_state_zip(page: &dyn PageSnapshot) -> Option<String> {
    page.first_text(SUBTEXT_CLASS)
}

/// Two-line split of one child's text. The second half may be missing.
fn two_lines(text: &str) -> (&str, Option<&str>) {
    let mut parts = split_lines(text).into_iter();
    let first = parts.next().unwrap_or("");
    (first, parts.next())
}

/// Price / beds / baths / sq ft block. Each child reads "value\nlabel";
/// the map is label → value. A child without a label lands under "undefined".
pub fn main_stats(page: &dyn PageSnapshot) -> FieldMap {
    let mut stats = FieldMap::new();
    let Some(children) = page.child_texts(MAIN_STATS_CLASS).into_iter().next() else {
        logd!("Listing: no main stats block");
        return stats;
    };
    for text in children {
        let (value, label) = two_lines(&text);
        stats.insert(label.unwrap_or("undefined"), value);
    }
    stats
}

/// All key-details lists merged. Each child reads "label\nvalue";
/// later lists overwrite earlier keys.
pub fn key_details(page: &dyn PageSnapshot) -> FieldMap {
    let mut details = FieldMap::new();
    for list in page.child_texts(KEY_DETAILS_CLASS) {
        for text in list {
            let (label, value) = two_lines(&text);
            details.insert(label, FieldValue::from(value.map(String::from)));
        }
    }
    details
}

/// One line of the property-details block: "key: value" or a bare flag.
pub fn parse_detail_line(line: &str) -> (String, FieldValue) {
    match line.split_once(DETAIL_SEP) {
        Some((key, value)) => (s!(key), FieldValue::from(value)),
        None => (s!(line), FieldValue::Flag(true)),
    }
}

/// Parse the whole property-details text.
pub fn parse_additional_details(text: &str) -> FieldMap {
    split_lines(text)
        .into_iter()
        .map(parse_detail_line)
        .collect()
}

/// The long "Property details" section, if present.
pub fn additional_details(page: &dyn PageSnapshot) -> FieldMap {
    match page.text_by_id(PROPERTY_DETAILS_ID) {
        Some(text) => parse_additional_details(&text),
        None => {
            logd!("Listing: no #{PROPERTY_DETAILS_ID} section");
            FieldMap::new()
        }
    }
}
