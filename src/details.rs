// src/details.rs
//! Detail aggregation: raw page maps + derived fields → one [`FieldMap`].

use std::fmt;

use chrono::{Duration, NaiveDate};

use crate::config::consts::{UNKNOWN_FIELD, UNKNOWN_VALUE};
use crate::data::{FieldMap, FieldValue};
use crate::snapshot::PageSnapshot;
use crate::specs::listing;

pub const TIME_ON_SITE_KEY: &str = "Time on Redfin";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Basement {
    No,
    Unfinished,
    Finished,
    Unknown,
}

impl Basement {
    pub fn as_str(self) -> &'static str {
        match self {
            Basement::No => "No",
            Basement::Unfinished => "Yes (Unfinished)",
            Basement::Finished => "Yes (Finished)",
            Basement::Unknown => "Yes (?)",
        }
    }
}

impl fmt::Display for Basement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basement status from the property-details map.
/// Finished beats unfinished beats "mentioned somewhere".
pub fn basement_status(additional: &FieldMap) -> Basement {
    if additional.truthy("Fully Finished").is_some() {
        Basement::Finished
    } else if additional.truthy("Partial, Unfinished").is_some() {
        Basement::Unfinished
    } else if additional.truthy("Basement Information").is_some() {
        Basement::Unknown
    } else {
        Basement::No
    }
}

/// "Street, City, ST 00000". A missing half reads as "undefined".
pub fn full_address(street: Option<&str>, city_state_zip: Option<&str>) -> String {
    join!(
        street.unwrap_or("undefined"),
        ", ",
        city_state_zip.unwrap_or("undefined")
    )
}

/// List date as MM/DD/YYYY from a "Time on Redfin" value like "5 days".
///
/// Only day units move the date; "6 months", "2 years" or an unreadable count
/// leave it at `today`. Empty input → None.
pub fn list_date(time_on_site: Option<&str>, today: NaiveDate) -> Option<String> {
    let text = time_on_site.filter(|t| !t.is_empty())?;
    let mut parts = text.split(' ');
    let count = parts.next().unwrap_or("");
    let unit = parts.next().unwrap_or("");

    let mut listed = today;
    if unit == "day" || unit == "days" {
        match count.trim().parse::<i64>() {
            Ok(n) => {
                listed = Duration::try_days(n)
                    .and_then(|d| today.checked_sub_signed(d))
                    .unwrap_or(today);
            }
            Err(_) => logd!("Details: unreadable day count {count:?}, keeping today"),
        }
    }
    Some(listed.format("%m/%d/%Y").to_string())
}

/// Everything the page offers, merged in precedence order (later wins):
/// URL, Full Address, Date Listed, main stats, key details,
/// additional details, Basement, Unknown.
pub fn collect_details(page: &dyn PageSnapshot, today: NaiveDate) -> FieldMap {
    let street = listing::street_address(page);
    let csz = listing::city_state_zip(page);
    let main_stats = listing::main_stats(page);
    let key_details = listing::key_details(page);
    let date_listed = list_date(
        key_details.get(TIME_ON_SITE_KEY).and_then(FieldValue::as_text),
        today,
    );
    let additional = listing::additional_details(page);
    let basement = basement_status(&additional);

    let mut all = FieldMap::new();
    all.insert("URL", page.url());
    all.insert("Full Address", full_address(street.as_deref(), csz.as_deref()));
    all.insert("Date Listed", date_listed);
    all.merge(main_stats);
    all.merge(key_details);
    all.merge(additional);
    all.insert("Basement", basement.as_str());
    all.insert(UNKNOWN_FIELD, UNKNOWN_VALUE);

    logd!(fields = all.len(), "Details: collected");
    all
}
