// src/rows.rs
//! Row formatting: an ordered list of field names → one delimited string.
//!
//! Values are joined as-is. A value that contains the delimiter breaks the
//! row; nothing is quoted or escaped.

use crate::data::FieldMap;

pub const TAB: &str = "\t";
pub const NEWLINE: &str = "\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowSpec {
    pub name: &'static str,
    pub fields: &'static [&'static str],
    pub delimiter: &'static str,
}

pub const SHORT_ROW: RowSpec = RowSpec {
    name: "short row",
    fields: &["MLS#", "Full Address"],
    delimiter: TAB,
};

pub const LONG_ROW: RowSpec = RowSpec {
    name: "long row",
    fields: &["MLS#", "Date Listed", "URL", "Full Address", "Beds", "Baths", "Price", "Sq Ft"],
    delimiter: TAB,
};

pub const SCORING_DETAILS: RowSpec = RowSpec {
    name: "scoring details",
    fields: &[
        "Full Address",
        "Town",
        "URL",
        "Price",
        "Beds",
        "Baths",
        "Sq Ft",
        "Lot Size",
        "Year Built",
        "Tax Annual Amount",
        "Basement",
        "Has Garage",
        "Unknown", // walk-in closet
        "Unknown", // soak tub
        "Unknown", // patio
    ],
    delimiter: NEWLINE,
};

/// Fallback for a missing/falsy field: "No" for "Has…" style fields, else empty.
pub fn default_for(field: &str) -> &'static str {
    if field.contains("Has") { "No" } else { "" }
}

impl RowSpec {
    /// Resolve every field against `details`, in order.
    pub fn values(&self, details: &FieldMap) -> Vec<String> {
        self.fields
            .iter()
            .map(|&field| match details.truthy(field) {
                Some(v) => v.render(),
                None => s!(default_for(field)),
            })
            .collect()
    }

    pub fn format(&self, details: &FieldMap) -> String {
        self.values(details).join(self.delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FieldValue;
    use pretty_assertions::assert_eq;

    fn sample() -> FieldMap {
        fields! {
            "MLS#" => "73012345",
            "Full Address" => "1 A St, Town, MA 01000",
            "Beds" => "3",
            "Baths" => "",
            "Has Garage" => FieldValue::Flag(true),
            "Unknown" => "?",
        }
    }

    #[test]
    fn delimiter_count_is_fields_minus_one() {
        let details = sample();
        for spec in [SHORT_ROW, LONG_ROW, SCORING_DETAILS] {
            let row = spec.format(&details);
            assert_eq!(row.matches(spec.delimiter).count(), spec.fields.len() - 1, "{}", spec.name);
        }
        // even with nothing on the page
        assert_eq!(LONG_ROW.format(&fields! {}), "\t".repeat(7));
    }

    #[test]
    fn defaults_depend_on_has_prefix() {
        assert_eq!(default_for("Has Garage"), "No");
        assert_eq!(default_for("Has Pool"), "No");
        assert_eq!(default_for("Baths"), "");
    }

    #[test]
    fn short_row_values() {
        assert_eq!(SHORT_ROW.format(&sample()), "73012345\t1 A St, Town, MA 01000");
    }

    #[test]
    fn scoring_details_fill_placeholders_and_flags() {
        let values = SCORING_DETAILS.values(&sample());
        assert_eq!(values.len(), 15);
        assert_eq!(values[5], ""); // Baths empty → default
        assert_eq!(values[11], "true"); // Has Garage flag
        assert_eq!(&values[12..], &["?", "?", "?"]);
    }

    #[test]
    fn missing_has_field_defaults_to_no() {
        let mut m = sample();
        m.insert("Has Garage", FieldValue::Flag(false));
        assert_eq!(SCORING_DETAILS.values(&m)[11], "No");
    }
}
