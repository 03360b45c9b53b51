// src/data.rs
//! Field map: one page's extracted listing data, keyed by field name.

use indexmap::IndexMap;
use serde::Serialize;

/// A single field value. `Undefined` is a key that exists without a value
/// (e.g. "Date Listed" when the page has no "Time on Redfin").
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Undefined,
}

impl FieldValue {
    /// Non-empty text or a true flag.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Flag(b) => *b,
            FieldValue::Undefined => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// How the value reads when joined into a row.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::Undefined => s!("undefined"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s!(s))
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(v: Option<String>) -> Self {
        v.map(FieldValue::Text).unwrap_or(FieldValue::Undefined)
    }
}

/// Insertion-ordered; re-inserting a key replaces the value but keeps its slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldMap(IndexMap<String, FieldValue>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Later entries win on key collision.
    pub fn merge(&mut self, other: FieldMap) {
        for (k, v) in other.0 {
            self.0.insert(k, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// The value if it is truthy, else None.
    pub fn truthy(&self, key: &str) -> Option<&FieldValue> {
        self.get(key).filter(|v| v.is_truthy())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<(String, FieldValue)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truthiness_matches_page_semantics() {
        assert!(FieldValue::from("0").is_truthy());
        assert!(!FieldValue::from("").is_truthy());
        assert!(FieldValue::Flag(true).is_truthy());
        assert!(!FieldValue::Flag(false).is_truthy());
        assert!(!FieldValue::Undefined.is_truthy());
    }

    #[test]
    fn overwrite_keeps_first_position() {
        let mut a = fields! { "URL" => "u", "Price" => "$1" };
        a.merge(fields! { "Beds" => "2", "URL" => "v" });

        let keys: Vec<&str> = a.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["URL", "Price", "Beds"]);
        assert_eq!(a.get("URL"), Some(&FieldValue::from("v")));
    }

    #[test]
    fn serializes_as_plain_json_object() {
        let m = fields! {
            "Full Address" => "1 A St, B",
            "Date Listed" => FieldValue::Undefined,
            "Has Garage" => FieldValue::Flag(true),
        };
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"Full Address":"1 A St, B","Date Listed":null,"Has Garage":true}"#);
    }

    #[test]
    fn render_follows_string_coercion() {
        assert_eq!(FieldValue::Flag(true).render(), "true");
        assert_eq!(FieldValue::Undefined.render(), "undefined");
        assert_eq!(FieldValue::from(None::<String>), FieldValue::Undefined);
    }
}
