//! Selection value normalization.
//!
//! A field's raw value arrives in several encodings: a single scalar, an
//! ordered list of scalars, a JSON-encoded array string, a legacy
//! comma-delimited string, or a relation-like list of records. All of them
//! normalize to a [`Selection`]: an ordered, duplicate-free list of keys.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token used by the legacy comma-delimited encoding to escape a literal
/// comma inside a single value.
const COMMA_ESCAPE: &str = "{comma}";

/// An ordered, duplicate-free set of selection keys.
///
/// Order is first-occurrence order of the input; duplicates collapse to
/// their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(Vec<String>);

impl Selection {
    /// An empty selection
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a selection from keys, dropping duplicates (first occurrence wins)
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for key in keys {
            selection.push(key.into());
        }
        selection
    }

    /// Normalize a raw field value.
    ///
    /// - A list keeps its elements trimmed, in order, first occurrence wins.
    /// - A list of records projects each record to its `id_field` value.
    /// - A string is tried as a JSON array first; on failure it is split on
    ///   `,` with the legacy `{comma}` escape decoded. Never fails.
    /// - Null and the empty string normalize to an empty selection.
    /// - Any other scalar becomes a one-element selection of its trimmed
    ///   string form.
    pub fn normalize(raw: &Value, id_field: &str) -> Self {
        match raw {
            Value::Null => Self::new(),
            Value::Array(items) => Self::from_items(items, id_field),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Self::new();
                }
                if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
                    return Self::from_items(&items, id_field);
                }
                // Legacy comma-delimited encoding, read-only
                Self::from_keys(s.split(',').map(|part| part.replace(COMMA_ESCAPE, ",")))
            }
            other => match scalar_text(other) {
                Some(text) => Self::from_keys([text]),
                None => Self::new(),
            },
        }
    }

    fn from_items(items: &[Value], id_field: &str) -> Self {
        let mut selection = Self::new();
        for item in items {
            match item {
                Value::Object(record) => {
                    if let Some(id) = record.get(id_field).and_then(scalar_text) {
                        selection.push(id);
                    }
                }
                other => {
                    if let Some(text) = scalar_text(other) {
                        selection.push(text);
                    }
                }
            }
        }
        selection
    }

    fn push(&mut self, key: String) {
        if !self.0.contains(&key) {
            self.0.push(key);
        }
    }

    /// The selected keys, in order
    pub fn keys(&self) -> &[String] {
        &self.0
    }

    /// Whether `key` is selected
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate the selected keys in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Canonical transit encoding: a JSON array of string keys.
    ///
    /// The legacy comma format is read-only and never written.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// String form of a scalar JSON value. Strings are trimmed; lists and
/// objects have no scalar form.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_normalizes_to_itself() {
        let raw = json!(["a", "b", "c"]);
        let selection = Selection::normalize(&raw, "ID");
        assert_eq!(selection.keys(), ["a", "b", "c"]);
    }

    #[test]
    fn list_elements_are_trimmed_and_deduplicated() {
        let raw = json!([" a ", "b", "a"]);
        let selection = Selection::normalize(&raw, "ID");
        assert_eq!(selection.keys(), ["a", "b"]);
    }

    #[test]
    fn record_list_projects_identifier_field() {
        let raw = json!([
            {"ID": 1, "Title": "Technology"},
            {"ID": 3, "Title": "Cooking"}
        ]);
        let selection = Selection::normalize(&raw, "ID");
        assert_eq!(selection.keys(), ["1", "3"]);
    }

    #[test]
    fn record_missing_identifier_is_skipped() {
        let raw = json!([{"ID": "1"}, {"Title": "no id"}, {"ID": "2"}]);
        let selection = Selection::normalize(&raw, "ID");
        assert_eq!(selection.keys(), ["1", "2"]);
    }

    #[test]
    fn json_array_string_round_trips() {
        let raw = json!("[\"1\",\"3\"]");
        let selection = Selection::normalize(&raw, "ID");
        assert_eq!(selection.keys(), ["1", "3"]);
    }

    #[test]
    fn legacy_comma_format_decodes_escape() {
        let raw = json!("a,b{comma}c");
        let selection = Selection::normalize(&raw, "ID");
        assert_eq!(selection.keys(), ["a", "b,c"]);
    }

    #[test]
    fn null_and_empty_string_normalize_to_empty() {
        assert!(Selection::normalize(&Value::Null, "ID").is_empty());
        assert!(Selection::normalize(&json!(""), "ID").is_empty());
        assert!(Selection::normalize(&json!("   "), "ID").is_empty());
    }

    #[test]
    fn scalar_normalizes_to_single_element() {
        let selection = Selection::normalize(&json!(" 1 "), "ID");
        assert_eq!(selection.keys(), ["1"]);

        let selection = Selection::normalize(&json!(7), "ID");
        assert_eq!(selection.keys(), ["7"]);
    }

    #[test]
    fn canonical_encoding_is_json_array() {
        let selection = Selection::from_keys(["1", "3"]);
        assert_eq!(selection.to_json(), "[\"1\",\"3\"]");
        assert_eq!(Selection::new().to_json(), "[]");
    }

    #[test]
    fn canonical_encoding_round_trips_through_normalize() {
        let selection = Selection::from_keys(["a", "b,c", "d"]);
        let encoded = json!(selection.to_json());
        assert_eq!(Selection::normalize(&encoded, "ID"), selection);
    }
}
