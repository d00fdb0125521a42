//! Option source resolution.
//!
//! A selectable field renders its options from a source: either a static
//! key→label mapping, or a list of records projected through a
//! (key-field, label-field) pair. Both resolve to an insertion-ordered
//! [`OptionMap`]. Anything else is a caller bug and fails with
//! [`FieldsError::InvalidSourceType`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::value::scalar_text;

/// Ordered key→label mapping a field renders options from
pub type OptionMap = IndexMap<String, String>;

/// Which record fields a list source projects to key and label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceProjection {
    pub key_field: String,
    pub label_field: String,
}

impl SourceProjection {
    pub fn new(key_field: impl Into<String>, label_field: impl Into<String>) -> Self {
        Self {
            key_field: key_field.into(),
            label_field: label_field.into(),
        }
    }
}

impl Default for SourceProjection {
    fn default() -> Self {
        Self::new("ID", "Title")
    }
}

/// Resolve a raw source into an ordered option map.
///
/// Accepts a JSON object (used directly, in insertion order) or an array of
/// record objects projected through `projection`.
pub fn resolve(raw: &Value, projection: &SourceProjection) -> Result<OptionMap> {
    let map = match raw {
        Value::Object(entries) => {
            let mut map = OptionMap::with_capacity(entries.len());
            for (key, label) in entries {
                let label = scalar_text(label).ok_or_else(|| {
                    FieldsError::invalid_source(format!("label for key '{key}' is not a scalar"))
                })?;
                map.insert(key.clone(), label);
            }
            map
        }
        Value::Array(records) => {
            let mut map = OptionMap::with_capacity(records.len());
            for (index, record) in records.iter().enumerate() {
                let Value::Object(fields) = record else {
                    return Err(FieldsError::invalid_source(format!(
                        "list element at index {index} is not a record"
                    )));
                };
                let key = fields.get(&projection.key_field).and_then(scalar_text);
                let Some(key) = key else {
                    return Err(FieldsError::invalid_source(format!(
                        "record at index {index} has no '{}' field",
                        projection.key_field
                    )));
                };
                let label = fields
                    .get(&projection.label_field)
                    .and_then(scalar_text)
                    .unwrap_or_default();
                map.insert(key, label);
            }
            map
        }
        other => {
            return Err(FieldsError::invalid_source(format!(
                "expected a mapping or a list of records, got {}",
                json_type_name(other)
            )));
        }
    };

    debug!(options = map.len(), "resolved option source");
    Ok(map)
}

/// Resolve a raw source and prepend the empty-default placeholder entry.
pub fn resolve_with_empty_default(
    raw: &Value,
    projection: &SourceProjection,
    placeholder: &str,
) -> Result<OptionMap> {
    let resolved = resolve(raw, projection)?;
    Ok(with_empty_default(&resolved, placeholder))
}

/// Prepend the synthetic `"" → placeholder` entry to a resolved map.
///
/// Known quirk, kept for compatibility: a real `""` key in the source is
/// shadowed by the synthetic entry.
pub fn with_empty_default(source: &OptionMap, placeholder: &str) -> OptionMap {
    let mut map = OptionMap::with_capacity(source.len() + 1);
    map.insert(String::new(), placeholder.to_string());
    for (key, label) in source {
        if key.is_empty() {
            continue;
        }
        map.insert(key.clone(), label.clone());
    }
    map
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
