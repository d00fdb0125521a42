//! Pure projection of an option map into per-option render records.
//!
//! The records carry no markup; an external template layer turns them into
//! HTML. Rendering never mutates field state.

use serde::Serialize;
use serde_json::Value;

use crate::options::OptionMap;
use crate::value::{scalar_text, Selection};

/// One option as handed to the template layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionRender {
    pub key: String,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

/// Render a multi-valued option map.
///
/// An option is selected when its key is in `selected` or in `defaults`,
/// and disabled when its key is in `disabled` or in `defaults`, except
/// that an option whose label equals `placeholder_label` is never disabled,
/// so "none" stays selectable.
pub fn render(
    source: &OptionMap,
    selected: &Selection,
    disabled: &[String],
    defaults: &[String],
    placeholder_label: Option<&str>,
) -> Vec<OptionRender> {
    source
        .iter()
        .map(|(key, label)| OptionRender {
            key: key.clone(),
            label: label.clone(),
            selected: selected.contains(key) || defaults.iter().any(|d| d == key),
            disabled: disabled_flag(key, label, disabled, defaults, placeholder_label),
        })
        .collect()
}

/// Render a single-valued option map against the raw current value,
/// using the [`value_matches`] coercion rules.
pub fn render_single(
    source: &OptionMap,
    value: &Value,
    disabled: &[String],
    placeholder_label: Option<&str>,
) -> Vec<OptionRender> {
    source
        .iter()
        .map(|(key, label)| OptionRender {
            key: key.clone(),
            label: label.clone(),
            selected: value_matches(key, value),
            disabled: disabled_flag(key, label, disabled, &[], placeholder_label),
        })
        .collect()
}

fn disabled_flag(
    key: &str,
    label: &str,
    disabled: &[String],
    defaults: &[String],
    placeholder_label: Option<&str>,
) -> bool {
    let flagged = disabled.iter().any(|d| d == key) || defaults.iter().any(|d| d == key);
    flagged && placeholder_label != Some(label)
}

/// Whether a single-select option key matches the raw current value.
///
/// The empty key matches a null or empty value. A falsy non-empty key
/// (`"0"`) compares strictly by string form, guarding against `"0"`
/// matching an unset value. Any other key compares by string form with
/// numeric coercion, so `"1"` matches the number `1`.
pub fn value_matches(key: &str, value: &Value) -> bool {
    let current = match scalar_text(value) {
        Some(text) => text,
        None => return key.is_empty() && value.is_null(),
    };
    if key.is_empty() {
        return current.is_empty();
    }
    if key == "0" {
        return current == key;
    }
    if current == key {
        return true;
    }
    match (key.parse::<f64>(), current.parse::<f64>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
