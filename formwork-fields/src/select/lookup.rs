//! Read-only lookup field
//!
//! Shows the human value of a select field for the currently selected keys.

use serde_json::Value;

use super::{OptionBacked, SelectCore};
use crate::error::Result;
use crate::options::{OptionMap, SourceProjection};
use crate::readonly::NONE_MARKER;

/// What the lookup field hands to the template layer: a display string and
/// the hidden-input value that keeps the selection round-tripping.
///
/// `display` is raw text; the caller escapes it before embedding in
/// markup. `is_placeholder` is set when nothing resolved, so the template
/// can render the marker as markup rather than plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupDisplay {
    pub display: String,
    pub input_value: String,
    pub is_placeholder: bool,
}

/// Read-only complement of [`super::DropdownField`]. Always multi-valued,
/// never has an empty default.
#[derive(Debug, Clone)]
pub struct LookupField {
    core: SelectCore,
}

impl LookupField {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        source: &Value,
    ) -> Result<Self> {
        Ok(Self {
            core: SelectCore::new(name, title, source, SourceProjection::default())?,
        })
    }

    pub(crate) fn from_resolved(
        name: impl Into<String>,
        title: impl Into<String>,
        source: OptionMap,
        value: Value,
    ) -> Self {
        let mut core = SelectCore::from_resolved(name, title, source, SourceProjection::default());
        core.value = value;
        Self { core }
    }

    /// Set the current value
    pub fn set_value(&mut self, value: Value) {
        self.core.value = value;
    }

    /// Lookup fields are always read-only
    pub fn is_readonly(&self) -> bool {
        true
    }

    /// Resolve the current selection to its display form.
    ///
    /// Keys missing from the source are dropped. When nothing resolves and
    /// the raw value was a plain string, that string passes through
    /// untouched, since it may be a generated HTML diff view rather than
    /// actual keys. Otherwise the placeholder marker is shown.
    pub fn display(&self) -> LookupDisplay {
        let source = self.source();
        let selection = self.selection();

        let mapped: Vec<&str> = selection
            .iter()
            .filter_map(|key| source.get(key).map(String::as_str))
            .collect();

        if !mapped.is_empty() {
            return LookupDisplay {
                display: mapped.join(", "),
                input_value: selection.keys().join(", "),
                is_placeholder: false,
            };
        }

        if let Value::String(raw) = &self.core.value {
            let raw = raw.trim();
            if !raw.is_empty() {
                return LookupDisplay {
                    display: raw.to_string(),
                    input_value: String::new(),
                    is_placeholder: false,
                };
            }
        }

        LookupDisplay {
            display: NONE_MARKER.to_string(),
            input_value: String::new(),
            is_placeholder: true,
        }
    }
}

impl OptionBacked for LookupField {
    fn core(&self) -> &SelectCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SelectCore {
        &mut self.core
    }

    fn multiple(&self) -> bool {
        true
    }

    fn has_empty_default(&self) -> bool {
        false
    }
}
