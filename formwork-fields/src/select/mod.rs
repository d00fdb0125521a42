//! Option-backed field variants.
//!
//! One shared [`SelectCore`] composed into concrete variants replaces a
//! deep field-class hierarchy: whether a field is multi-valued is the
//! [`OptionBacked::multiple`] capability flag, orthogonal to the type.

mod checkbox_set;
mod dropdown;
mod lookup;

pub use checkbox_set::CheckboxSetField;
pub use dropdown::DropdownField;
pub use lookup::{LookupDisplay, LookupField};

use serde_json::Value;

use crate::error::Result;
use crate::options::{self, OptionMap, SourceProjection};
use crate::readonly;
use crate::value::Selection;

/// State shared by every option-backed field: the resolved source, the raw
/// current value, per-option disabled keys, and the empty-default
/// configuration.
#[derive(Debug, Clone)]
pub struct SelectCore {
    pub(crate) name: String,
    pub(crate) title: String,
    pub(crate) value: Value,
    pub(crate) source: OptionMap,
    pub(crate) projection: SourceProjection,
    pub(crate) disabled_items: Vec<String>,
    pub(crate) has_empty_default: bool,
    pub(crate) empty_string: String,
    pub(crate) disabled: bool,
}

impl SelectCore {
    /// Resolve `raw_source` and build the core. Source resolution failures
    /// abort field construction.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        raw_source: &Value,
        projection: SourceProjection,
    ) -> Result<Self> {
        let source = options::resolve(raw_source, &projection)?;
        Ok(Self::from_resolved(name, title, source, projection))
    }

    pub(crate) fn from_resolved(
        name: impl Into<String>,
        title: impl Into<String>,
        source: OptionMap,
        projection: SourceProjection,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            value: Value::Null,
            source,
            projection,
            disabled_items: Vec::new(),
            has_empty_default: false,
            empty_string: String::new(),
            disabled: false,
        }
    }

    /// The field name, as submitted and persisted
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field title shown to users
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The raw, un-normalized current value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Keys rendered non-interactive regardless of selection
    pub fn disabled_items(&self) -> &[String] {
        &self.disabled_items
    }

    /// The empty-default placeholder label, e.g. "Select..."
    pub fn empty_string(&self) -> &str {
        &self.empty_string
    }

    /// Whether the whole field is disabled
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Capability shared by every field that renders options from a source.
pub trait OptionBacked {
    fn core(&self) -> &SelectCore;

    fn core_mut(&mut self) -> &mut SelectCore;

    /// Whether this field accepts more than one selected key
    fn multiple(&self) -> bool;

    /// Whether a synthetic empty option leads the source
    fn has_empty_default(&self) -> bool {
        self.core().has_empty_default
    }

    /// The source this field renders from, including the empty default
    /// when configured
    fn source(&self) -> OptionMap {
        if self.has_empty_default() {
            options::with_empty_default(&self.core().source, &self.core().empty_string)
        } else {
            self.core().source.clone()
        }
    }

    /// The current value, normalized to an ordered set of keys
    fn selection(&self) -> Selection {
        Selection::normalize(&self.core().value, &self.core().projection.key_field)
    }

    /// Human-readable projection of the current selection
    fn readonly_value(&self) -> String {
        readonly::project(&self.source(), &self.selection())
    }
}
