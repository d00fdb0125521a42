//! Single-select dropdown field

use serde_json::Value;

use super::{LookupField, OptionBacked, SelectCore};
use crate::error::Result;
use crate::options::SourceProjection;
use crate::render::{self, OptionRender};

/// A `<select>`-style field: one selectable value, optionally led by an
/// empty placeholder option.
#[derive(Debug, Clone)]
pub struct DropdownField {
    core: SelectCore,
}

impl DropdownField {
    /// Create a dropdown over `source` (a key→label mapping or a list of
    /// records with `ID`/`Title` fields).
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        source: &Value,
    ) -> Result<Self> {
        Self::new_with_projection(name, title, source, SourceProjection::default())
    }

    /// Create a dropdown over a record-list source projected through
    /// custom key and label fields.
    pub fn new_with_projection(
        name: impl Into<String>,
        title: impl Into<String>,
        source: &Value,
        projection: SourceProjection,
    ) -> Result<Self> {
        Ok(Self {
            core: SelectCore::new(name, title, source, projection)?,
        })
    }

    /// Set the placeholder label for the empty default selection,
    /// e.g. "Select...". Turns the empty default on.
    pub fn with_empty_string(mut self, label: impl Into<String>) -> Self {
        self.core.has_empty_default = true;
        self.core.empty_string = label.into();
        self
    }

    /// Show the first option as empty, with the configured placeholder label
    pub fn with_has_empty_default(mut self, has: bool) -> Self {
        self.core.has_empty_default = has;
        self
    }

    /// Mark keys as disabled (greyed out) regardless of selection
    pub fn with_disabled_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core.disabled_items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the current value
    pub fn set_value(&mut self, value: Value) {
        self.core.value = value;
    }

    /// Render records for the template layer, one per option in source
    /// order. Selection matching follows the single-select coercion rules.
    pub fn options(&self) -> Vec<OptionRender> {
        render::render_single(
            &self.source(),
            &self.core.value,
            &self.core.disabled_items,
            Some(self.core.empty_string.as_str()),
        )
    }

    /// Whether the current value matched any option at render time
    pub fn is_selected(&self) -> bool {
        self.options().iter().any(|record| record.selected)
    }

    /// Readonly complement: a lookup field over the same source, empty
    /// default included.
    pub fn into_readonly(self) -> LookupField {
        let source = self.source();
        LookupField::from_resolved(self.core.name, self.core.title, source, self.core.value)
    }
}

impl OptionBacked for DropdownField {
    fn core(&self) -> &SelectCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SelectCore {
        &mut self.core
    }

    fn multiple(&self) -> bool {
        false
    }
}
