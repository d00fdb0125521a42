//! Checkbox-set field: a logical group of checkboxes

use serde_json::Value;
use tracing::debug;

use super::{OptionBacked, SelectCore};
use crate::error::Result;
use crate::options::SourceProjection;
use crate::persist::{self, PersistTarget, Relation};
use crate::render::{self, OptionRender};

/// Displays a set of checkboxes as a logical group. Always multi-valued.
///
/// Saving goes through a [`PersistTarget`]: a relation gets its membership
/// replaced with the selected keys; a scalar field gets the canonical
/// JSON-array encoding.
#[derive(Debug, Clone)]
pub struct CheckboxSetField {
    core: SelectCore,
    default_items: Vec<String>,
}

impl CheckboxSetField {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        source: &Value,
    ) -> Result<Self> {
        Self::new_with_projection(name, title, source, SourceProjection::default())
    }

    pub fn new_with_projection(
        name: impl Into<String>,
        title: impl Into<String>,
        source: &Value,
        projection: SourceProjection,
    ) -> Result<Self> {
        Ok(Self {
            core: SelectCore::new(name, title, source, projection)?,
            default_items: Vec::new(),
        })
    }

    /// Keys checked and locked regardless of the current value.
    /// Keys marked disabled separately can still be defaulted here.
    pub fn with_default_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_items = items.into_iter().map(Into::into).collect();
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

    pub fn default_items(&self) -> &[String] {
        &self.default_items
    }

    /// Set the current value
    pub fn set_value(&mut self, value: Value) {
        self.core.value = value;
    }

    /// When no value was set, adopt the membership of the record's
    /// relation as the current value.
    pub fn load_from_relation<E>(&mut self, relation: &dyn Relation<Error = E>) {
        if !self.selection().is_empty() {
            return;
        }
        let ids = relation.id_list();
        debug!(field = %self.core.name, ids = ids.len(), "loaded value from relation");
        self.core.value = Value::Array(ids.into_iter().map(Value::String).collect());
    }

    /// Render records for the template layer, one per option in source
    /// order. Defaulted keys render checked and locked; a disabled field
    /// locks every option.
    pub fn options(&self) -> Vec<OptionRender> {
        let mut records = render::render(
            &self.source(),
            &self.selection(),
            &self.core.disabled_items,
            &self.default_items,
            None,
        );
        if self.core.disabled {
            for record in &mut records {
                record.disabled = true;
            }
        }
        records
    }

    /// The canonical persisted form: a JSON array of the selected keys
    pub fn data_value(&self) -> String {
        self.selection().to_json()
    }

    /// Persist the current selection into the resolved target.
    /// Relation failures bubble unchanged from the ORM.
    pub fn save_into<E>(&self, target: PersistTarget<'_, E>) -> std::result::Result<(), E> {
        persist::save(&self.selection(), target)
    }

    /// A clone of this field with every option locked
    pub fn to_disabled(&self) -> Self {
        let mut clone = self.clone();
        clone.core.disabled = true;
        clone
    }
}

impl OptionBacked for CheckboxSetField {
    fn core(&self) -> &SelectCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SelectCore {
        &mut self.core
    }

    fn multiple(&self) -> bool {
        // All checkbox set fields allow multiple selection
        true
    }

    fn has_empty_default(&self) -> bool {
        // Checkbox sets ignore any attempt to assign a blank default
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn topics() -> Value {
        json!({"1": "Technology", "2": "Gardening", "3": "Cooking", "4": "Sports"})
    }

    #[test]
    fn defaults_render_checked_and_locked() {
        let mut field = CheckboxSetField::new("Topics", "Topics", &topics())
            .unwrap()
            .with_default_items(["2"]);
        field.set_value(json!(["1"]));

        let records = field.options();
        assert!(records[0].selected && !records[0].disabled);
        assert!(records[1].selected && records[1].disabled);
        assert!(!records[2].selected && !records[2].disabled);
    }

    #[test]
    fn legacy_string_value_is_readable() {
        let mut field = CheckboxSetField::new("Topics", "Topics", &topics()).unwrap();
        field.set_value(json!("1,3"));
        assert_eq!(field.selection().keys(), ["1", "3"]);
    }

    #[test]
    fn data_value_is_canonical_json() {
        let mut field = CheckboxSetField::new("Topics", "Topics", &topics()).unwrap();
        field.set_value(json!("1,3"));
        assert_eq!(field.data_value(), "[\"1\",\"3\"]");
    }

    #[test]
    fn empty_default_is_always_off() {
        let field = CheckboxSetField::new("Topics", "Topics", &topics()).unwrap();
        assert!(!field.has_empty_default());
        assert_eq!(field.source().len(), 4);
    }

    #[test]
    fn disabled_transformation_locks_every_option() {
        let field = CheckboxSetField::new("Topics", "Topics", &topics()).unwrap();
        let disabled = field.to_disabled();
        assert!(disabled.options().iter().all(|r| r.disabled));
        // the original is untouched
        assert!(field.options().iter().all(|r| !r.disabled));
    }

    #[test]
    fn readonly_value_projects_labels() {
        let mut field = CheckboxSetField::new("Topics", "Topics", &topics()).unwrap();
        field.set_value(json!(["3", "1"]));
        assert_eq!(field.readonly_value(), "Cooking, Technology");
    }
}
