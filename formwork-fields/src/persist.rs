//! Persistence seam between a normalized selection and the ORM.
//!
//! The record owner resolves where the field value lands (a relation, a
//! scalar field, or nowhere) and passes that [`PersistTarget`] in. This
//! layer never probes the record; it only writes.

use tracing::debug;

use crate::value::Selection;

/// A many-to-many or one-to-many link set owned by the external ORM.
pub trait Relation {
    type Error;

    /// Replace the relation's membership with exactly `ids`. Stale links
    /// are removed, new ones added.
    fn set_by_id_list(&mut self, ids: &[String]) -> Result<(), Self::Error>;

    /// Current member identifiers, in relation order.
    fn id_list(&self) -> Vec<String>;
}

/// An assignable scalar field on a record.
pub trait ScalarSlot {
    fn assign(&mut self, value: String);
}

impl ScalarSlot for String {
    fn assign(&mut self, value: String) {
        *self = value;
    }
}

/// Where a field's value lands on the target record.
///
/// Resolved once by the record owner, not probed at save time.
pub enum PersistTarget<'a, E> {
    /// Replace membership in a relation
    Relation(&'a mut dyn Relation<Error = E>),
    /// Write the canonical JSON-array encoding into a scalar field
    Scalar(&'a mut dyn ScalarSlot),
    /// Nothing persistable matches the field name; saving is a no-op,
    /// since forms may carry transient UI-only fields
    None,
}

/// Persist a selection into its target.
///
/// Relation failures bubble unchanged from the ORM; nothing here wraps or
/// retries them.
pub fn save<E>(selection: &Selection, target: PersistTarget<'_, E>) -> Result<(), E> {
    match target {
        PersistTarget::Relation(relation) => {
            debug!(ids = selection.len(), "replacing relation membership");
            relation.set_by_id_list(selection.keys())
        }
        PersistTarget::Scalar(slot) => {
            slot.assign(selection.to_json());
            Ok(())
        }
        PersistTarget::None => Ok(()),
    }
}
