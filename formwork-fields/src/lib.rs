//! Form-field widgets for server-rendered pages
//!
//! `formwork-fields` implements the selectable and numeric field types a
//! form builds from: dropdowns, checkbox sets, read-only lookups, and
//! localized numeric inputs. Fields are short-lived (one per render pass)
//! and hand plain render records to an external template layer; persistence
//! goes through a target resolved by the record's owner.
//!
//! # Architecture
//!
//! - **Normalize once**: every value encoding (scalar, list, JSON array
//!   string, legacy comma string, record list) becomes a [`Selection`]
//! - **Capability over hierarchy**: variants share a [`SelectCore`]; being
//!   multi-valued is the [`OptionBacked::multiple`] flag, not a subclass
//! - **No probing at save time**: the caller resolves a [`PersistTarget`]
//!   once and the persistence layer only writes through it
//! - **Explicit locale**: numeric parsing threads a [`NumberFormat`]
//!   parameter, never ambient state

pub mod error;
pub mod numeric;
pub mod options;
pub mod persist;
pub mod readonly;
pub mod render;
pub mod select;
pub mod value;

pub use error::{FieldsError, Result};
pub use numeric::{NumberFormat, NumericField};
pub use options::{
    resolve, resolve_with_empty_default, with_empty_default, OptionMap, SourceProjection,
};
pub use persist::{save, PersistTarget, Relation, ScalarSlot};
pub use readonly::{project, NONE_MARKER};
pub use render::{render, render_single, value_matches, OptionRender};
pub use select::{
    CheckboxSetField, DropdownField, LookupDisplay, LookupField, OptionBacked, SelectCore,
};
pub use value::Selection;
