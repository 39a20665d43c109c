//! The data model shared by every part of the compositional analysis block.
//!
//! A [`Column`] is an `(id, spec, data)` triple produced by some upstream block or by this
//! block's own workflow. Columns are never mutated here: they are classified with
//! [`ClassificationRule`]s, re-grouped into [`ColumnSet`]s and handed back to the UI.
//!
//! Classification is centralized in [`SemanticRole`], a single precedence-ordered table of
//! rules, so that option lists and metadata joins can never disagree about what counts as,
//! say, a metadata column.

mod axis_value;
mod column;
mod column_spec;
mod reference;
mod roles;
mod rule;

pub use self::{
    axis_value::AxisValue,
    column::{Column, ColumnId, ColumnIdAndSpec, ColumnSet, DataHandle},
    column_spec::{AxisSpec, ColumnSpec, ObjectKind, ValueType},
    reference::Reference,
    roles::{SemanticRole, names},
    rule::ClassificationRule,
};

/// The annotation key under which columns carry a human-readable label.
pub const LABEL_ANNOTATION: &str = "pl7.app/label";
