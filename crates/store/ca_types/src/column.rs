use std::sync::Arc;

use crate::ColumnSpec;

/// Stable, opaque column identifier, unique within a resolved column set.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ColumnId(Arc<str>);

impl ColumnId {
    #[inline]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ColumnId {
    #[inline]
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Opaque reference to a column's materialized values, resolved by a `DataStore`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct DataHandle(Arc<str>);

impl DataHandle {
    #[inline]
    pub fn new(handle: impl AsRef<str>) -> Self {
        Self(handle.as_ref().into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DataHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for DataHandle {
    #[inline]
    fn from(handle: &str) -> Self {
        Self::new(handle)
    }
}

/// A column as produced by the workflow or by an upstream block.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub spec: ColumnSpec,
    pub data: DataHandle,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, spec: ColumnSpec, data: impl Into<DataHandle>) -> Self {
        Self {
            id: id.into(),
            spec,
            data: data.into(),
        }
    }

    pub fn id_and_spec(&self) -> ColumnIdAndSpec {
        ColumnIdAndSpec {
            column_id: self.id.clone(),
            spec: self.spec.clone(),
        }
    }
}

/// A column's identity without its data, used for chart defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnIdAndSpec {
    pub column_id: ColumnId,
    pub spec: ColumnSpec,
}

/// An ordered set of columns.
///
/// Order only matters for the first column, the anchor, whose axes drive partitioning
/// (see [`Self::anchor`]).
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl std::ops::Deref for ColumnSet {
    type Target = [Column];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.columns
    }
}

impl From<Vec<Column>> for ColumnSet {
    #[inline]
    fn from(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}

impl FromIterator<Column> for ColumnSet {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ColumnSet {
    type Item = Column;
    type IntoIter = std::vec::IntoIter<Column>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

impl Extend<Column> for ColumnSet {
    #[inline]
    fn extend<I: IntoIterator<Item = Column>>(&mut self, iter: I) {
        self.columns.extend(iter);
    }
}

impl ColumnSet {
    /// The column whose axes determine the partition structure of a table.
    #[inline]
    pub fn anchor(&self) -> Option<&Column> {
        self.columns.first()
    }

    pub fn ids_and_specs(&self) -> Vec<ColumnIdAndSpec> {
        self.columns.iter().map(Column::id_and_spec).collect()
    }

    /// Keeps only the columns for which `keep` returns true, preserving order.
    #[inline]
    pub fn retain(&mut self, keep: impl FnMut(&Column) -> bool) {
        self.columns.retain(keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueType;

    fn column(id: &str) -> Column {
        Column::new(id, ColumnSpec::new("pl7.app/test", ValueType::Int), id)
    }

    #[test]
    fn anchor_is_first_column() {
        assert_eq!(ColumnSet::default().anchor(), None);

        let set: ColumnSet = vec![column("a"), column("b")].into();
        assert_eq!(set.anchor().map(|c| c.id.as_str()), Some("a"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ids_and_specs_keep_order() {
        let set: ColumnSet = vec![column("b"), column("a")].into();
        let ids = set
            .ids_and_specs()
            .into_iter()
            .map(|c| c.column_id.to_string())
            .collect::<Vec<_>>();
        similar_asserts::assert_eq!(ids, vec!["b".to_owned(), "a".to_owned()]);
    }

    #[test]
    fn ids_and_handles_are_plain_json_strings() {
        let column: Column = serde_json::from_value(serde_json::json!({
            "id": "abundance",
            "spec": { "name": "pl7.app/rna-seq/abundance", "valueType": "Double" },
            "data": "run1-data",
        }))
        .unwrap();

        assert_eq!(column.id, ColumnId::new("abundance"));
        assert_eq!(column.data.as_str(), "run1-data");

        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(json["id"], "abundance");
        assert_eq!(json["data"], "run1-data");
    }
}
