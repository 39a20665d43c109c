use ca_types::{ClassificationRule, Column, Reference};

/// One object visible in the result pool.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolEntry {
    /// How the user (and the arguments) refer to this column.
    #[serde(rename = "ref")]
    pub reference: Reference,

    #[serde(rename = "obj")]
    pub column: Column,

    /// Label of the block or run that produced this column, e.g. `Clustering #2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_label: Option<String>,
}

impl PoolEntry {
    pub fn new(reference: Reference, column: Column) -> Self {
        Self {
            reference,
            column,
            upstream_label: None,
        }
    }

    #[inline]
    pub fn with_upstream_label(mut self, label: impl Into<String>) -> Self {
        self.upstream_label = Some(label.into());
        self
    }
}

/// All the columns visible to the block at one point in time.
///
/// The pool is rebuilt from scratch by the host on every recomputation; it is never
/// mutated here. An empty pool is also what a not-yet-available pool looks like.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ColumnPool {
    entries: Vec<PoolEntry>,
}

impl From<Vec<PoolEntry>> for ColumnPool {
    #[inline]
    fn from(entries: Vec<PoolEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<PoolEntry> for ColumnPool {
    #[inline]
    fn from_iter<I: IntoIterator<Item = PoolEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl ColumnPool {
    #[inline]
    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every column in the pool, in pool order.
    #[inline]
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.entries.iter().map(|entry| &entry.column)
    }

    /// Resolves a reference. `None` if nothing in the pool answers to it (yet).
    pub fn column_by_ref(&self, reference: &Reference) -> Option<&Column> {
        self.entries
            .iter()
            .find(|entry| entry.reference == *reference)
            .map(|entry| &entry.column)
    }

    /// The entries whose column matches `rule`, in pool order.
    pub fn matching<'a>(
        &'a self,
        rule: &'a ClassificationRule,
    ) -> impl Iterator<Item = &'a PoolEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| rule.matches(&entry.column.spec))
    }
}
