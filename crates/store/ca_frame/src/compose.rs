use ca_pool::ColumnPool;
use ca_types::{ClassificationRule, Column, ColumnSet};

/// The pool columns that match `metadata_rule` and have an axis named `join_axis`,
/// in pool order.
///
/// The iterator only borrows the pool.
pub fn joinable_metadata<'p>(
    pool: &'p ColumnPool,
    join_axis: &str,
    metadata_rule: &ClassificationRule,
) -> impl Iterator<Item = &'p Column> + use<'p> {
    let join_axis = join_axis.to_owned();
    let metadata_rule = metadata_rule.clone();

    pool.columns().filter(move |column| {
        metadata_rule.matches(&column.spec) && column.spec.has_axis(&join_axis)
    })
}

/// `raw`, followed by every joinable metadata column of the pool.
///
/// * `raw` keeps its order, metadata is appended in pool order.
/// * An empty `raw` stays empty: metadata alone is not a result.
/// * Nothing is de-duplicated. A metadata column that already is in `raw` shows up twice.
pub fn compose(
    raw: ColumnSet,
    pool: &ColumnPool,
    join_axis: &str,
    metadata_rule: &ClassificationRule,
) -> ColumnSet {
    ca_tracing::profile_function!();

    if raw.is_empty() {
        return raw;
    }

    let mut composed = raw;
    let num_raw = composed.len();
    composed.extend(joinable_metadata(pool, join_axis, metadata_rule).cloned());

    ca_log::trace!(
        "Joined {} metadata column(s) on {join_axis:?} into {num_raw} raw column(s)",
        composed.len() - num_raw
    );

    composed
}

/// Drops the columns matching `rule` while a sibling indicator output equals `when`.
///
/// The indicator is produced independently of the column set, so this must be applied on
/// every recomposition rather than cached with the columns.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConditionalExclusion {
    pub rule: ClassificationRule,
    pub when: serde_json::Value,
}

impl ConditionalExclusion {
    pub fn new(rule: ClassificationRule, when: impl Into<serde_json::Value>) -> Self {
        Self {
            rule,
            when: when.into(),
        }
    }

    /// An indicator that is not available yet never triggers the exclusion.
    #[inline]
    pub fn is_active(&self, indicator: Option<&serde_json::Value>) -> bool {
        indicator == Some(&self.when)
    }

    pub fn apply(&self, mut raw: ColumnSet, indicator: Option<&serde_json::Value>) -> ColumnSet {
        if self.is_active(indicator) {
            raw.retain(|column| !self.rule.matches(&column.spec));
        }
        raw
    }
}
