use ca_types::{ClassificationRule, Reference};

use crate::{ColumnPool, PoolEntry};

/// How option labels are derived, see [`resolve_options`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OptionsConfig {
    /// Use the label the column carries itself, when it has one.
    pub include_native_label: bool,

    /// Append the native label to the upstream label instead of replacing it, so that
    /// same-named columns from different upstream runs stay distinguishable.
    pub add_label_as_suffix: bool,
}

impl OptionsConfig {
    /// Native labels, suffixed to the upstream label.
    pub const NATIVE_LABEL_AS_SUFFIX: Self = Self {
        include_native_label: true,
        add_label_as_suffix: true,
    };
}

/// One entry of a select box.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColumnOption {
    #[serde(rename = "ref")]
    pub reference: Reference,
    pub label: String,
}

/// The options offered for every pool column matching `rule`, in pool order.
///
/// An empty pool, or one without matches, gives an empty list: that's what the user sees
/// while upstream blocks are still computing.
pub fn resolve_options(
    pool: &ColumnPool,
    rule: &ClassificationRule,
    config: OptionsConfig,
) -> Vec<ColumnOption> {
    ca_tracing::profile_function!();

    pool.matching(rule)
        .map(|entry| ColumnOption {
            reference: entry.reference.clone(),
            label: option_label(entry, config),
        })
        .collect()
}

fn option_label(entry: &PoolEntry, config: OptionsConfig) -> String {
    let base = entry
        .upstream_label
        .as_deref()
        .unwrap_or(&entry.column.spec.name);

    let native = config
        .include_native_label
        .then(|| entry.column.spec.native_label())
        .flatten();

    match native {
        None => base.to_owned(),
        Some(native) if config.add_label_as_suffix => format!("{base} / {native}"),
        Some(native) => native.to_owned(),
    }
}
