use ca_pool::DataStore;
use ca_types::ColumnSet;

use crate::{Sheet, TableDisplayState, TableDriver, TableHandle};

/// A table ready for display, with one sheet per axis of its anchor column.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TableOutput {
    pub table: TableHandle,
    pub sheets: Vec<Sheet>,
}

/// Builds the table for `columns`.
///
/// `None` while there is nothing to show: no columns yet, or the anchor's partition keys
/// are not available yet. The anchor is always `columns[0]`.
pub fn assemble_table(
    columns: &ColumnSet,
    display_state: &TableDisplayState,
    store: &dyn DataStore,
    driver: &dyn TableDriver,
) -> Option<TableOutput> {
    ca_tracing::profile_function!();

    let anchor = columns.anchor()?;
    let partition_keys = store.unique_partition_keys(&anchor.data)?;

    let axes = &anchor.spec.axes_spec;
    if partition_keys.len() != axes.len() {
        ca_log::warn_once!(
            "Anchor column {} has {} axes but {} partition key sets",
            anchor.id,
            axes.len(),
            partition_keys.len()
        );
    }

    let sheets = axes
        .iter()
        .zip(partition_keys)
        .map(|(axis, values)| Sheet::new(axis.clone(), values))
        .collect();

    Some(TableOutput {
        table: driver.create_table(columns, display_state),
        sheets,
    })
}
