use std::collections::BTreeMap;

use itertools::Itertools as _;

use ca_types::Reference;

use crate::{ColumnPool, DataStore, PoolError, PoolResult};

/// The distinct values of the categorical column `reference` points at.
///
/// The column's data is expected to look like `{ "data": { "<key>": "<value>", … } }`.
///
/// Returns `Ok(None)` while the reference doesn't resolve or the data isn't there yet, which
/// includes a missing or `null` `"data"` field. Returns an error only if the data is there but
/// doesn't have that shape. Duplicates are collapsed; the order of the values carries no meaning.
pub fn extract_baseline_values(
    reference: &Reference,
    pool: &ColumnPool,
    store: &dyn DataStore,
) -> PoolResult<Option<Vec<String>>> {
    ca_tracing::profile_function!();

    let Some(column) = pool.column_by_ref(reference) else {
        ca_log::debug!("Baseline column {reference} is not in the result pool (yet)");
        return Ok(None);
    };

    let Some(json) = store.data_as_json(&column.data) else {
        return Ok(None);
    };

    let serde_json::Value::Object(mut object) = json else {
        return Err(PoolError::NotAnObject {
            column: column.id.clone(),
        });
    };

    // An absent and a null `data` both mean the values haven't been written yet.
    let Some(values) = object.remove("data").filter(|values| !values.is_null()) else {
        return Ok(None);
    };

    let values: BTreeMap<String, String> =
        serde_json::from_value(values).map_err(|source| PoolError::NotAStringMapping {
            column: column.id.clone(),
            source,
        })?;

    Ok(Some(values.into_values().unique().collect()))
}
