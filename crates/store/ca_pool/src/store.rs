use ca_types::{AxisValue, DataHandle};

/// Resolves data handles to materialized column data.
///
/// Implemented by the host. Every method returns `None` while the data is not available
/// yet; callers treat that as a transient state and try again on the next snapshot.
pub trait DataStore {
    /// The column's data, decoded as JSON.
    fn data_as_json(&self, handle: &DataHandle) -> Option<serde_json::Value>;

    /// For every axis of the column, the distinct values found along it.
    fn unique_partition_keys(&self, handle: &DataHandle) -> Option<Vec<Vec<AxisValue>>>;
}
