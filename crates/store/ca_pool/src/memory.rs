use ahash::HashMap;
use ca_types::{AxisValue, DataHandle};

use crate::DataStore;

#[derive(Debug, Default, Clone)]
struct StoredData {
    json: Option<serde_json::Value>,
    partition_keys: Option<Vec<Vec<AxisValue>>>,
}

/// A [`DataStore`] backed by plain in-memory maps.
///
/// Handles that were never inserted behave like data that hasn't been computed yet.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: HashMap<DataHandle, StoredData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_json(&mut self, handle: impl Into<DataHandle>, json: serde_json::Value) {
        self.data.entry(handle.into()).or_default().json = Some(json);
    }

    pub fn insert_partition_keys(
        &mut self,
        handle: impl Into<DataHandle>,
        partition_keys: Vec<Vec<AxisValue>>,
    ) {
        self.data.entry(handle.into()).or_default().partition_keys = Some(partition_keys);
    }

    #[inline]
    pub fn with_json(mut self, handle: impl Into<DataHandle>, json: serde_json::Value) -> Self {
        self.insert_json(handle, json);
        self
    }

    #[inline]
    pub fn with_partition_keys(
        mut self,
        handle: impl Into<DataHandle>,
        partition_keys: Vec<Vec<AxisValue>>,
    ) -> Self {
        self.insert_partition_keys(handle, partition_keys);
        self
    }
}

impl DataStore for MemoryStore {
    fn data_as_json(&self, handle: &DataHandle) -> Option<serde_json::Value> {
        self.data.get(handle)?.json.clone()
    }

    fn unique_partition_keys(&self, handle: &DataHandle) -> Option<Vec<Vec<AxisValue>>> {
        self.data.get(handle)?.partition_keys.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_handles_are_not_ready() {
        let store = MemoryStore::new().with_json("h1", serde_json::json!({ "data": {} }));

        assert!(store.data_as_json(&"h1".into()).is_some());
        assert!(store.unique_partition_keys(&"h1".into()).is_none());
        assert!(store.data_as_json(&"h2".into()).is_none());
    }
}
