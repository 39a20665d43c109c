/// Persisted table state (sorting, filters, hidden columns, grid layout, …).
///
/// Owned and interpreted by the UI. This crate only stores it and hands it to the
/// [`crate::TableDriver`] unchanged.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TableDisplayState(serde_json::Value);

impl Default for TableDisplayState {
    fn default() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }
}

impl From<serde_json::Value> for TableDisplayState {
    #[inline]
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl TableDisplayState {
    #[inline]
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}
