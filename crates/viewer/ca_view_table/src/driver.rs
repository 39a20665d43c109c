use ca_frame::HashFrameDriver;
use ca_types::Column;

use crate::TableDisplayState;

/// Opaque handle to a table the UI can render.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TableHandle(String);

impl TableHandle {
    #[inline]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TableHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Creates tables out of column sets. Implemented by the host.
pub trait TableDriver {
    fn create_table(&self, columns: &[Column], display_state: &TableDisplayState) -> TableHandle;
}

impl TableDriver for HashFrameDriver {
    fn create_table(&self, columns: &[Column], display_state: &TableDisplayState) -> TableHandle {
        let state = display_state.as_json().to_string();
        TableHandle::new(format!(
            "table-{:016x}",
            Self::content_hash(columns, state.as_bytes())
        ))
    }
}
