use ca_types::Column;

/// Opaque handle to a frame the UI can render charts from.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct FrameHandle(String);

impl FrameHandle {
    #[inline]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Creates frames out of column sets. Implemented by the host.
///
/// Implementations must be deterministic: the same columns give the same handle.
pub trait FrameDriver {
    fn create_frame(&self, columns: &[Column]) -> FrameHandle;
}

/// A [`FrameDriver`] whose handles are a hash of the frame's columns.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashFrameDriver;

impl HashFrameDriver {
    /// Hashes the id, data handle and spec of each of `columns`, in order, plus any extra bytes.
    ///
    /// A rerun may write new data under the same column ids.
    pub fn content_hash(columns: &[Column], extra: &[u8]) -> u64 {
        let mut hasher = xxhash_rust::xxh64::Xxh64::new(0);
        for column in columns {
            hasher.update(column.id.as_str().as_bytes());
            hasher.update(&[0]);
            hasher.update(column.data.as_str().as_bytes());
            hasher.update(&[0]);
            // Annotations and domains are ordered maps, so this is deterministic.
            hasher.update(&serde_json::to_vec(&column.spec).unwrap_or_default());
            hasher.update(&[0]);
        }
        hasher.update(extra);
        hasher.digest()
    }
}

impl FrameDriver for HashFrameDriver {
    fn create_frame(&self, columns: &[Column]) -> FrameHandle {
        FrameHandle(format!("frame-{:016x}", Self::content_hash(columns, &[])))
    }
}
