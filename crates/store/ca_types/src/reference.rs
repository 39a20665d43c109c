/// Points at one output of one upstream block.
///
/// Resolving a reference against a column pool yields at most one column.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub block_id: String,
    pub name: String,
}

impl Reference {
    pub fn new(block_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            block_id: block_id.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.block_id, self.name)
    }
}
