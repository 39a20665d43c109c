use ca_types::Reference;

/// What the user has picked so far. Persisted by the host.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockArgs {
    /// Metadata columns to model the cell group composition with.
    #[serde(default)]
    pub covariate_refs: Vec<Reference>,

    /// How cells are grouped: a cluster or cell type annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_annotation_ref: Option<Reference>,

    /// The covariate whose groups are compared against each other.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast_factor: Option<Reference>,

    /// The value of the contrast factor the other groups are compared against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl BlockArgs {
    /// Whether the workflow can be run with these arguments.
    pub fn is_valid(&self) -> bool {
        self.cluster_annotation_ref.is_some()
            && !self.covariate_refs.is_empty()
            && self.contrast_factor.is_some()
            && self
                .baseline
                .as_deref()
                .is_some_and(|baseline| !baseline.trim().is_empty())
    }
}
