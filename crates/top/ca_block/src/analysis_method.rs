/// The statistical method a workflow run ended up using.
///
/// The workflow falls back from compositional modelling to plain fold changes when some group
/// of the contrast factor has fewer than two replicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisMethod {
    /// Bayesian compositional model (scCODA). Comes with q-values.
    Sccoda,

    /// Log2 fold changes against the baseline. There are no q-values.
    FoldChange,

    Other(String),
}

impl AnalysisMethod {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sccoda => "sccoda",
            Self::FoldChange => "foldChange",
            Self::Other(method) => method,
        }
    }

    /// Whether there were too few replicates for significance testing.
    #[inline]
    pub fn lacks_statistical_power(&self) -> bool {
        *self == Self::FoldChange
    }
}

impl From<&str> for AnalysisMethod {
    fn from(method: &str) -> Self {
        match method {
            "sccoda" => Self::Sccoda,
            "foldChange" => Self::FoldChange,
            _ => Self::Other(method.to_owned()),
        }
    }
}

impl std::fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}
