use crate::{ClassificationRule, ColumnSpec};

/// Well-known column, axis and domain names.
pub mod names {
    /// Sample metadata columns (one per metadata table column).
    pub const METADATA: &str = "pl7.app/metadata";

    /// Leiden clustering result, one cluster id per cell.
    pub const LEIDEN_CLUSTER: &str = "pl7.app/rna-seq/leidencluster";

    /// Cell type annotation, one cell type per cell.
    pub const CELL_TYPE: &str = "pl7.app/rna-seq/cellType";

    pub const COUNT_MATRIX: &str = "pl7.app/rna-seq/countMatrix";

    /// Domain key distinguishing raw from normalized count matrices.
    pub const NORMALIZED_DOMAIN: &str = "pl7.app/rna-seq/normalized";

    /// Statistical significance of a compositional change.
    pub const QVALUE: &str = "pl7.app/rna-seq/qvalue";

    /// The axis metadata is joined on.
    pub const SAMPLE_ID_AXIS: &str = "pl7.app/sampleId";
}

/// The semantic categories a column can be classified into.
///
/// This is the single place where classification rules are defined. Everything that filters
/// columns by meaning (option lists, metadata joins, significance exclusion) goes through
/// [`SemanticRole::rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum SemanticRole {
    /// Per-cell cluster or cell type labels, offered as the cell grouping.
    ClusterAnnotation,

    /// Per-sample metadata, offered as covariates and joined into chart frames.
    Metadata,

    /// Raw (non-normalized) count matrix.
    CountMatrix,

    /// Q-values of the compositional model, hidden when there is not enough statistical power.
    SignificanceScore,
}

impl SemanticRole {
    /// All roles, in precedence order: when more than one rule matches a spec,
    /// the earliest role wins.
    pub const ALL: [Self; 4] = [
        Self::ClusterAnnotation,
        Self::Metadata,
        Self::CountMatrix,
        Self::SignificanceScore,
    ];

    pub fn rule(self) -> ClassificationRule {
        match self {
            Self::ClusterAnnotation => {
                ClassificationRule::name_in([names::LEIDEN_CLUSTER, names::CELL_TYPE])
            }
            Self::Metadata => ClassificationRule::name(names::METADATA),
            Self::CountMatrix => ClassificationRule::name_with_domain(
                names::COUNT_MATRIX,
                names::NORMALIZED_DOMAIN,
                "false",
            ),
            Self::SignificanceScore => ClassificationRule::name(names::QVALUE),
        }
    }

    /// The first role, in [`Self::ALL`] order, whose rule matches.
    pub fn classify(spec: &ColumnSpec) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.rule().matches(spec))
    }
}
