use crate::ColumnSpec;

/// Decides whether a [`ColumnSpec`] belongs to some semantic category.
///
/// Matching is exact: there is no partial or fuzzy name matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum ClassificationRule {
    /// The column name must be exactly this.
    Name { name: String },

    /// The column name must be one of these.
    NameIn { names: Vec<String> },

    /// The column name must be exactly this, and the column's domain must map `key` to `value`.
    NameWithDomain {
        name: String,
        key: String,
        value: String,
    },
}

impl ClassificationRule {
    #[inline]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name { name: name.into() }
    }

    pub fn name_in<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self::NameIn {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn name_with_domain(
        name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::NameWithDomain {
            name: name.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Total, side-effect free classification.
    ///
    /// A spec that is not a column, or that lacks the domain entry a rule requires, simply
    /// doesn't match.
    pub fn matches(&self, spec: &ColumnSpec) -> bool {
        if !spec.is_column() {
            return false;
        }

        match self {
            Self::Name { name } => spec.name == *name,

            Self::NameIn { names } => names.iter().any(|name| spec.name == *name),

            Self::NameWithDomain { name, key, value } => {
                spec.name == *name && spec.domain_value(key) == Some(value.as_str())
            }
        }
    }
}

impl std::fmt::Display for ClassificationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name { name } => write!(f, "name == {name:?}"),
            Self::NameIn { names } => {
                let names = names.iter().map(|name| format!("{name:?}"));
                write!(f, "name in [{}]", itertools::join(names, ", "))
            }
            Self::NameWithDomain { name, key, value } => {
                write!(f, "name == {name:?} && domain[{key:?}] == {value:?}")
            }
        }
    }
}
