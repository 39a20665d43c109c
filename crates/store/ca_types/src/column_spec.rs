use std::collections::BTreeMap;

/// What kind of object a spec describes.
///
/// Only [`ObjectKind::PColumn`] specs describe columns; everything else in a result pool
/// (files, blobs, …) never classifies as anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ObjectKind {
    #[default]
    PColumn,

    #[serde(other)]
    Other,
}

/// The type of the values stored in a column or along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ValueType {
    Int,
    Long,
    Float,
    Double,
    String,
    Bytes,
}

/// Describes one dimension of a column's index, e.g. the sample identifier.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    /// Namespaced axis name, e.g. `pl7.app/sampleId`.
    pub name: String,

    #[serde(rename = "type")]
    pub value_type: ValueType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl AxisSpec {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            domain: None,
            annotations: None,
        }
    }
}

/// Immutable descriptor of a column.
///
/// Name and domain are the only inputs to classification, see [`crate::ClassificationRule`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    #[serde(default)]
    pub kind: ObjectKind,

    /// Namespaced column name, e.g. `pl7.app/metadata`.
    pub name: String,

    pub value_type: ValueType,

    #[serde(default)]
    pub axes_spec: Vec<AxisSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            kind: ObjectKind::PColumn,
            name: name.into(),
            value_type,
            axes_spec: Vec::new(),
            domain: None,
            annotations: None,
        }
    }

    #[inline]
    pub fn with_axis(mut self, axis: AxisSpec) -> Self {
        self.axes_spec.push(axis);
        self
    }

    #[inline]
    pub fn with_domain(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.domain
            .get_or_insert_with(Default::default)
            .insert(key.into(), value.into());
        self
    }

    #[inline]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations
            .get_or_insert_with(Default::default)
            .insert(key.into(), value.into());
        self
    }

    #[inline]
    pub fn is_column(&self) -> bool {
        self.kind == ObjectKind::PColumn
    }

    /// Looks up a domain entry. `None` both when the key is absent and when there is no domain.
    #[inline]
    pub fn domain_value(&self, key: &str) -> Option<&str> {
        self.domain.as_ref()?.get(key).map(String::as_str)
    }

    #[inline]
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.as_ref()?.get(key).map(String::as_str)
    }

    /// The label the column carries itself, if any.
    #[inline]
    pub fn native_label(&self) -> Option<&str> {
        self.annotation(crate::LABEL_ANNOTATION)
    }

    /// Does any of this column's axes have the given name?
    #[inline]
    pub fn has_axis(&self, axis_name: &str) -> bool {
        self.axes_spec.iter().any(|axis| axis.name == axis_name)
    }
}
