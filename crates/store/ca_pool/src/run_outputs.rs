use std::collections::BTreeMap;

use ca_types::ColumnSet;

/// One named output of the workflow run.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOutput {
    /// The columns of this output, once they have been computed.
    #[serde(default)]
    pub columns: Option<ColumnSet>,

    /// The output's value, for outputs that are plain JSON rather than columns.
    #[serde(default)]
    pub json: Option<serde_json::Value>,

    /// Handle to the log of the workflow step producing this output.
    #[serde(default)]
    pub log_handle: Option<String>,

    /// Whether this output is final, either computed or failed.
    #[serde(default)]
    pub ready_or_error: bool,
}

impl ResolvedOutput {
    pub fn from_columns(columns: impl Into<ColumnSet>) -> Self {
        Self {
            columns: Some(columns.into()),
            ready_or_error: true,
            ..Default::default()
        }
    }

    pub fn from_json(json: serde_json::Value) -> Self {
        Self {
            json: Some(json),
            ready_or_error: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn columns(&self) -> Option<&ColumnSet> {
        self.columns.as_ref()
    }

    #[inline]
    pub fn data_as_json(&self) -> Option<&serde_json::Value> {
        self.json.as_ref()
    }
}

/// Everything the block's current workflow run has produced so far.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutputs {
    #[serde(default)]
    outputs: BTreeMap<String, ResolvedOutput>,

    /// `true` once the whole run has either finished or failed.
    #[serde(default)]
    ready_or_error: bool,
}

impl RunOutputs {
    pub fn new(ready_or_error: bool) -> Self {
        Self {
            outputs: BTreeMap::new(),
            ready_or_error,
        }
    }

    #[inline]
    pub fn with_output(mut self, name: impl Into<String>, output: ResolvedOutput) -> Self {
        self.outputs.insert(name.into(), output);
        self
    }

    /// `None` if the workflow has no such output (yet).
    #[inline]
    pub fn resolve(&self, name: &str) -> Option<&ResolvedOutput> {
        self.outputs.get(name)
    }

    #[inline]
    pub fn is_ready_or_error(&self) -> bool {
        self.ready_or_error
    }
}
