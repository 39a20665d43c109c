use std::collections::BTreeMap;

use ca_frame::FrameHandle;
use ca_pool::{ColumnOption, PoolError};
use ca_types::ColumnIdAndSpec;
use ca_view_table::TableOutput;

use crate::Snapshot;

/// The value of a computed output.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum OutputValue {
    Options(Vec<ColumnOption>),
    Strings(Vec<String>),
    Table(TableOutput),
    Frame(FrameHandle),
    Columns(Vec<ColumnIdAndSpec>),
    Bool(bool),
    Text(String),
}

/// An output could not be computed because its inputs have an unexpected shape.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("Couldn't read the baseline values")]
    Baseline(#[from] PoolError),

    #[error("Workflow output {output:?} should be a JSON string, got {value}")]
    NotAString {
        output: String,
        value: serde_json::Value,
    },
}

/// `Ok(None)` while the inputs of an output are not available yet.
pub type OutputResult = Result<Option<OutputValue>, OutputError>;

/// The current state of one output.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum OutputState {
    /// Nothing to show yet.
    Pending,

    Ready { value: OutputValue },

    /// The output's inputs are broken. Only ever affects this one output.
    Failed { error: String },
}

impl OutputState {
    #[inline]
    pub fn value(&self) -> Option<&OutputValue> {
        match self {
            Self::Ready { value } => Some(value),
            Self::Pending | Self::Failed { .. } => None,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// A named output and the function computing it.
#[derive(Clone, Copy)]
pub struct OutputSpec {
    pub name: &'static str,
    pub compute: fn(&Snapshot<'_>) -> OutputResult,
}

impl OutputSpec {
    pub const fn new(name: &'static str, compute: fn(&Snapshot<'_>) -> OutputResult) -> Self {
        Self { name, compute }
    }

    /// Never fails: errors become [`OutputState::Failed`], and are logged.
    pub fn evaluate(&self, snapshot: &Snapshot<'_>) -> OutputState {
        ca_tracing::profile_scope!("evaluate_output", self.name);

        match (self.compute)(snapshot) {
            Ok(Some(value)) => OutputState::Ready { value },
            Ok(None) => OutputState::Pending,
            Err(err) => {
                let error = ca_error::format_ref(&err);
                // Once per distinct message, so an embedded value that changes logs once per value.
                ca_log::warn_once!("Output {:?} failed: {error}", self.name);
                OutputState::Failed { error }
            }
        }
    }
}

impl std::fmt::Debug for OutputSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputSpec").field("name", &self.name).finish_non_exhaustive()
    }
}

/// The state of every output, by name.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct BlockOutputs {
    outputs: BTreeMap<&'static str, OutputState>,
}

impl BlockOutputs {
    #[inline]
    pub fn get(&self, name: &str) -> Option<&OutputState> {
        self.outputs.get(name)
    }

    /// The value of `name`, if it is ready.
    #[inline]
    pub fn value(&self, name: &str) -> Option<&OutputValue> {
        self.get(name).and_then(OutputState::value)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &OutputState)> {
        self.outputs.iter().map(|(name, state)| (*name, state))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl FromIterator<(&'static str, OutputState)> for BlockOutputs {
    fn from_iter<T: IntoIterator<Item = (&'static str, OutputState)>>(iter: T) -> Self {
        Self {
            outputs: iter.into_iter().collect(),
        }
    }
}
