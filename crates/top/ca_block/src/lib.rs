//! The compositional analysis block.
//!
//! The host keeps the block's [`BlockArgs`] and [`UiState`], and on every change to them, to the
//! result pool or to the workflow outputs, hands a fresh [`Snapshot`] to
//! [`BlockModel::compute_outputs`]. Each output is a pure function of that snapshot, so
//! recomputing an unchanged snapshot gives byte-identical outputs.
//!
//! An output is in one of three states, see [`OutputState`]:
//! * pending, while its inputs are unset or not computed yet,
//! * ready, with a value,
//! * failed, when its inputs have an unexpected shape. Other outputs are unaffected.

mod analysis_method;
mod args;
mod config;
mod model;
mod outputs;
mod snapshot;
mod ui_state;

pub use self::{
    analysis_method::AnalysisMethod,
    args::BlockArgs,
    config::{BlockConfig, CONFIG_ENV_VAR, ConfigError, WorkflowOutputNames},
    model::{BlockModel, REPLICATE_WARNING, Section},
    outputs::{BlockOutputs, OutputError, OutputResult, OutputSpec, OutputState, OutputValue},
    snapshot::Snapshot,
    ui_state::{GraphState, UiState},
};
