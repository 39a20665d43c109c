//! Read-only access to everything upstream of the compositional analysis block.
//!
//! * [`ColumnPool`]: the columns of all upstream blocks, as one snapshot.
//! * [`RunOutputs`]: what this block's own workflow run has produced so far.
//! * [`DataStore`]: resolves a column's data handle to its materialized values.
//!
//! On top of these live the two pool-level resolvers: [`resolve_options`] for the option
//! lists offered to the user, and [`extract_baseline_values`] for the baseline selector.

mod baseline;
mod memory;
mod options;
mod pool;
mod run_outputs;
mod store;

pub use self::{
    baseline::extract_baseline_values,
    memory::MemoryStore,
    options::{ColumnOption, OptionsConfig, resolve_options},
    pool::{ColumnPool, PoolEntry},
    run_outputs::{ResolvedOutput, RunOutputs},
    store::DataStore,
};

use ca_types::ColumnId;

/// The upstream producer broke its data contract.
///
/// Not-ready states are never errors: they are `None`.
#[derive(thiserror::Error, Debug)]
pub enum PoolError {
    #[error("Data of column '{column}' is not a JSON object")]
    NotAnObject { column: ColumnId },

    #[error("Data of column '{column}' is not a mapping of strings to strings")]
    NotAStringMapping {
        column: ColumnId,

        #[source]
        source: serde_json::Error,
    },
}

pub type PoolResult<T> = Result<T, PoolError>;
