use ca_frame::FrameDriver;
use ca_pool::{ColumnPool, DataStore, RunOutputs};
use ca_view_table::TableDriver;

use crate::{BlockArgs, BlockConfig, UiState};

static DEFAULT_CONFIG: BlockConfig = BlockConfig::const_default();

/// Everything outputs are computed from.
///
/// Outputs are pure functions of a snapshot: an unchanged snapshot gives identical outputs.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    pub args: &'a BlockArgs,
    pub ui_state: &'a UiState,

    /// Columns of all upstream blocks.
    pub pool: &'a ColumnPool,

    /// `None` until the workflow has been started.
    pub outputs: Option<&'a RunOutputs>,

    pub store: &'a dyn DataStore,
    pub frames: &'a dyn FrameDriver,
    pub tables: &'a dyn TableDriver,
    pub config: &'a BlockConfig,
}

impl<'a> Snapshot<'a> {
    /// A snapshot without workflow outputs, using the default config.
    pub fn new<D>(
        args: &'a BlockArgs,
        ui_state: &'a UiState,
        pool: &'a ColumnPool,
        store: &'a dyn DataStore,
        driver: &'a D,
    ) -> Self
    where
        D: FrameDriver + TableDriver,
    {
        Self {
            args,
            ui_state,
            pool,
            outputs: None,
            store,
            frames: driver,
            tables: driver,
            config: &DEFAULT_CONFIG,
        }
    }

    #[inline]
    pub fn with_outputs(mut self, outputs: &'a RunOutputs) -> Self {
        self.outputs = Some(outputs);
        self
    }

    #[inline]
    pub fn with_config(mut self, config: &'a BlockConfig) -> Self {
        self.config = config;
        self
    }
}
