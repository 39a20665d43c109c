use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use ca_log::ResultExt as _;
use ca_types::names;

/// Environment variable naming a JSON file to load the [`BlockConfig`] from.
pub const CONFIG_ENV_VAR: &str = "CA_BLOCK_CONFIG";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't open block config {path:?}")]
    Io {
        path: PathBuf,

        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Names of the workflow outputs the block reads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkflowOutputNames {
    /// Columns of the results table.
    pub results: Cow<'static, str>,

    /// Columns behind the cell group abundance chart.
    pub boxplot: Cow<'static, str>,

    /// Columns behind the cell group composition chart.
    pub stacked_bar: Cow<'static, str>,

    /// JSON string telling which statistical method the run ended up using.
    pub analysis_method: Cow<'static, str>,
}

impl Default for WorkflowOutputNames {
    fn default() -> Self {
        Self::const_default()
    }
}

impl WorkflowOutputNames {
    pub const fn const_default() -> Self {
        Self {
            results: Cow::Borrowed("resultsPf"),
            boxplot: Cow::Borrowed("boxplotPf"),
            stacked_bar: Cow::Borrowed("stackedBarPf"),
            analysis_method: Cow::Borrowed("analysisMethod"),
        }
    }
}

/// Everything about the block's environment that is not a user argument.
///
/// See [`Self::const_default`] for defaults. Column classification is not configurable:
/// it lives in [`ca_types::SemanticRole`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockConfig {
    /// The axis metadata columns must have to be joined into chart frames.
    pub join_axis: Cow<'static, str>,

    pub outputs: WorkflowOutputNames,

    /// Block title, before the user-provided part.
    pub title_prefix: Cow<'static, str>,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self::const_default()
    }
}

impl BlockConfig {
    pub const fn const_default() -> Self {
        Self {
            join_axis: Cow::Borrowed(names::SAMPLE_ID_AXIS),
            outputs: WorkflowOutputNames::const_default(),
            title_prefix: Cow::Borrowed("Compositional Analysis"),
        }
    }

    /// Reads a config from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], if set.
    ///
    /// Falls back to the default config, logging why, when the file can't be loaded.
    pub fn from_env() -> Self {
        Self::load_or_default(std::env::var_os(CONFIG_ENV_VAR))
    }

    fn load_or_default(path: Option<impl AsRef<Path>>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        let path = path.as_ref();

        ca_log::debug!("Loading block config from {path:?}");
        Self::load(path).ok_or_log_error().unwrap_or_default()
    }
}
