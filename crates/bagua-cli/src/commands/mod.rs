//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::Result;

use bagua_core::config::{load_config_from, BaguaConfig};
use bagua_core::dataset;
use bagua_core::model::Dataset;

pub mod export;
pub mod init;
pub mod list;
pub mod memory;
pub mod open;
pub mod validate;

/// Where the dataset and config come from, as given on the command line.
pub struct Source {
    pub dataset: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Loaded config plus the dataset it points at.
pub struct Context {
    pub config: BaguaConfig,
    pub dataset: Dataset,
}

impl Source {
    /// The dataset path in effect: the flag, then the config.
    pub fn dataset_path<'a>(&'a self, config: &'a BaguaConfig) -> Option<&'a Path> {
        self.dataset.as_deref().or(config.dataset.as_deref())
    }

    pub fn load(&self) -> Result<Context> {
        let config = load_config_from(self.config.as_deref())?;
        let dataset = dataset::load(self.dataset_path(&config))?;

        let warnings = dataset::validate_dataset(&dataset);
        if !warnings.is_empty() {
            tracing::warn!(
                "dataset has {} validation warning(s); run `bagua validate` for details",
                warnings.len()
            );
        }

        Ok(Context { config, dataset })
    }
}
