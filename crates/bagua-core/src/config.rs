//! bagua configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::session::AnswerSeed;

/// Top-level bagua configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaguaConfig {
    /// Dataset JSON file. The bundled Eight Palaces are used when unset.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    /// Initial line state of each answer in a self-test.
    #[serde(default)]
    pub answer_seed: AnswerSeed,
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `bagua.toml` in the current directory
/// 2. `~/.config/bagua/config.toml`
///
/// Environment variable overrides: `BAGUA_DATASET`, `BAGUA_ANSWER_SEED`.
pub fn load_config() -> Result<BaguaConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<BaguaConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("bagua.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => parse_config(path)?,
        None => BaguaConfig::default(),
    };

    if let Ok(dataset) = std::env::var("BAGUA_DATASET") {
        if !dataset.is_empty() {
            config.dataset = Some(PathBuf::from(dataset));
        }
    }

    if let Ok(seed) = std::env::var("BAGUA_ANSWER_SEED") {
        config.answer_seed = seed
            .parse()
            .map_err(|e: String| anyhow::anyhow!("BAGUA_ANSWER_SEED: {e}"))?;
    }

    tracing::debug!(
        source = ?config_path,
        dataset = ?config.dataset,
        answer_seed = %config.answer_seed,
        "loaded config"
    );

    Ok(config)
}

fn parse_config(path: &Path) -> Result<BaguaConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let mut config = toml::from_str::<BaguaConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;

    // Relative dataset paths are relative to the config file.
    if let (Some(dataset), Some(dir)) = (config.dataset.as_mut(), path.parent()) {
        if dataset.is_relative() && !dir.as_os_str().is_empty() {
            *dataset = dir.join(&*dataset);
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("bagua"))
}
