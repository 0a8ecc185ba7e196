//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::StudywiseError;
use crate::estimator::EstimatorConfig;

/// Environment variable that seeds the uniform estimator.
pub const SEED_ENV: &str = "STUDYWISE_SEED";

/// Top-level studywise configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudywiseConfig {
    /// How predicted difficulty is estimated.
    #[serde(default)]
    pub estimator: EstimatorConfig,
    /// Output directory for batch reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./studywise-results")
}

impl Default for StudywiseConfig {
    fn default() -> Self {
        Self {
            estimator: EstimatorConfig::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl StudywiseConfig {
    /// Force a seed onto the estimator.
    ///
    /// Only the uniform estimator is random; other estimators are left as
    /// they are.
    pub fn apply_seed(&mut self, seed: u64) {
        if let EstimatorConfig::Uniform { seed: current } = &mut self.estimator {
            *current = Some(seed);
        } else {
            tracing::debug!("seed {seed} ignored, estimator is not random");
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `studywise.toml` in the current directory
/// 2. `~/.config/studywise/config.toml`
///
/// `STUDYWISE_SEED` overrides the uniform estimator's seed.
pub fn load_config() -> Result<StudywiseConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<StudywiseConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => return Err(StudywiseError::ConfigNotFound(p.to_path_buf()).into()),
        None => {
            let local = PathBuf::from("studywise.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match &config_path {
        Some(path) => parse_config_file(path)?,
        None => StudywiseConfig::default(),
    };

    if let Ok(raw) = std::env::var(SEED_ENV) {
        let seed = raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{SEED_ENV} must be an unsigned integer, got '{raw}'"))?;
        config.apply_seed(seed);
    }

    tracing::debug!(
        path = ?config_path,
        estimator = ?config.estimator,
        "loaded configuration"
    );

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<StudywiseConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<StudywiseConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("studywise"))
}
