pub mod analyze;
pub mod batch;
pub mod compare;
pub mod init;
pub mod topics;
pub mod validate;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use studywise_core::config::{load_config_from, StudywiseConfig};
use studywise_core::engine::AnalysisEngine;
use studywise_core::estimator::create_estimator;

/// Load config, apply a `--seed` override, and build the engine.
pub fn load_engine(
    config_path: Option<&Path>,
    seed: Option<u64>,
) -> Result<(StudywiseConfig, AnalysisEngine)> {
    let mut config = load_config_from(config_path)?;
    if let Some(seed) = seed {
        config.apply_seed(seed);
    }
    let engine = AnalysisEngine::new(Arc::from(create_estimator(&config.estimator)));
    Ok((config, engine))
}

/// Split a comma-separated flag value, keeping empty entries.
pub fn split_raw(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| v.split(',').map(str::to_string).collect())
        .unwrap_or_default()
}

/// Split a comma-separated list of names, trimming and dropping blanks.
pub fn split_names(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
