//! Subject difficulty estimators and their configuration.
//!
//! There is no real predictive model yet. `UniformEstimator` reproduces the
//! placeholder behaviour of picking a tier at random; `LookupEstimator` and
//! `FixedEstimator` give deterministic answers for pinned setups and tests.

use std::collections::HashMap;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::model::DifficultyTier;
use crate::traits::DifficultyEstimator;

/// Picks one of the four tiers uniformly at random on every call.
///
/// Repeated calls for the same subject are not expected to agree.
pub struct UniformEstimator {
    /// `None` draws from the thread-local RNG.
    rng: Option<Mutex<StdRng>>,
}

impl UniformEstimator {
    pub fn new() -> Self {
        Self { rng: None }
    }

    /// Reproducible sequence of draws for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    fn draw(&self) -> usize {
        let len = DifficultyTier::ALL.len();
        match &self.rng {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                rng.gen_range(0..len)
            }
            None => rand::thread_rng().gen_range(0..len),
        }
    }
}

impl Default for UniformEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl DifficultyEstimator for UniformEstimator {
    fn name(&self) -> &str {
        "uniform"
    }

    fn estimate(&self, subject: &str, _topics: &[String]) -> DifficultyTier {
        let tier = DifficultyTier::ALL[self.draw()];
        tracing::trace!(subject, %tier, "uniform estimate");
        tier
    }
}

/// Fixed subject → tier table with a fallback for unlisted subjects.
#[derive(Debug, Clone)]
pub struct LookupEstimator {
    /// Keys are lowercased subject names.
    table: HashMap<String, DifficultyTier>,
    fallback: DifficultyTier,
}

impl LookupEstimator {
    pub fn new(table: HashMap<String, DifficultyTier>, fallback: DifficultyTier) -> Self {
        let table = table
            .into_iter()
            .map(|(subject, tier)| (normalize_subject(&subject), tier))
            .collect();
        Self { table, fallback }
    }

    pub fn fallback(&self) -> DifficultyTier {
        self.fallback
    }
}

impl DifficultyEstimator for LookupEstimator {
    fn name(&self) -> &str {
        "lookup"
    }

    fn estimate(&self, subject: &str, _topics: &[String]) -> DifficultyTier {
        match self.table.get(&normalize_subject(subject)) {
            Some(tier) => *tier,
            None => {
                tracing::debug!(subject, fallback = %self.fallback, "subject not in lookup table");
                self.fallback
            }
        }
    }
}

/// Always returns the same tier.
#[derive(Debug, Clone, Copy)]
pub struct FixedEstimator(pub DifficultyTier);

impl DifficultyEstimator for FixedEstimator {
    fn name(&self) -> &str {
        "fixed"
    }

    fn estimate(&self, _subject: &str, _topics: &[String]) -> DifficultyTier {
        self.0
    }
}

fn normalize_subject(subject: &str) -> String {
    subject.trim().to_lowercase()
}

/// Estimator selection as written in `studywise.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EstimatorConfig {
    Uniform {
        #[serde(default)]
        seed: Option<u64>,
    },
    Lookup {
        #[serde(default)]
        subjects: HashMap<String, DifficultyTier>,
        #[serde(default = "default_fallback")]
        fallback: DifficultyTier,
    },
    Fixed {
        tier: DifficultyTier,
    },
}

fn default_fallback() -> DifficultyTier {
    DifficultyTier::Moderate
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig::Uniform { seed: None }
    }
}

/// Build an estimator from its configuration.
pub fn create_estimator(config: &EstimatorConfig) -> Box<dyn DifficultyEstimator> {
    match config {
        EstimatorConfig::Uniform { seed: Some(seed) } => {
            Box::new(UniformEstimator::with_seed(*seed))
        }
        EstimatorConfig::Uniform { seed: None } => Box::new(UniformEstimator::new()),
        EstimatorConfig::Lookup { subjects, fallback } => {
            Box::new(LookupEstimator::new(subjects.clone(), *fallback))
        }
        EstimatorConfig::Fixed { tier } => Box::new(FixedEstimator(*tier)),
    }
}
