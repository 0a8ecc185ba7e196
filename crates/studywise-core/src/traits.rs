//! Core trait definitions.
//!
//! The subject-intrinsic difficulty is produced by a `DifficultyEstimator`
//! so the engine never depends on how that estimate is made. Implementations
//! live in [`crate::estimator`].

use crate::model::DifficultyTier;

/// Estimates how hard a subject is in general, independent of any
/// student's marks.
pub trait DifficultyEstimator: Send + Sync {
    /// Short estimator name recorded in reports (e.g. "uniform").
    fn name(&self) -> &str;

    /// Estimate the difficulty of `subject`.
    ///
    /// `topics` is the caller's topic selection. Implementations may ignore
    /// it; none of the bundled ones use it yet.
    fn estimate(&self, subject: &str, topics: &[String]) -> DifficultyTier;
}
