//! The subject difficulty analysis engine.
//!
//! Pure and synchronous: each call sanitizes the marks, applies the
//! threshold rules, asks the estimator for a subject-level tier, and returns
//! a fresh result. Nothing is remembered between calls.

use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use crate::estimator::UniformEstimator;
use crate::marks::{mean, sanitize_marks};
use crate::model::{AnalysisBatch, SubjectAnalysisResult};
use crate::narrative::{narrative, recommendations};
use crate::report::{AnalysisReport, BatchSummary};
use crate::rules::{analyze_performance, classify_personal_difficulty};
use crate::traits::DifficultyEstimator;

/// Progress callbacks for batch runs.
pub trait ProgressReporter: Send + Sync {
    fn on_subject_complete(&self, result: &SubjectAnalysisResult);
    fn on_batch_complete(&self, total: usize, unclassified: usize);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_subject_complete(&self, _: &SubjectAnalysisResult) {}
    fn on_batch_complete(&self, _: usize, _: usize) {}
}

/// Analysis engine bound to one difficulty estimator.
///
/// Cheap to clone and safe to share between threads.
#[derive(Clone)]
pub struct AnalysisEngine {
    estimator: Arc<dyn DifficultyEstimator>,
}

impl AnalysisEngine {
    pub fn new(estimator: Arc<dyn DifficultyEstimator>) -> Self {
        Self { estimator }
    }

    /// Engine using the unseeded uniform estimator.
    pub fn with_uniform_estimator() -> Self {
        Self::new(Arc::new(UniformEstimator::new()))
    }

    pub fn estimator_name(&self) -> &str {
        self.estimator.name()
    }

    /// Analyze one subject.
    ///
    /// Never fails: malformed marks are dropped, and with no valid marks the
    /// personal difficulty is `Unknown` and strengths/weaknesses are empty.
    /// `topics` is echoed into the result and passed to the estimator but
    /// does not affect any scoring rule.
    pub fn analyze_subject<M, T>(
        &self,
        subject: &str,
        raw_marks: &[M],
        topics: &[T],
    ) -> SubjectAnalysisResult
    where
        M: AsRef<str>,
        T: AsRef<str>,
    {
        let topics: Vec<String> = topics.iter().map(|t| t.as_ref().to_string()).collect();

        let valid_marks = sanitize_marks(raw_marks);
        let mean = mean(&valid_marks);
        let personal_difficulty = classify_personal_difficulty(&valid_marks);
        let profile = analyze_performance(&valid_marks);
        let predicted_difficulty = self.estimator.estimate(subject, &topics);

        tracing::debug!(
            subject,
            submitted = raw_marks.len(),
            valid = valid_marks.len(),
            mean = ?mean,
            personal = %personal_difficulty,
            predicted = %predicted_difficulty,
            estimator = self.estimator.name(),
            "analyzed subject"
        );

        SubjectAnalysisResult {
            subject: subject.to_string(),
            narrative: narrative(subject, predicted_difficulty, personal_difficulty),
            recommendations: recommendations(),
            topics,
            valid_marks,
            mean,
            predicted_difficulty,
            personal_difficulty,
            strengths: profile.strengths,
            weaknesses: profile.weaknesses,
        }
    }

    /// Analyze every request in `batch`, in order.
    pub fn analyze_batch(
        &self,
        batch: &AnalysisBatch,
        progress: &dyn ProgressReporter,
    ) -> AnalysisReport {
        let start = Instant::now();
        let mut results = Vec::with_capacity(batch.requests.len());

        for request in &batch.requests {
            let result = self.analyze_subject(&request.subject, &request.marks, &request.topics);
            progress.on_subject_complete(&result);
            results.push(result);
        }

        let unclassified = results
            .iter()
            .filter(|r| r.personal_difficulty.is_unknown())
            .count();
        progress.on_batch_complete(results.len(), unclassified);

        tracing::info!(
            batch = %batch.id,
            subjects = results.len(),
            unclassified,
            "batch analysis complete"
        );

        AnalysisReport {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            batch: BatchSummary {
                id: batch.id.clone(),
                name: batch.name.clone(),
                subject_count: batch.requests.len(),
            },
            estimator: self.estimator.name().to_string(),
            results,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::with_uniform_estimator()
    }
}

/// Analyze one subject with the default uniform estimator.
pub fn analyze_subject<M, T>(subject: &str, raw_marks: &[M], topics: &[T]) -> SubjectAnalysisResult
where
    M: AsRef<str>,
    T: AsRef<str>,
{
    AnalysisEngine::with_uniform_estimator().analyze_subject(subject, raw_marks, topics)
}
