//! studywise-core — Subject difficulty analysis engine.
//!
//! This crate turns a subject name and a list of self-reported test marks
//! into a difficulty classification, a strengths/weaknesses breakdown, and
//! study recommendations. Everything around the engine (batch files,
//! configuration, reports) also lives here so the CLI stays a thin caller.

pub mod config;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod marks;
pub mod model;
pub mod narrative;
pub mod parser;
pub mod report;
pub mod rules;
pub mod topics;
pub mod traits;

pub use engine::{analyze_subject, AnalysisEngine};
pub use error::StudywiseError;
pub use model::{DifficultyTier, Mark, PersonalDifficulty, SubjectAnalysisResult};
pub use traits::DifficultyEstimator;
