//! Typed error values for studywise.
//!
//! The analysis engine itself never fails. These errors come from the
//! surfaces around it: parsing tier names out of config and batch files,
//! and locating configuration on disk.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the analysis engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudywiseError {
    /// A tier name that is not one of easy, moderate, hard, very hard.
    #[error("unknown difficulty tier: {0}")]
    UnknownTier(String),

    /// A numeric tier level outside 1..=4.
    #[error("invalid difficulty level {0}, expected 1-4")]
    InvalidLevel(i64),

    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
}
