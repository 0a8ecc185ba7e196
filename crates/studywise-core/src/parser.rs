//! TOML batch file parser.
//!
//! Loads analysis batches from TOML files and directories, and validates
//! them before a run.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::marks::rejected_indices;
use crate::model::{AnalysisBatch, AnalysisRequest};
use crate::topics::unknown_topics;

/// Intermediate TOML structure for parsing batch files.
#[derive(Debug, Deserialize)]
struct TomlBatchFile {
    batch: TomlBatchHeader,
    #[serde(default)]
    subjects: Vec<TomlSubject>,
}

#[derive(Debug, Deserialize)]
struct TomlBatchHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlSubject {
    name: String,
    #[serde(default)]
    marks: Vec<toml::Value>,
    #[serde(default)]
    topics: Vec<String>,
}

/// Turn a TOML mark entry back into the raw text a user would have typed.
///
/// Strings pass through untouched, numbers are formatted, and anything else
/// becomes an empty entry so sanitization drops it.
fn raw_mark(value: toml::Value) -> String {
    match value {
        toml::Value::String(s) => s,
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        _ => String::new(),
    }
}

/// Parse a single TOML file into an `AnalysisBatch`.
pub fn parse_batch(path: &Path) -> Result<AnalysisBatch> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file: {}", path.display()))?;

    parse_batch_str(&content, path)
}

/// Parse a TOML string into an `AnalysisBatch`.
pub fn parse_batch_str(content: &str, source_path: &Path) -> Result<AnalysisBatch> {
    let parsed: TomlBatchFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let requests = parsed
        .subjects
        .into_iter()
        .map(|s| AnalysisRequest {
            subject: s.name,
            marks: s.marks.into_iter().map(raw_mark).collect(),
            topics: s.topics,
        })
        .collect();

    Ok(AnalysisBatch {
        id: parsed.batch.id,
        name: parsed.batch.name,
        description: parsed.batch.description,
        requests,
    })
}

/// Recursively load all `.toml` batch files from a directory.
pub fn load_batch_directory(dir: &Path) -> Result<Vec<AnalysisBatch>> {
    let mut batches = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            batches.extend(load_batch_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_batch(&path) {
                Ok(batch) => batches.push(batch),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(batches)
}

/// Load one batch file, or every batch under a directory.
pub fn load_batches(path: &Path) -> Result<Vec<AnalysisBatch>> {
    if path.is_dir() {
        load_batch_directory(path)
    } else {
        Ok(vec![parse_batch(path)?])
    }
}

/// A warning from batch validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The subject name (if applicable).
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn subject(subject: &str, message: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.to_string()),
            message: message.into(),
        }
    }
}

/// Validate a batch for input that will be silently dropped or that
/// produces an unclassified result.
pub fn validate_batch(batch: &AnalysisBatch) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if batch.requests.is_empty() {
        warnings.push(ValidationWarning {
            subject: None,
            message: "batch has no subjects".into(),
        });
    }

    let mut seen = HashSet::new();
    for request in &batch.requests {
        let name = request.subject.trim();

        if name.is_empty() {
            warnings.push(ValidationWarning::subject(
                &request.subject,
                "subject name is empty",
            ));
        } else if !seen.insert(name.to_lowercase()) {
            warnings.push(ValidationWarning::subject(
                name,
                format!("duplicate subject: {name}"),
            ));
        }

        let rejected = rejected_indices(&request.marks);
        for &i in &rejected {
            warnings.push(ValidationWarning::subject(
                name,
                format!(
                    "mark #{} ({:?}) is not a whole number in 0-100 and will be ignored",
                    i + 1,
                    request.marks[i]
                ),
            ));
        }

        if rejected.len() == request.marks.len() {
            warnings.push(ValidationWarning::subject(
                name,
                "no valid marks, personal difficulty will be Unknown",
            ));
        }

        for topic in unknown_topics(name, &request.topics) {
            warnings.push(ValidationWarning::subject(
                name,
                format!("topic '{topic}' is not a common topic for {name}"),
            ));
        }
    }

    warnings
}
