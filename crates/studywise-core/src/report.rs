//! Analysis reports with JSON persistence and progress comparison.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{PersonalDifficulty, SubjectAnalysisResult};

/// Results of one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the batch that was analyzed.
    pub batch: BatchSummary,
    /// Name of the estimator that produced predicted difficulties.
    pub estimator: String,
    /// One result per request, in request order.
    pub results: Vec<SubjectAnalysisResult>,
    /// Total wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Summary of a batch (without the requests themselves).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub id: String,
    pub name: String,
    pub subject_count: usize,
}

impl AnalysisReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AnalysisReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Number of results per personal difficulty label.
    pub fn tier_counts(&self) -> BTreeMap<u8, (&'static str, usize)> {
        let mut counts = BTreeMap::new();
        for r in &self.results {
            let entry = counts
                .entry(r.personal_difficulty.level())
                .or_insert((r.personal_difficulty.label(), 0));
            entry.1 += 1;
        }
        counts
    }

    /// Render the report as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let _ = writeln!(md, "# {}\n", self.batch.name);
        let _ = writeln!(
            md,
            "Generated {} with the `{}` estimator.\n",
            self.created_at.format("%Y-%m-%d %H:%M UTC"),
            self.estimator
        );

        md.push_str("| Subject | Valid marks | Mean | Personal | Predicted |\n");
        md.push_str("|---------|-------------|------|----------|-----------|\n");
        for r in &self.results {
            let mean = r
                .mean
                .map(|m| format!("{m:.1}"))
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                md,
                "| {} | {} | {} | {} | {} |",
                md_subject(&r.subject),
                r.valid_marks.len(),
                mean,
                r.personal_difficulty,
                r.predicted_difficulty
            );
        }

        for r in &self.results {
            md.push_str(&subject_markdown(r));
        }

        md
    }

    /// Compare personal difficulties against an earlier report.
    ///
    /// Subjects are matched by case-insensitive name. When a subject occurs
    /// more than once in a report, its last result is used.
    pub fn compare(&self, baseline: &AnalysisReport) -> ProgressReport {
        let baseline_tiers = tiers_by_subject(baseline);
        let current_tiers = tiers_by_subject(self);

        let mut progress = ProgressReport::default();

        for (key, (subject, now)) in &current_tiers {
            let Some((_, before)) = baseline_tiers.get(key) else {
                progress.new_subjects += 1;
                continue;
            };

            let change = TierChange {
                subject: subject.clone(),
                baseline: *before,
                current: *now,
            };
            match (before.tier(), now.tier()) {
                (Some(was), Some(is)) if is < was => progress.improved.push(change),
                (Some(was), Some(is)) if is > was => progress.declined.push(change),
                (Some(_), Some(_)) => progress.unchanged += 1,
                _ => progress.unclassified += 1,
            }
        }

        progress.removed_subjects = baseline_tiers
            .keys()
            .filter(|k| !current_tiers.contains_key(*k))
            .count();

        progress
    }
}

/// Lowercased subject → (display name, personal difficulty); later results win.
fn tiers_by_subject(report: &AnalysisReport) -> BTreeMap<String, (String, PersonalDifficulty)> {
    report
        .results
        .iter()
        .map(|r| {
            (
                r.subject.trim().to_lowercase(),
                (r.subject.clone(), r.personal_difficulty),
            )
        })
        .collect()
}

/// Subject name safe for a table cell or heading.
fn md_subject(subject: &str) -> String {
    let subject = subject.trim();
    if subject.is_empty() {
        "(unnamed subject)".to_string()
    } else {
        subject.replace('|', "\\|")
    }
}

/// Render a single subject result as Markdown.
pub fn subject_markdown(r: &SubjectAnalysisResult) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "\n## {}\n", md_subject(&r.subject));
    let _ = writeln!(md, "{}\n", r.narrative);

    if !r.topics.is_empty() {
        let _ = writeln!(md, "Topics: {}\n", r.topics.join(", "));
    }

    for (title, items) in [
        ("Strengths", &r.strengths),
        ("Weaknesses", &r.weaknesses),
        ("Recommendations", &r.recommendations),
    ] {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(md, "### {title}\n");
        for item in items {
            let _ = writeln!(md, "- {item}");
        }
        md.push('\n');
    }

    md
}

/// Personal difficulty changes between two reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Subjects whose personal tier got easier.
    pub improved: Vec<TierChange>,
    /// Subjects whose personal tier got harder.
    pub declined: Vec<TierChange>,
    pub unchanged: usize,
    /// Subjects that were `Unknown` in either report.
    pub unclassified: usize,
    pub new_subjects: usize,
    pub removed_subjects: usize,
}

/// A single subject's tier movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierChange {
    pub subject: String,
    pub baseline: PersonalDifficulty,
    pub current: PersonalDifficulty,
}

impl ProgressReport {
    /// Returns `true` if any subject got harder.
    pub fn has_declines(&self) -> bool {
        !self.declined.is_empty()
    }

    /// Generate a Markdown summary.
    pub fn to_markdown(&self) -> String {
        let mut md = String::from("# Progress Report\n\n");
        let _ = writeln!(
            md,
            "**{} improved, {} declined, {} unchanged, {} unclassified**\n",
            self.improved.len(),
            self.declined.len(),
            self.unchanged,
            self.unclassified
        );

        for (title, changes) in [("Improved", &self.improved), ("Declined", &self.declined)] {
            if changes.is_empty() {
                continue;
            }
            let _ = writeln!(md, "## {title}\n");
            md.push_str("| Subject | Before | Now |\n");
            md.push_str("|---------|--------|-----|\n");
            for c in changes {
                let _ = writeln!(
                    md,
                    "| {} | {} | {} |",
                    md_subject(&c.subject),
                    c.baseline,
                    c.current
                );
            }
            md.push('\n');
        }

        if self.new_subjects > 0 {
            let _ = writeln!(md, "{} new subject(s)", self.new_subjects);
        }
        if self.removed_subjects > 0 {
            let _ = writeln!(md, "{} removed subject(s)", self.removed_subjects);
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AnalysisEngine, NoopReporter};
    use crate::estimator::FixedEstimator;
    use crate::model::{AnalysisBatch, AnalysisRequest, DifficultyTier};
    use std::sync::Arc;

    fn run(subjects: &[(&str, &[&str])]) -> AnalysisReport {
        let batch = AnalysisBatch {
            id: "test".into(),
            name: "Test Batch".into(),
            description: String::new(),
            requests: subjects
                .iter()
                .map(|(subject, marks)| AnalysisRequest {
                    subject: subject.to_string(),
                    marks: marks.iter().map(|m| m.to_string()).collect(),
                    topics: vec![],
                })
                .collect(),
        };
        AnalysisEngine::new(Arc::new(FixedEstimator(DifficultyTier::Hard)))
            .analyze_batch(&batch, &NoopReporter)
    }

    #[test]
    fn json_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/report.json");
        let report = run(&[("Mathematics", &["90", "80"]), ("Art", &[])]);
        report.save_json(&path).unwrap();

        let loaded = AnalysisReport::load_json(&path).unwrap();
        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.results, report.results);
    }

    #[test]
    fn load_missing_file_fails() {
        let err = AnalysisReport::load_json(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read report"));
    }

    #[test]
    fn tier_counts_include_unknown() {
        let report = run(&[
            ("Mathematics", &["90"]),
            ("Physics", &["95"]),
            ("Art", &["abc"]),
        ]);
        let counts = report.tier_counts();
        assert_eq!(counts.get(&1), Some(&("Easy", 2)));
        assert_eq!(counts.get(&0), Some(&("Unknown", 1)));
    }

    #[test]
    fn markdown_lists_subjects_and_sections() {
        let report = run(&[("Mathematics", &["40", "50"]), ("Art", &[])]);
        let md = report.to_markdown();
        assert!(md.starts_with("# Test Batch"));
        assert!(md.contains("| Mathematics | 2 | 45.0 | Very Hard | Hard |"));
        assert!(md.contains("| Art | 0 | - | Unknown | Hard |"));
        assert!(md.contains("### Weaknesses"));
        assert!(md.contains("- Need to strengthen core concepts"));
    }

    #[test]
    fn markdown_escapes_subject_names() {
        let report = run(&[("Art | Design", &["90"]), ("  ", &["60"])]);
        let md = report.to_markdown();
        assert!(md.contains("| Art \\| Design | 1 | 90.0 | Easy | Hard |"));
        assert!(md.contains("## Art \\| Design"));
        assert!(md.contains("| (unnamed subject) | 1 | 60.0 | Hard | Hard |"));
        assert!(md.contains("## (unnamed subject)"));
        assert!(!md.contains("\n## \n"));
    }

    #[test]
    fn compare_detects_movement() {
        let baseline = run(&[
            ("Mathematics", &["50"]),
            ("Physics", &["90"]),
            ("Chemistry", &["75"]),
            ("Art", &[]),
            ("Latin", &["60"]),
        ]);
        let current = run(&[
            ("mathematics", &["88"]),
            ("Physics", &["60"]),
            ("Chemistry", &["72"]),
            ("Art", &["70"]),
            ("Biology", &["80"]),
        ]);

        let progress = current.compare(&baseline);
        assert_eq!(progress.improved.len(), 1);
        assert_eq!(progress.improved[0].subject, "mathematics");
        assert_eq!(progress.declined.len(), 1);
        assert_eq!(progress.declined[0].subject, "Physics");
        assert_eq!(progress.unchanged, 1);
        assert_eq!(progress.unclassified, 1);
        assert_eq!(progress.new_subjects, 1);
        assert_eq!(progress.removed_subjects, 1);
        assert!(progress.has_declines());

        let md = progress.to_markdown();
        assert!(md.contains("1 improved, 1 declined, 1 unchanged, 1 unclassified"));
        assert!(md.contains("| Physics | Easy | Hard |"));
    }

    #[test]
    fn compare_identical_reports() {
        let report = run(&[("Mathematics", &["70"]), ("Physics", &["90"])]);
        let progress = report.compare(&report);
        assert_eq!(progress.unchanged, 2);
        assert!(!progress.has_declines());
        assert!(progress.improved.is_empty());
    }
}
