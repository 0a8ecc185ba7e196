//! The `studywise batch` command.

use std::path::PathBuf;

use anyhow::Result;

use studywise_core::engine::ProgressReporter;
use studywise_core::model::SubjectAnalysisResult;
use studywise_core::parser::load_batches;
use studywise_core::report::AnalysisReport;

use super::load_engine;

/// Console progress reporter.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_subject_complete(&self, result: &SubjectAnalysisResult) {
        eprintln!(
            "  Done: {} personal {} predicted {} ({} valid marks)",
            result.subject,
            result.personal_difficulty,
            result.predicted_difficulty,
            result.valid_marks.len(),
        );
    }

    fn on_batch_complete(&self, total: usize, unclassified: usize) {
        eprintln!("\nComplete: {total} subject(s), {unclassified} without valid marks");
    }
}

pub fn execute(
    requests_path: PathBuf,
    output: Option<PathBuf>,
    format: String,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let formats: Vec<&str> = if format == "all" {
        vec!["json", "markdown"]
    } else {
        format.split(',').map(str::trim).collect()
    };
    for fmt in &formats {
        anyhow::ensure!(
            matches!(*fmt, "json" | "markdown" | "md"),
            "unknown format '{fmt}', expected json, markdown or all"
        );
    }

    let (config, engine) = load_engine(config_path.as_deref(), seed)?;
    let output = output.unwrap_or(config.output_dir);

    let batches = load_batches(&requests_path)?;
    anyhow::ensure!(
        !batches.is_empty(),
        "no batch files found in {}",
        requests_path.display()
    );

    for batch in &batches {
        eprintln!(
            "studywise v{} — Analyzing {} subject(s) from '{}' with the {} estimator",
            env!("CARGO_PKG_VERSION"),
            batch.requests.len(),
            batch.name,
            engine.estimator_name()
        );
        eprintln!();

        let report = engine.analyze_batch(batch, &ConsoleReporter);

        print_summary(&report);

        std::fs::create_dir_all(&output)?;
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
        // batch ids are not unique across files, the report id is
        let stem = format!(
            "report-{}-{timestamp}-{}",
            batch.id,
            &report.id.simple().to_string()[..8]
        );

        for fmt in &formats {
            match *fmt {
                "json" => {
                    let path = output.join(format!("{stem}.json"));
                    report.save_json(&path)?;
                    eprintln!("Results saved to: {}", path.display());
                }
                _ => {
                    let path = output.join(format!("{stem}.md"));
                    std::fs::write(&path, report.to_markdown())?;
                    eprintln!("Markdown report: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Subject", "Valid marks", "Mean", "Personal", "Predicted"]);

    for r in &report.results {
        table.add_row(vec![
            Cell::new(&r.subject),
            Cell::new(r.valid_marks.len()),
            Cell::new(
                r.mean
                    .map(|m| format!("{m:.1}"))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(r.personal_difficulty),
            Cell::new(r.predicted_difficulty),
        ]);
    }

    println!("\n{table}");

    let counts: Vec<String> = report
        .tier_counts()
        .values()
        .map(|(label, n)| format!("{label}: {n}"))
        .collect();
    println!("{}", counts.join(", "));
}
