//! The `studywise analyze` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use studywise_core::model::SubjectAnalysisResult;
use studywise_core::report::subject_markdown;

use super::{load_engine, split_names, split_raw};

pub fn execute(
    subject: String,
    marks: Option<String>,
    topics: Option<String>,
    format: String,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json" | "markdown" | "md"),
        "unknown format '{format}', expected text, json or markdown"
    );

    let (_, engine) = load_engine(config_path.as_deref(), seed)?;

    let raw_marks = split_raw(marks.as_deref());
    let topics = split_names(topics.as_deref());

    let result = engine.analyze_subject(&subject, &raw_marks, &topics);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        "markdown" | "md" => print!("{}", subject_markdown(&result)),
        _ => print_text(&result, raw_marks.len()),
    }

    Ok(())
}

fn print_text(result: &SubjectAnalysisResult, submitted: usize) {
    let mut table = Table::new();
    table.set_header(vec!["Subject", "Marks used", "Mean", "Predicted", "Personal"]);
    table.add_row(vec![
        Cell::new(&result.subject),
        Cell::new(format!("{}/{}", result.valid_marks.len(), submitted)),
        Cell::new(
            result
                .mean
                .map(|m| format!("{m:.1}"))
                .unwrap_or_else(|| "-".to_string()),
        ),
        Cell::new(result.predicted_difficulty),
        Cell::new(result.personal_difficulty),
    ]);
    println!("{table}");
    println!("\n{}", result.narrative);

    print_list("Strengths", &result.strengths);
    print_list("Weaknesses", &result.weaknesses);
    print_list("Recommendations", &result.recommendations);

    if result.personal_difficulty.is_unknown() {
        println!("\nNo valid marks (whole numbers 0-100) were given, so personal difficulty is Unknown.");
    }
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{title}:");
    for item in items {
        println!("  - {item}");
    }
}
