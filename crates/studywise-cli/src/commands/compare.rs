//! The `studywise compare` command.

use std::path::PathBuf;

use anyhow::Result;

use studywise_core::report::AnalysisReport;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    format: String,
    fail_on_decline: bool,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json" | "markdown" | "md"),
        "unknown format '{format}', expected text, json or markdown"
    );

    let baseline = AnalysisReport::load_json(&baseline_path)?;
    let current = AnalysisReport::load_json(&current_path)?;

    let progress = current.compare(&baseline);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", progress.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        _ => {
            println!(
                "Comparison: {} improved, {} declined, {} unchanged, {} unclassified",
                progress.improved.len(),
                progress.declined.len(),
                progress.unchanged,
                progress.unclassified
            );

            for (title, changes) in [
                ("Improved", &progress.improved),
                ("Declined", &progress.declined),
            ] {
                if changes.is_empty() {
                    continue;
                }
                println!("\n{title}:");
                for c in changes {
                    println!("  {}: {} -> {}", c.subject, c.baseline, c.current);
                }
            }

            if progress.new_subjects > 0 {
                println!("\n{} new subject(s)", progress.new_subjects);
            }
            if progress.removed_subjects > 0 {
                println!("{} removed subject(s)", progress.removed_subjects);
            }
        }
    }

    if fail_on_decline && progress.has_declines() {
        std::process::exit(1);
    }

    Ok(())
}
