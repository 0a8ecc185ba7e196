//! The `studywise validate` command.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;

use studywise_core::marks::sanitize_marks;
use studywise_core::parser::{load_batches, validate_batch};

pub fn execute(requests_path: PathBuf) -> Result<()> {
    let batches = load_batches(&requests_path)?;

    let mut total_warnings = 0;
    let mut ids: HashMap<&str, &str> = HashMap::new();

    for batch in &batches {
        let unknown = batch
            .requests
            .iter()
            .filter(|r| sanitize_marks(&r.marks).is_empty())
            .count();
        println!(
            "Batch: {} ({} subjects, {} without valid marks)",
            batch.name,
            batch.requests.len(),
            unknown
        );

        for w in validate_batch(batch) {
            match &w.subject {
                Some(subject) => println!("  [{subject}] WARNING: {}", w.message),
                None => println!("  WARNING: {}", w.message),
            }
            total_warnings += 1;
        }

        if let Some(first) = ids.insert(&batch.id, &batch.name) {
            println!(
                "  WARNING: batch id '{}' is also used by '{first}'",
                batch.id
            );
            total_warnings += 1;
        }
    }

    if total_warnings == 0 {
        println!("All batches valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
