//! The `studywise topics` command.

use anyhow::Result;
use comfy_table::Table;

use studywise_core::topics::{common_topics, known_subjects};

pub fn execute(subject: Option<String>) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Subject", "Common topics"]);

    match subject {
        Some(subject) => {
            let Some(topics) = common_topics(&subject) else {
                println!("No common topics listed for '{subject}'. Any topic may be selected.");
                return Ok(());
            };
            table.add_row(vec![subject.trim().to_string(), topics.join(", ")]);
        }
        None => {
            for name in known_subjects() {
                let topics = common_topics(name).unwrap_or_default();
                table.add_row(vec![name.to_string(), topics.join(", ")]);
            }
        }
    }

    println!("{table}");
    Ok(())
}
