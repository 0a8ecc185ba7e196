//! The `studywise init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("studywise.toml").exists() {
        println!("studywise.toml already exists, skipping.");
    } else {
        std::fs::write("studywise.toml", SAMPLE_CONFIG)?;
        println!("Created studywise.toml");
    }

    std::fs::create_dir_all("requests")?;
    let example_path = std::path::Path::new("requests/example.toml");
    if example_path.exists() {
        println!("requests/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BATCH)?;
        println!("Created requests/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit requests/example.toml with your own marks");
    println!("  2. Run: studywise validate --requests requests/example.toml");
    println!("  3. Run: studywise batch --requests requests/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# studywise configuration

output_dir = "./studywise-results"

# Predicted (subject-level) difficulty is a placeholder estimate.
# "uniform" picks a tier at random; set a seed for repeatable runs.
[estimator]
type = "uniform"
# seed = 42

# Or pin difficulties per subject:
# [estimator]
# type = "lookup"
# fallback = "moderate"
#
# [estimator.subjects]
# Mathematics = "hard"
# Biology = "moderate"
"#;

const EXAMPLE_BATCH: &str = r#"[batch]
id = "example"
name = "Example Review"
description = "Past test marks for a few subjects"

[[subjects]]
name = "Mathematics"
marks = ["90", "85", "95"]
topics = ["Algebra", "Calculus"]

[[subjects]]
name = "Physics"
marks = ["40", "55", "62"]
topics = ["Mechanics"]

[[subjects]]
name = "Chemistry"
marks = ["60", "65", "70"]
"#;
