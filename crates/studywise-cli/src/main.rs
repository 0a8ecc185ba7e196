//! studywise CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "studywise",
    version,
    about = "Subject difficulty analysis from past test marks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one subject
    Analyze {
        /// Subject name
        #[arg(long)]
        subject: String,

        /// Past marks, comma-separated (e.g. "90,85,95"); malformed entries are ignored
        #[arg(long, allow_hyphen_values = true)]
        marks: Option<String>,

        /// Selected topics, comma-separated
        #[arg(long)]
        topics: Option<String>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Seed for the random subject estimator
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Analyze every subject in a batch file or directory
    Batch {
        /// Path to .toml batch file or directory
        #[arg(long)]
        requests: PathBuf,

        /// Output directory (default: from config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, markdown, all
        #[arg(long, default_value = "json")]
        format: String,

        /// Seed for the random subject estimator
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate batch TOML files
    Validate {
        /// Path to batch file or directory
        #[arg(long)]
        requests: PathBuf,
    },

    /// List common topics per subject
    Topics {
        /// Only show this subject
        #[arg(long)]
        subject: Option<String>,
    },

    /// Compare two batch reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Exit code 1 if any subject got harder
        #[arg(long)]
        fail_on_decline: bool,
    },

    /// Create starter config and example batch file
    Init,
}

fn main() {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("studywise=info".parse().expect("valid directive"))
        .add_directive("studywise_core=info".parse().expect("valid directive"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            subject,
            marks,
            topics,
            format,
            seed,
            config,
        } => commands::analyze::execute(subject, marks, topics, format, seed, config),
        Commands::Batch {
            requests,
            output,
            format,
            seed,
            config,
        } => commands::batch::execute(requests, output, format, seed, config),
        Commands::Validate { requests } => commands::validate::execute(requests),
        Commands::Topics { subject } => commands::topics::execute(subject),
        Commands::Compare {
            baseline,
            current,
            format,
            fail_on_decline,
        } => commands::compare::execute(baseline, current, format, fail_on_decline),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
