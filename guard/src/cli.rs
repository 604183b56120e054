// guard/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "fabric_data_guard.duckdb";

#[derive(Parser)]
#[command(name = "fdg")]
#[command(about = "Data quality checkpoints, flattened results and validation logs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Flattens a raw validation result file (one row per run)
    Flatten {
        /// Raw result JSON exported by the validation engine
        #[arg(long, short)]
        input: PathBuf,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Prints the checkpoint assembled from the project configuration
    Checkpoint {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// Runs a validation from recorded results: log table + HTML report
    Validate {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Raw result JSON to replay as the checkpoint output
        #[arg(long, short)]
        results: PathBuf,

        /// Path to the DuckDB database holding the log table
        #[arg(long, env = "FDG_DB_PATH", default_value = DEFAULT_DB_PATH)]
        db_path: String,

        /// Batch name passed to the engine (defaults to the data asset)
        #[arg(long)]
        batch: Option<String>,

        /// Execution parameter forwarded to the engine, as key=value (repeatable).
        /// A value that parses as JSON is sent as a JSON value (10, true, null, [1,2]);
        /// anything else is sent as a string. Quote it to force a string: key='"true"'
        #[arg(long = "param", short = 'p')]
        params: Vec<String>,
    },

    /// Shows the most recent rows of the validation log table
    Logs {
        #[arg(long, env = "FDG_DB_PATH", default_value = DEFAULT_DB_PATH)]
        db_path: String,

        #[arg(long, short)]
        table: Option<String>,

        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Removes the generated report directory
    Clean {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
}
