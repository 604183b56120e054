// guard/src/main.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug fdg validate ... to see per-run details.
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Flatten { input, format } => commands::flatten::execute(input, format),
        Commands::Checkpoint { project_dir } => commands::checkpoint::execute(project_dir),
        Commands::Validate {
            project_dir,
            results,
            db_path,
            batch,
            params,
        } => commands::validate::execute(project_dir, results, db_path, batch, params).await,
        Commands::Logs {
            db_path,
            table,
            limit,
        } => commands::logs::execute(db_path, table, limit),
        Commands::Clean { project_dir } => commands::clean::execute(project_dir),
    }
}
