// guard/src/commands/validate.rs
//
// USE CASE: Validate from recorded engine results.
// Replays the results through the checkpoint, logs them to DuckDB and writes
// the HTML report.

use std::path::PathBuf;

use anyhow::{Context, bail};
use fabric_data_guard_core::FabricDataGuard;
use fabric_data_guard_core::application::{ValidationOptions, ValidationServices};
use fabric_data_guard_core::domain::target::{BatchSource, ExecutionParams};
use fabric_data_guard_core::infrastructure::adapters::{
    DuckDBLogSink, InMemoryContext, ReplayRunner,
};
use fabric_data_guard_core::infrastructure::config::load_guard_config;
use fabric_data_guard_core::infrastructure::report::HtmlReportRenderer;
use serde_json::Value;
use tracing::info;

use super::flatten::summary_table;

pub async fn execute(
    project_dir: PathBuf,
    results: PathBuf,
    db_path: String,
    batch: Option<String>,
    params: Vec<String>,
) -> anyhow::Result<()> {
    // A. Load the Config (Infra)
    let config = load_guard_config(&project_dir).with_context(|| {
        format!(
            "Failed to load guard configuration from {}",
            project_dir.display()
        )
    })?;
    let params = parse_params(&params)?;
    info!(
        datasource = %config.datasource_name,
        asset = %config.data_asset_name,
        db = %db_path,
        "Starting validation"
    );

    // B. Register the target
    let context = InMemoryContext::new();
    let guard = FabricDataGuard::from_config(&context, &config)?;

    // C. Adapters
    let runner = ReplayRunner::from_file(&results);
    let sink = DuckDBLogSink::new(&db_path)
        .with_context(|| format!("Failed to open DuckDB at {}", db_path))?;
    let renderer = HtmlReportRenderer::new(config.report_path(&project_dir))?;

    let batch = BatchSource {
        name: batch.unwrap_or_else(|| config.data_asset_name.clone()),
        location: Some(results),
    };

    // D. Run (Application Layer)
    let records = guard
        .run_validation(
            &batch,
            &params,
            ValidationServices {
                runner: &runner,
                sink: &sink,
                renderer: &renderer,
            },
            &ValidationOptions::from(&config),
        )
        .await?;
    // Close the database before a possible early exit.
    drop(sink);

    println!("{}", summary_table(&records));

    let failed = records
        .iter()
        .filter(|r| !r.test_status.is_success())
        .count();
    if failed > 0 {
        eprintln!("{} of {} validation runs failed.", failed, records.len());
        // Exit with error code for CI/CD
        std::process::exit(1);
    }
    println!("All {} validation runs passed.", records.len());
    Ok(())
}

/// `key=value` pairs, in the order given. Values that parse as JSON keep their
/// type, anything else is passed as a string.
fn parse_params(raw: &[String]) -> anyhow::Result<ExecutionParams> {
    let mut params = ExecutionParams::new();
    for pair in raw {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("Invalid parameter '{}': expected key=value", pair);
        };
        if key.trim().is_empty() {
            bail!("Invalid parameter '{}': empty key", pair);
        }
        let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.into()));
        params.insert(key.trim().to_string(), value);
    }
    Ok(params)
}
