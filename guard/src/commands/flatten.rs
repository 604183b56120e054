// guard/src/commands/flatten.rs
//
// USE CASE: Flatten a raw validation result file.

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use fabric_data_guard_core::domain::results::TestStatus;
use fabric_data_guard_core::infrastructure::fs::read_json;
use fabric_data_guard_core::{FlatValidationRecord, RawValidationResult, flatten};

use crate::cli::OutputFormat;

pub fn execute(input: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    let raw: RawValidationResult = read_json(&input)
        .with_context(|| format!("Failed to read raw results from {}", input.display()))?;

    let records = flatten(&raw);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Table => println!("{}", summary_table(&records)),
    }
    Ok(())
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub fn summary_table(records: &[FlatValidationRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Status",
            "Run",
            "Datasource",
            "Asset",
            "Suite",
            "Evaluated",
            "Success %",
            "Failed",
        ]);

    for record in records {
        let color = match record.test_status {
            TestStatus::Success => Color::Green,
            TestStatus::Failure => Color::Red,
        };
        table.add_row(vec![
            Cell::new(record.test_status.as_str()).fg(color),
            Cell::new(or_dash(record.run_name.as_deref())),
            Cell::new(or_dash(record.datasource_name.as_deref())),
            Cell::new(or_dash(record.data_asset_name.as_deref())),
            Cell::new(or_dash(record.suite_name.as_deref())),
            Cell::new(or_dash(record.evaluated_expectations)),
            Cell::new(or_dash(record.success_percent.map(|p| format!("{:.2}", p)))),
            Cell::new(record.failed_detail_results.len()),
        ]);
    }
    table
}
