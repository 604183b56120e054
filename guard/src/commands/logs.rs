// guard/src/commands/logs.rs
//
// USE CASE: Show the latest rows of the validation log table.

use std::path::Path;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use duckdb::{Connection, Row};
use fabric_data_guard_core::domain::project::{DEFAULT_LOG_TABLE, is_safe_identifier};

const COLUMNS: [&str; 8] = [
    "LoggedAt",
    "TestStatus",
    "DatasourceName",
    "DataAssetName",
    "SuiteName",
    "RunName",
    "UnsuccessfulExpectations",
    "SuccessPercent",
];

pub fn execute(db_path: String, table: Option<String>, limit: usize) -> anyhow::Result<()> {
    if !Path::new(&db_path).exists() {
        anyhow::bail!(
            "Database not found at: {}\nHave you run 'fdg validate'?",
            db_path
        );
    }
    let table = table.unwrap_or_else(|| DEFAULT_LOG_TABLE.to_string());
    if !is_safe_identifier(&table) {
        anyhow::bail!("Invalid log table name: '{}'", table);
    }

    let conn = Connection::open(&db_path)?;

    let rows = fetch_latest(&conn, &table, limit)?;

    if rows.is_empty() {
        println!("No validation logged in '{}'.", table);
        return Ok(());
    }

    let mut output = Table::new();
    output
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(COLUMNS.to_vec());
    for row in rows {
        output.add_row(row);
    }
    println!("{}", output);
    Ok(())
}

/// Newest first. Rows logged in the same second keep their insertion order
/// reversed, through `rowid`.
fn fetch_latest(conn: &Connection, table: &str, limit: usize) -> duckdb::Result<Vec<Vec<String>>> {
    let columns: Vec<String> = COLUMNS.iter().map(|c| format!("\"{}\"", c)).collect();
    let sql = format!(
        "SELECT {} FROM \"{}\" ORDER BY \"LoggedAt\" DESC, rowid DESC LIMIT {}",
        columns.join(", "),
        table,
        limit
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], |row: &Row| {
            Ok(vec![
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                text(row, 2)?,
                text(row, 3)?,
                text(row, 4)?,
                text(row, 5)?,
                row.get::<_, Option<i64>>(6)?
                    .map_or_else(|| "-".to_string(), |n| n.to_string()),
                row.get::<_, Option<f64>>(7)?
                    .map_or_else(|| "-".to_string(), |p| format!("{:.2}", p)),
            ])
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn text(row: &Row, index: usize) -> duckdb::Result<String> {
    Ok(row
        .get::<_, Option<String>>(index)?
        .unwrap_or_else(|| "-".to_string()))
}
