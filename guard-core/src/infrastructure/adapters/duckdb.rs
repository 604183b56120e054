// guard-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::{Config, Connection, params};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, instrument};

use crate::domain::project::is_safe_identifier;
use crate::domain::results::LogRow;
use crate::error::GuardError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::sink::ResultSink;

/// Appends flattened validation rows to a DuckDB table.
pub struct DuckDBLogSink {
    conn: Arc<Mutex<Connection>>,
}

impl DuckDBLogSink {
    pub fn new(db_path: &str) -> Result<Self, InfrastructureError> {
        let config = Config::default();

        let conn = if db_path == ":memory:" {
            Connection::open_in_memory_with_flags(config)?
        } else {
            Connection::open_with_flags(db_path, config)?
        };

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, InfrastructureError> {
        self.conn
            .lock()
            .map_err(|_| InfrastructureError::Database(DatabaseError::Poisoned))
    }

    pub fn count_rows(&self, table: &str) -> Result<u64, GuardError> {
        let table = checked_table(table)?;
        let conn = self.connection()?;
        let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM \"{}\"", table), [], |row| {
            row.get(0)
        })?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}

fn checked_table(table: &str) -> Result<&str, InfrastructureError> {
    if is_safe_identifier(table) {
        Ok(table)
    } else {
        Err(DatabaseError::InvalidTableName(table.to_string()).into())
    }
}

fn create_table_sql(table: &str) -> String {
    format!(
        r#"CREATE TABLE IF NOT EXISTS "{table}" (
    "TestStatus" VARCHAR NOT NULL,
    "DatasourceName" VARCHAR,
    "DataAssetName" VARCHAR,
    "ValidationId" VARCHAR,
    "CheckpointId" VARCHAR,
    "ValidationTime" VARCHAR,
    "RunName" VARCHAR,
    "RunTime" VARCHAR,
    "SuiteName" VARCHAR,
    "EvaluatedExpectations" BIGINT,
    "SuccessfulExpectations" BIGINT,
    "UnsuccessfulExpectations" BIGINT,
    "SuccessPercent" DOUBLE,
    "FailedDetailResults" VARCHAR NOT NULL,
    "SucceededDetailResults" VARCHAR NOT NULL,
    "LoggedAt" VARCHAR NOT NULL
)"#
    )
}

fn insert_sql(table: &str) -> String {
    let columns: Vec<String> = LogRow::COLUMNS
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect();
    let placeholders = vec!["?"; LogRow::COLUMNS.len()].join(", ");
    format!(
        "INSERT INTO \"{}\" ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders
    )
}

fn as_bigint(
    column: &'static str,
    value: Option<u64>,
) -> Result<Option<i64>, InfrastructureError> {
    value
        .map(|n| {
            i64::try_from(n)
                .map_err(|_| DatabaseError::ValueOutOfRange { column, value: n }.into())
        })
        .transpose()
}

#[async_trait]
impl ResultSink for DuckDBLogSink {
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    async fn append(&self, table: &str, rows: &[LogRow]) -> Result<usize, GuardError> {
        let table = checked_table(table)?;
        let mut conn = self.connection()?;

        conn.execute_batch(&create_table_sql(table))?;

        // One transaction: the run is logged entirely or not at all.
        // Returning early drops `tx`, which rolls back.
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(&insert_sql(table))?;
            for row in rows {
                let evaluated = as_bigint("EvaluatedExpectations", row.evaluated_expectations)?;
                let successful = as_bigint("SuccessfulExpectations", row.successful_expectations)?;
                let unsuccessful =
                    as_bigint("UnsuccessfulExpectations", row.unsuccessful_expectations)?;
                stmt.execute(params![
                    row.test_status,
                    row.datasource_name,
                    row.data_asset_name,
                    row.validation_id,
                    row.checkpoint_id,
                    row.validation_time,
                    row.run_name,
                    row.run_time,
                    row.suite_name,
                    evaluated,
                    successful,
                    unsuccessful,
                    row.success_percent,
                    row.failed_detail_results,
                    row.succeeded_detail_results,
                    row.logged_at,
                ])?;
            }
        }
        tx.commit()?;

        debug!(table, "Appended validation rows");
        Ok(rows.len())
    }
}
