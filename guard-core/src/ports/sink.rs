// guard-core/src/ports/sink.rs

use async_trait::async_trait;

use crate::domain::results::LogRow;
use crate::error::GuardError;

#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Appends rows to `table`, creating it when missing. Returns the number of rows written.
    async fn append(&self, table: &str, rows: &[LogRow]) -> Result<usize, GuardError>;
}
