// guard-core/src/ports/report.rs

use std::path::PathBuf;

use crate::domain::results::FlatValidationRecord;
use crate::domain::target::ValidationConfig;
use crate::error::GuardError;

pub trait ReportRenderer: Send + Sync {
    /// Renders the report for one validation and returns where it was written.
    fn render(
        &self,
        target: &ValidationConfig,
        records: &[FlatValidationRecord],
    ) -> Result<PathBuf, GuardError>;
}
