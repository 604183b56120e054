// guard-core/src/domain/results/mod.rs

pub mod flatten;
pub mod raw;
pub mod record;
pub mod row;

pub use flatten::{flatten, flatten_run};
pub use raw::{
    ActiveBatchDefinition, ExpectationConfigRef, ExpectationOutcome, ExpectationResultDetail,
    RawValidationResult, RawValidationRun, RunIdentifier, RunMeta, RunStatistics,
};
pub use record::{FailedDetailResult, FlatValidationRecord, SucceededDetailResult, TestStatus};
pub use row::{LogRow, build_log_rows};
