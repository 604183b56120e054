// guard-core/src/ports/runner.rs

use async_trait::async_trait;

use crate::domain::checkpoint::CheckpointDefinition;
use crate::domain::results::RawValidationResult;
use crate::domain::target::{BatchSource, ExecutionParams};
use crate::error::GuardError;

/// Executes a checkpoint on the validation engine and blocks until the run
/// results are available.
#[async_trait]
pub trait CheckpointRunner: Send + Sync {
    async fn run(
        &self,
        checkpoint: &CheckpointDefinition,
        batch: &BatchSource,
        params: &ExecutionParams,
    ) -> Result<RawValidationResult, GuardError>;
}
