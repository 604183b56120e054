// guard-core/src/infrastructure/adapters/replay.rs
//
// Serves run results the validation engine already produced (exported JSON)
// as the outcome of a checkpoint run. Used to backfill logs and reports.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::domain::checkpoint::CheckpointDefinition;
use crate::domain::results::RawValidationResult;
use crate::domain::target::{BatchSource, ExecutionParams};
use crate::error::GuardError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::runner::CheckpointRunner;

#[derive(Debug, Clone)]
enum Recording {
    File(PathBuf),
    Loaded(RawValidationResult),
}

#[derive(Debug, Clone)]
pub struct ReplayRunner {
    recording: Recording,
}

impl ReplayRunner {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            recording: Recording::File(path.into()),
        }
    }

    pub fn from_results(results: RawValidationResult) -> Self {
        Self {
            recording: Recording::Loaded(results),
        }
    }
}

#[async_trait]
impl CheckpointRunner for ReplayRunner {
    #[instrument(skip_all, fields(checkpoint = %checkpoint.name, batch = %batch.name))]
    async fn run(
        &self,
        checkpoint: &CheckpointDefinition,
        batch: &BatchSource,
        params: &ExecutionParams,
    ) -> Result<RawValidationResult, GuardError> {
        info!(
            actions = checkpoint.actions.len(),
            params = params.len(),
            "Replaying recorded checkpoint run"
        );

        match &self.recording {
            Recording::Loaded(results) => Ok(results.clone()),
            Recording::File(path) => {
                let content = tokio::fs::read_to_string(path)
                    .await
                    .map_err(InfrastructureError::Io)?;
                let results: RawValidationResult =
                    serde_json::from_str(&content).map_err(InfrastructureError::Json)?;
                Ok(results)
            }
        }
    }
}
