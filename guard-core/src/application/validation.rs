// guard-core/src/application/validation.rs

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::application::checkpoint::create_checkpoint;
use crate::domain::checkpoint::{NotificationSpec, ResultFormat};
use crate::domain::error::DomainError;
use crate::domain::project::{DEFAULT_LOG_TABLE, GuardConfig};
use crate::domain::results::{FlatValidationRecord, build_log_rows, flatten};
use crate::domain::target::{BatchSource, ExecutionParams, ValidationConfig};
use crate::error::GuardError;
use crate::ports::{CheckpointRunner, ReportRenderer, ResultSink, ValidationContext};

/// What the checkpoint does after the run, and where the results are logged.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    pub notifications: Vec<NotificationSpec>,
    pub result_format: ResultFormat,
    pub log_table: String,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            notifications: vec![],
            result_format: ResultFormat::default(),
            log_table: DEFAULT_LOG_TABLE.to_string(),
        }
    }
}

impl From<&GuardConfig> for ValidationOptions {
    fn from(config: &GuardConfig) -> Self {
        Self {
            notifications: config.notifications.clone(),
            result_format: config.result_format.clone(),
            log_table: config.log_table.clone(),
        }
    }
}

/// Collaborators of one validation run.
#[derive(Clone, Copy)]
pub struct ValidationServices<'a> {
    pub runner: &'a dyn CheckpointRunner,
    pub sink: &'a dyn ResultSink,
    pub renderer: &'a dyn ReportRenderer,
}

/// Runs a validation end to end: checkpoint, engine run, flattening, log
/// table, report. Collaborator errors are returned unchanged.
#[instrument(skip_all, fields(datasource = %target.datasource_name, asset = %target.data_asset_name))]
pub async fn validate(
    context: &dyn ValidationContext,
    target: &ValidationConfig,
    batch: &BatchSource,
    params: &ExecutionParams,
    services: ValidationServices<'_>,
    options: &ValidationOptions,
) -> Result<Vec<FlatValidationRecord>, GuardError> {
    target.ensure_complete()?;
    ensure_registered(context, target)?;

    let checkpoint = create_checkpoint(
        context,
        target,
        &options.notifications,
        &options.result_format,
    )?;

    let raw = services.runner.run(&checkpoint, batch, params).await?;
    let records = flatten(&raw);

    let rows = build_log_rows(&records, Utc::now())?;
    let written = services.sink.append(&options.log_table, &rows).await?;
    info!(table = %options.log_table, rows = written, "Validation results logged");

    let report = services.renderer.render(target, &records)?;

    let failed = records
        .iter()
        .filter(|r| !r.test_status.is_success())
        .count();
    if failed > 0 {
        warn!(failed, total = records.len(), report = %report.display(), "Validation finished with failures");
    } else {
        info!(total = records.len(), report = %report.display(), "Validation passed");
    }

    Ok(records)
}

/// Fails unless datasource, data asset, suite and batch definition are all
/// known to the context. Lists every unresolved part.
pub fn ensure_registered(
    context: &dyn ValidationContext,
    target: &ValidationConfig,
) -> Result<(), GuardError> {
    let mut missing = Vec::new();
    if !context.has_datasource(&target.datasource_name)? {
        missing.push("datasource");
    }
    if !context.has_data_asset(&target.datasource_name, &target.data_asset_name)? {
        missing.push("data asset");
    }
    if !context.has_suite(&target.suite_name)? {
        missing.push("expectation suite");
    }
    if !context.has_batch_definition(
        &target.datasource_name,
        &target.data_asset_name,
        &target.batch_definition_name,
    )? {
        missing.push("batch definition");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::IncompleteConfiguration { missing }.into())
    }
}
