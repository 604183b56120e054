// guard-core/src/application/checkpoint.rs

use tracing::info;

use crate::domain::checkpoint::{
    CheckpointAction, CheckpointDefinition, NotificationSpec, ResultFormat, assemble,
};
use crate::domain::target::ValidationConfig;
use crate::error::GuardError;
use crate::ports::context::ValidationContext;

/// Assembles the checkpoint for `target` and registers it with the context.
///
/// Credentials carried by the notification targets are forwarded as-is and
/// never logged.
pub fn create_checkpoint(
    context: &dyn ValidationContext,
    target: &ValidationConfig,
    notifications: &[NotificationSpec],
    result_format: &ResultFormat,
) -> Result<CheckpointDefinition, GuardError> {
    let checkpoint = assemble(target, notifications, result_format);

    let kinds: Vec<_> = checkpoint.actions.iter().map(CheckpointAction::kind).collect();
    info!(
        checkpoint = %checkpoint.name,
        result_format = %checkpoint.result_format.result_format,
        actions = ?kinds,
        "Registering checkpoint"
    );

    context.add_checkpoint(checkpoint)
}
