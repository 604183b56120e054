// guard-core/src/domain/checkpoint/assembler.rs

use serde::{Deserialize, Serialize};

use super::action::CheckpointAction;
use super::notification::{Channel, NotificationSpec};
use super::result_format::{ResultFormat, ResultFormatDescriptor};
use crate::domain::target::{ValidationConfig, ValidationDefinition};

/// A runnable bundle: one validation definition, its post-run actions and the
/// result detail requested from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointDefinition {
    /// Assigned by the context on registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub validation_definition: ValidationDefinition,
    pub actions: Vec<CheckpointAction>,
    pub result_format: ResultFormatDescriptor,
}

/// Docs update first, then every enabled notification in channel order.
/// Specs sharing a channel keep their relative order.
pub fn compose_actions(notifications: &[NotificationSpec]) -> Vec<CheckpointAction> {
    let mut actions = vec![CheckpointAction::update_data_docs()];
    for channel in Channel::ORDER {
        actions.extend(
            notifications
                .iter()
                .filter(|spec| spec.enabled && spec.channel() == channel)
                .map(|spec| CheckpointAction::notify(&spec.target)),
        );
    }
    actions
}

pub fn assemble(
    config: &ValidationConfig,
    notifications: &[NotificationSpec],
    result_format: &ResultFormat,
) -> CheckpointDefinition {
    CheckpointDefinition {
        id: None,
        name: config.checkpoint_name(),
        validation_definition: config.validation_definition(),
        actions: compose_actions(notifications),
        result_format: result_format.descriptor(),
    }
}
