// guard-core/src/domain/checkpoint/action.rs

use serde::{Deserialize, Serialize};

use super::notification::{EmailTarget, NotificationTarget, SlackTarget, TeamsTarget};

/// Post-run actions a checkpoint triggers. Closed set: the external engine
/// only knows these kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckpointAction {
    UpdateDataDocs {
        name: String,
    },
    SlackNotification {
        name: String,
        target: SlackTarget,
    },
    Email {
        name: String,
        target: EmailTarget,
    },
    MicrosoftTeamsNotification {
        name: String,
        target: TeamsTarget,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    UpdateDataDocs,
    SlackNotification,
    Email,
    MicrosoftTeamsNotification,
}

impl CheckpointAction {
    pub fn update_data_docs() -> Self {
        CheckpointAction::UpdateDataDocs {
            name: "update_all_data_docs".to_string(),
        }
    }

    pub fn notify(target: &NotificationTarget) -> Self {
        match target {
            NotificationTarget::Slack(t) => CheckpointAction::SlackNotification {
                name: "send_slack_notification".to_string(),
                target: t.clone(),
            },
            NotificationTarget::Email(t) => CheckpointAction::Email {
                name: "send_email_notification".to_string(),
                target: t.clone(),
            },
            NotificationTarget::MicrosoftTeams(t) => CheckpointAction::MicrosoftTeamsNotification {
                name: "send_teams_notification".to_string(),
                target: t.clone(),
            },
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            CheckpointAction::UpdateDataDocs { .. } => ActionKind::UpdateDataDocs,
            CheckpointAction::SlackNotification { .. } => ActionKind::SlackNotification,
            CheckpointAction::Email { .. } => ActionKind::Email,
            CheckpointAction::MicrosoftTeamsNotification { .. } => {
                ActionKind::MicrosoftTeamsNotification
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CheckpointAction::UpdateDataDocs { name }
            | CheckpointAction::SlackNotification { name, .. }
            | CheckpointAction::Email { name, .. }
            | CheckpointAction::MicrosoftTeamsNotification { name, .. } => name,
        }
    }
}
