// guard-core/src/domain/checkpoint/notification.rs

use serde::{Deserialize, Serialize};

/// Notification channels, in the order their actions run after a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Slack,
    Email,
    MicrosoftTeams,
}

impl Channel {
    pub const ORDER: [Channel; 3] = [Channel::Slack, Channel::Email, Channel::MicrosoftTeams];
}

// Credentials are carried as-is. A bad token only shows up when the action fires.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SlackTarget {
    #[serde(default)]
    pub slack_token: Option<String>,
    #[serde(default)]
    pub slack_channel: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EmailTarget {
    #[serde(default)]
    pub sender_login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_password: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub receiver_emails: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smtp_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smtp_port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TeamsTarget {
    #[serde(default)]
    pub teams_webhook: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "snake_case")]
pub enum NotificationTarget {
    Slack(SlackTarget),
    Email(EmailTarget),
    MicrosoftTeams(TeamsTarget),
}

impl NotificationTarget {
    pub fn channel(&self) -> Channel {
        match self {
            NotificationTarget::Slack(_) => Channel::Slack,
            NotificationTarget::Email(_) => Channel::Email,
            NotificationTarget::MicrosoftTeams(_) => Channel::MicrosoftTeams,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSpec {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(flatten)]
    pub target: NotificationTarget,
}

impl NotificationSpec {
    pub fn slack(token: impl Into<String>, channel: impl Into<String>) -> Self {
        Self::new(NotificationTarget::Slack(SlackTarget {
            slack_token: Some(token.into()),
            slack_channel: Some(channel.into()),
        }))
    }

    pub fn email(sender_login: impl Into<String>) -> Self {
        Self::new(NotificationTarget::Email(EmailTarget {
            sender_login: Some(sender_login.into()),
            ..Default::default()
        }))
    }

    pub fn teams(webhook: impl Into<String>) -> Self {
        Self::new(NotificationTarget::MicrosoftTeams(TeamsTarget {
            teams_webhook: Some(webhook.into()),
        }))
    }

    pub fn new(target: NotificationTarget) -> Self {
        Self {
            enabled: true,
            target,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn channel(&self) -> Channel {
        self.target.channel()
    }
}

fn default_enabled() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_notifications_from_yaml() {
        let yaml = r##"
- channel: slack
  slack_token: xoxb-1
  slack_channel: "#dq"
- channel: email
  enabled: false
  sender_login: bot@example.com
  receiver_emails: [team@example.com]
- channel: microsoft_teams
  teams_webhook: https://hooks.example.com/abc
"##;
        let specs: Vec<NotificationSpec> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0], NotificationSpec::slack("xoxb-1", "#dq"));
        assert!(!specs[1].enabled);
        assert_eq!(specs[1].channel(), Channel::Email);
        assert_eq!(specs[2].channel(), Channel::MicrosoftTeams);
    }

    #[test]
    fn test_missing_credentials_are_accepted() {
        let spec: NotificationSpec = serde_yaml::from_str("channel: slack").unwrap();
        assert!(spec.enabled);
        assert_eq!(spec.target, NotificationTarget::Slack(SlackTarget::default()));
    }
}
