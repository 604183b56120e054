// guard-core/src/domain/project/configuration.rs

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use crate::domain::checkpoint::{NotificationSpec, ResultFormat};
use crate::domain::target::{ExpectationConfig, ValidationConfig};

pub const DEFAULT_LOG_TABLE: &str = "fabric_data_guard_logs";

static IDENTIFIER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").ok());

/// True for names usable unquoted as a SQL table identifier.
pub fn is_safe_identifier(name: &str) -> bool {
    IDENTIFIER.as_ref().is_some_and(|re| re.is_match(name))
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct GuardConfig {
    #[validate(length(min = 1, message = "datasource_name cannot be empty"))]
    pub datasource_name: String,

    #[validate(length(min = 1, message = "data_asset_name cannot be empty"))]
    pub data_asset_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite_name: Option<String>,

    /// Root of the validation framework's file context, when it lives outside
    /// the project. Relative values resolve against the project directory.
    /// `report_dir` resolves against it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_root_dir: Option<PathBuf>,

    #[validate(custom(function = "validate_log_table"))]
    #[serde(default = "default_log_table")]
    pub log_table: String,

    #[serde(default = "default_report_dir")]
    pub report_dir: String,

    #[serde(default)]
    pub result_format: ResultFormat,

    #[serde(default)]
    pub notifications: Vec<NotificationSpec>,

    #[serde(default)]
    pub expectations: Vec<ExpectationConfig>,
}

impl GuardConfig {
    pub fn new(datasource_name: impl Into<String>, data_asset_name: impl Into<String>) -> Self {
        Self {
            datasource_name: datasource_name.into(),
            data_asset_name: data_asset_name.into(),
            suite_name: None,
            project_root_dir: None,
            log_table: default_log_table(),
            report_dir: default_report_dir(),
            result_format: ResultFormat::default(),
            notifications: vec![],
            expectations: vec![],
        }
    }

    /// `project_root_dir` when set, otherwise `project_dir`.
    pub fn root_dir(&self, project_dir: &Path) -> PathBuf {
        match &self.project_root_dir {
            Some(root) => project_dir.join(root),
            None => project_dir.to_path_buf(),
        }
    }

    pub fn report_path(&self, project_dir: &Path) -> PathBuf {
        self.root_dir(project_dir).join(&self.report_dir)
    }

    pub fn target(&self) -> ValidationConfig {
        let target = ValidationConfig::new(&self.datasource_name, &self.data_asset_name);
        match &self.suite_name {
            Some(suite) => target.with_suite_name(suite),
            None => target,
        }
    }
}

fn validate_log_table(name: &str) -> Result<(), ValidationError> {
    if is_safe_identifier(name) {
        Ok(())
    } else {
        Err(ValidationError::new("log_table").with_message(Cow::Borrowed(
            "log_table must start with a letter or '_' and contain only letters, digits and '_'",
        )))
    }
}

fn default_log_table() -> String {
    DEFAULT_LOG_TABLE.to_string()
}

fn default_report_dir() -> String {
    "target/reports".to_string()
}
