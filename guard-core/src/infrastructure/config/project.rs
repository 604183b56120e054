// guard-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::project::GuardConfig;
use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_FILE_CANDIDATES: [&str; 2] = ["fabric_data_guard.yaml", "fdg.yaml"];

#[instrument(skip(project_dir))]
pub fn load_guard_config(project_dir: &Path) -> Result<GuardConfig, InfrastructureError> {
    // 1. Locate the config file
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading guard configuration");

    // 2. Parse YAML
    let content = fs::read_to_string(&config_path)?;
    let mut config: GuardConfig = serde_yaml::from_str(&content)?;

    // 3. Environment layering, e.g. FDG_LOG_TABLE=dq_logs fdg validate ...
    apply_overrides(&mut config, |key| std::env::var(key).ok());

    // 4. Fail fast on invalid values
    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    CONFIG_FILE_CANDIDATES
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
        .ok_or_else(|| {
            InfrastructureError::ConfigNotFound(format!(
                "No configuration file found in {:?}. Checked: {:?}",
                root, CONFIG_FILE_CANDIDATES
            ))
        })
}

fn apply_overrides(config: &mut GuardConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(val) = lookup("FDG_LOG_TABLE") {
        info!(old = ?config.log_table, new = ?val, "Overriding log table via ENV");
        config.log_table = val;
    }
    if let Some(val) = lookup("FDG_REPORT_DIR") {
        info!(old = ?config.report_dir, new = ?val, "Overriding report dir via ENV");
        config.report_dir = val;
    }
}
