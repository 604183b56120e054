// guard-core/src/application/clean.rs

use std::fs;
use std::path::{Component, Path};
use tracing::info;

use crate::error::GuardError;
use crate::infrastructure::config::project::load_guard_config;

/// Removes the report directory configured for the project. The directory
/// lives under `project_root_dir` when one is configured.
/// Returns the removed paths, relative to that root.
pub fn clean_project(project_dir: &Path) -> Result<Vec<String>, GuardError> {
    info!("Cleaning generated reports");

    let config = load_guard_config(project_dir)?;
    let root = config.root_dir(project_dir);
    let report_dir = config.report_dir;

    // Path traversal guard: the target must stay inside the root.
    let relative = Path::new(&report_dir);
    let escapes = relative.is_absolute()
        || relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
    if escapes || report_dir.trim().is_empty() {
        return Err(GuardError::UnsafePath(report_dir));
    }

    let full_path = root.join(relative);
    let mut removed = Vec::new();
    if full_path.exists() {
        if full_path.is_dir() {
            fs::remove_dir_all(&full_path)?;
        } else {
            fs::remove_file(&full_path)?;
        }
        info!(path = %report_dir, "Artifact removed");
        removed.push(report_dir);
    }

    Ok(removed)
}
