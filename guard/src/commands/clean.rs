// guard/src/commands/clean.rs
//
// USE CASE: Remove generated reports.

use std::path::PathBuf;

use anyhow::Context;
use fabric_data_guard_core::application::clean_project;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    let removed = clean_project(&project_dir)
        .with_context(|| format!("Clean failed in {}", project_dir.display()))?;

    if removed.is_empty() {
        println!("Nothing to clean.");
    }
    for path in removed {
        println!("Removed {}", path);
    }
    Ok(())
}
