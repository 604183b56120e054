// guard/src/commands/checkpoint.rs
//
// USE CASE: Show the checkpoint the project configuration assembles.

use std::path::PathBuf;

use anyhow::Context;
use fabric_data_guard_core::FabricDataGuard;
use fabric_data_guard_core::application::create_checkpoint;
use fabric_data_guard_core::infrastructure::adapters::InMemoryContext;
use fabric_data_guard_core::infrastructure::config::load_guard_config;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    let config = load_guard_config(&project_dir).with_context(|| {
        format!(
            "Failed to load guard configuration from {}",
            project_dir.display()
        )
    })?;

    let context = InMemoryContext::new();
    let guard = FabricDataGuard::from_config(&context, &config)?;
    let checkpoint = create_checkpoint(
        &context,
        guard.target(),
        &config.notifications,
        &config.result_format,
    )?;

    println!("{}", serde_json::to_string_pretty(&checkpoint)?);
    Ok(())
}
