pub mod project;

pub use crate::domain::project::GuardConfig;
pub use project::{CONFIG_FILE_CANDIDATES, load_guard_config};
