// guard-core/src/domain/project/mod.rs

pub mod configuration;
pub use configuration::{DEFAULT_LOG_TABLE, GuardConfig, is_safe_identifier};
