// guard-core/src/application/mod.rs

pub mod checkpoint;
pub mod clean;
pub mod guard;
pub mod validation;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write `use fabric_data_guard_core::application::{FabricDataGuard, clean_project};`
// without knowing the file layout.

pub use checkpoint::create_checkpoint;
pub use clean::clean_project;
pub use guard::FabricDataGuard;
pub use validation::{ValidationOptions, ValidationServices, ensure_registered, validate};
