pub mod checkpoint;
pub mod error;
pub mod project;
pub mod results;
pub mod target;

// Handy re-exports to simplify imports elsewhere
pub use error::DomainError;
pub use target::{BatchSource, ExecutionParams, ExpectationConfig, ValidationConfig, ValidationDefinition};
