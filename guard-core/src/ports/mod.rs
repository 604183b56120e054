// guard-core/src/ports/mod.rs
//
// What the guard needs from the outside world, without knowing how it is done:
// the validation framework's context, its checkpoint runner, a table to log
// results into and a report renderer.

pub mod context;
pub mod report;
pub mod runner;
pub mod sink;

pub use context::ValidationContext;
pub use report::ReportRenderer;
pub use runner::CheckpointRunner;
pub use sink::ResultSink;
