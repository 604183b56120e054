// guard-core/src/infrastructure/adapters/mod.rs

pub mod duckdb;
pub mod memory;
pub mod replay;

pub use self::duckdb::DuckDBLogSink;
pub use memory::InMemoryContext;
pub use replay::ReplayRunner;
