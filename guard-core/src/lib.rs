// guard-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts for the external validation framework: context registries,
// checkpoint execution, log sink, report rendering.
pub mod ports;

// 2. Domain (Business core)
// Validation targets, checkpoint assembly, result flattening.
// Depends on nothing else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Config files, DuckDB log table, in-memory context, replayed runs, HTML report.
pub mod infrastructure;

// 4. Application (Use Cases)
// Guard bootstrap, checkpoint registration, validation orchestration, clean.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// use fabric_data_guard_core::GuardError;
pub use application::FabricDataGuard;
pub use domain::results::{FlatValidationRecord, RawValidationResult, flatten};
pub use error::GuardError;
