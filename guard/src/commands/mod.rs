// guard/src/commands/mod.rs

pub mod checkpoint;
pub mod clean;
pub mod flatten;
pub mod logs;
pub mod validate;
