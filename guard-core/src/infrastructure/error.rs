// guard-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(fdg::infra::database::duckdb),
        help("An error occurred inside the log table engine.")
    )]
    DuckDB(#[from] duckdb::Error),

    #[error("Invalid table name '{0}'")]
    #[diagnostic(
        code(fdg::infra::database::table_name),
        help("Table names must start with a letter or '_' and contain only letters, digits and '_'.")
    )]
    InvalidTableName(String),

    #[error("Value {value} of column '{column}' does not fit a BIGINT")]
    #[diagnostic(code(fdg::infra::database::out_of_range))]
    ValueOutOfRange { column: &'static str, value: u64 },

    #[error("Database lock poisoned")]
    #[diagnostic(code(fdg::infra::database::poisoned))]
    Poisoned,
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(fdg::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(fdg::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    // --- RESULTS / JSON ---
    #[error("JSON Error: {0}")]
    #[diagnostic(
        code(fdg::infra::json),
        help("Validation results must be a JSON object keyed by run label.")
    )]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(fdg::infra::config_invalid))]
    ConfigError(String),

    #[error("Project configuration not found at '{0}'")]
    #[diagnostic(code(fdg::infra::config_missing))]
    ConfigNotFound(String),

    // --- TEMPLATING ---
    #[error("Template Rendering Error: {0}")]
    #[diagnostic(
        code(fdg::infra::template),
        help("Check the report template syntax.")
    )]
    TemplateError(#[from] minijinja::Error),
}

// Shortcut for `?` on duckdb calls
impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}
