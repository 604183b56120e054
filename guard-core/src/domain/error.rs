// guard-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error(
        "Datasource, data asset, expectation suite, and batch definition must be set before running validation (missing: {})",
        .missing.join(", ")
    )]
    #[diagnostic(
        code(fdg::domain::incomplete_configuration),
        help("Register the validation target with FabricDataGuard::new before calling run_validation.")
    )]
    IncompleteConfiguration { missing: Vec<&'static str> },

    #[error("Datasource '{0}' is not registered")]
    #[diagnostic(code(fdg::domain::datasource_not_found))]
    DatasourceNotFound(String),

    #[error("Data asset '{asset}' is not registered on datasource '{datasource}'")]
    #[diagnostic(code(fdg::domain::data_asset_not_found))]
    DataAssetNotFound { datasource: String, asset: String },

    #[error("Expectation suite '{0}' is not registered")]
    #[diagnostic(
        code(fdg::domain::suite_not_found),
        help("Suites are created when the guard registers its validation target.")
    )]
    SuiteNotFound(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(fdg::domain::invalid_configuration))]
    InvalidConfiguration(String),
}
