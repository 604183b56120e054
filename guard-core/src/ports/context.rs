// guard-core/src/ports/context.rs

use crate::domain::checkpoint::CheckpointDefinition;
use crate::domain::target::{ExpectationConfig, ValidationDefinition};
use crate::error::GuardError;

/// Registries of the validation framework's context object.
///
/// The `ensure_*` methods are get-or-add: registering an existing entry is not
/// an error. Implementations own their synchronisation.
pub trait ValidationContext: Send + Sync {
    fn ensure_datasource(&self, datasource: &str) -> Result<(), GuardError>;

    fn ensure_data_asset(&self, datasource: &str, asset: &str) -> Result<(), GuardError>;

    fn ensure_suite(&self, suite: &str) -> Result<(), GuardError>;

    fn ensure_batch_definition(
        &self,
        datasource: &str,
        asset: &str,
        batch_definition: &str,
    ) -> Result<(), GuardError>;

    fn ensure_validation_definition(&self, definition: &ValidationDefinition)
    -> Result<(), GuardError>;

    fn has_datasource(&self, datasource: &str) -> Result<bool, GuardError>;

    fn has_data_asset(&self, datasource: &str, asset: &str) -> Result<bool, GuardError>;

    fn has_suite(&self, suite: &str) -> Result<bool, GuardError>;

    fn has_batch_definition(
        &self,
        datasource: &str,
        asset: &str,
        batch_definition: &str,
    ) -> Result<bool, GuardError>;

    fn add_expectation(&self, suite: &str, expectation: ExpectationConfig)
    -> Result<(), GuardError>;

    fn expectations(&self, suite: &str) -> Result<Vec<ExpectationConfig>, GuardError>;

    /// Adds the checkpoint to the context and returns the registered handle.
    fn add_checkpoint(
        &self,
        checkpoint: CheckpointDefinition,
    ) -> Result<CheckpointDefinition, GuardError>;

    fn checkpoints(&self) -> Result<Vec<CheckpointDefinition>, GuardError>;
}
