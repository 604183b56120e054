// guard-core/src/application/guard.rs

use tracing::{debug, info};

use crate::application::validation::{ValidationOptions, ValidationServices, validate};
use crate::domain::project::GuardConfig;
use crate::domain::results::FlatValidationRecord;
use crate::domain::target::{BatchSource, ExecutionParams, ExpectationConfig, ValidationConfig};
use crate::error::GuardError;
use crate::ports::context::ValidationContext;

/// Entry point bound to one data asset: registers the target with the
/// validation context and runs validations against it.
pub struct FabricDataGuard<'c> {
    context: &'c dyn ValidationContext,
    target: ValidationConfig,
}

impl<'c> FabricDataGuard<'c> {
    /// Registers datasource, data asset, `{asset}Suite`, the whole-dataframe
    /// batch definition and the validation definition. Existing entries are reused.
    pub fn new(
        context: &'c dyn ValidationContext,
        datasource_name: &str,
        data_asset_name: &str,
    ) -> Result<Self, GuardError> {
        Self::register(context, ValidationConfig::new(datasource_name, data_asset_name))
    }

    pub fn with_suite_name(
        context: &'c dyn ValidationContext,
        datasource_name: &str,
        data_asset_name: &str,
        suite_name: &str,
    ) -> Result<Self, GuardError> {
        Self::register(
            context,
            ValidationConfig::new(datasource_name, data_asset_name).with_suite_name(suite_name),
        )
    }

    /// Registers the configured target, then adds the configured expectations.
    pub fn from_config(
        context: &'c dyn ValidationContext,
        config: &GuardConfig,
    ) -> Result<Self, GuardError> {
        let guard = Self::register(context, config.target())?;
        for expectation in &config.expectations {
            guard.add_expectation(expectation.clone())?;
        }
        Ok(guard)
    }

    fn register(
        context: &'c dyn ValidationContext,
        target: ValidationConfig,
    ) -> Result<Self, GuardError> {
        context.ensure_datasource(&target.datasource_name)?;
        context.ensure_data_asset(&target.datasource_name, &target.data_asset_name)?;
        context.ensure_suite(&target.suite_name)?;
        context.ensure_batch_definition(
            &target.datasource_name,
            &target.data_asset_name,
            &target.batch_definition_name,
        )?;
        context.ensure_validation_definition(&target.validation_definition())?;

        info!(
            datasource = %target.datasource_name,
            asset = %target.data_asset_name,
            suite = %target.suite_name,
            "Validation target registered"
        );
        Ok(Self { context, target })
    }

    pub fn target(&self) -> &ValidationConfig {
        &self.target
    }

    pub fn add_expectation(&self, expectation: ExpectationConfig) -> Result<(), GuardError> {
        debug!(expectation = %expectation.expectation_type, "Registering expectation");
        self.context.add_expectation(&self.target.suite_name, expectation)
    }

    pub fn expectations(&self) -> Result<Vec<ExpectationConfig>, GuardError> {
        self.context.expectations(&self.target.suite_name)
    }

    pub async fn run_validation(
        &self,
        batch: &BatchSource,
        params: &ExecutionParams,
        services: ValidationServices<'_>,
        options: &ValidationOptions,
    ) -> Result<Vec<FlatValidationRecord>, GuardError> {
        validate(self.context, &self.target, batch, params, services, options).await
    }
}
