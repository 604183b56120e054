// guard-core/src/infrastructure/adapters/memory.rs
//
// In-process stand-in for the validation framework's context object.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::domain::checkpoint::CheckpointDefinition;
use crate::domain::error::DomainError;
use crate::domain::target::{ExpectationConfig, ValidationDefinition};
use crate::error::GuardError;
use crate::ports::context::ValidationContext;

#[derive(Debug, Default)]
struct Registry {
    // datasource -> asset -> batch definitions
    datasources: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>,
    suites: BTreeMap<String, Vec<ExpectationConfig>>,
    validation_definitions: BTreeMap<String, ValidationDefinition>,
    checkpoints: Vec<CheckpointDefinition>,
    next_checkpoint_id: u64,
}

#[derive(Debug, Default)]
pub struct InMemoryContext {
    registry: Mutex<Registry>,
}

impl InMemoryContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> Result<MutexGuard<'_, Registry>, GuardError> {
        self.registry
            .lock()
            .map_err(|_| GuardError::InternalError("Context registry lock poisoned".into()))
    }

    pub fn datasource_names(&self) -> Result<Vec<String>, GuardError> {
        Ok(self.registry()?.datasources.keys().cloned().collect())
    }

    pub fn asset_names(&self, datasource: &str) -> Result<Vec<String>, GuardError> {
        let registry = self.registry()?;
        let assets = registry
            .datasources
            .get(datasource)
            .ok_or_else(|| DomainError::DatasourceNotFound(datasource.to_string()))?;
        Ok(assets.keys().cloned().collect())
    }

    pub fn suite_names(&self) -> Result<Vec<String>, GuardError> {
        Ok(self.registry()?.suites.keys().cloned().collect())
    }

    pub fn validation_definition(&self, name: &str) -> Result<Option<ValidationDefinition>, GuardError> {
        Ok(self.registry()?.validation_definitions.get(name).cloned())
    }
}

impl ValidationContext for InMemoryContext {
    fn ensure_datasource(&self, datasource: &str) -> Result<(), GuardError> {
        self.registry()?
            .datasources
            .entry(datasource.to_string())
            .or_default();
        Ok(())
    }

    fn ensure_data_asset(&self, datasource: &str, asset: &str) -> Result<(), GuardError> {
        let mut registry = self.registry()?;
        let assets = registry
            .datasources
            .get_mut(datasource)
            .ok_or_else(|| DomainError::DatasourceNotFound(datasource.to_string()))?;
        assets.entry(asset.to_string()).or_default();
        Ok(())
    }

    fn ensure_suite(&self, suite: &str) -> Result<(), GuardError> {
        self.registry()?.suites.entry(suite.to_string()).or_default();
        Ok(())
    }

    fn ensure_batch_definition(
        &self,
        datasource: &str,
        asset: &str,
        batch_definition: &str,
    ) -> Result<(), GuardError> {
        let mut registry = self.registry()?;
        let defs = registry
            .datasources
            .get_mut(datasource)
            .ok_or_else(|| DomainError::DatasourceNotFound(datasource.to_string()))?
            .get_mut(asset)
            .ok_or_else(|| DomainError::DataAssetNotFound {
                datasource: datasource.to_string(),
                asset: asset.to_string(),
            })?;
        defs.insert(batch_definition.to_string());
        Ok(())
    }

    fn ensure_validation_definition(
        &self,
        definition: &ValidationDefinition,
    ) -> Result<(), GuardError> {
        let mut registry = self.registry()?;
        if !registry.suites.contains_key(&definition.suite_name) {
            return Err(DomainError::SuiteNotFound(definition.suite_name.clone()).into());
        }
        registry
            .validation_definitions
            .entry(definition.name.clone())
            .or_insert_with(|| definition.clone());
        Ok(())
    }

    fn has_datasource(&self, datasource: &str) -> Result<bool, GuardError> {
        Ok(self.registry()?.datasources.contains_key(datasource))
    }

    fn has_data_asset(&self, datasource: &str, asset: &str) -> Result<bool, GuardError> {
        Ok(self
            .registry()?
            .datasources
            .get(datasource)
            .is_some_and(|assets| assets.contains_key(asset)))
    }

    fn has_suite(&self, suite: &str) -> Result<bool, GuardError> {
        Ok(self.registry()?.suites.contains_key(suite))
    }

    fn has_batch_definition(
        &self,
        datasource: &str,
        asset: &str,
        batch_definition: &str,
    ) -> Result<bool, GuardError> {
        let registry = self.registry()?;
        Ok(registry
            .datasources
            .get(datasource)
            .and_then(|assets| assets.get(asset))
            .is_some_and(|defs| defs.contains(batch_definition)))
    }

    fn add_expectation(&self, suite: &str, expectation: ExpectationConfig) -> Result<(), GuardError> {
        let mut registry = self.registry()?;
        let expectations = registry
            .suites
            .get_mut(suite)
            .ok_or_else(|| DomainError::SuiteNotFound(suite.to_string()))?;
        debug!(suite, expectation = %expectation.expectation_type, "Adding expectation");
        expectations.push(expectation);
        Ok(())
    }

    fn expectations(&self, suite: &str) -> Result<Vec<ExpectationConfig>, GuardError> {
        self.registry()?
            .suites
            .get(suite)
            .cloned()
            .ok_or_else(|| DomainError::SuiteNotFound(suite.to_string()).into())
    }

    /// Same-name checkpoints are replaced in place.
    fn add_checkpoint(
        &self,
        mut checkpoint: CheckpointDefinition,
    ) -> Result<CheckpointDefinition, GuardError> {
        let mut registry = self.registry()?;
        registry.next_checkpoint_id += 1;
        checkpoint.id = Some(format!("checkpoint-{:04}", registry.next_checkpoint_id));

        let position = registry
            .checkpoints
            .iter()
            .position(|existing| existing.name == checkpoint.name);
        match position {
            Some(index) => registry.checkpoints[index] = checkpoint.clone(),
            None => registry.checkpoints.push(checkpoint.clone()),
        }
        Ok(checkpoint)
    }

    fn checkpoints(&self) -> Result<Vec<CheckpointDefinition>, GuardError> {
        Ok(self.registry()?.checkpoints.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::checkpoint::{ResultFormat, assemble};
    use crate::domain::target::ValidationConfig;

    #[test]
    fn test_ensure_is_idempotent() {
        let ctx = InMemoryContext::new();
        ctx.ensure_datasource("Product").unwrap();
        ctx.ensure_datasource("Product").unwrap();
        ctx.ensure_data_asset("Product", "Subscription").unwrap();
        ctx.ensure_data_asset("Product", "Subscription").unwrap();

        assert_eq!(ctx.datasource_names().unwrap(), vec!["Product"]);
        assert_eq!(ctx.asset_names("Product").unwrap(), vec!["Subscription"]);
    }

    #[test]
    fn test_lookups_reflect_registrations() {
        let ctx = InMemoryContext::new();
        assert!(!ctx.has_datasource("Product").unwrap());
        assert!(!ctx.has_data_asset("Product", "Subscription").unwrap());
        assert!(!ctx.has_suite("SubscriptionSuite").unwrap());

        ctx.ensure_datasource("Product").unwrap();
        ctx.ensure_data_asset("Product", "Subscription").unwrap();
        ctx.ensure_suite("SubscriptionSuite").unwrap();
        ctx.ensure_batch_definition("Product", "Subscription", "SubscriptionBatchDefinition")
            .unwrap();

        assert!(ctx.has_datasource("Product").unwrap());
        assert!(ctx.has_data_asset("Product", "Subscription").unwrap());
        assert!(!ctx.has_data_asset("Product", "Invoice").unwrap());
        assert!(ctx.has_suite("SubscriptionSuite").unwrap());
        assert!(
            ctx.has_batch_definition("Product", "Subscription", "SubscriptionBatchDefinition")
                .unwrap()
        );
        assert!(
            !ctx.has_batch_definition("Product", "Subscription", "OtherBatchDefinition")
                .unwrap()
        );
    }

    #[test]
    fn test_asset_requires_datasource() {
        let ctx = InMemoryContext::new();
        let err = ctx.ensure_data_asset("Missing", "Asset").unwrap_err();
        assert!(matches!(
            err,
            GuardError::Domain(DomainError::DatasourceNotFound(_))
        ));
    }

    #[test]
    fn test_batch_definition_requires_asset() {
        let ctx = InMemoryContext::new();
        ctx.ensure_datasource("Product").unwrap();
        let err = ctx
            .ensure_batch_definition("Product", "Nope", "NopeBatchDefinition")
            .unwrap_err();
        assert!(matches!(
            err,
            GuardError::Domain(DomainError::DataAssetNotFound { .. })
        ));
    }

    #[test]
    fn test_expectation_requires_suite() {
        let ctx = InMemoryContext::new();
        let err = ctx
            .add_expectation("Unknown", ExpectationConfig::new("expect_x"))
            .unwrap_err();
        assert!(matches!(err, GuardError::Domain(DomainError::SuiteNotFound(_))));

        ctx.ensure_suite("Known").unwrap();
        ctx.add_expectation("Known", ExpectationConfig::new("expect_x"))
            .unwrap();
        assert_eq!(ctx.expectations("Known").unwrap().len(), 1);
    }

    #[test]
    fn test_validation_definition_requires_suite() {
        let ctx = InMemoryContext::new();
        let definition = ValidationConfig::new("Product", "Subscription").validation_definition();
        assert!(ctx.ensure_validation_definition(&definition).is_err());

        ctx.ensure_suite("SubscriptionSuite").unwrap();
        ctx.ensure_validation_definition(&definition).unwrap();
        assert_eq!(
            ctx.validation_definition("SubscriptionValidationDefinition")
                .unwrap(),
            Some(definition)
        );
    }

    #[test]
    fn test_add_checkpoint_assigns_id_and_replaces_same_name() {
        let ctx = InMemoryContext::new();
        let config = ValidationConfig::new("Product", "Subscription");
        let definition = assemble(&config, &[], &ResultFormat::default());

        let first = ctx.add_checkpoint(definition.clone()).unwrap();
        let second = ctx.add_checkpoint(definition).unwrap();

        assert_eq!(first.id.as_deref(), Some("checkpoint-0001"));
        assert_eq!(second.id.as_deref(), Some("checkpoint-0002"));
        let all = ctx.checkpoints().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id.as_deref(), Some("checkpoint-0002"));
    }
}
