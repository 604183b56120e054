// guard-core/src/domain/target.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Identifies what gets validated: one data asset of one datasource, checked
/// by one expectation suite through one batch and validation definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub datasource_name: String,
    pub data_asset_name: String,
    pub suite_name: String,
    pub batch_definition_name: String,
    pub validation_definition_name: String,
}

impl ValidationConfig {
    /// Derives suite, batch definition and validation definition names from
    /// the data asset name.
    pub fn new(datasource_name: impl Into<String>, data_asset_name: impl Into<String>) -> Self {
        let data_asset_name = data_asset_name.into();
        Self {
            datasource_name: datasource_name.into(),
            suite_name: format!("{}Suite", data_asset_name),
            batch_definition_name: format!("{}BatchDefinition", data_asset_name),
            validation_definition_name: format!("{}ValidationDefinition", data_asset_name),
            data_asset_name,
        }
    }

    pub fn with_suite_name(mut self, suite_name: impl Into<String>) -> Self {
        self.suite_name = suite_name.into();
        self
    }

    pub fn checkpoint_name(&self) -> String {
        format!("{}AnalysisCheckpoint", self.datasource_name)
    }

    pub fn validation_definition(&self) -> ValidationDefinition {
        ValidationDefinition {
            name: self.validation_definition_name.clone(),
            datasource_name: self.datasource_name.clone(),
            data_asset_name: self.data_asset_name.clone(),
            batch_definition_name: self.batch_definition_name.clone(),
            suite_name: self.suite_name.clone(),
        }
    }

    /// Fails when any of datasource, data asset, suite or batch definition is blank.
    pub fn ensure_complete(&self) -> Result<(), DomainError> {
        let missing: Vec<&'static str> = [
            ("datasource", &self.datasource_name),
            ("data asset", &self.data_asset_name),
            ("expectation suite", &self.suite_name),
            ("batch definition", &self.batch_definition_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::IncompleteConfiguration { missing })
        }
    }
}

/// Binding of one expectation suite to one batch definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationDefinition {
    pub name: String,
    pub datasource_name: String,
    pub data_asset_name: String,
    pub batch_definition_name: String,
    pub suite_name: String,
}

/// A single declarative rule, in the shape the validation framework expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectationConfig {
    #[serde(rename = "type")]
    pub expectation_type: String,
    #[serde(default)]
    pub kwargs: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ExpectationConfig {
    pub fn new(expectation_type: impl Into<String>) -> Self {
        Self {
            expectation_type: expectation_type.into(),
            kwargs: Map::new(),
            id: None,
        }
    }

    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }
}

/// The dataframe handed to the validation engine for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PathBuf>,
}

impl BatchSource {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
        }
    }
}

/// Engine parameters forwarded untouched to the checkpoint run.
pub type ExecutionParams = Map<String, Value>;
