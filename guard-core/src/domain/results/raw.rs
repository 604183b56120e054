// guard-core/src/domain/results/raw.rs
//
// Nested run results exactly as the validation framework emits them.
// Every field is optional: partial payloads deserialize, and the flattener
// turns absent fields into nulls.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Run results keyed by run label, in the order the engine produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawValidationResult {
    runs: Vec<(String, RawValidationRun)>,
}

impl RawValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, run: RawValidationRun) {
        self.runs.push((label.into(), run));
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValidationRun)> {
        self.runs.iter().map(|(label, run)| (label.as_str(), run))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.runs.iter().map(|(label, _)| label.as_str()).collect()
    }
}

impl<L: Into<String>> FromIterator<(L, RawValidationRun)> for RawValidationResult {
    fn from_iter<I: IntoIterator<Item = (L, RawValidationRun)>>(iter: I) -> Self {
        Self {
            runs: iter
                .into_iter()
                .map(|(label, run)| (label.into(), run))
                .collect(),
        }
    }
}

// A plain map would lose the engine's ordering, so the mapping is read entry by entry.
impl<'de> Deserialize<'de> for RawValidationResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RunsVisitor;

        impl<'de> Visitor<'de> for RunsVisitor {
            type Value = RawValidationResult;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of validation runs keyed by run label")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut runs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, run)) = access.next_entry::<String, RawValidationRun>()? {
                    runs.push((label, run));
                }
                Ok(RawValidationResult { runs })
            }
        }

        deserializer.deserialize_map(RunsVisitor)
    }
}

impl Serialize for RawValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.runs.len()))?;
        for (label, run) in &self.runs {
            map.serialize_entry(label, run)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawValidationRun {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub suite_name: Option<String>,
    #[serde(default)]
    pub meta: Option<RunMeta>,
    #[serde(default)]
    pub statistics: Option<RunStatistics>,
    #[serde(default)]
    pub results: Option<Vec<ExpectationOutcome>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMeta {
    #[serde(default)]
    pub active_batch_definition: Option<ActiveBatchDefinition>,
    #[serde(default)]
    pub validation_id: Option<String>,
    #[serde(default)]
    pub checkpoint_id: Option<String>,
    #[serde(default)]
    pub validation_time: Option<String>,
    #[serde(default)]
    pub run_id: Option<RunIdentifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveBatchDefinition {
    #[serde(default)]
    pub datasource_name: Option<String>,
    #[serde(default)]
    pub data_asset_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunIdentifier {
    #[serde(default)]
    pub run_name: Option<String>,
    #[serde(default)]
    pub run_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    #[serde(default)]
    pub evaluated_expectations: Option<u64>,
    #[serde(default)]
    pub successful_expectations: Option<u64>,
    #[serde(default)]
    pub unsuccessful_expectations: Option<u64>,
    #[serde(default)]
    pub success_percent: Option<f64>,
}

/// One evaluated expectation inside a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectationOutcome {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub expectation_config: Option<ExpectationConfigRef>,
    #[serde(default)]
    pub result: Option<ExpectationResultDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectationConfigRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub kwargs: Option<Map<String, Value>>,
    #[serde(rename = "type", default)]
    pub expectation_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectationResultDetail {
    #[serde(default)]
    pub element_count: Option<u64>,
    #[serde(default)]
    pub unexpected_count: Option<u64>,
    #[serde(default)]
    pub unexpected_percent: Option<f64>,
    #[serde(default)]
    pub partial_unexpected_index_list: Option<Vec<Value>>,
}

// --- OPTIONAL CHAINING ---
// Each accessor tolerates any missing intermediate level.

impl RawValidationRun {
    pub fn datasource_name(&self) -> Option<&str> {
        self.meta
            .as_ref()?
            .active_batch_definition
            .as_ref()?
            .datasource_name
            .as_deref()
    }

    pub fn data_asset_name(&self) -> Option<&str> {
        self.meta
            .as_ref()?
            .active_batch_definition
            .as_ref()?
            .data_asset_name
            .as_deref()
    }

    pub fn validation_id(&self) -> Option<&str> {
        self.meta.as_ref()?.validation_id.as_deref()
    }

    pub fn checkpoint_id(&self) -> Option<&str> {
        self.meta.as_ref()?.checkpoint_id.as_deref()
    }

    pub fn validation_time(&self) -> Option<&str> {
        self.meta.as_ref()?.validation_time.as_deref()
    }

    pub fn run_name(&self) -> Option<&str> {
        self.meta.as_ref()?.run_id.as_ref()?.run_name.as_deref()
    }

    pub fn run_time(&self) -> Option<&str> {
        self.meta.as_ref()?.run_id.as_ref()?.run_time.as_deref()
    }

    pub fn statistic<T>(&self, pick: impl FnOnce(&RunStatistics) -> Option<T>) -> Option<T> {
        self.statistics.as_ref().and_then(pick)
    }

    pub fn outcomes(&self) -> &[ExpectationOutcome] {
        self.results.as_deref().unwrap_or(&[])
    }
}

impl ExpectationOutcome {
    pub fn expectation_id(&self) -> Option<&str> {
        self.expectation_config.as_ref()?.id.as_deref()
    }

    pub fn expectation_type(&self) -> Option<&str> {
        self.expectation_config.as_ref()?.expectation_type.as_deref()
    }

    /// The `column` kwarg, when the expectation targets a single column.
    pub fn column(&self) -> Option<&str> {
        self.expectation_config
            .as_ref()?
            .kwargs
            .as_ref()?
            .get("column")?
            .as_str()
    }

    pub fn detail(&self) -> Option<&ExpectationResultDetail> {
        self.result.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_preserves_run_order() {
        let raw: RawValidationResult = serde_json::from_str(
            r#"{"zeta": {"success": true}, "alpha": {"success": false}, "mid": {}}"#,
        )
        .unwrap();
        assert_eq!(raw.labels(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(raw.len(), 3);
    }

    #[test]
    fn test_nulls_and_missing_levels() {
        let run: RawValidationRun = serde_json::from_value(json!({
            "success": null,
            "meta": {"active_batch_definition": null, "run_id": {}},
            "statistics": null
        }))
        .unwrap();
        assert_eq!(run.success, None);
        assert_eq!(run.datasource_name(), None);
        assert_eq!(run.run_name(), None);
        assert_eq!(run.statistic(|s| s.success_percent), None);
        assert!(run.outcomes().is_empty());
    }

    #[test]
    fn test_column_from_kwargs() {
        let outcome: ExpectationOutcome = serde_json::from_value(json!({
            "expectation_config": {"type": "expect_column_values_to_be_unique", "kwargs": {"column": "UserId"}}
        }))
        .unwrap();
        assert_eq!(outcome.column(), Some("UserId"));
        assert_eq!(outcome.expectation_type(), Some("expect_column_values_to_be_unique"));
        assert_eq!(outcome.expectation_id(), None);

        let table_level: ExpectationOutcome = serde_json::from_value(json!({
            "expectation_config": {"type": "expect_table_row_count_to_be_between", "kwargs": {"min_value": 1}}
        }))
        .unwrap();
        assert_eq!(table_level.column(), None);
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let result = serde_json::from_str::<RawValidationResult>(r#"{"v1": {"success": "yes"}}"#);
        assert!(result.is_err());
        assert!(serde_json::from_str::<RawValidationResult>("[]").is_err());
    }

    #[test]
    fn test_serialize_roundtrip_keeps_order() {
        let raw: RawValidationResult = vec![
            ("b", RawValidationRun::default()),
            ("a", RawValidationRun::default()),
        ]
        .into_iter()
        .collect();
        let text = serde_json::to_string(&raw).unwrap();
        let back: RawValidationResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back.labels(), vec!["b", "a"]);
    }
}
