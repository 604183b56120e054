// guard-core/src/domain/checkpoint/result_format.rs

use serde::{Deserialize, Serialize};

/// How much per-row detail the engine reports for failing expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    BooleanOnly,
    Basic,
    Summary,
    #[default]
    Complete,
}

impl DetailLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::BooleanOnly => "BOOLEAN_ONLY",
            DetailLevel::Basic => "BASIC",
            DetailLevel::Summary => "SUMMARY",
            DetailLevel::Complete => "COMPLETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResultFormat {
    #[serde(default)]
    pub detail_level: DetailLevel,
    /// Columns identifying unexpected rows in the engine's report.
    #[serde(default)]
    pub unexpected_identifiers: Option<Vec<String>>,
}

impl ResultFormat {
    pub fn descriptor(&self) -> ResultFormatDescriptor {
        ResultFormatDescriptor {
            result_format: self.detail_level.as_str().to_string(),
            unexpected_index_column_names: self.unexpected_identifiers.clone(),
        }
    }
}

/// Wire form handed to the engine. `unexpected_index_column_names` is emitted
/// as `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultFormatDescriptor {
    pub result_format: String,
    pub unexpected_index_column_names: Option<Vec<String>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_descriptor() {
        let descriptor = ResultFormat::default().descriptor();
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({"result_format": "COMPLETE", "unexpected_index_column_names": null})
        );
    }

    #[test]
    fn test_summary_with_identifiers() {
        let format = ResultFormat {
            detail_level: DetailLevel::Summary,
            unexpected_identifiers: Some(vec!["id1".into(), "id2".into()]),
        };
        let descriptor = format.descriptor();
        assert_eq!(descriptor.result_format, "SUMMARY");
        assert_eq!(
            descriptor.unexpected_index_column_names,
            Some(vec!["id1".to_string(), "id2".to_string()])
        );
    }
}
