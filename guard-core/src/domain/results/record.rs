// guard-core/src/domain/results/record.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    Success,
    Failure,
}

impl TestStatus {
    /// Anything but an explicit `true` is a failure.
    pub fn from_flag(flag: Option<bool>) -> Self {
        if flag == Some(true) {
            TestStatus::Success
        } else {
            TestStatus::Failure
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Success => "Success",
            TestStatus::Failure => "Failure",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestStatus::Success)
    }
}

/// One row per validation run, keyed the way the log table expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlatValidationRecord {
    pub test_status: TestStatus,
    pub datasource_name: Option<String>,
    pub data_asset_name: Option<String>,
    pub validation_id: Option<String>,
    pub checkpoint_id: Option<String>,
    pub validation_time: Option<String>,
    pub run_name: Option<String>,
    pub run_time: Option<String>,
    pub suite_name: Option<String>,
    pub evaluated_expectations: Option<u64>,
    pub successful_expectations: Option<u64>,
    pub unsuccessful_expectations: Option<u64>,
    pub success_percent: Option<f64>,
    pub failed_detail_results: Vec<FailedDetailResult>,
    pub succeeded_detail_results: Vec<SucceededDetailResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FailedDetailResult {
    pub expectation_id: Option<String>,
    pub column: Option<String>,
    pub expectation_type: Option<String>,
    pub element_count: Option<u64>,
    pub unexpected_count: Option<u64>,
    pub unexpected_percent: Option<f64>,
    pub unexpected_index_list: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SucceededDetailResult {
    pub expectation_id: Option<String>,
    pub column: Option<String>,
    pub expectation_type: Option<String>,
    pub test_status: TestStatus,
}
