// guard-core/src/domain/results/row.rs
//
// Row form of a flattened record for the log table. Detail lists travel as
// JSON text so that any table engine can store them.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::record::FlatValidationRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogRow {
    pub test_status: String,
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
    pub failed_detail_results: String,
    pub succeeded_detail_results: String,
    pub logged_at: String,
}

impl LogRow {
    /// Column names, in insertion order.
    pub const COLUMNS: [&'static str; 16] = [
        "TestStatus",
        "DatasourceName",
        "DataAssetName",
        "ValidationId",
        "CheckpointId",
        "ValidationTime",
        "RunName",
        "RunTime",
        "SuiteName",
        "EvaluatedExpectations",
        "SuccessfulExpectations",
        "UnsuccessfulExpectations",
        "SuccessPercent",
        "FailedDetailResults",
        "SucceededDetailResults",
        "LoggedAt",
    ];

    pub fn from_record(
        record: &FlatValidationRecord,
        logged_at: DateTime<Utc>,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            test_status: record.test_status.as_str().to_string(),
            datasource_name: record.datasource_name.clone(),
            data_asset_name: record.data_asset_name.clone(),
            validation_id: record.validation_id.clone(),
            checkpoint_id: record.checkpoint_id.clone(),
            validation_time: record.validation_time.clone(),
            run_name: record.run_name.clone(),
            run_time: record.run_time.clone(),
            suite_name: record.suite_name.clone(),
            evaluated_expectations: record.evaluated_expectations,
            successful_expectations: record.successful_expectations,
            unsuccessful_expectations: record.unsuccessful_expectations,
            success_percent: record.success_percent,
            failed_detail_results: serde_json::to_string(&record.failed_detail_results)?,
            succeeded_detail_results: serde_json::to_string(&record.succeeded_detail_results)?,
            logged_at: logged_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}

pub fn build_log_rows(
    records: &[FlatValidationRecord],
    logged_at: DateTime<Utc>,
) -> Result<Vec<LogRow>, serde_json::Error> {
    records
        .iter()
        .map(|record| LogRow::from_record(record, logged_at))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::results::{FailedDetailResult, TestStatus};
    use chrono::TimeZone;

    fn record() -> FlatValidationRecord {
        FlatValidationRecord {
            test_status: TestStatus::Failure,
            datasource_name: Some("Product".into()),
            data_asset_name: Some("Subscription".into()),
            validation_id: None,
            checkpoint_id: None,
            validation_time: None,
            run_name: None,
            run_time: None,
            suite_name: Some("SubscriptionSuite".into()),
            evaluated_expectations: Some(2),
            successful_expectations: Some(1),
            unsuccessful_expectations: Some(1),
            success_percent: Some(50.0),
            failed_detail_results: vec![FailedDetailResult {
                expectation_id: Some("e1".into()),
                column: Some("UserId".into()),
                expectation_type: Some("expect_column_values_to_not_be_null".into()),
                element_count: Some(10),
                unexpected_count: Some(1),
                unexpected_percent: Some(10.0),
                unexpected_index_list: vec![],
            }],
            succeeded_detail_results: vec![],
        }
    }

    #[test]
    fn test_row_from_record() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let row = LogRow::from_record(&record(), at).unwrap();

        assert_eq!(row.test_status, "Failure");
        assert_eq!(row.logged_at, "2024-05-01T12:00:00Z");
        assert_eq!(row.succeeded_detail_results, "[]");

        let failed: serde_json::Value = serde_json::from_str(&row.failed_detail_results).unwrap();
        assert_eq!(failed[0]["Column"], "UserId");
        assert_eq!(failed[0]["UnexpectedIndexList"], serde_json::json!([]));
    }

    #[test]
    fn test_columns_match_serialized_keys() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let rows = build_log_rows(&[record()], at).unwrap();
        let value = serde_json::to_value(&rows[0]).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, LogRow::COLUMNS.to_vec());
    }
}
