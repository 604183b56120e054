// guard-core/src/domain/results/flatten.rs

use tracing::debug;

use super::raw::{ExpectationOutcome, RawValidationResult, RawValidationRun};
use super::record::{FailedDetailResult, FlatValidationRecord, SucceededDetailResult, TestStatus};

/// Flattens nested run results into one record per run, in input order.
/// Total: absent fields become `None`, never an error.
pub fn flatten(raw: &RawValidationResult) -> Vec<FlatValidationRecord> {
    raw.iter()
        .map(|(label, run)| {
            let record = flatten_run(run);
            debug!(
                run = label,
                status = record.test_status.as_str(),
                failed = record.failed_detail_results.len(),
                "Flattened validation run"
            );
            record
        })
        .collect()
}

pub fn flatten_run(run: &RawValidationRun) -> FlatValidationRecord {
    // A missing per-expectation flag routes to the failed list, like the run-level default.
    let (succeeded, failed): (Vec<&ExpectationOutcome>, Vec<&ExpectationOutcome>) = run
        .outcomes()
        .iter()
        .partition(|outcome| TestStatus::from_flag(outcome.success).is_success());

    FlatValidationRecord {
        test_status: TestStatus::from_flag(run.success),
        datasource_name: run.datasource_name().map(str::to_owned),
        data_asset_name: run.data_asset_name().map(str::to_owned),
        validation_id: run.validation_id().map(str::to_owned),
        checkpoint_id: run.checkpoint_id().map(str::to_owned),
        validation_time: run.validation_time().map(str::to_owned),
        run_name: run.run_name().map(str::to_owned),
        run_time: run.run_time().map(str::to_owned),
        suite_name: run.suite_name.clone(),
        evaluated_expectations: run.statistic(|s| s.evaluated_expectations),
        successful_expectations: run.statistic(|s| s.successful_expectations),
        unsuccessful_expectations: run.statistic(|s| s.unsuccessful_expectations),
        success_percent: run.statistic(|s| s.success_percent),
        failed_detail_results: failed.into_iter().map(failed_detail).collect(),
        succeeded_detail_results: succeeded.into_iter().map(succeeded_detail).collect(),
    }
}

fn failed_detail(outcome: &ExpectationOutcome) -> FailedDetailResult {
    let detail = outcome.detail();
    FailedDetailResult {
        expectation_id: outcome.expectation_id().map(str::to_owned),
        column: outcome.column().map(str::to_owned),
        expectation_type: outcome.expectation_type().map(str::to_owned),
        element_count: detail.and_then(|d| d.element_count),
        unexpected_count: detail.and_then(|d| d.unexpected_count),
        unexpected_percent: detail.and_then(|d| d.unexpected_percent),
        unexpected_index_list: detail
            .and_then(|d| d.partial_unexpected_index_list.clone())
            .unwrap_or_default(),
    }
}

fn succeeded_detail(outcome: &ExpectationOutcome) -> SucceededDetailResult {
    SucceededDetailResult {
        expectation_id: outcome.expectation_id().map(str::to_owned),
        column: outcome.column().map(str::to_owned),
        expectation_type: outcome.expectation_type().map(str::to_owned),
        test_status: TestStatus::Success,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn parse(value: Value) -> RawValidationResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_flatten_basic() {
        let raw = parse(json!({
            "test_validation": {
                "success": true,
                "meta": {
                    "active_batch_definition": {
                        "datasource_name": "test_datasource",
                        "data_asset_name": "test_asset"
                    },
                    "validation_id": "test_id",
                    "checkpoint_id": "checkpoint_1",
                    "validation_time": "2023-01-01T00:00:00+00:00",
                    "run_id": {"run_name": "test_run", "run_time": "2023-01-01T00:00:00+00:00"}
                },
                "statistics": {
                    "evaluated_expectations": 1,
                    "successful_expectations": 1,
                    "unsuccessful_expectations": 0,
                    "success_percent": 100.0
                },
                "results": []
            }
        }));

        let records = flatten(&raw);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.datasource_name.as_deref(), Some("test_datasource"));
        assert_eq!(record.data_asset_name.as_deref(), Some("test_asset"));
        assert_eq!(record.test_status, TestStatus::Success);
        assert_eq!(record.success_percent, Some(100.0));
        assert_eq!(record.validation_id.as_deref(), Some("test_id"));
        assert_eq!(record.checkpoint_id.as_deref(), Some("checkpoint_1"));
        assert_eq!(record.run_name.as_deref(), Some("test_run"));
        assert_eq!(record.evaluated_expectations, Some(1));
        assert_eq!(record.unsuccessful_expectations, Some(0));
        assert!(record.failed_detail_results.is_empty());
        assert!(record.succeeded_detail_results.is_empty());
    }

    #[test]
    fn test_flatten_failed_expectation() {
        let raw = parse(json!({
            "test_validation": {
                "success": false,
                "meta": {
                    "active_batch_definition": {},
                    "validation_time": "2023-01-01T00:00:00+00:00",
                    "run_id": {"run_time": "2023-01-01T00:00:00+00:00"}
                },
                "statistics": {},
                "results": [{
                    "success": false,
                    "expectation_config": {
                        "id": "test_id",
                        "kwargs": {"column": "test_column"},
                        "type": "expect_column_values_to_not_be_null"
                    },
                    "result": {
                        "element_count": 100,
                        "unexpected_count": 5,
                        "unexpected_percent": 5.0,
                        "partial_unexpected_index_list": [
                            {"id": 1, "value": null},
                            {"id": 2, "value": null}
                        ]
                    }
                }]
            }
        }));

        let records = flatten(&raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].test_status, TestStatus::Failure);
        assert!(records[0].succeeded_detail_results.is_empty());

        let failed = &records[0].failed_detail_results;
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].expectation_id.as_deref(), Some("test_id"));
        assert_eq!(failed[0].column.as_deref(), Some("test_column"));
        assert_eq!(
            failed[0].expectation_type.as_deref(),
            Some("expect_column_values_to_not_be_null")
        );
        assert_eq!(failed[0].element_count, Some(100));
        assert_eq!(failed[0].unexpected_count, Some(5));
        assert_eq!(failed[0].unexpected_percent, Some(5.0));
        assert_eq!(failed[0].unexpected_index_list.len(), 2);
        assert_eq!(failed[0].unexpected_index_list[1], json!({"id": 2, "value": null}));
    }

    #[test]
    fn test_flatten_succeeded_expectation() {
        let raw = parse(json!({
            "test_validation": {
                "success": true,
                "meta": {"active_batch_definition": {}, "run_id": {}},
                "statistics": {},
                "results": [{
                    "success": true,
                    "expectation_config": {
                        "id": "test_id",
                        "kwargs": {"column": "test_column"},
                        "type": "expect_column_values_to_not_be_null"
                    },
                    "result": {}
                }]
            }
        }));

        let records = flatten(&raw);
        let succeeded = &records[0].succeeded_detail_results;
        assert_eq!(succeeded.len(), 1);
        assert_eq!(succeeded[0].test_status, TestStatus::Success);
        assert_eq!(succeeded[0].column.as_deref(), Some("test_column"));
        assert!(records[0].failed_detail_results.is_empty());
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten(&RawValidationResult::new()).is_empty());
        assert!(flatten(&parse(json!({}))).is_empty());
    }

    #[test]
    fn test_flatten_missing_fields() {
        let raw = parse(json!({"test_validation": {"meta": {}, "statistics": {}, "results": []}}));
        let record = &flatten(&raw)[0];

        // Default when 'success' is missing
        assert_eq!(record.test_status, TestStatus::Failure);
        assert_eq!(record.run_time, None);
        assert_eq!(record.validation_time, None);
        assert_eq!(record.datasource_name, None);
        assert_eq!(record.data_asset_name, None);
        assert_eq!(record.validation_id, None);
        assert_eq!(record.checkpoint_id, None);
        assert_eq!(record.run_name, None);
        assert_eq!(record.suite_name, None);
        assert_eq!(record.evaluated_expectations, None);
        assert_eq!(record.successful_expectations, None);
        assert_eq!(record.unsuccessful_expectations, None);
        assert_eq!(record.success_percent, None);
    }

    #[test]
    fn test_flatten_bare_run_entry() {
        let raw = parse(json!({"only": {}}));
        let record = &flatten(&raw)[0];
        assert_eq!(record.test_status, TestStatus::Failure);
        assert!(record.failed_detail_results.is_empty());
        assert!(record.succeeded_detail_results.is_empty());
    }

    #[test]
    fn test_flatten_multiple_validations_keep_order() {
        let raw = parse(json!({
            "validation2": {
                "success": false,
                "meta": {"active_batch_definition": {"datasource_name": "source2"}},
                "results": []
            },
            "validation1": {
                "success": true,
                "meta": {"active_batch_definition": {"datasource_name": "source1"}},
                "results": []
            }
        }));

        let records = flatten(&raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].datasource_name.as_deref(), Some("source2"));
        assert_eq!(records[1].datasource_name.as_deref(), Some("source1"));
        assert_eq!(records[0].test_status, TestStatus::Failure);
        assert_eq!(records[1].test_status, TestStatus::Success);
    }

    #[test]
    fn test_partition_is_exhaustive_and_ordered() {
        let raw = parse(json!({
            "run": {
                "success": false,
                "results": [
                    {"success": true, "expectation_config": {"id": "a"}},
                    {"success": false, "expectation_config": {"id": "b"}},
                    {"expectation_config": {"id": "c"}},
                    {"success": true, "expectation_config": {"id": "d"}},
                    {"success": null, "expectation_config": {"id": "e"}}
                ]
            }
        }));

        let record = &flatten(&raw)[0];
        let failed: Vec<_> = record
            .failed_detail_results
            .iter()
            .map(|d| d.expectation_id.as_deref().unwrap())
            .collect();
        let succeeded: Vec<_> = record
            .succeeded_detail_results
            .iter()
            .map(|d| d.expectation_id.as_deref().unwrap())
            .collect();

        assert_eq!(failed, vec!["b", "c", "e"]);
        assert_eq!(succeeded, vec!["a", "d"]);
        assert!(record.failed_detail_results.iter().all(|d| d.unexpected_index_list.is_empty()));
    }

    #[test]
    fn test_serialized_keys_are_pascal_case() {
        let raw = parse(json!({
            "v1": {
                "success": true,
                "meta": {"active_batch_definition": {"datasource_name": "S"}, "run_id": {}},
                "statistics": {},
                "results": []
            }
        }));

        let value = serde_json::to_value(flatten(&raw)).unwrap();
        assert_eq!(value[0]["DatasourceName"], "S");
        assert_eq!(value[0]["TestStatus"], "Success");
        assert_eq!(value[0]["FailedDetailResults"], json!([]));
        assert_eq!(value[0]["SucceededDetailResults"], json!([]));
        assert_eq!(value[0]["SuccessPercent"], Value::Null);
        assert_eq!(value[0]["RunName"], Value::Null);
    }
}
