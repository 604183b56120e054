// guard-core/tests/flatten_snapshot.rs
//
// Locks the PascalCase shape of flattened records as written to the log table.

use fabric_data_guard_core::{RawValidationResult, flatten};
use serde_json::json;

#[test]
fn test_flattened_record_shape() {
    let raw: RawValidationResult = serde_json::from_value(json!({
        "run_1": {
            "success": false,
            "suite_name": "SubscriptionSuite",
            "meta": {
                "active_batch_definition": {"datasource_name": "Product", "data_asset_name": "Subscription"},
                "validation_id": "v-1",
                "checkpoint_id": "cp-1",
                "validation_time": "20240501T101500.000000Z",
                "run_id": {"run_name": "nightly", "run_time": "2024-05-01T10:15:00+00:00"}
            },
            "statistics": {"evaluated_expectations": 2, "successful_expectations": 1, "unsuccessful_expectations": 1},
            "results": [
                {
                    "success": false,
                    "expectation_config": {"id": "e-1", "type": "expect_column_values_to_not_be_null", "kwargs": {"column": "UserId"}},
                    "result": {"element_count": 10, "unexpected_count": 2, "partial_unexpected_index_list": [3, 7]}
                },
                {
                    "success": true,
                    "expectation_config": {"id": "e-2", "type": "expect_column_values_to_be_unique", "kwargs": {"column": "Email"}}
                }
            ]
        }
    }))
    .unwrap();

    let records = flatten(&raw);
    assert_eq!(records.len(), 1);
    insta::assert_json_snapshot!("flattened_records", records);
}
