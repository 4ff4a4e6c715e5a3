//! Unit-level tests through the facade API

use forecast_facade::{
    ingest, series_from_records, validate_params, Cell, ForecastError, ValidationError,
    VALUE_COLUMN,
};
use serde_json::{json, Map, Value};

fn records(value: Value) -> Vec<Map<String, Value>> {
    serde_json::from_value(value).unwrap()
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_validation_short_circuits_in_order() {
    let cases = [
        (json!({}), ValidationError::MissingKeys),
        (
            json!({"order": [1, 0], "seasonal_order": [0, 0, 0, 0]}),
            ValidationError::InvalidOrder,
        ),
        (
            json!({"order": [1, 0, 0], "seasonal_order": [0, 0, -1, 0]}),
            ValidationError::InvalidSeasonalOrder,
        ),
        (
            json!({"order": [1, 0, 0], "seasonal_order": [0, 0, 0, 0]}),
            ValidationError::InvalidSeasonalPeriod,
        ),
        (
            json!({"order": [1, 0, 0], "seasonal_order": [0, 0, 0, 12], "steps": 0}),
            ValidationError::InvalidSteps,
        ),
    ];

    for (params, expected) in cases {
        assert_eq!(validate_params(&params), Err(expected), "params: {params}");
    }
}

#[test]
fn test_validation_error_converts_to_forecast_error() {
    let err: ForecastError = validate_params(&json!({})).unwrap_err().into();
    assert!(err.is_client_error());
    assert!(err.to_string().contains("missing required keys"));
}

// ============================================================================
// Ingestion Tests
// ============================================================================

#[test]
fn test_ingest_monthly_file() {
    let csv = "date,value\n2024-01,112\n2024-02,118\n2024-03,132\n";
    let table = ingest(csv.as_bytes()).unwrap();

    assert_eq!(table.columns(), &["date", "value"]);
    let values: Vec<f64> = table
        .column(VALUE_COLUMN)
        .unwrap()
        .into_iter()
        .filter_map(Cell::as_f64)
        .collect();
    assert_eq!(values, vec![112.0, 118.0, 132.0]);
}

#[test]
fn test_ingest_rejects_garbage() {
    let err = ingest(&[0xde, 0xad, 0xbe, 0xef, 0x00, 0xff]).unwrap_err();
    assert_eq!(err.to_string(), "invalid file format");
}

// ============================================================================
// Record Decoding Tests
// ============================================================================

#[test]
fn test_decode_drops_unusable_rows() {
    let rows = records(json!([
        {"date": "2024-01", "value": "10"},
        {"date": "2024-02", "value": "n/a"},
        {"date": "2024-03", "value": 12.5}
    ]));
    let decoded = series_from_records(&rows, VALUE_COLUMN).unwrap();

    assert_eq!(decoded.series.values(), &[10.0, 12.5]);
    assert_eq!(decoded.dropped, 1);
}

#[test]
fn test_decode_requires_value_column() {
    let rows = records(json!([{"date": "2024-01", "amount": 3}]));
    let err = series_from_records(&rows, VALUE_COLUMN).unwrap_err();
    assert_eq!(err, ForecastError::MissingColumn("value".to_string()));
}
