//! Record decoding for the predict path
//!
//! Turns a list of JSON records into the numeric [`Series`] of one column.
//! The column set is the union of keys across all records. Target cells are
//! coerced to numbers (numeric strings are parsed); a row is dropped when its
//! target cell is not numeric or when any column is absent or null in it.

use forecast_spi::{ForecastError, Series};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Series decoded from records, plus how many rows were discarded
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSeries {
    pub series: Series,
    pub dropped: usize,
}

/// Extract `column` from `records` as a series.
///
/// Fails with [`ForecastError::MissingColumn`] when no record carries the column.
pub fn series_from_records(
    records: &[Map<String, Value>],
    column: &str,
) -> Result<DecodedSeries, ForecastError> {
    let columns: BTreeSet<&str> = records
        .iter()
        .flat_map(|record| record.keys().map(String::as_str))
        .collect();

    if !columns.contains(column) {
        return Err(ForecastError::MissingColumn(column.to_string()));
    }

    let series: Series = records
        .iter()
        .filter(|record| is_complete(record, &columns))
        .filter_map(|record| record.get(column).and_then(coerce_numeric))
        .collect();

    let dropped = records.len() - series.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = series.len(), column, "dropped incomplete rows");
    }

    Ok(DecodedSeries { series, dropped })
}

fn is_complete(record: &Map<String, Value>, columns: &BTreeSet<&str>) -> bool {
    columns
        .iter()
        .all(|name| record.get(*name).is_some_and(|v| !v.is_null()))
}

/// Finite numeric value of a cell, if it has one
fn coerce_numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Map<String, Value>> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        let rows = records(json!([{"value": "1"}, {"value": " 2.5 "}, {"value": 3}]));
        let decoded = series_from_records(&rows, "value").unwrap();

        assert_eq!(decoded.series.values(), &[1.0, 2.5, 3.0]);
        assert_eq!(decoded.dropped, 0);
    }

    #[test]
    fn test_missing_column() {
        let rows = records(json!([{"date": "2024-01", "y": 1}]));
        let err = series_from_records(&rows, "value").unwrap_err();
        assert_eq!(err.to_string(), "Missing 'value' column in data");
    }

    #[test]
    fn test_empty_records_miss_the_column() {
        assert!(matches!(
            series_from_records(&[], "value"),
            Err(ForecastError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_non_numeric_values_dropped() {
        let rows = records(json!([
            {"value": "1"},
            {"value": "abc"},
            {"value": null},
            {"value": true},
            {"value": "inf"},
            {"value": "4"}
        ]));
        let decoded = series_from_records(&rows, "value").unwrap();

        assert_eq!(decoded.series.values(), &[1.0, 4.0]);
        assert_eq!(decoded.dropped, 4);
    }

    #[test]
    fn test_row_missing_other_column_dropped() {
        let rows = records(json!([
            {"date": "2024-01", "value": 1},
            {"value": 2},
            {"date": null, "value": 3},
            {"date": "2024-04", "value": 4}
        ]));
        let decoded = series_from_records(&rows, "value").unwrap();

        assert_eq!(decoded.series.values(), &[1.0, 4.0]);
        assert_eq!(decoded.dropped, 2);
    }

    #[test]
    fn test_column_present_in_some_records_only() {
        let rows = records(json!([{"other": 1}, {"value": 2}]));
        let decoded = series_from_records(&rows, "value").unwrap();
        assert!(decoded.series.is_empty());
        assert_eq!(decoded.dropped, 2);
    }
}
