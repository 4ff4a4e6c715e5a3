//! In-memory table produced from an uploaded file

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// A single typed table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Integer(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl Cell {
    /// Numeric view of the cell, if it holds a finite number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(v) => Some(*v as f64),
            Cell::Float(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn to_json(&self) -> Value {
        match self {
            Cell::Integer(v) => Value::from(*v),
            // NaN and infinities have no JSON form and become null
            Cell::Float(v) => Value::from(*v),
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Missing => Value::Null,
        }
    }
}

/// Named columns over rows of cells.
///
/// Serializes as a column-oriented mapping: `{ column: { row_index: value } }`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table; every row must have one cell per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Option<Self> {
        if rows.iter().any(|row| row.len() != columns.len()) {
            return None;
        }
        Some(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Cells of the named column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    fn column_mapping(&self, col: usize) -> Map<String, Value> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i.to_string(), row[col].to_json()))
            .collect()
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (col, name) in self.columns.iter().enumerate() {
            map.serialize_entry(name, &self.column_mapping(col))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Table {
        Table::new(
            vec!["month".into(), "value".into()],
            vec![
                vec![Cell::Text("2024-01".into()), Cell::Integer(3)],
                vec![Cell::Text("2024-02".into()), Cell::Missing],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let table = Table::new(vec!["a".into()], vec![vec![Cell::Integer(1), Cell::Integer(2)]]);
        assert!(table.is_none());
    }

    #[test]
    fn test_column_lookup() {
        let table = sample();
        let values = table.column("value").unwrap();
        assert_eq!(values, vec![&Cell::Integer(3), &Cell::Missing]);
        assert!(table.column("absent").is_none());
    }

    #[test]
    fn test_serializes_column_oriented() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "month": {"0": "2024-01", "1": "2024-02"},
                "value": {"0": 3, "1": null}
            })
        );
    }

    #[test]
    fn test_non_finite_float_serializes_as_null() {
        let table = Table::new(vec!["x".into()], vec![vec![Cell::Float(f64::NAN)]]).unwrap();
        assert_eq!(serde_json::to_value(table).unwrap(), json!({"x": {"0": null}}));
    }

    #[test]
    fn test_cell_as_f64() {
        assert_eq!(Cell::Integer(2).as_f64(), Some(2.0));
        assert_eq!(Cell::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(Cell::Float(f64::INFINITY).as_f64(), None);
        assert_eq!(Cell::Text("1".into()).as_f64(), None);
        assert!(Cell::Missing.is_missing());
    }
}
