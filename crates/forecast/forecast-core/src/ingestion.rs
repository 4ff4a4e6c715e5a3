//! CSV ingestion
//!
//! Parses an uploaded delimited-text file into a [`Table`]. Column types are
//! inferred per column: all integers stay integers, numbers mixed with
//! decimals or missing cells become floats, anything else is text. Any
//! parse failure yields one [`IngestionError`] and no partial table.

use forecast_spi::{Cell, IngestionError, Table};
use std::collections::HashMap;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Tokens read as missing cells
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Text,
}

/// Parse raw upload bytes into a table.
pub fn ingest(bytes: &[u8]) -> Result<Table, IngestionError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers = reader.headers().map_err(reject)?.clone();
    if headers.is_empty() {
        return Err(reject_with("file has no header row"));
    }
    let columns = unique_column_names(headers.iter());

    let mut raw_rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(reject)?;
        raw_rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let kinds: Vec<ColumnKind> = (0..columns.len())
        .map(|col| infer_kind(raw_rows.iter().map(|row| row[col].as_str())))
        .collect();

    let rows = raw_rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&kinds)
                .map(|(field, &kind)| to_cell(field, kind))
                .collect()
        })
        .collect();

    Table::new(columns, rows).ok_or_else(|| reject_with("row width does not match header"))
}

fn reject(err: csv::Error) -> IngestionError {
    reject_with(err.to_string())
}

fn reject_with(reason: impl Into<String>) -> IngestionError {
    let err = IngestionError::new(reason);
    tracing::warn!(reason = err.reason(), "rejected upload");
    err
}

/// Blank headers become `Unnamed: <idx>`; repeats get `.1`, `.2`, ... suffixes.
fn unique_column_names<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::new();

    for (idx, header) in headers.enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            header.to_string()
        };

        let mut name = base.clone();
        while let Some(count) = seen.get_mut(&name) {
            *count += 1;
            name = format!("{base}.{count}");
        }
        seen.insert(name.clone(), 0);
        names.push(name);
    }

    names
}

fn is_missing(field: &str) -> bool {
    NA_VALUES.contains(&field)
}

fn infer_kind<'a>(fields: impl Iterator<Item = &'a str>) -> ColumnKind {
    let mut kind = ColumnKind::Integer;

    for field in fields {
        if is_missing(field) {
            kind = ColumnKind::Float;
        } else if field.trim().parse::<i64>().is_ok() {
            continue;
        } else if field.trim().parse::<f64>().is_ok() {
            kind = ColumnKind::Float;
        } else {
            return ColumnKind::Text;
        }
    }

    kind
}

fn to_cell(field: String, kind: ColumnKind) -> Cell {
    if is_missing(&field) {
        return Cell::Missing;
    }
    match kind {
        ColumnKind::Integer => field.trim().parse().map_or(Cell::Missing, Cell::Integer),
        ColumnKind::Float => field.trim().parse().map_or(Cell::Missing, Cell::Float),
        ColumnKind::Text => Cell::Text(field),
    }
}
