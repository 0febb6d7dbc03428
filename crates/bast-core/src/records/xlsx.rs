use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::error::BastError;
use crate::records::{Field, FieldValue, Record};

/// Read records from an xlsx workbook.
///
/// The first used row holds the field names; every following row that has at
/// least one non-empty cell becomes a record. Uses the first sheet when
/// `sheet` is `None`.
pub fn read_records(bytes: &[u8], sheet: Option<&str>) -> Result<Vec<Record>, BastError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| BastError::Spreadsheet(format!("failed to open xlsx: {e}")))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| BastError::Spreadsheet("workbook has no sheets".into()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| BastError::Spreadsheet(format!("sheet '{sheet_name}' not found: {e}")))?;

    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let mut rows = range.rows();

    let header: Vec<Option<String>> = match rows.next() {
        Some(cells) => cells.iter().map(header_name).collect(),
        None => {
            return Err(BastError::Spreadsheet(format!(
                "sheet '{sheet_name}' is empty"
            )))
        }
    };

    let mut records = Vec::new();
    for (idx, cells) in rows.enumerate() {
        // +1 for the header row, +1 for 1-based numbering
        let row_number = first_row + idx + 2;

        let fields: Vec<Field> = header
            .iter()
            .zip(cells.iter())
            .filter_map(|(name, cell)| {
                Some(Field {
                    name: name.clone()?,
                    value: cell_value(cell),
                })
            })
            .collect();

        if fields.iter().all(|f| f.value.is_empty()) {
            log::debug!("skipping empty row {row_number} in '{sheet_name}'");
            continue;
        }

        records.push(Record { row_number, fields });
    }

    log::debug!("read {} record(s) from '{sheet_name}'", records.len());
    Ok(records)
}

fn header_name(cell: &Data) -> Option<String> {
    let name = cell_value(cell).to_string();
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cell_value(cell: &Data) -> FieldValue {
    match cell {
        Data::String(s) => {
            if s.trim().is_empty() {
                FieldValue::Empty
            } else {
                FieldValue::Text(s.clone())
            }
        }
        Data::Float(f) => FieldValue::Number(f64_to_decimal(*f)),
        Data::Int(i) => FieldValue::Number(Decimal::from(*i)),
        Data::Bool(b) => FieldValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => FieldValue::DateTime(ndt),
            None => FieldValue::Number(f64_to_decimal(dt.as_f64())),
        },
        Data::DateTimeIso(s) => parse_iso(s),
        Data::Empty => FieldValue::Empty,
        other => FieldValue::Text(format!("{other}")),
    }
}

fn parse_iso(s: &str) -> FieldValue {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return FieldValue::DateTime(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return FieldValue::Date(d);
    }
    FieldValue::Text(s.to_string())
}

/// Convert f64 to Decimal, preserving reasonable precision.
///
/// Uses string round-trip to avoid floating-point artifacts
/// (e.g., 0.0035_f64 becoming 0.00349999...).
fn f64_to_decimal(f: f64) -> Decimal {
    let s = format!("{f}");
    s.parse::<Decimal>()
        .unwrap_or_else(|_| Decimal::try_from(f).unwrap_or_default())
}
