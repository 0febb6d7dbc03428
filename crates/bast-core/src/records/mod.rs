//! Source records: one spreadsheet row per document to generate.

pub mod xlsx;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::spelling::DateInput;

pub use xlsx::read_records;

/// A typed cell value from the source sheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum FieldValue {
    Text(String),
    Number(Decimal),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Bool(bool),
    #[default]
    Empty,
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Interpret the value as a date for spelling, if it can be one.
    ///
    /// Text is passed through untouched so the spelling engine decides whether
    /// it is a well-formed `YYYY-MM-DD`.
    pub fn date_input(&self) -> Option<DateInput> {
        match self {
            FieldValue::Date(d) => Some(DateInput::Date(*d)),
            FieldValue::DateTime(dt) => Some(DateInput::DateTime(*dt)),
            FieldValue::Text(s) if !s.trim().is_empty() => Some(DateInput::Text(s.trim().to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Number(n) => write!(f, "{}", n.normalize()),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::DateTime(dt) if dt.time() == NaiveTime::MIN => {
                write!(f, "{}", dt.format("%Y-%m-%d"))
            }
            FieldValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Empty => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

/// One source row, with fields in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based row number in the source sheet.
    pub row_number: usize,
    pub fields: Vec<Field>,
}

impl Record {
    /// Value of the first column named `name`.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    /// Display text of a field; missing fields read as empty.
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(|v| v.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record() -> Record {
        Record {
            row_number: 2,
            fields: vec![
                Field {
                    name: "Project ID".into(),
                    value: FieldValue::Text("PRJ-01".into()),
                },
                Field {
                    name: "Nilai Kontrak".into(),
                    value: FieldValue::Number(dec!(150000000.00)),
                },
                Field {
                    name: "Tanggal PKS".into(),
                    value: FieldValue::DateTime(
                        NaiveDate::from_ymd_opt(2024, 3, 15)
                            .unwrap()
                            .and_hms_opt(0, 0, 0)
                            .unwrap(),
                    ),
                },
            ],
        }
    }

    #[test]
    fn test_text_rendering() {
        let r = record();
        assert_eq!(r.text("Project ID"), "PRJ-01");
        assert_eq!(r.text("Nilai Kontrak"), "150000000");
        assert_eq!(r.text("Tanggal PKS"), "2024-03-15");
        assert_eq!(r.text("Alamat"), "");
    }

    #[test]
    fn test_date_input() {
        let r = record();
        assert!(matches!(
            r.get("Tanggal PKS").and_then(|v| v.date_input()),
            Some(DateInput::DateTime(_))
        ));
        assert_eq!(r.get("Nilai Kontrak").and_then(|v| v.date_input()), None);
        assert_eq!(
            FieldValue::Text(" 2024-03-15 ".into()).date_input(),
            Some(DateInput::Text("2024-03-15".into()))
        );
    }

    #[test]
    fn test_emptiness() {
        assert!(FieldValue::Empty.is_empty());
        assert!(FieldValue::Text("  ".into()).is_empty());
        assert!(!FieldValue::Bool(false).is_empty());
    }
}
