use serde::{Deserialize, Serialize};

use crate::error::BastError;
use crate::form::schema::FormDefinition;
use crate::form::template;
use crate::records::{FieldValue, Record};
use crate::spelling::{DateFacet, SpellError, SpelledDate};

/// A value to write into one template cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellAssignment {
    pub cell: String,
    pub value: FieldValue,
}

/// Everything needed to write one output workbook from the template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilledForm {
    /// Source row this form was filled from.
    pub row_number: usize,
    pub sheet: String,
    pub output_name: String,
    pub assignments: Vec<CellAssignment>,
}

impl FilledForm {
    pub fn value_of(&self, cell: &str) -> Option<&FieldValue> {
        self.assignments
            .iter()
            .find(|a| a.cell == cell)
            .map(|a| &a.value)
    }
}

/// A record that could not be filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillFailure {
    pub row_number: usize,
    pub reason: String,
}

/// Result of filling a batch of records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FillReport {
    pub forms: Vec<FilledForm>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FillFailure>,
}

/// Fill the form for a single record.
///
/// Missing plain fields are written as empty cells. The date field is
/// required whenever the form has openers, and must be spellable.
pub fn fill_record(form: &FormDefinition, record: &Record) -> Result<FilledForm, BastError> {
    let mut assignments: Vec<CellAssignment> = form
        .fields
        .iter()
        .map(|m| CellAssignment {
            cell: m.cell.clone(),
            value: record.get(&m.field).cloned().unwrap_or_default(),
        })
        .collect();

    if !form.openers.is_empty() {
        let spelled = spell_record_date(form, record)?;
        for opener in &form.openers {
            let text = template::render(&opener.template, |name| {
                name.parse::<DateFacet>().ok().map(|f| spelled.facet(f))
            })
            .map_err(|name| {
                BastError::FormInvalid(format!(
                    "opener in cell '{}' uses unknown placeholder '{{{}}}'",
                    opener.cell, name
                ))
            })?;
            assignments.push(CellAssignment {
                cell: opener.cell.clone(),
                value: FieldValue::Text(text),
            });
        }
    }

    let output_name = template::render(&form.output_name, |name| {
        Some(sanitize_name_part(&record.text(name)))
    })
    .map_err(|name| BastError::FormInvalid(format!("bad output_name placeholder '{name}'")))?;

    Ok(FilledForm {
        row_number: record.row_number,
        sheet: form.sheet.clone(),
        output_name,
        assignments,
    })
}

/// Fill every record, collecting failures instead of stopping at the first one.
pub fn fill_records(form: &FormDefinition, records: &[Record]) -> FillReport {
    let mut report = FillReport::default();

    for record in records {
        match fill_record(form, record) {
            Ok(filled) => {
                log::info!(
                    "Processed row {}: {}",
                    filled.row_number,
                    filled.output_name
                );
                report.forms.push(filled);
            }
            Err(e) => {
                log::warn!("Skipping row {}: {}", record.row_number, e);
                report.failures.push(FillFailure {
                    row_number: record.row_number,
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}

fn spell_record_date(form: &FormDefinition, record: &Record) -> Result<SpelledDate, BastError> {
    let value = record
        .get(&form.date_field)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| BastError::MissingField {
            record: record.row_number,
            field: form.date_field.clone(),
        })?;

    let spell_err = |source| BastError::Spell {
        record: record.row_number,
        field: form.date_field.clone(),
        source,
    };
    // Numbers and booleans are present but can never be a date.
    let input = value
        .date_input()
        .ok_or_else(|| spell_err(SpellError::DateFormat(value.to_string())))?;
    let date = input.resolve().map_err(spell_err)?;
    SpelledDate::from_date(date).map_err(spell_err)
}

/// Make a record value safe to embed in a file name.
fn sanitize_name_part(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}
