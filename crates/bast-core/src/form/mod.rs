pub mod builtin;
pub mod fill;
pub mod schema;
pub mod template;

use crate::error::BastError;
use schema::FormDefinition;
use std::collections::HashSet;
use std::path::Path;

/// Placeholders an opener template may use.
pub const OPENER_PLACEHOLDERS: &[&str] = &["day", "date", "month", "year", "full"];

/// Load a form definition from a JSON file.
pub fn load_form(path: &Path) -> Result<FormDefinition, BastError> {
    let content = std::fs::read_to_string(path).map_err(|e| BastError::FormLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_form(&content, path)
}

/// Parse a form definition from a JSON string.
pub fn parse_form(json: &str, source: &Path) -> Result<FormDefinition, BastError> {
    let form: FormDefinition = serde_json::from_str(json).map_err(|e| BastError::FormLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_form(&form)?;
    Ok(form)
}

/// Parse a form definition from a JSON string (no file path context).
pub fn parse_form_str(json: &str) -> Result<FormDefinition, BastError> {
    let form: FormDefinition = serde_json::from_str(json).map_err(BastError::Json)?;
    validate_form(&form)?;
    Ok(form)
}

/// Validate that a form definition is well-formed.
pub fn validate_form(form: &FormDefinition) -> Result<(), BastError> {
    if form.name.trim().is_empty() {
        return Err(BastError::FormInvalid("name must not be empty".into()));
    }

    if form.fields.is_empty() && form.openers.is_empty() {
        return Err(BastError::FormInvalid(
            "form must define at least one field or opener".into(),
        ));
    }

    if form.output_name.trim().is_empty() {
        return Err(BastError::FormInvalid("output_name must not be empty".into()));
    }

    if template::placeholders(&form.output_name)
        .iter()
        .any(|p| p.trim().is_empty())
    {
        return Err(BastError::FormInvalid(
            "output_name contains an empty placeholder '{}'".into(),
        ));
    }

    let mut seen = HashSet::new();
    let cells = form
        .fields
        .iter()
        .map(|f| f.cell.as_str())
        .chain(form.openers.iter().map(|o| o.cell.as_str()));
    for cell in cells {
        if !is_cell_ref(cell) {
            return Err(BastError::FormInvalid(format!(
                "invalid cell reference '{}' (expected A1 style, e.g. 'F5')",
                cell
            )));
        }
        if !seen.insert(cell) {
            return Err(BastError::FormInvalid(format!(
                "cell '{}' is assigned more than once",
                cell
            )));
        }
    }

    for mapping in &form.fields {
        if mapping.field.trim().is_empty() {
            return Err(BastError::FormInvalid(format!(
                "cell '{}' maps to an empty field name",
                mapping.cell
            )));
        }
    }

    if !form.openers.is_empty() && form.date_field.trim().is_empty() {
        return Err(BastError::FormInvalid(
            "date_field must be set when openers are defined".into(),
        ));
    }

    for opener in &form.openers {
        for name in template::placeholders(&opener.template) {
            if !OPENER_PLACEHOLDERS.contains(&name) {
                return Err(BastError::FormInvalid(format!(
                    "opener in cell '{}' uses unknown placeholder '{{{}}}' (expected one of: {})",
                    opener.cell,
                    name,
                    OPENER_PLACEHOLDERS.join(", ")
                )));
            }
        }
    }

    Ok(())
}

/// `true` for A1-style references: 1-3 uppercase letters, then a row number from 1.
fn is_cell_ref(cell: &str) -> bool {
    let letters = cell.chars().take_while(|c| c.is_ascii_uppercase()).count();
    let digits = &cell[letters..];
    (1..=3).contains(&letters)
        && !digits.is_empty()
        && !digits.starts_with('0')
        && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_form() {
        let json = r#"{
            "name": "Test",
            "version": "1.0",
            "output_name": "out_{Site ID}.xlsx",
            "fields": [ { "cell": "B2", "field": "Site ID" } ],
            "openers": [ { "cell": "B3", "template": "Hari {day}" } ]
        }"#;
        let form = parse_form_str(json).unwrap();
        assert_eq!(form.name, "Test");
        assert_eq!(form.sheet, "MASTER");
        assert_eq!(form.date_field, "Tanggal PKS");
        assert_eq!(form.fields.len(), 1);
    }

    #[test]
    fn test_empty_form_rejected() {
        let json = r#"{ "name": "Bad", "version": "1.0", "output_name": "x.xlsx" }"#;
        assert!(parse_form_str(json).is_err());
    }

    #[test]
    fn test_bad_cell_rejected() {
        let json = r#"{
            "name": "Bad", "version": "1.0", "output_name": "x.xlsx",
            "fields": [ { "cell": "f5", "field": "Site ID" } ]
        }"#;
        assert!(parse_form_str(json).is_err());
    }

    #[test]
    fn test_duplicate_cell_rejected() {
        let json = r#"{
            "name": "Bad", "version": "1.0", "output_name": "x.xlsx",
            "fields": [ { "cell": "F5", "field": "Site ID" } ],
            "openers": [ { "cell": "F5", "template": "{day}" } ]
        }"#;
        let err = parse_form_str(json).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_unknown_opener_placeholder_rejected() {
        let json = r#"{
            "name": "Bad", "version": "1.0", "output_name": "x.xlsx",
            "openers": [ { "cell": "F31", "template": "{weekday}" } ]
        }"#;
        let err = parse_form_str(json).unwrap_err();
        assert!(err.to_string().contains("weekday"));
    }

    #[test]
    fn test_cell_refs() {
        assert!(is_cell_ref("F5"));
        assert!(is_cell_ref("AA100"));
        assert!(!is_cell_ref("F0"));
        assert!(!is_cell_ref("5F"));
        assert!(!is_cell_ref("ABCD1"));
        assert!(!is_cell_ref("F"));
        assert!(!is_cell_ref("F5:G6"));
    }
}
