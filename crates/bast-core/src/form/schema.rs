use serde::{Deserialize, Serialize};

fn default_sheet() -> String {
    "MASTER".into()
}

fn default_date_field() -> String {
    "Tanggal PKS".into()
}

/// Describes how a source record is written into the template workbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefinition {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Template sheet the assignments target.
    #[serde(default = "default_sheet")]
    pub sheet: String,
    /// Record field holding the agreement date the openers are spelled from.
    #[serde(default = "default_date_field")]
    pub date_field: String,
    /// File name pattern; `{Field Name}` is replaced by the record's value.
    pub output_name: String,
    /// Cells copied verbatim from record fields.
    #[serde(default)]
    pub fields: Vec<FieldMapping>,
    /// Cells holding a spelled-date sentence.
    #[serde(default)]
    pub openers: Vec<OpenerDef>,
}

/// Copy a record field into a cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMapping {
    /// A1-style cell reference.
    pub cell: String,
    pub field: String,
}

/// A sentence built from the spelled agreement date.
///
/// The template may use `{day}`, `{date}`, `{month}`, `{year}` and `{full}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenerDef {
    pub cell: String,
    #[serde(default)]
    pub label: Option<String>,
    pub template: String,
}
