use std::path::PathBuf;

use crate::spelling::SpellError;

#[derive(Debug, thiserror::Error)]
pub enum BastError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("failed to load form definition from {path}: {reason}")]
    FormLoad { path: PathBuf, reason: String },

    #[error("invalid form definition: {0}")]
    FormInvalid(String),

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("record {record}: field '{field}' is missing or empty")]
    MissingField { record: usize, field: String },

    #[error("record {record}: cannot spell field '{field}': {source}")]
    Spell {
        record: usize,
        field: String,
        #[source]
        source: SpellError,
    },

    #[error(transparent)]
    Spelling(#[from] SpellError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
