pub mod config;
pub mod error;
pub mod extraction;
pub mod form;
pub mod highlight;
pub mod records;
pub mod spelling;

use error::BastError;
use extraction::PdfExtractor;
use form::fill::FillReport;
use form::schema::FormDefinition;
use highlight::{HighlightConfig, PageHighlights};

/// Read the source workbook and fill `form` once per record.
///
/// Records that cannot be filled are reported in `FillReport::failures`;
/// an unreadable workbook or a workbook without records is an error.
pub fn fill_workbook(
    xlsx_bytes: &[u8],
    form: &FormDefinition,
    sheet: Option<&str>,
) -> Result<FillReport, BastError> {
    let records = records::read_records(xlsx_bytes, sheet)?;
    if records.is_empty() {
        return Err(BastError::Spreadsheet("no records found in source sheet".into()));
    }
    Ok(form::fill::fill_records(form, &records))
}

/// Compute highlight regions for `target` on every page of a reference PDF.
///
/// A target that appears nowhere gives pages with empty region lists, not an error.
pub fn highlight_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    target: &str,
    config: &HighlightConfig,
) -> Result<Vec<PageHighlights>, BastError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    log::debug!(
        "{} backend returned {} page(s)",
        extractor.backend_name(),
        pages.len()
    );
    Ok(highlight::highlight_document(&pages, target, config))
}
