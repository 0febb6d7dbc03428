use bast_core::config::BastConfig;
use bast_core::error::BastError;
use bast_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    target: &str,
    config_file: Option<PathBuf>,
    output_format: &str,
) -> Result<(), BastError> {
    let config = BastConfig::load(config_file.as_deref())?;
    let pdf_bytes = std::fs::read(&pdf_file)?;
    if !PdftotextExtractor::is_available() {
        return Err(BastError::PdftotextNotFound);
    }
    let extractor = PdftotextExtractor::new();
    let pages = bast_core::highlight_pdf(&pdf_bytes, &extractor, target, &config.highlight)?;

    let total: usize = pages.iter().map(|p| p.match_count).sum();
    log::info!(
        "'{}' found {} time(s) in {}",
        target,
        total,
        pdf_file.display()
    );

    match output_format {
        "json" => output::json::print(&pages)?,
        _ => output::table::print_highlights(&pages),
    }

    Ok(())
}
