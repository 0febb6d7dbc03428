//! Integration tests for the highlight and spelling pipelines.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use bast_core::error::BastError;
use bast_core::extraction::{BBox, PageContent, PdfExtractor, WordSpan};
use bast_core::highlight::{flatten, HighlightConfig};
use bast_core::highlight_pdf;
use bast_core::spelling::{spell_date, spell_date_keyword, spell_number, DateFacet, SpellError};

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, BastError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingExtractor;

impl PdfExtractor for FailingExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, BastError> {
        Err(BastError::PdftotextNotFound)
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

fn word(line_index: usize, text: &str, x_min: f32, x_max: f32, y_min: f32) -> WordSpan {
    WordSpan {
        line_index,
        text: text.to_string(),
        bbox: BBox::new(x_min, y_min, x_max, y_min + 12.0),
    }
}

fn page(number: usize, words: Vec<WordSpan>) -> PageContent {
    PageContent {
        page_number: number,
        width: 595.0,
        height: 842.0,
        words,
    }
}

// ---------------------------------------------------------------------------
// Highlighting: a site ID in a table row on page 2 of a three-page reference
// ---------------------------------------------------------------------------
#[test]
fn highlight_site_row_across_pages() {
    let extractor = MockExtractor {
        pages: vec![
            page(1, vec![word(0, "LAMPIRAN", 56.0, 130.0, 40.0)]),
            page(
                2,
                vec![
                    word(0, "No", 40.0, 55.0, 188.0),
                    word(0, "Site", 70.0, 95.0, 188.0),
                    word(1, "JKT-0042", 100.0, 150.0, 200.0),
                    word(1, "Cakung", 160.0, 200.0, 200.0),
                ],
            ),
            page(3, vec![]),
        ],
    };

    let pages = highlight_pdf(&[], &extractor, "JKT-0042", &HighlightConfig::default()).unwrap();

    assert_eq!(pages.len(), 3);
    assert!(pages[0].regions.is_empty());
    assert_eq!(pages[1].match_count, 1);
    assert!(pages[2].regions.is_empty());

    let regions = flatten(&pages);
    let boxes: Vec<BBox> = regions.iter().map(|r| r.bbox).collect();
    assert_eq!(
        boxes,
        vec![
            BBox::new(70.0, 200.0, 400.0, 212.0),
            BBox::new(70.0, 212.0, 400.0, 224.0),
            BBox::new(70.0, 224.0, 400.0, 236.0),
        ]
    );
    assert!(regions.iter().all(|r| r.page_number == 2));
}

#[test]
fn highlight_missing_target_is_not_an_error() {
    let extractor = MockExtractor {
        pages: vec![page(1, vec![word(0, "LAMPIRAN", 56.0, 130.0, 40.0)])],
    };
    let pages = highlight_pdf(&[], &extractor, "JKT-9999", &HighlightConfig::default()).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].match_count, 0);
    assert!(flatten(&pages).is_empty());
}

#[test]
fn highlight_respects_configured_rows() {
    let extractor = MockExtractor {
        pages: vec![page(1, vec![word(0, "JKT-0042", 100.0, 150.0, 200.0)])],
    };
    let config = HighlightConfig {
        projected_row_count: 4,
        ..Default::default()
    };
    let pages = highlight_pdf(&[], &extractor, "JKT-0042", &config).unwrap();
    let regions = flatten(&pages);
    assert_eq!(regions.len(), 5);
    assert_eq!(regions[4].bbox.y_min, 248.0);
    assert_eq!(pages[0].match_count, 1);
}

#[test]
fn highlight_extraction_failure_propagates() {
    let result = highlight_pdf(&[], &FailingExtractor, "x", &HighlightConfig::default());
    assert!(matches!(result, Err(BastError::PdftotextNotFound)));
}

// ---------------------------------------------------------------------------
// Spelling
// ---------------------------------------------------------------------------
#[test]
fn spelling_boundaries() {
    assert_eq!(spell_number(0).unwrap(), "nol");
    assert!(spell_number(999_999).is_ok());
    assert!(matches!(
        spell_number(1_000_000),
        Err(SpellError::MagnitudeOverflow(1_000_000))
    ));
}

#[test]
fn spelling_dates_for_openers() {
    let day = spell_date("2024-03-15", DateFacet::Day).unwrap();
    let date = spell_date("2024-03-15", DateFacet::Date).unwrap();
    let month = spell_date("2024-03-15", DateFacet::Month).unwrap();
    let year = spell_date("2024-03-15", DateFacet::Year).unwrap();
    let full = spell_date("2024-03-15", DateFacet::Full).unwrap();

    assert_eq!(full, format!("{day}, {date} {month} {year}"));
    assert!(matches!(
        spell_date_keyword("15-03-2024", "day"),
        Err(SpellError::DateFormat(_))
    ));
}
