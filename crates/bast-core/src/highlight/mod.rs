//! Row highlighting on a reference document.
//!
//! A target string (typically a site or project identifier) is located on
//! each page. Every hit is widened to cover the table row it sits in, and the
//! rows directly below it are added as well.
//!
//! This is a layout assumption, not a general algorithm: it expects the match
//! to start the leftmost relevant column of a table whose following rows have
//! the same height as the matched one. The geometry is configurable through
//! [`HighlightConfig`] for documents that differ.

use serde::{Deserialize, Serialize};

use crate::extraction::{BBox, PageContent};

/// Upper bound on [`HighlightConfig::projected_row_count`].
pub const MAX_PROJECTED_ROWS: usize = 50;

/// Text-search capability of a page: every box where `needle` occurs, in page order.
pub trait TextSearch {
    fn search_for(&self, needle: &str) -> Vec<BBox>;
}

/// Geometry of the highlighted row band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Widening to the left of the match.
    pub left_margin: f32,
    /// Widening to the right of the match.
    pub right_margin: f32,
    /// Rows below the matched one to highlight as well, at most
    /// [`MAX_PROJECTED_ROWS`].
    pub projected_row_count: usize,
}

impl HighlightConfig {
    /// Reject geometry that cannot describe a row band.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.left_margin.is_finite() && self.right_margin.is_finite()) {
            return Err("highlight margins must be finite numbers".into());
        }
        if self.projected_row_count > MAX_PROJECTED_ROWS {
            return Err(format!(
                "projected_row_count {} exceeds the maximum of {}",
                self.projected_row_count, MAX_PROJECTED_ROWS
            ));
        }
        Ok(())
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            left_margin: 30.0,
            right_margin: 250.0,
            projected_row_count: 2,
        }
    }
}

/// A rectangle an external renderer should draw a highlight annotation on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightRegion {
    pub page_number: usize,
    /// 0 for the matched row, n for the n-th projected row below it.
    pub row_offset: usize,
    pub bbox: BBox,
}

/// Highlight regions for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageHighlights {
    pub page_number: usize,
    pub match_count: usize,
    pub regions: Vec<HighlightRegion>,
}

/// Widen a single match to its row and project the rows below it.
///
/// Returns `1 + projected_row_count` regions: the matched row first, then each
/// projected row in order. Row height is taken from the unexpanded match.
/// Counts above [`MAX_PROJECTED_ROWS`] are capped.
pub fn expand_match(
    page_number: usize,
    matched: &BBox,
    config: &HighlightConfig,
) -> Vec<HighlightRegion> {
    let row = BBox {
        x_min: matched.x_min - config.left_margin,
        x_max: matched.x_max + config.right_margin,
        ..*matched
    };
    let line_height = matched.height();
    let rows = config.projected_row_count.min(MAX_PROJECTED_ROWS);

    (0..=rows)
        .map(|row_offset| HighlightRegion {
            page_number,
            row_offset,
            bbox: row.translate_y(line_height * row_offset as f32),
        })
        .collect()
}

/// Find `target` on `page` and expand every hit, in search order.
///
/// No hits is a normal outcome and yields an empty list.
pub fn locate_and_expand<P: TextSearch + ?Sized>(
    page: &P,
    page_number: usize,
    target: &str,
    config: &HighlightConfig,
) -> Vec<HighlightRegion> {
    page.search_for(target)
        .iter()
        .flat_map(|m| expand_match(page_number, m, config))
        .collect()
}

/// Run [`locate_and_expand`] over every page, preserving page order.
///
/// Pages without hits are kept with an empty region list.
pub fn highlight_document(
    pages: &[PageContent],
    target: &str,
    config: &HighlightConfig,
) -> Vec<PageHighlights> {
    pages
        .iter()
        .map(|page| {
            let hits = page.search_for(target);
            let match_count = hits.len();
            let regions: Vec<HighlightRegion> = hits
                .iter()
                .flat_map(|m| expand_match(page.page_number, m, config))
                .collect();
            log::debug!(
                "page {}: {} match(es) for '{}'",
                page.page_number,
                match_count,
                target
            );
            PageHighlights {
                page_number: page.page_number,
                match_count,
                regions,
            }
        })
        .collect()
}

/// Concatenate per-page results into the document-level region sequence.
pub fn flatten(pages: &[PageHighlights]) -> Vec<HighlightRegion> {
    pages.iter().flat_map(|p| p.regions.iter().cloned()).collect()
}
