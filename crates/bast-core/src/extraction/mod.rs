pub mod pdftotext;
pub mod search;

use serde::{Deserialize, Serialize};

use crate::error::BastError;

/// Axis-aligned box in page coordinates (points, origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl BBox {
    pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        BBox {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    /// Same box moved down by `dy`.
    pub fn translate_y(&self, dy: f32) -> BBox {
        BBox {
            y_min: self.y_min + dy,
            y_max: self.y_max + dy,
            ..*self
        }
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

/// A single word with its position, as laid out by the text extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSpan {
    /// Index of the line on its page, in reading order.
    pub line_index: usize,
    pub text: String,
    pub bbox: BBox,
}

/// Text layout of a single PDF page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContent {
    pub page_number: usize,
    pub width: f32,
    pub height: f32,
    pub words: Vec<WordSpan>,
}

impl PageContent {
    /// Words grouped by line, in reading order.
    pub fn lines(&self) -> Vec<Vec<&WordSpan>> {
        let mut lines: Vec<Vec<&WordSpan>> = Vec::new();
        let mut current: Option<usize> = None;

        for word in &self.words {
            if current != Some(word.line_index) {
                lines.push(Vec::new());
                current = Some(word.line_index);
            }
            if let Some(line) = lines.last_mut() {
                line.push(word);
            }
        }

        lines
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract positioned text from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, BastError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
