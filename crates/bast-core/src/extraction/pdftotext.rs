use crate::error::BastError;
use crate::extraction::{BBox, PageContent, PdfExtractor, WordSpan};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -bbox-layout` to get word boxes grouped into lines.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, BastError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| BastError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| BastError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BastError::PdftotextNotFound
                } else {
                    BastError::Extraction(format!("pdftotext -bbox-layout failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(BastError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        let pages = parse_bbox_xml(&xml);
        log::debug!("pdftotext extracted {} page(s)", pages.len());
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Parse `pdftotext -bbox-layout` XHTML into positioned words.
///
/// Pages are numbered by order of appearance; lines are numbered per page.
fn parse_bbox_xml(xml: &str) -> Vec<PageContent> {
    let mut pages: Vec<PageContent> = Vec::new();
    let mut line_index: Option<usize> = None;
    let mut lines_on_page = 0;

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page ") || line == "<page>" {
            pages.push(PageContent {
                page_number: pages.len() + 1,
                width: parse_attr_f32(line, "width").unwrap_or_default(),
                height: parse_attr_f32(line, "height").unwrap_or_default(),
                words: Vec::new(),
            });
            lines_on_page = 0;
            line_index = None;
            continue;
        }

        if line.starts_with("<line") {
            line_index = Some(lines_on_page);
            lines_on_page += 1;
            continue;
        }

        if line.starts_with("<word ") {
            let (Some(page), Some(idx)) = (pages.last_mut(), line_index) else {
                continue;
            };
            let (Some(bbox), Some(word_text)) = (parse_bbox(line), parse_word_text(line)) else {
                continue;
            };
            let text = decode_xml_entities(word_text).trim().to_string();
            if !text.is_empty() {
                page.words.push(WordSpan {
                    line_index: idx,
                    text,
                    bbox,
                });
            }
            continue;
        }

        if line.starts_with("</line>") {
            line_index = None;
        }
    }

    pages
}

fn parse_attr_f32(tag: &str, name: &str) -> Option<f32> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

fn parse_bbox(tag: &str) -> Option<BBox> {
    Some(BBox {
        x_min: parse_attr_f32(tag, "xMin")?,
        y_min: parse_attr_f32(tag, "yMin")?,
        x_max: parse_attr_f32(tag, "xMax")?,
        y_max: parse_attr_f32(tag, "yMax")?,
    })
}

fn parse_word_text(word_tag: &str) -> Option<&str> {
    let start = word_tag.find('>')? + 1;
    let end = word_tag.rfind("</word>")?;
    word_tag.get(start..end)
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
