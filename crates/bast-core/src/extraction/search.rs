use crate::extraction::{BBox, PageContent, WordSpan};
use crate::highlight::TextSearch;

impl TextSearch for PageContent {
    /// Case-sensitive substring search within each line.
    ///
    /// The line is rebuilt by joining its words with single spaces, and the
    /// target's whitespace is normalised the same way. A hit is reported as the
    /// union of the parts of every word it touches. Word boxes are the finest
    /// geometry available, so a hit inside a word is cut out of the word's box
    /// in proportion to its character offsets.
    fn search_for(&self, needle: &str) -> Vec<BBox> {
        let needle = normalize_ws(needle);
        if needle.is_empty() {
            return Vec::new();
        }

        let mut hits = Vec::new();
        for line in self.lines() {
            let (text, offsets) = join_line(&line);
            for (start, matched) in text.match_indices(needle.as_str()) {
                let end = start + matched.len();
                let bbox = line
                    .iter()
                    .zip(&offsets)
                    .filter(|(_, (ws, we))| *ws < end && *we > start)
                    .map(|(w, &(ws, we))| slice_box(w, start.max(ws) - ws, end.min(we) - ws))
                    .reduce(|acc, b| acc.union(&b));
                if let Some(bbox) = bbox {
                    hits.push(bbox);
                }
            }
        }

        hits
    }
}

/// Horizontal part of a word's box covering the byte range `from..to` of its text.
fn slice_box(word: &WordSpan, from: usize, to: usize) -> BBox {
    let total = word.text.chars().count();
    if total == 0 || (from == 0 && to == word.text.len()) {
        return word.bbox;
    }
    let before = word.text[..from].chars().count() as f32;
    let upto = word.text[..to].chars().count() as f32;
    let per_char = word.bbox.width() / total as f32;

    BBox {
        x_min: word.bbox.x_min + per_char * before,
        x_max: word.bbox.x_min + per_char * upto,
        ..word.bbox
    }
}

/// Join words with single spaces, returning the text and each word's byte range.
fn join_line(words: &[&WordSpan]) -> (String, Vec<(usize, usize)>) {
    let mut text = String::new();
    let mut offsets = Vec::with_capacity(words.len());

    for word in words {
        if !text.is_empty() {
            text.push(' ');
        }
        let start = text.len();
        text.push_str(&word.text);
        offsets.push((start, text.len()));
    }

    (text, offsets)
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
