use canvas_search_core::{CanvasSnapshot, MatchResult, Position};

use crate::search::extract::{extract_display_text, ExtractedText};
use crate::util::text::find_ignore_case;

/// Scans every node in the snapshot for a case-insensitive literal substring
/// match of `query` against `title + " " + content`.
///
/// Results come back in snapshot iteration order; an empty query matches
/// nothing. The scan is linear over the full node set on every call, which is
/// the intended ceiling for canvases of up to a few hundred nodes.
pub fn search(snapshot: &CanvasSnapshot, query: &str) -> Vec<MatchResult> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut results = Vec::new();
    for (id, node) in snapshot.iter() {
        let ExtractedText { title, content } = extract_display_text(node);
        let haystack = format!("{title} {content}").to_lowercase();
        if haystack.contains(&needle) {
            results.push(MatchResult {
                id: id.clone(),
                title,
                text: content,
                node: node.clone(),
                position: Position { x: node.x, y: node.y },
            });
        }
    }
    results
}

pub const HIGHLIGHT_OPEN: &str = "<mark>";
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// Wraps every case-insensitive occurrence of the literal `query` in
/// highlight markers. The query is never interpreted as a pattern, and text
/// outside the inserted markers is returned byte for byte.
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    while let Some((start, end)) = find_ignore_case(text, query, cursor) {
        out.push_str(&text[cursor..start]);
        out.push_str(HIGHLIGHT_OPEN);
        out.push_str(&text[start..end]);
        out.push_str(HIGHLIGHT_CLOSE);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}
