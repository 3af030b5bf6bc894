use canvas_search_core::{FileRef, NodeRecord};

/// Normalized display text derived from one node. Recomputed on every search
/// pass, never cached per node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pub title: String,
    pub content: String,
}

const TITLE_OPEN: &str = "**[[";
const TITLE_CLOSE: &str = "]]**";

/// Derives the title and normalized content for a node.
///
/// A bold-wrapped link marker `**[[name]]**` inside the primary text becomes
/// the title and is removed from the content. With no marker, the title falls
/// back through file reference, url and explicit title, first non-empty wins.
/// Nodes with no usable text source come back with both fields empty; no node
/// shape makes this fail.
pub fn extract_display_text(node: &NodeRecord) -> ExtractedText {
    let (mut title, content) = match node.text.as_deref() {
        Some(text) => match split_title_marker(text) {
            Some((title, rest)) => (title, normalize_content(&rest)),
            None => (String::new(), normalize_content(text)),
        },
        None => (String::new(), String::new()),
    };

    if title.is_empty() {
        if let Some(fallback) = fallback_title(node) {
            title = fallback;
        }
    }

    ExtractedText { title, content }
}

/// Splits the first single-line `**[[name]]**` marker out of a text body,
/// returning the inner name and the text with that occurrence removed.
fn split_title_marker(text: &str) -> Option<(String, String)> {
    let mut from = 0;
    while let Some(rel) = text[from..].find(TITLE_OPEN) {
        let start = from + rel;
        let body = &text[start + TITLE_OPEN.len()..];
        if let Some(end) = body.find(TITLE_CLOSE) {
            let title = &body[..end];
            if !title.contains('\n') {
                let mut content = String::with_capacity(text.len());
                content.push_str(&text[..start]);
                content.push_str(&body[end + TITLE_CLOSE.len()..]);
                return Some((title.to_string(), content));
            }
        }
        from = start + TITLE_OPEN.len();
    }
    None
}

fn normalize_content(text: &str) -> String {
    let stripped = text.replace("**", "");
    let unwrapped = unwrap_links(&stripped);
    collapse_blank_runs(&unwrapped).trim().to_string()
}

/// `[[name]]` -> `name`, single-line occurrences only.
fn unwrap_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("[[") {
        let Some(end) = rest[start + 2..].find("]]") else {
            break;
        };
        let inner = &rest[start + 2..start + 2 + end];
        if inner.contains('\n') {
            out.push_str(&rest[..start + 2]);
            rest = &rest[start + 2..];
            continue;
        }
        out.push_str(&rest[..start]);
        out.push_str(inner);
        rest = &rest[start + 2 + end + 2..];
    }
    out.push_str(rest);
    out
}

/// Runs of 3+ newlines collapse to exactly 2; shorter runs stay as they are.
fn collapse_blank_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            run += 1;
        } else {
            push_newlines(&mut out, run);
            run = 0;
            out.push(ch);
        }
    }
    push_newlines(&mut out, run);
    out
}

fn push_newlines(out: &mut String, run: usize) {
    for _ in 0..run.min(2) {
        out.push('\n');
    }
}

/// Title sources in resolution priority order, tried when the text body
/// carries no marker.
enum TitleSource<'a> {
    File(&'a FileRef),
    Url(&'a str),
    Explicit(&'a str),
}

fn fallback_title(node: &NodeRecord) -> Option<String> {
    let sources = [
        node.file.as_ref().map(TitleSource::File),
        node.url.as_deref().map(TitleSource::Url),
        node.title.as_deref().map(TitleSource::Explicit),
    ];
    sources.into_iter().flatten().find_map(|source| {
        let name = match source {
            TitleSource::File(file) => file.display_name()?,
            TitleSource::Url(url) => url,
            TitleSource::Explicit(title) => title,
        };
        (!name.is_empty()).then(|| name.to_string())
    })
}
