//! Fallback segmentation for text without chapter markers.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Draft, fallback_title};

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid paragraph break regex"));
static HEADING_MARKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#+\s*").expect("valid heading regex"));
static CHAPTER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^CHAPTER(?-u:\b)\s*:?\s*").expect("valid chapter prefix regex"));

/// Blank-line separated paragraphs, trimmed, empty ones skipped.
pub(super) fn split(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Turn the paragraph at `index` into a chapter draft.
///
/// A first line shorter than `title_threshold` characters is read as a
/// heading; the rest of the paragraph becomes the body. A paragraph that is
/// only a heading keeps that line as its body too.
pub(super) fn draft(paragraph: &str, index: usize, title_threshold: usize) -> Draft {
    let paragraph = paragraph.trim();
    let mut lines = paragraph.split('\n');
    let first_line = lines.next().unwrap_or_default().trim();
    let first_len = first_line.chars().count();

    if first_len == 0 || first_len >= title_threshold {
        return Draft {
            title: fallback_title(index),
            content: paragraph.to_string(),
        };
    }

    let title = heading_text(first_line);
    let rest = lines.collect::<Vec<_>>().join("\n");
    let rest = rest.trim();
    let content = if rest.is_empty() { first_line } else { rest };

    Draft {
        title: if title.is_empty() {
            fallback_title(index)
        } else {
            title
        },
        content: content.to_string(),
    }
}

/// Strip `#` heading marks and a leading `Chapter:` keyword.
fn heading_text(line: &str) -> String {
    let line = HEADING_MARKS.replace(line, "");
    CHAPTER_PREFIX.replace(&line, "").trim().to_string()
}
