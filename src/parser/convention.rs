//! Chapter marker conventions.
//!
//! Each convention is a header pattern plus a boundary pattern. A chapter
//! body runs from the end of its header to the next boundary (or the end of
//! the text). The boundary is looser than the header: a
//! stray `[CHAPTER:` that never completes a header still ends the body
//! before it.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Recognized marker conventions, strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    /// `[CHAPTER: Title]`
    BracketedColon,
    /// `[CHAPTER Title]`
    Bracketed,
    /// `CHAPTER: Title` at the start of a line.
    LineColon,
    /// `Chapter 3: Title`
    Numbered,
}

/// A header found by a convention, with the body text that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch<'t> {
    /// Raw captured title, untrimmed. May be blank.
    pub title: &'t str,
    /// Raw body, untrimmed.
    pub body: &'t str,
    /// Byte offset of the header in the source text.
    pub position: usize,
}

struct MarkerPattern {
    header: Regex,
    boundary: Regex,
}

impl MarkerPattern {
    fn new(header: &str, boundary: &str) -> Self {
        Self {
            header: Regex::new(header).expect("valid chapter header regex"),
            boundary: Regex::new(boundary).expect("valid chapter boundary regex"),
        }
    }
}

static BRACKETED_COLON: Lazy<MarkerPattern> =
    Lazy::new(|| MarkerPattern::new(r"(?i)\[CHAPTER:\s*(.+?)\]\s*\n", r"(?i)\[CHAPTER:"));

static BRACKETED: Lazy<MarkerPattern> =
    Lazy::new(|| MarkerPattern::new(r"(?i)\[CHAPTER\s+(.+?)\]\s*\n", r"(?i)\[CHAPTER"));

static LINE_COLON: Lazy<MarkerPattern> = Lazy::new(|| {
    MarkerPattern::new(
        r"(?im)^[ \t]*CHAPTER:\s*(.+?)\s*\n",
        r"(?im)^[ \t]*CHAPTER:",
    )
});

static NUMBERED: Lazy<MarkerPattern> = Lazy::new(|| {
    MarkerPattern::new(r"(?i)Chapter\s+[0-9]+:\s*(.+?)\s*\n", r"(?i)Chapter\s+[0-9]+:")
});

impl Convention {
    /// Priority order used by the parser.
    pub const ALL: [Convention; 4] = [
        Convention::BracketedColon,
        Convention::Bracketed,
        Convention::LineColon,
        Convention::Numbered,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::BracketedColon => "bracketed-colon",
            Self::Bracketed => "bracketed",
            Self::LineColon => "line-colon",
            Self::Numbered => "numbered",
        }
    }

    fn pattern(self) -> &'static MarkerPattern {
        match self {
            Self::BracketedColon => &*BRACKETED_COLON,
            Self::Bracketed => &*BRACKETED,
            Self::LineColon => &*LINE_COLON,
            Self::Numbered => &*NUMBERED,
        }
    }

    /// Every header of this convention in `text`, in source order.
    pub fn find_all(self, text: &str) -> Vec<MarkerMatch<'_>> {
        let pattern = self.pattern();
        let mut matches = Vec::new();
        let mut pos = 0;

        while let Some(caps) = pattern.header.captures_at(text, pos) {
            let Some(header) = caps.get(0) else { break };
            let title = caps.get(1).map_or("", |m| m.as_str());
            let body_end = pattern
                .boundary
                .find_at(text, header.end())
                .map_or(text.len(), |m| m.start());

            matches.push(MarkerMatch {
                title,
                body: &text[header.end()..body_end],
                position: header.start(),
            });
            // header.end() > pos, so this always advances
            pos = body_end;
        }

        matches
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles<'t>(matches: &[MarkerMatch<'t>]) -> Vec<&'t str> {
        matches.iter().map(|m| m.title.trim()).collect()
    }

    #[test]
    fn bracketed_colon_splits_at_each_marker() {
        let text = "[CHAPTER: Dawn]\nThe sun rises.\n\n[CHAPTER: Dusk]\nThe sun sets.";
        let found = Convention::BracketedColon.find_all(text);
        assert_eq!(titles(&found), ["Dawn", "Dusk"]);
        assert_eq!(found[0].body, "The sun rises.\n\n");
        assert_eq!(found[1].body, "The sun sets.");
        assert_eq!(found[0].position, 0);
        assert_eq!(found[1].position, text.find("[CHAPTER: Dusk]").unwrap());
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let found = Convention::BracketedColon.find_all("[chapter: One]\nbody");
        assert_eq!(titles(&found), ["One"]);
    }

    #[test]
    fn blank_bracketed_title_is_captured_as_whitespace() {
        let found = Convention::BracketedColon.find_all("[CHAPTER: ]\nSomething happens.");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title.trim(), "");
        assert_eq!(found[0].body, "Something happens.");
    }

    #[test]
    fn header_without_newline_is_not_a_match() {
        assert!(Convention::BracketedColon.find_all("[CHAPTER: End]").is_empty());
    }

    #[test]
    fn bracketed_without_colon() {
        let text = "[CHAPTER One]\nfirst\n[Chapter Two]\nsecond";
        let found = Convention::Bracketed.find_all(text);
        assert_eq!(titles(&found), ["One", "Two"]);
        assert_eq!(found[0].body, "first\n");
        assert!(Convention::BracketedColon.find_all(text).is_empty());
    }

    #[test]
    fn line_colon_requires_line_start() {
        let text = "CHAPTER: Start\nshe said chapter: nothing\nmore\nChapter: Next\nend";
        let found = Convention::LineColon.find_all(text);
        assert_eq!(titles(&found), ["Start", "Next"]);
        assert_eq!(found[0].body, "she said chapter: nothing\nmore\n");
    }

    #[test]
    fn line_colon_title_may_sit_on_the_next_line() {
        let found = Convention::LineColon.find_all("CHAPTER:\nThe Title\nbody");
        assert_eq!(titles(&found), ["The Title"]);
        assert_eq!(found[0].body, "body");
    }

    #[test]
    fn numbered_headings() {
        let text = "Chapter 1: The Start\nbody one\nChapter 2: The End\nbody two";
        let found = Convention::Numbered.find_all(text);
        assert_eq!(titles(&found), ["The Start", "The End"]);
        assert_eq!(found[1].body, "body two");
    }

    #[test]
    fn numbered_headings_need_ascii_digits() {
        assert!(Convention::Numbered.find_all("Chapter ３: Wide
body").is_empty());
        assert!(Convention::Numbered.find_all("Chapter ٣: Arabic
body").is_empty());
    }

    #[test]
    fn stray_boundary_cuts_the_body_short() {
        let text = "[CHAPTER: A]\nalpha [CHAPTER: broken\nlost\n[CHAPTER: B]\nbeta";
        let found = Convention::BracketedColon.find_all(text);
        assert_eq!(titles(&found), ["A", "B"]);
        assert_eq!(found[0].body, "alpha ");
    }

    #[test]
    fn display_uses_names() {
        assert_eq!(Convention::Numbered.to_string(), "numbered");
        assert_eq!(Convention::ALL[0], Convention::BracketedColon);
    }
}
