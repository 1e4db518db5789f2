//! Story text to chapter segmentation.
//!
//! Parsing is a cascade. Marker conventions are tried strictest first and
//! the first one with any header in the text supplies every chapter. Text
//! without usable markers is split on blank lines, and a text that is a
//! single block becomes a single chapter. Only blank input fails.
//!
//! ```
//! use storytui::parser::ChapterParser;
//! use storytui::id::SequentialIds;
//!
//! let story = ChapterParser::default()
//!     .parse_with("[CHAPTER: Dawn]\nThe sun rises.", &mut SequentialIds::default())
//!     .unwrap();
//! assert_eq!(story.chapters[0].title, "Dawn");
//! ```

mod convention;
mod paragraph;

use std::fmt;

use tracing::{debug, warn};

pub use convention::{Convention, MarkerMatch};

use crate::chapter::Chapter;
use crate::error::ParseError;
use crate::id::{IdSource, TimestampIds};

/// First lines shorter than this many characters are read as headings.
pub const DEFAULT_TITLE_THRESHOLD: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub title_threshold: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            title_threshold: DEFAULT_TITLE_THRESHOLD,
        }
    }
}

/// The cascade stage that produced a story's chapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Marker(Convention),
    Paragraph,
    SingleBlock,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marker(convention) => write!(f, "markers ({convention})"),
            Self::Paragraph => f.write_str("paragraphs"),
            Self::SingleBlock => f.write_str("single block"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStory {
    pub chapters: Vec<Chapter>,
    pub strategy: Strategy,
}

/// A chapter before it has an id and a final position.
#[derive(Debug)]
struct Draft {
    title: String,
    content: String,
}

fn fallback_title(index: usize) -> String {
    format!("Chapter {}", index + 1)
}

#[derive(Debug, Clone, Default)]
pub struct ChapterParser {
    config: ParserConfig,
}

impl ChapterParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse `text` into chapters with timestamp based ids.
    pub fn parse(&self, text: &str) -> Result<Vec<Chapter>, ParseError> {
        self.parse_with(text, &mut TimestampIds)
            .map(|story| story.chapters)
    }

    /// Parse `text`, drawing one id per emitted chapter from `ids`.
    ///
    /// Chapters come out in source order with `order` counting from zero
    /// without gaps, whatever candidates were dropped on the way.
    ///
    /// # Errors
    ///
    /// [`ParseError::Empty`] when `text` is empty or whitespace only.
    pub fn parse_with<I>(&self, text: &str, ids: &mut I) -> Result<ParsedStory, ParseError>
    where
        I: IdSource + ?Sized,
    {
        debug!(len = text.len(), "parsing story text");

        let (strategy, drafts) = self
            .marked(text)
            .or_else(|| self.paragraphs(text))
            .or_else(|| single_block(text))
            .ok_or(ParseError::Empty)?;

        let chapters: Vec<Chapter> = drafts
            .into_iter()
            .enumerate()
            .map(|(order, draft)| Chapter {
                id: ids.next_id(),
                title: draft.title,
                content: draft.content,
                order,
            })
            .collect();

        debug!(%strategy, chapters = chapters.len(), "parsed story");
        Ok(ParsedStory { chapters, strategy })
    }

    fn marked(&self, text: &str) -> Option<(Strategy, Vec<Draft>)> {
        let (convention, matches) = Convention::ALL.into_iter().find_map(|convention| {
            let matches = convention.find_all(text);
            (!matches.is_empty()).then_some((convention, matches))
        })?;
        debug!(%convention, matches = matches.len(), "found chapter markers");

        let drafts: Vec<Draft> = matches
            .iter()
            .enumerate()
            .filter_map(|(index, found)| {
                let content = found.body.trim();
                if content.is_empty() {
                    warn!(index, position = found.position, "dropping chapter with empty body");
                    return None;
                }
                let title = found.title.trim();
                Some(Draft {
                    title: if title.is_empty() {
                        fallback_title(index)
                    } else {
                        title.to_string()
                    },
                    content: content.to_string(),
                })
            })
            .collect();

        if drafts.is_empty() {
            warn!(%convention, "every marked chapter was empty");
            return None;
        }
        Some((Strategy::Marker(convention), drafts))
    }

    fn paragraphs(&self, text: &str) -> Option<(Strategy, Vec<Draft>)> {
        let paragraphs = paragraph::split(text);
        if paragraphs.len() < 2 {
            return None;
        }
        warn!(
            paragraphs = paragraphs.len(),
            "no chapter markers found, splitting on paragraphs"
        );

        let drafts: Vec<Draft> = paragraphs
            .iter()
            .enumerate()
            .map(|(index, p)| paragraph::draft(p, index, self.config.title_threshold))
            .filter(|draft| !draft.content.is_empty())
            .collect();

        (!drafts.is_empty()).then_some((Strategy::Paragraph, drafts))
    }
}

fn single_block(text: &str) -> Option<(Strategy, Vec<Draft>)> {
    let content = text.trim();
    if content.is_empty() {
        return None;
    }
    Some((
        Strategy::SingleBlock,
        vec![Draft {
            title: fallback_title(0),
            content: content.to_string(),
        }],
    ))
}

/// Parse with the default configuration.
pub fn parse_story(text: &str) -> Result<Vec<Chapter>, ParseError> {
    ChapterParser::default().parse(text)
}
