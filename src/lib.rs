//! Split generated story text into titled, ordered chapters.
//!
//! The parser tolerates text that ignores the requested chapter markup:
//! it falls back to paragraph splitting and finally to a single chapter,
//! and only fails on blank input.

pub mod app;
pub mod args;
pub mod chapter;
pub mod error;
pub mod id;
pub mod logging;
pub mod parser;
pub mod source;

pub use chapter::{Chapter, format_story};
pub use error::ParseError;
pub use parser::{ChapterParser, ParsedStory, ParserConfig, Strategy, parse_story};
