use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn story text into chapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing but whitespace was left once every strategy had been tried.
    #[error("story text produced no parsable chapters")]
    Empty,
}

/// Failure to load a story file from disk.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read story file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
