use clap::Parser;
use std::path::PathBuf;

use crate::parser::{DEFAULT_TITLE_THRESHOLD, ParserConfig};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Options {
    /// Generated story text to open
    pub file_path: PathBuf,

    /// Print the parsed chapters and exit instead of opening the reader
    #[arg(long)]
    pub dump: bool,

    /// With --dump, print `[CHAPTER: title]` markup instead of a listing
    #[arg(long, requires = "dump")]
    pub markup: bool,

    /// Wrap width for --dump output (defaults to the terminal width)
    #[arg(long, value_parser = clap::value_parser!(u16).range(10..))]
    pub width: Option<u16>,

    /// First lines shorter than this are treated as chapter titles
    #[arg(long, env = "STORYTUI_TITLE_THRESHOLD", default_value_t = DEFAULT_TITLE_THRESHOLD)]
    pub title_threshold: usize,

    /// Directory for the reader's log file; logging is off without it
    #[arg(long, env = "STORYTUI_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log parser decisions to stderr in --dump mode
    #[arg(short, long)]
    pub verbose: bool,
}

impl Options {
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            title_threshold: self.title_threshold,
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Options::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let opts = Options::try_parse_from(["storytui", "story.txt"]).unwrap();
        assert_eq!(opts.file_path, PathBuf::from("story.txt"));
        assert!(!opts.dump);
        assert_eq!(opts.log_level(), "warn");
        assert_eq!(opts.parser_config(), ParserConfig::default());
    }

    #[test]
    fn threshold_flag_reaches_parser_config() {
        let opts =
            Options::try_parse_from(["storytui", "--title-threshold", "40", "s.txt"]).unwrap();
        assert_eq!(opts.parser_config().title_threshold, 40);
    }

    #[test]
    fn markup_needs_dump() {
        assert!(Options::try_parse_from(["storytui", "--markup", "s.txt"]).is_err());
        assert!(Options::try_parse_from(["storytui", "--dump", "--markup", "s.txt"]).is_ok());
    }
}
