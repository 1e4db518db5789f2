use std::io::{self, Write};

use clap::Parser;
use color_eyre::Result;
use storytui::app::App;
use storytui::args::Options;
use storytui::chapter::{format_listing, format_story};
use storytui::id::TimestampIds;
use storytui::parser::{ChapterParser, ParsedStory};
use storytui::{logging, source};

const FALLBACK_WIDTH: u16 = 80;

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();

    let _guard = if options.dump {
        logging::init_stderr(options.log_level())?;
        None
    } else {
        options
            .log_dir
            .as_deref()
            .map(|dir| logging::init_file(dir, options.log_level()))
            .transpose()?
    };

    let text = source::load_story(&options.file_path)?;
    let story = ChapterParser::new(options.parser_config()).parse_with(&text, &mut TimestampIds)?;

    if options.dump {
        return dump(&story, &options);
    }

    let terminal = ratatui::init();
    let result = App::new(options.file_path, story).run(terminal);

    ratatui::restore();
    result
}

fn dump(story: &ParsedStory, options: &Options) -> Result<()> {
    let output = if options.markup {
        format_story(&story.chapters)
    } else {
        let width = options
            .width
            .or_else(|| crossterm::terminal::size().ok().map(|(cols, _)| cols))
            .unwrap_or(FALLBACK_WIDTH);
        format_listing(&story.chapters, usize::from(width))
    };
    writeln!(io::stdout().lock(), "{output}")?;
    Ok(())
}
