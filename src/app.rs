use std::path::PathBuf;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::*,
};

use crate::chapter::Chapter;
use crate::parser::{ParsedStory, Strategy};

/// Terminal reader over a parsed story, one chapter at a time.
#[derive(Debug)]
pub struct App {
    running: bool,
    file_path: PathBuf,
    strategy: Strategy,
    chapters: Vec<Chapter>,
    current: usize,
    offset: usize,
    /// Inner width of the chapter body at the last render; 0 before the first.
    content_width: u16,
}

impl App {
    pub fn new(file_path: PathBuf, story: ParsedStory) -> Self {
        Self {
            running: false,
            file_path,
            strategy: story.strategy,
            chapters: story.chapters,
            current: 0,
            offset: 0,
            content_width: 0,
        }
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|f| {
                self.render(f);
            })?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    pub fn current_chapter(&self) -> Option<&Chapter> {
        self.chapters.get(self.current)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = self.get_layout_chunks(frame.area());
        self.render_title(frame, chunks[0]);
        self.render_content(frame, chunks[1]);
        self.render_footer(frame, chunks[2]);
    }

    fn get_layout_chunks(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ]
                .as_ref(),
            )
            .split(area)
            .to_vec()
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let file = self
            .file_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("storytui");
        let position = format!(" Chapter {}/{} ", self.current + 1, self.chapters.len());
        let line = Line::from(vec![
            Span::styled(file, Style::default().fg(Color::White)),
            Span::styled(position, Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("[{}]", self.strategy),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        self.content_width = area.width.saturating_sub(2);
        let Some(chapter) = self.current_chapter() else {
            return;
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(
                chapter.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let text: Vec<Line> = chapter.lines().map(Line::from).collect();
        let scroll = u16::try_from(self.offset).unwrap_or(u16::MAX);
        let p = Paragraph::new(Text::from(text))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(p, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hint = " quit (q) | next (n) | prev (p) | scroll (j/k) | top (g) ";
        let footer = Paragraph::new(hint)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .style(Style::default());
        frame.render_widget(footer, area);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(),
            KeyCode::Char('n') | KeyCode::Right => self.next_chapter(),
            KeyCode::Char('p') | KeyCode::Left => self.prev_chapter(),
            KeyCode::Char('g') => self.offset = 0,
            _ => {}
        }
    }

    /// Rows the current chapter takes once wrapped to the body width.
    fn content_rows(&self) -> usize {
        let Some(chapter) = self.current_chapter() else {
            return 0;
        };
        if self.content_width == 0 {
            return chapter.line_count();
        }
        let options = textwrap::Options::new(usize::from(self.content_width))
            .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
        chapter
            .lines()
            .map(|line| textwrap::wrap(line, &options).len().max(1))
            .sum()
    }

    fn scroll_down(&mut self) {
        if self.offset + 1 < self.content_rows() {
            self.offset += 1;
        }
    }

    fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    fn next_chapter(&mut self) {
        if self.current + 1 < self.chapters.len() {
            self.current += 1;
            self.offset = 0;
        }
    }

    fn prev_chapter(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.offset = 0;
        }
    }
}
