/// One titled segment of a parsed story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Zero-based position in the story.
    pub order: usize,
}

impl Chapter {
    /// Content split into display lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

/// Render chapters back into `[CHAPTER: title]` markup, separated by blank lines.
pub fn format_story(chapters: &[Chapter]) -> String {
    chapters
        .iter()
        .map(|chapter| format!("[CHAPTER: {}]\n{}", chapter.title, chapter.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Numbered plain-text listing with content wrapped to `width` columns.
pub fn format_listing(chapters: &[Chapter], width: usize) -> String {
    chapters
        .iter()
        .map(|chapter| {
            format!(
                "{}. {}\n{}",
                chapter.order + 1,
                chapter.title,
                textwrap::fill(&chapter.content, width)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(order: usize, title: &str, content: &str) -> Chapter {
        Chapter {
            id: format!("id-{order}"),
            title: title.to_string(),
            content: content.to_string(),
            order,
        }
    }

    #[test]
    fn format_story_uses_bracketed_markers() {
        let chapters = vec![
            chapter(0, "Dawn", "The sun rises."),
            chapter(1, "Dusk", "The sun sets.\nNight falls."),
        ];
        assert_eq!(
            format_story(&chapters),
            "[CHAPTER: Dawn]\nThe sun rises.\n\n[CHAPTER: Dusk]\nThe sun sets.\nNight falls."
        );
    }

    #[test]
    fn format_story_of_nothing_is_empty() {
        assert_eq!(format_story(&[]), "");
    }

    #[test]
    fn listing_numbers_and_wraps() {
        let chapters = vec![
            chapter(0, "Dawn", "The sun rises over the quiet hills."),
            chapter(1, "Dusk", "Night."),
        ];
        assert_eq!(
            format_listing(&chapters, 20),
            "1. Dawn\nThe sun rises over\nthe quiet hills.\n\n2. Dusk\nNight."
        );
    }

    #[test]
    fn lines_follow_content() {
        let ch = chapter(0, "A", "one\ntwo\nthree");
        assert_eq!(ch.lines().collect::<Vec<_>>(), ["one", "two", "three"]);
        assert_eq!(ch.line_count(), 3);
    }
}
