//! TUI rendering traits for diary types.
//!
//! Extension traits that add colored terminal rendering to diary-core types
//! using owo_colors.

use diary_core::{Entry, Feedback, display_date, format_date};
use owo_colors::OwoColorize;

/// Width of the one-line preview in `diary list`.
const PREVIEW_CHARS: usize = 60;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Entry {
    /// Heading: long date, then the mood if one is set.
    fn render(&self) -> String {
        let date = display_date(self.date);
        match self.mood {
            Some(mood) => format!("{}  {}", date.bold(), mood),
            None => date.bold().to_string(),
        }
    }
}

impl Render for Feedback {
    fn render(&self) -> String {
        match self {
            Feedback::Empty => self.message().yellow().to_string(),
            _ => self.message().cyan().to_string(),
        }
    }
}

/// Rendering for entries inside `diary list`.
pub trait EntryListRender {
    fn render_row(&self) -> String;
    fn render_expanded(&self) -> String;
}

impl EntryListRender for Entry {
    fn render_row(&self) -> String {
        let mood = self.mood.map(|m| m.emoji()).unwrap_or("  ");
        let preview = if self.is_empty() {
            "(empty)".to_string()
        } else {
            self.preview(PREVIEW_CHARS)
        };

        format!("  {} {} {}", format_date(self.date), mood, preview.dimmed())
    }

    fn render_expanded(&self) -> String {
        let body = if self.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            self.content.trim_end().to_string()
        };

        format!("{}\n{}", self.render(), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use diary_core::Mood;

    fn entry(content: &str, mood: Option<Mood>) -> Entry {
        Entry {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            content: content.to_string(),
            mood,
        }
    }

    #[test]
    fn heading_includes_date_and_mood() {
        let heading = entry("Went hiking.", Some(Mood::Great)).render();
        assert!(heading.contains("Friday, January 5, 2024"));
        assert!(heading.contains("😄 Great"));
    }

    #[test]
    fn row_shows_key_and_preview() {
        let row = entry("Went hiking.\nThen lunch.", None).render_row();
        assert!(row.contains("2024-01-05"));
        assert!(row.contains("Went hiking."));
        assert!(!row.contains("Then lunch."));
    }

    #[test]
    fn empty_entries_are_marked() {
        assert!(entry("", None).render_row().contains("(empty)"));
        assert!(entry("", None).render_expanded().contains("(empty)"));
    }

    #[test]
    fn expanded_shows_full_text() {
        let text = entry("line one\nline two\n", Some(Mood::Tired)).render_expanded();
        assert!(text.contains("line one\nline two"));
        assert!(text.contains("😴"));
    }
}
