//! A diary entry as read from the store.

use chrono::NaiveDate;
use serde::Serialize;

use crate::mood::Mood;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub content: String,
    pub mood: Option<Mood>,
}

impl Entry {
    /// An entry with no text reads the same as no entry at all.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// First non-blank line, cut to `max_chars` characters.
    pub fn preview(&self, max_chars: usize) -> String {
        let line = self
            .content
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("");

        if line.chars().count() <= max_chars {
            return line.to_string();
        }

        let mut cut: String = line.chars().take(max_chars.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
