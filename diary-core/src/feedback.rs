//! Encouragement shown after an entry is saved.

use serde::Serialize;

/// Shown before anything has been written for the selected date.
pub const PROMPT: &str = "How about recording what happened today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Empty,
    Short,
    Medium,
    Long,
    Extensive,
}

impl Feedback {
    /// Classify an entry by its length in characters.
    pub fn for_content(content: &str) -> Self {
        match content.chars().count() {
            0 => Feedback::Empty,
            1..50 => Feedback::Short,
            50..200 => Feedback::Medium,
            200..500 => Feedback::Long,
            _ => Feedback::Extensive,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Feedback::Empty => "Why not jot down a little about today?",
            Feedback::Short => "Even a short note counts. Nice work capturing today!",
            Feedback::Medium => "You wrote plenty and sorted out your thoughts. Well done!",
            Feedback::Long => "Wonderful! You reflected deeply and recorded a lot.",
            Feedback::Extensive => "What a rich entry! Thanks for such a detailed record.",
        }
    }
}
