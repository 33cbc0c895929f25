//! Mood tags for diary entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiaryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Neutral,
    Sad,
    Angry,
    Tired,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Great,
        Mood::Good,
        Mood::Neutral,
        Mood::Sad,
        Mood::Angry,
        Mood::Tired,
    ];

    /// Stable key used on disk and in the HTTP API.
    pub fn key(self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Tired => "tired",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Great => "😄",
            Mood::Good => "🙂",
            Mood::Neutral => "😐",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Tired => "😴",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Tired => "Tired",
        }
    }
}

impl FromStr for Mood {
    type Err = DiaryError;

    /// Accepts the key (any case), the label or the emoji.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Mood::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(needle) || m.emoji() == needle)
            .ok_or_else(|| DiaryError::UnknownMood(s.to_string()))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_labels_and_emoji() {
        assert_eq!("good".parse::<Mood>().unwrap(), Mood::Good);
        assert_eq!("Tired".parse::<Mood>().unwrap(), Mood::Tired);
        assert_eq!("ANGRY".parse::<Mood>().unwrap(), Mood::Angry);
        assert_eq!("😢".parse::<Mood>().unwrap(), Mood::Sad);
        assert_eq!(" neutral ".parse::<Mood>().unwrap(), Mood::Neutral);
    }

    #[test]
    fn unknown_mood_is_an_error() {
        let err = "ecstatic".parse::<Mood>().unwrap_err();
        assert!(matches!(err, DiaryError::UnknownMood(ref s) if s == "ecstatic"));
    }

    #[test]
    fn keys_round_trip() {
        for mood in Mood::ALL {
            assert_eq!(mood.key().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn serializes_as_key() {
        assert_eq!(serde_json::to_string(&Mood::Great).unwrap(), "\"great\"");
    }

    #[test]
    fn display_shows_emoji_and_label() {
        assert_eq!(Mood::Good.to_string(), "🙂 Good");
    }
}
