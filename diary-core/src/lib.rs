//! Core types for the diary ecosystem.
//!
//! This crate provides the storage layer shared by the `diary` CLI and
//! `diary-server`:
//! - `NoteStore`: one plain-text file per date under a storage root
//! - `MoodLog`: mood tags kept beside the entries, never inside them
//! - `Feedback`: encouragement messages based on entry length
//! - `Diary`: the configured storage root

pub mod date;
pub mod diary;
pub mod diary_config;
pub mod entry;
pub mod error;
pub mod feedback;
pub mod mood;
pub mod store;

pub use date::{display_date, format_date, parse_date, today};
pub use diary::Diary;
pub use entry::Entry;
pub use error::{DiaryError, DiaryResult};
pub use feedback::Feedback;
pub use mood::Mood;
pub use store::{MoodLog, NoteStore};
