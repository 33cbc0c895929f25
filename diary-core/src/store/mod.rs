//! Local entry file storage.
//!
//! Each entry is a plain UTF-8 text file named `YYYY-MM-DD.txt`, stored flat
//! under the store root. There is no header or envelope: the file content is
//! the entry text. Mood tags live separately in `.diary/moods.toml`.

mod list;
mod mood_log;

pub use mood_log::MoodLog;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::date::format_date;
use crate::entry::Entry;
use crate::error::{DiaryError, DiaryResult};
use crate::mood::Mood;

/// Extension of entry files.
pub const ENTRY_EXTENSION: &str = "txt";

/// Date-keyed text storage rooted at a directory.
///
/// Every read goes to disk; nothing is cached. Writes overwrite the whole
/// file and are not atomic, so a concurrent reader may see a partial write.
#[derive(Debug, Clone)]
pub struct NoteStore {
    root: PathBuf,
}

impl NoteStore {
    /// A store at `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        NoteStore { root: root.into() }
    }

    /// A store at `root`, creating the directory if it does not exist yet.
    pub fn open(root: impl Into<PathBuf>) -> DiaryResult<Self> {
        let store = Self::new(root);
        std::fs::create_dir_all(&store.root).map_err(|e| DiaryError::storage(&store.root, e))?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the entry for `date` lives.
    pub fn resolve_path(&self, date: NaiveDate) -> PathBuf {
        self.root.join(format!("{}.{}", format_date(date), ENTRY_EXTENSION))
    }

    /// Read the entry text for `date`.
    ///
    /// Returns an empty string when no entry exists.
    pub fn load(&self, date: NaiveDate) -> DiaryResult<String> {
        let path = self.resolve_path(date);

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "loaded entry");
                Ok(content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(DiaryError::storage(&path, e)),
        }
    }

    /// Write `content` as the entry for `date`, replacing any previous text.
    pub fn save(&self, date: NaiveDate, content: &str) -> DiaryResult<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| DiaryError::storage(&self.root, e))?;

        let path = self.resolve_path(date);
        std::fs::write(&path, content).map_err(|e| DiaryError::storage(&path, e))?;

        debug!(path = %path.display(), bytes = content.len(), "saved entry");
        Ok(())
    }

    /// Whether a file exists for `date`, even an empty one.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.resolve_path(date).is_file()
    }

    /// All dates with an entry file, newest first.
    pub fn list_dates(&self) -> DiaryResult<Vec<NaiveDate>> {
        list::list_dates(&self.root)
    }

    pub fn moods(&self) -> MoodLog {
        MoodLog::new(&self.root)
    }

    /// Set or clear the mood for `date`. The entry text is left untouched.
    ///
    /// Only dates with an entry file can be tagged; clearing always succeeds.
    pub fn set_mood(&self, date: NaiveDate, mood: Option<Mood>) -> DiaryResult<()> {
        if mood.is_some() && !self.contains(date) {
            return Err(DiaryError::NoEntry(format_date(date)));
        }
        self.moods().set(date, mood)
    }

    pub fn entry(&self, date: NaiveDate) -> DiaryResult<Entry> {
        Ok(Entry {
            date,
            content: self.load(date)?,
            mood: self.moods().get(date)?,
        })
    }

    /// Every stored entry, newest first.
    pub fn entries(&self) -> DiaryResult<Vec<Entry>> {
        let moods = self.moods().all()?;

        self.list_dates()?
            .into_iter()
            .map(|date| -> DiaryResult<Entry> {
                Ok(Entry {
                    date,
                    content: self.load(date)?,
                    mood: moods.get(&date).copied(),
                })
            })
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
