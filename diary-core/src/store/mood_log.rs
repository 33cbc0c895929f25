//! Mood tags stored beside the entries.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use parking_lot::Mutex;
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::date::{format_date, parse_canonical};
use crate::error::{DiaryError, DiaryResult};
use crate::mood::Mood;

const MOODS_FILE: &str = ".diary/moods.toml";

// Serializes read-modify-write of the moods file within this process.
static WRITE_LOCK: Mutex<()> = Mutex::new(());

/// Mood tags kept in `<root>/.diary/moods.toml` as `YYYY-MM-DD = "key"` pairs.
pub struct MoodLog {
    path: PathBuf,
}

impl MoodLog {
    pub fn new(root: &Path) -> Self {
        MoodLog {
            path: root.join(MOODS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, date: NaiveDate) -> DiaryResult<Option<Mood>> {
        Ok(self.all()?.get(&date).copied())
    }

    /// All valid mood tags. Unknown moods, non-string values and malformed
    /// dates in the file are skipped.
    pub fn all(&self) -> DiaryResult<BTreeMap<NaiveDate, Mood>> {
        let moods = self
            .read_raw()?
            .into_iter()
            .filter_map(|(date, value)| {
                let mood = value.as_str().and_then(|s| s.parse::<Mood>().ok());
                let parsed = parse_canonical(&date).zip(mood);
                if parsed.is_none() {
                    trace!(%date, %value, "skipping unreadable mood tag");
                }
                parsed
            })
            .collect();

        Ok(moods)
    }

    /// Set the mood for `date`, or clear it with `None`.
    pub fn set(&self, date: NaiveDate, mood: Option<Mood>) -> DiaryResult<()> {
        let _guard = WRITE_LOCK.lock();

        let mut raw = self.read_raw()?;
        let key = format_date(date);

        match mood {
            Some(mood) => {
                raw.insert(key, toml::Value::String(mood.key().to_string()));
            }
            None => {
                raw.remove(&key);
            }
        }

        self.write_raw(&raw)?;
        debug!(date = %date, mood = ?mood, "updated mood");
        Ok(())
    }

    // Read .diary/moods.toml, keeping entries we can't interpret so a write
    // doesn't drop them.
    fn read_raw(&self) -> DiaryResult<BTreeMap<String, toml::Value>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                DiaryError::Serialization(format!("{}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(DiaryError::storage(&self.path, e)),
        }
    }

    fn write_raw(&self, raw: &BTreeMap<String, toml::Value>) -> DiaryResult<()> {
        let dir = self.path.parent().unwrap_or(Path::new("."));
        std::fs::create_dir_all(dir).map_err(|e| DiaryError::storage(dir, e))?;

        let content =
            toml::to_string(raw).map_err(|e| DiaryError::Serialization(e.to_string()))?;

        // Each writer gets its own temp file in the same directory
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| DiaryError::storage(dir, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| DiaryError::storage(temp.path(), e))?;
        temp.persist(&self.path)
            .map_err(|e| DiaryError::storage(&self.path, e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        crate::date::parse_date(s).unwrap()
    }

    #[test]
    fn missing_file_means_no_moods() {
        let dir = tempfile::tempdir().unwrap();
        let log = MoodLog::new(dir.path());

        assert!(log.all().unwrap().is_empty());
        assert_eq!(log.get(date("2024-01-05")).unwrap(), None);
    }

    #[test]
    fn set_get_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let log = MoodLog::new(dir.path());

        log.set(date("2024-01-05"), Some(Mood::Good)).unwrap();
        log.set(date("2024-01-01"), Some(Mood::Tired)).unwrap();
        assert_eq!(log.get(date("2024-01-05")).unwrap(), Some(Mood::Good));

        log.set(date("2024-01-05"), Some(Mood::Sad)).unwrap();
        assert_eq!(log.get(date("2024-01-05")).unwrap(), Some(Mood::Sad));

        log.set(date("2024-01-05"), None).unwrap();
        assert_eq!(log.get(date("2024-01-05")).unwrap(), None);
        assert_eq!(log.get(date("2024-01-01")).unwrap(), Some(Mood::Tired));
    }

    #[test]
    fn clearing_unset_mood_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let log = MoodLog::new(dir.path());

        log.set(date("2024-01-05"), None).unwrap();
        assert!(log.all().unwrap().is_empty());
    }

    #[test]
    fn skips_unknown_entries_but_keeps_them_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let log = MoodLog::new(dir.path());
        std::fs::create_dir_all(log.path().parent().unwrap()).unwrap();
        std::fs::write(
            log.path(),
            "\"2024-01-05\" = \"good\"\n\"someday\" = \"sad\"\n\"2024-01-06\" = \"ecstatic\"\n",
        )
        .unwrap();

        let all = log.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all.get(&date("2024-01-05")), Some(&Mood::Good));

        log.set(date("2024-01-07"), Some(Mood::Angry)).unwrap();
        let content = std::fs::read_to_string(log.path()).unwrap();
        assert!(content.contains("someday"));
        assert!(content.contains("ecstatic"));
    }

    #[test]
    fn malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = MoodLog::new(dir.path());
        std::fs::create_dir_all(log.path().parent().unwrap()).unwrap();
        std::fs::write(log.path(), "this is = = not toml").unwrap();

        assert!(matches!(log.all(), Err(DiaryError::Serialization(_))));
    }

    #[test]
    fn non_string_values_are_skipped_and_kept() {
        let dir = tempfile::tempdir().unwrap();
        let log = MoodLog::new(dir.path());
        std::fs::create_dir_all(log.path().parent().unwrap()).unwrap();
        std::fs::write(
            log.path(),
            "\"2024-01-05\" = 1\n\"2024-01-06\" = \"good\"\n",
        )
        .unwrap();

        let all = log.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all.get(&date("2024-01-06")), Some(&Mood::Good));

        log.set(date("2024-01-07"), Some(Mood::Sad)).unwrap();
        let content = std::fs::read_to_string(log.path()).unwrap();
        assert!(content.contains("\"2024-01-05\" = 1"));
    }

    #[test]
    fn concurrent_writers_keep_every_date() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        let start = date("2024-01-01");

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|t| {
                    let root = &root;
                    scope.spawn(move || {
                        let log = MoodLog::new(root);
                        for i in 0..12 {
                            let day = start + chrono::Duration::days(t * 12 + i);
                            log.set(day, Some(Mood::Good))?;
                        }
                        Ok::<_, DiaryError>(())
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap().unwrap();
            }
        });

        assert_eq!(MoodLog::new(&root).all().unwrap().len(), 96);
    }
}
