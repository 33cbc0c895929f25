//! Enumerate entry dates in a store directory.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;
use tracing::trace;

use super::ENTRY_EXTENSION;
use crate::date::parse_canonical;
use crate::error::{DiaryError, DiaryResult};

/// List the dates of all entry files in `dir`, newest first.
///
/// Files whose name is not `YYYY-MM-DD.txt` are skipped without error, so
/// foreign files in the directory never break listing. Subdirectories are
/// ignored. A missing directory has no entries.
pub fn list_dates(dir: &Path) -> DiaryResult<Vec<NaiveDate>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(DiaryError::storage(dir, e)),
    };

    let mut dates = BTreeSet::new();

    for entry in entries {
        let path = entry.map_err(|e| DiaryError::storage(dir, e))?.path();

        if !path.is_file() {
            continue;
        }

        match date_from_filename(&path) {
            Some(date) => {
                dates.insert(date);
            }
            None => trace!(path = %path.display(), "skipping non-entry file"),
        }
    }

    Ok(dates.into_iter().rev().collect())
}

/// Parse the date out of an entry filename, if it is one.
fn date_from_filename(path: &Path) -> Option<NaiveDate> {
    if path.extension()? != ENTRY_EXTENSION {
        return None;
    }

    let stem = path.file_stem()?.to_str()?;
    parse_canonical(stem)
}
