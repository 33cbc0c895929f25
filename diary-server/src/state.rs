use anyhow::Result;
use diary_core::{Diary, NoteStore};
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    diary: Diary,
}

impl AppState {
    pub fn new(diary: Diary) -> Result<Self> {
        // Verify the diary directory is usable at startup
        let store = diary.store()?;
        info!(dir = %store.root().display(), "serving diary");
        Ok(AppState { diary })
    }

    /// Opened per request so a directory removed while running is recreated.
    pub fn store(&self) -> Result<NoteStore> {
        Ok(self.diary.store()?)
    }
}
