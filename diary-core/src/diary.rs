//! Diary root directory management.

use std::path::{Path, PathBuf};

use config::{Config, File};

use crate::diary_config::{DIARY_DIR_ENV, DiaryConfig};
use crate::error::{DiaryError, DiaryResult};
use crate::store::NoteStore;

#[derive(Clone, Debug)]
pub struct Diary {
    config: DiaryConfig,
}

impl Diary {
    /// Load ~/.config/diary/config.toml, writing a commented default on first run.
    pub fn load() -> DiaryResult<Self> {
        let config_path = DiaryConfig::config_path()?;

        if !config_path.exists() {
            DiaryConfig::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit config file. `DIARY_DIR` takes precedence over the file.
    pub fn load_from(config_path: &Path) -> DiaryResult<Self> {
        let config: DiaryConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .set_override_option("diary_dir", std::env::var(DIARY_DIR_ENV).ok())
            .and_then(|builder| builder.build())
            .map_err(|e| DiaryError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DiaryError::Config(e.to_string()))?;

        Ok(Diary { config })
    }

    /// A diary rooted at `dir`, bypassing configuration.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Diary {
            config: DiaryConfig {
                diary_dir: dir.into(),
            },
        }
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.diary_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the diary directory path in display-friendly form,
    /// keeping `~` instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.diary_dir.clone()
    }

    /// The note store, creating the diary directory if needed.
    pub fn store(&self) -> DiaryResult<NoteStore> {
        NoteStore::open(self.data_path())
    }
}
