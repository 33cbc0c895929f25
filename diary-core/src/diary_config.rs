//! Global diary configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DiaryError, DiaryResult};

static DEFAULT_DIARY_PATH: &str = "my_diaries";

/// Environment variable that overrides `diary_dir` from the config file.
pub const DIARY_DIR_ENV: &str = "DIARY_DIR";

fn default_diary_path() -> PathBuf {
    PathBuf::from(DEFAULT_DIARY_PATH)
}

fn is_default_diary_path(p: &PathBuf) -> bool {
    *p == default_diary_path()
}

/// Global configuration at ~/.config/diary/config.toml
///
/// A relative `diary_dir` is resolved against the working directory.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DiaryConfig {
    #[serde(default = "default_diary_path", skip_serializing_if = "is_default_diary_path")]
    pub diary_dir: PathBuf,
}

impl Default for DiaryConfig {
    fn default() -> Self {
        DiaryConfig {
            diary_dir: default_diary_path(),
        }
    }
}

impl DiaryConfig {
    pub fn config_path() -> DiaryResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DiaryError::Config("Could not determine config directory".into()))?
            .join("diary");

        Ok(config_dir.join("config.toml"))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DiaryResult<()> {
        let contents = format!(
            "\
# diary configuration

# Where your entries live (relative paths start from the working directory).
# Can also be set with the {} environment variable.
# diary_dir = \"{}\"
",
            DIARY_DIR_ENV, DEFAULT_DIARY_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DiaryError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DiaryError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
