//! Preferences storage
//!
//! Only UI preferences are persisted. The calculator state itself starts
//! fresh on every launch.

use crate::mode::CalcMode;
use crate::theme::ThemeKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

const APP_NAME: &str = "calculator";
const PREFERENCES_FILE: &str = "preferences.json";

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("org", "calculator", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub mode: CalcMode,
    #[serde(default)]
    pub theme: ThemeKind,
}

impl Preferences {
    pub fn path() -> PathBuf {
        config_dir(APP_NAME).join(PREFERENCES_FILE)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load from the user config dir, falling back to defaults. A missing
    /// file is the normal first-run case and is not reported.
    pub fn load() -> Self {
        let path = Self::path();
        match Self::load_from(&path) {
            Ok(prefs) => prefs,
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read preferences, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }
}
