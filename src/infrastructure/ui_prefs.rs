use crate::domain::errors::PrefsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Ambient UI preferences. Domain data is never persisted; this file only
/// remembers how the portal was last displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPrefs {
    pub start_view: Option<String>,
    pub ui_scale: f32,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            start_view: None,
            ui_scale: 1.0,
        }
    }
}

pub struct UiPrefsStore {
    file_path: PathBuf,
}

impl UiPrefsStore {
    /// Store under ~/.classdesk in the user home.
    pub fn new() -> Result<Self, PrefsError> {
        let home = std::env::var("HOME").map_err(|_| PrefsError::HomeDirUnset)?;
        let config_dir = PathBuf::from(home).join(".classdesk");
        Self::at(config_dir)
    }

    /// Store under an explicit directory.
    pub fn at(config_dir: PathBuf) -> Result<Self, PrefsError> {
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).map_err(|e| PrefsError::WriteFailed {
                path: config_dir.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        Ok(Self {
            file_path: config_dir.join("ui_settings.json"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<Option<UiPrefs>, PrefsError> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path).map_err(|e| PrefsError::ReadFailed {
            path: self.file_path.display().to_string(),
            reason: e.to_string(),
        })?;
        let prefs: UiPrefs =
            serde_json::from_str(&content).map_err(|e| PrefsError::Malformed {
                path: self.file_path.display().to_string(),
                reason: e.to_string(),
            })?;

        info!("Loaded UI preferences from {:?}", self.file_path);
        Ok(Some(prefs))
    }

    pub fn save(&self, prefs: &UiPrefs) -> Result<(), PrefsError> {
        let content =
            serde_json::to_string_pretty(prefs).map_err(|e| PrefsError::WriteFailed {
                path: self.file_path.display().to_string(),
                reason: e.to_string(),
            })?;

        // Atomic write: write to temp file then rename
        let temp_path = self.file_path.with_extension("tmp");
        let write_err = |e: std::io::Error| PrefsError::WriteFailed {
            path: self.file_path.display().to_string(),
            reason: e.to_string(),
        };
        fs::write(&temp_path, content).map_err(write_err)?;
        fs::rename(&temp_path, &self.file_path).map_err(write_err)?;

        info!("Saved UI preferences to {:?}", self.file_path);
        Ok(())
    }
}
