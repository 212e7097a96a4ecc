//! User preferences persistence.
//!
//! localkit keeps one small preferences file per user (language and color
//! mode) under `~/.localkit/`. Writes are atomic (write-to-temp-then-rename)
//! to prevent corruption.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LocalkitError, Result};
use crate::ui::ColorMode;

/// File name of the preferences file inside the state directory.
const PREFERENCES_FILE: &str = "preferences.yml";

/// Saved user preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Preferred language code, when the user has picked one.
    #[serde(default)]
    pub language: Option<String>,

    /// Preferred color mode.
    #[serde(default)]
    pub color_mode: ColorMode,

    /// When the preferences were last written.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Preferences {
    /// Default state directory: `~/.localkit`.
    pub fn state_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".localkit")
    }

    /// Load preferences from the given state directory.
    ///
    /// A missing file yields defaults; a malformed file is an error so a
    /// corrupted write is surfaced rather than silently discarded.
    pub fn load_from(dir: &std::path::Path) -> Result<Self> {
        let path = dir.join(PREFERENCES_FILE);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|e| LocalkitError::PreferencesParseError {
            path,
            message: e.to_string(),
        })
    }

    /// Load preferences from the default state directory.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::state_dir())
    }

    /// Save preferences to the given state directory using atomic write.
    pub fn save_to(&mut self, dir: &std::path::Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        self.updated_at = Some(Utc::now());

        let path = dir.join(PREFERENCES_FILE);
        let content = serde_yaml::to_string(self)
            .map_err(|e| anyhow::anyhow!("failed to serialize preferences: {}", e))?;

        let temp_path = path.with_extension("yml.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    /// Save preferences to the default state directory.
    pub fn save(&mut self) -> Result<()> {
        self.save_to(&Self::state_dir())
    }
}
