//! Startup configuration read from `config.toml`.
//!
//! The file is optional and only ever read. It can set the initial view mode
//! and override the default times of any shift category:
//!
//! ```toml
//! view_mode = "week"
//!
//! [shift_times.morning]
//! start = "07:00"
//! end = "15:00"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::settings::ShiftSettings;
use crate::models::ui::ViewMode;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SHIFT_CALENDAR_CONFIG";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub view_mode: ViewMode,
    pub shift_times: ShiftSettings,
}

impl AppConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from the resolved config path, falling back to defaults when the
    /// file cannot be read or parsed.
    pub fn load_or_default() -> Self {
        let Some(path) = resolve_config_path() else {
            log::warn!("Unable to resolve config directory; using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{:#}; using default settings", err);
                Self::default()
            }
        }
    }
}

/// `$SHIFT_CALENDAR_CONFIG` if set, otherwise `config.toml` in the platform
/// config directory.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from("com", "ShiftCalendar", "ShiftCalendar")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
