//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StorynestError};

use super::Settings;

/// Settings file name inside the data directory.
pub const CONFIG_FILE: &str = "config.yml";

/// Default data directory: `<platform data dir>/storynest`.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storynest")
}

/// Load settings from an explicit path, or `config.yml` in `data_dir`.
///
/// A missing default file yields [`Settings::default`]; a missing explicit
/// file is an error.
pub fn load_settings(data_dir: &Path, explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => load_settings_file(path),
        None => {
            let path = data_dir.join(CONFIG_FILE);
            if !path.exists() {
                tracing::debug!("No settings file at {}, using defaults", path.display());
                return Ok(Settings::default());
            }
            load_settings_file(&path)
        }
    }
}

/// Load and parse a settings file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(&content).map_err(|e| StorynestError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
