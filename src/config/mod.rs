//! Settings loading for StoryNest.
//!
//! Settings live in an optional `config.yml` inside the data directory (or
//! an explicit `--config` path). Every key has a default, so a missing file
//! is not an error.
//!
//! # Example
//!
//! ```
//! use storynest::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("config.yml"), "save_debounce_ms: 500").unwrap();
//!
//! let settings = load_settings(temp.path(), None).unwrap();
//! assert_eq!(settings.save_debounce_ms, 500);
//! ```

pub mod loader;
pub mod settings;

pub use loader::{default_data_dir, load_settings, load_settings_file, CONFIG_FILE};
pub use settings::Settings;
