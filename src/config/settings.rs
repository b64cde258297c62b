//! Settings read from `config.yml`.

use serde::{Deserialize, Serialize};

use crate::state::DEFAULT_DEBOUNCE_MS;

/// Tunables for the onboarding session.
///
/// The record itself always lives at
/// [`STORAGE_KEY`](crate::state::STORAGE_KEY) inside the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Trailing-edge debounce window for record saves, in milliseconds.
    pub save_debounce_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            save_debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}
