//! Trailing-edge save debouncing.
//!
//! A single deadline stands in for the timer. Arming cancels the previous
//! deadline, so only the last mutation inside the window triggers a write.
//! The host event loop drives it by calling [`SaveDebouncer::poll`].

use chrono::{DateTime, Duration, Utc};

/// Default debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// State of the pending-write timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    PendingWrite { deadline: DateTime<Utc> },
}

/// Two-state debounce machine for record persistence.
#[derive(Debug, Clone)]
pub struct SaveDebouncer {
    delay: Duration,
    state: SaveState,
}

impl Default for SaveDebouncer {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DEBOUNCE_MS)
    }
}

impl SaveDebouncer {
    /// Create a debouncer with the given window.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: SaveState::Idle,
        }
    }

    /// Create a debouncer with a window in milliseconds.
    pub fn from_millis(ms: u64) -> Self {
        let ms = i64::try_from(ms).unwrap_or(i64::MAX);
        Self::new(Duration::try_milliseconds(ms).unwrap_or(Duration::MAX))
    }

    /// The debounce window.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current timer state.
    pub fn state(&self) -> SaveState {
        self.state
    }

    /// Whether a write is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, SaveState::PendingWrite { .. })
    }

    /// Cancel any pending deadline and arm a new one at `now + delay`.
    pub fn arm(&mut self, now: DateTime<Utc>) {
        let deadline = now
            .checked_add_signed(self.delay)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.state = SaveState::PendingWrite { deadline };
    }

    /// Cancel the pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = SaveState::Idle;
        was_pending
    }

    /// Fire the timer if its deadline has passed.
    ///
    /// Returns `true` exactly once per armed deadline, when the caller
    /// should write.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        match self.state {
            SaveState::PendingWrite { deadline } if now >= deadline => {
                self.state = SaveState::Idle;
                true
            }
            _ => false,
        }
    }
}
