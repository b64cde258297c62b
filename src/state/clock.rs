//! Injectable time source.
//!
//! Debounce deadlines are computed from whatever [`Clock`] the session was
//! started with. The CLI uses [`Clock::System`]; tests start from
//! [`fixed_clock`] and step past deadlines by hand.

use chrono::{DateTime, Duration, Utc};

/// Seconds since the epoch for 2024-01-01T08:00:00Z.
const TEST_START_SECS: i64 = 1_704_096_000;

/// Where "now" comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Wall-clock UTC time.
    #[default]
    System,
    /// Frozen at an instant; moves only through [`Clock::advance`].
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(at) => *at,
        }
    }

    /// Step a fixed clock forward. The system clock ignores this.
    pub fn advance(&mut self, by: Duration) {
        if let Self::Fixed(at) = self {
            *at += by;
        }
    }
}

/// A fixed clock at 2024-01-01T08:00:00Z.
pub fn fixed_clock() -> Clock {
    Clock::fixed(DateTime::<Utc>::from_timestamp(TEST_START_SECS, 0).unwrap_or_default())
}
