//! The onboarding session and resume navigation.
//!
//! An [`OnboardingSession`] is constructed once per onboarding run and
//! handed by reference to whatever needs to read or update answers. It owns
//! the in-memory record, centralizes every mutation, and debounces writes to
//! its [`RecordStore`](crate::state::RecordStore).
//!
//! # Example
//!
//! ```
//! use storynest::config::Settings;
//! use storynest::onboarding::Field;
//! use storynest::session::{OnboardingSession, ResumeTarget};
//! use storynest::state::{fixed_clock, MemoryRecordStore};
//!
//! let store = MemoryRecordStore::new();
//! let mut session = OnboardingSession::start(store.clone(), &Settings::default(), fixed_clock());
//! assert_eq!(session.resume_target(), ResumeTarget::Entry);
//!
//! session.set(Field::Goals, vec!["bedtime"]);
//! assert_eq!(session.resume_target(), ResumeTarget::Step("child-info"));
//!
//! session.flush();
//! assert_eq!(store.save_count(), 1);
//! ```

mod navigator;
mod onboarding;

pub use navigator::ResumeTarget;
pub use onboarding::OnboardingSession;
