//! Onboarding record persistence.
//!
//! This module provides the storage boundary for the onboarding record and
//! the debounce machinery the session uses to coalesce writes.

pub mod clock;
pub mod debounce;
pub mod memory;
pub mod store;

pub use clock::{fixed_clock, Clock};
pub use debounce::{SaveDebouncer, SaveState, DEFAULT_DEBOUNCE_MS};
pub use memory::MemoryRecordStore;
pub use store::{FileRecordStore, RecordStore, STORAGE_KEY};
