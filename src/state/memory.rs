//! In-memory record storage.
//!
//! Clones share the same slot, so a test can hand one clone to a session and
//! inspect writes through another. Stored content is kept as JSON text so
//! malformed data can be seeded.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use crate::error::{Result, StorynestError};
use crate::onboarding::OnboardingRecord;

use super::store::{parse_record, RecordStore};

#[derive(Debug, Default)]
struct Slot {
    content: Option<String>,
    saves: usize,
    clears: usize,
    fail_loads: bool,
    fail_saves: bool,
    fail_clears: bool,
}

/// Shared in-memory [`RecordStore`] with failure injection.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    slot: Rc<RefCell<Slot>>,
}

impl MemoryRecordStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a record.
    pub fn with_record(record: &OnboardingRecord) -> Self {
        let store = Self::new();
        store.slot.borrow_mut().content = serde_json::to_string(record).ok();
        store
    }

    /// A store holding raw content, which may be malformed.
    pub fn with_raw(content: &str) -> Self {
        let store = Self::new();
        store.slot.borrow_mut().content = Some(content.to_string());
        store
    }

    /// The currently stored record, if it parses.
    pub fn stored(&self) -> Option<OnboardingRecord> {
        self.load().ok().flatten()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.slot.borrow().saves
    }

    /// Number of successful clears.
    pub fn clear_count(&self) -> usize {
        self.slot.borrow().clears
    }

    /// Make subsequent loads fail.
    pub fn fail_loads(&self, fail: bool) {
        self.slot.borrow_mut().fail_loads = fail;
    }

    /// Make subsequent saves fail.
    pub fn fail_saves(&self, fail: bool) {
        self.slot.borrow_mut().fail_saves = fail;
    }

    /// Make subsequent clears fail.
    pub fn fail_clears(&self, fail: bool) {
        self.slot.borrow_mut().fail_clears = fail;
    }
}

fn unavailable(op: &str) -> StorynestError {
    StorynestError::Io(std::io::Error::other(format!("storage unavailable during {}", op)))
}

impl RecordStore for MemoryRecordStore {
    fn load(&self) -> Result<Option<OnboardingRecord>> {
        let slot = self.slot.borrow();
        if slot.fail_loads {
            return Err(unavailable("load"));
        }
        slot.content
            .as_deref()
            .map(|content| parse_record(content, Path::new("<memory>")))
            .transpose()
    }

    fn save(&self, record: &OnboardingRecord) -> Result<()> {
        let mut slot = self.slot.borrow_mut();
        if slot.fail_saves {
            return Err(unavailable("save"));
        }
        let content = serde_json::to_string(record)
            .map_err(|e| anyhow::anyhow!("Failed to serialize onboarding record: {}", e))?;
        slot.content = Some(content);
        slot.saves += 1;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self.slot.borrow_mut();
        if slot.fail_clears {
            return Err(unavailable("clear"));
        }
        slot.content = None;
        slot.clears += 1;
        Ok(())
    }
}
