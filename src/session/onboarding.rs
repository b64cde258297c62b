//! The owned onboarding session.

use crate::config::Settings;
use crate::error::Result;
use crate::onboarding::{Field, FieldValue, OnboardingRecord};
use crate::state::{Clock, RecordStore, SaveDebouncer};
use crate::steps::{field_present, ProgressEvaluator, ProgressReport, StepCheck, StepRegistry};

use super::navigator::ResumeTarget;

/// Owns the in-memory record for one onboarding run.
///
/// All mutations go through [`update`](Self::update) so that save
/// debouncing stays in one place. The in-memory record is authoritative for
/// navigation; persistence lag only affects durability across restarts.
///
/// Saves are driven by [`tick`](Self::tick). Dropping a session with a
/// pending save discards that save; call [`flush`](Self::flush) or
/// [`finish`](Self::finish) first.
#[derive(Debug)]
pub struct OnboardingSession<S: RecordStore> {
    store: S,
    record: OnboardingRecord,
    evaluator: ProgressEvaluator,
    debouncer: SaveDebouncer,
    clock: Clock,
}

impl<S: RecordStore> OnboardingSession<S> {
    /// Start a session, loading any previously saved record.
    ///
    /// Load failures and malformed data fall back to an empty record.
    pub fn start(store: S, settings: &Settings, clock: Clock) -> Self {
        let record = match store.load() {
            Ok(Some(record)) => {
                tracing::debug!("Resuming onboarding from saved record");
                record
            }
            Ok(None) => OnboardingRecord::default(),
            Err(e) => {
                tracing::warn!("Could not load onboarding record, starting over: {}", e);
                OnboardingRecord::default()
            }
        };

        Self {
            store,
            record,
            evaluator: ProgressEvaluator::default(),
            debouncer: SaveDebouncer::from_millis(settings.save_debounce_ms),
            clock,
        }
    }

    /// Evaluate progress against a different registry.
    pub fn with_registry(mut self, registry: StepRegistry) -> Self {
        self.evaluator = ProgressEvaluator::new(registry);
        self
    }

    /// The current record.
    pub fn record(&self) -> &OnboardingRecord {
        &self.record
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The evaluator used for progress queries.
    pub fn evaluator(&self) -> &ProgressEvaluator {
        &self.evaluator
    }

    /// The session clock.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Mutable access to the clock, for advancing a fixed clock.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Whether a debounced save is waiting.
    pub fn is_save_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Apply a mutation and (re)arm the debounced save.
    pub fn update<F>(&mut self, mutate: F)
    where
        F: FnOnce(&mut OnboardingRecord),
    {
        mutate(&mut self.record);
        self.debouncer.arm(self.clock.now());
    }

    /// Store one answer.
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) {
        let value = value.into();
        tracing::debug!("Setting {} = {:?}", field, value);
        self.update(|record| record.set(field, value));
    }

    /// Mark a step as skipped by filling its unanswered fields with
    /// placeholders that satisfy the presence rule.
    ///
    /// Used by screens that branch past a step, so the linear resume scan
    /// does not land on a screen the user was never meant to see. A step
    /// that is already complete is left untouched.
    pub fn mark_skipped(&mut self, path: &str) -> Result<()> {
        let step = self.evaluator.registry().require(path)?;
        if step.is_complete(&self.record) {
            return Ok(());
        }

        let fields: Vec<Field> = match step.check {
            StepCheck::AnyOf(fields) => fields.iter().copied().take(1).collect(),
            check => check
                .fields()
                .iter()
                .copied()
                .filter(|f| !field_present(&self.record, *f))
                .collect(),
        };

        tracing::info!("Skipping step '{}'", path);
        self.update(|record| {
            for field in fields {
                record.set(field, field.kind().placeholder());
            }
        });
        Ok(())
    }

    /// Write the record if the debounce deadline has passed.
    ///
    /// Returns whether a save was attempted.
    pub fn tick(&mut self) -> bool {
        if self.debouncer.poll(self.clock.now()) {
            self.persist();
            true
        } else {
            false
        }
    }

    /// Write a pending save immediately.
    ///
    /// Returns whether a save was attempted.
    pub fn flush(&mut self) -> bool {
        if self.debouncer.cancel() {
            self.persist();
            true
        } else {
            false
        }
    }

    /// Wipe onboarding back to "never started".
    ///
    /// Any pending save is cancelled first so it cannot resurrect the
    /// cleared data. The in-memory record is emptied even when clearing the
    /// stored copy fails; that failure is returned.
    pub fn reset(&mut self) -> Result<()> {
        self.debouncer.cancel();
        self.record = OnboardingRecord::default();
        self.store.clear()?;
        tracing::info!("Onboarding reset");
        Ok(())
    }

    /// End the session, writing the final record.
    ///
    /// A failed write is returned rather than logged, since this is the
    /// last chance to persist.
    pub fn finish(mut self) -> Result<OnboardingRecord> {
        self.debouncer.cancel();
        self.store.save(&self.record)?;
        Ok(self.record)
    }

    /// First incomplete step, or [`FINISHED`](crate::steps::FINISHED).
    pub fn resume_step(&self) -> &'static str {
        self.evaluator.resume_step(&self.record)
    }

    /// Whether any step is complete.
    pub fn has_progress(&self) -> bool {
        self.evaluator.has_progress(&self.record)
    }

    /// Fraction of complete steps.
    pub fn progress_fraction(&self) -> f64 {
        self.evaluator.progress_fraction(&self.record)
    }

    /// Per-step progress report.
    pub fn report(&self) -> ProgressReport {
        self.evaluator.report(&self.record)
    }

    /// Where the navigation layer should send the user.
    pub fn resume_target(&self) -> ResumeTarget {
        ResumeTarget::for_record(&self.evaluator, &self.record)
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.record) {
            tracing::warn!("Could not save onboarding record: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{fixed_clock, MemoryRecordStore};
    use crate::steps::FINISHED;
    use chrono::Duration;

    fn start(store: &MemoryRecordStore) -> OnboardingSession<MemoryRecordStore> {
        OnboardingSession::start(store.clone(), &Settings::default(), fixed_clock())
    }

    fn wait(session: &mut OnboardingSession<MemoryRecordStore>, ms: i64) {
        session.clock_mut().advance(Duration::milliseconds(ms));
    }

    #[test]
    fn fresh_store_starts_empty() {
        let store = MemoryRecordStore::new();
        let session = start(&store);
        assert!(session.record().is_empty());
        assert_eq!(session.resume_step(), "goals");
        assert!(!session.has_progress());
        assert_eq!(session.resume_target(), ResumeTarget::Entry);
    }

    #[test]
    fn resumes_saved_record() {
        let saved = OnboardingRecord::new()
            .with(Field::Goals, vec!["bedtime"])
            .with(Field::ChildName, "Emma")
            .with(Field::ChildAge, "4-5");
        let store = MemoryRecordStore::with_record(&saved);
        let session = start(&store);
        assert_eq!(session.record(), &saved);
        assert_eq!(session.resume_target(), ResumeTarget::Step("child-gender"));
    }

    #[test]
    fn malformed_data_falls_back_to_empty() {
        let store = MemoryRecordStore::with_raw("{ \"childName\": ");
        let session = start(&store);
        assert!(session.record().is_empty());
        assert_eq!(session.resume_step(), "goals");
    }

    #[test]
    fn load_failure_falls_back_to_empty() {
        let store = MemoryRecordStore::new();
        store.fail_loads(true);
        let session = start(&store);
        assert!(session.record().is_empty());
    }

    #[test]
    fn updates_apply_immediately_but_save_later() {
        let store = MemoryRecordStore::new();
        let mut session = start(&store);

        session.set(Field::Goals, vec!["bedtime"]);
        assert_eq!(session.resume_step(), "child-info");
        assert!(session.is_save_pending());
        assert!(!session.tick());
        assert_eq!(store.save_count(), 0);

        wait(&mut session, 300);
        assert!(session.tick());
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.stored().unwrap(), *session.record());
    }

    #[test]
    fn rapid_updates_coalesce_into_one_save() {
        let store = MemoryRecordStore::new();
        let mut session = start(&store);

        for name in ["E", "Em", "Emm", "Emma"] {
            session.set(Field::ChildName, name);
            wait(&mut session, 100);
            session.tick();
        }
        assert_eq!(store.save_count(), 0);

        wait(&mut session, 200);
        session.tick();
        assert_eq!(store.save_count(), 1);
        assert_eq!(
            store.stored().unwrap().get(Field::ChildName),
            Some(&FieldValue::from("Emma"))
        );
    }

    #[test]
    fn save_failure_is_swallowed_and_retried_on_next_mutation() {
        let store = MemoryRecordStore::new();
        let mut session = start(&store);

        store.fail_saves(true);
        session.set(Field::Goals, vec!["bedtime"]);
        wait(&mut session, 300);
        assert!(session.tick());
        assert_eq!(store.save_count(), 0);
        assert!(!session.is_save_pending());
        assert_eq!(session.resume_step(), "child-info");

        store.fail_saves(false);
        session.set(Field::ChildName, "Emma");
        wait(&mut session, 300);
        session.tick();
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn flush_writes_pending_save() {
        let store = MemoryRecordStore::new();
        let mut session = start(&store);
        assert!(!session.flush());

        session.set(Field::ChildName, "Emma");
        assert!(session.flush());
        assert_eq!(store.save_count(), 1);
        assert!(!session.is_save_pending());
    }

    #[test]
    fn reset_cancels_pending_save_before_clearing() {
        let store = MemoryRecordStore::new();
        let mut session = start(&store);

        session.set(Field::ChildName, "Emma");
        session.reset().unwrap();
        assert!(!session.is_save_pending());

        wait(&mut session, 1_000);
        assert!(!session.tick());
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.clear_count(), 1);
        assert!(store.stored().is_none());
        assert!(session.record().is_empty());
    }

    #[test]
    fn reset_survives_clear_failure() {
        let store = MemoryRecordStore::with_record(
            &OnboardingRecord::new().with(Field::ChildName, "Emma"),
        );
        store.fail_clears(true);
        let mut session = start(&store);
        assert!(session.reset().is_err());
        assert!(session.record().is_empty());
        assert_eq!(session.resume_target(), ResumeTarget::Entry);
    }

    #[test]
    fn finish_writes_final_record() {
        let store = MemoryRecordStore::new();
        let mut session = start(&store);
        session.set(Field::ChildName, "Emma");

        let record = session.finish().unwrap();
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.stored(), Some(record));
    }

    #[test]
    fn finish_reports_failed_write() {
        let store = MemoryRecordStore::new();
        let mut session = start(&store);
        session.set(Field::ChildName, "Emma");
        store.fail_saves(true);

        let err = session.finish().unwrap_err();
        assert!(err.to_string().contains("save"));
        assert_eq!(store.save_count(), 0);
        assert!(store.stored().is_none());
    }

    #[test]
    fn skipping_fills_placeholders() {
        let store = MemoryRecordStore::new();
        let mut session = start(&store);
        session.set(Field::Goals, vec!["bedtime"]);
        session.set(Field::ChildName, "Emma");

        session.mark_skipped("child-info").unwrap();
        assert_eq!(
            session.record().get(Field::ChildName),
            Some(&FieldValue::from("Emma"))
        );
        assert_eq!(
            session.record().get(Field::ChildAge),
            Some(&FieldValue::from("skipped"))
        );
        assert_eq!(session.resume_step(), "child-gender");
    }

    #[test]
    fn skipping_any_of_step_fills_one_field() {
        let store = MemoryRecordStore::new();
        let mut session = start(&store);
        session.mark_skipped("mascot").unwrap();
        assert!(session.record().get(Field::MascotId).is_some());
        assert!(session.record().get(Field::MascotImageUrl).is_none());
    }

    #[test]
    fn skipping_complete_step_changes_nothing() {
        let store = MemoryRecordStore::new();
        let mut session = start(&store);
        session.set(Field::Struggles, vec!["sharing"]);
        session.flush();

        session.mark_skipped("struggles").unwrap();
        assert!(!session.is_save_pending());
        assert_eq!(
            session.record().get(Field::Struggles),
            Some(&FieldValue::from(vec!["sharing"]))
        );
    }

    #[test]
    fn skipping_unknown_step_fails() {
        let store = MemoryRecordStore::new();
        let mut session = start(&store);
        assert!(session.mark_skipped("crystals").is_err());
        assert!(!session.is_save_pending());
    }

    #[test]
    fn skipping_every_step_finishes_onboarding() {
        let store = MemoryRecordStore::new();
        let mut session = start(&store);
        let paths: Vec<&str> = session
            .evaluator()
            .registry()
            .steps()
            .iter()
            .map(|s| s.path)
            .collect();
        for path in paths {
            session.mark_skipped(path).unwrap();
        }
        assert_eq!(session.resume_step(), FINISHED);
        assert_eq!(session.resume_target(), ResumeTarget::MainApp);
        assert_eq!(session.progress_fraction(), 1.0);
    }

    #[test]
    fn custom_debounce_window() {
        let store = MemoryRecordStore::new();
        let settings = Settings {
            save_debounce_ms: 1_000,
            ..Settings::default()
        };
        let mut session = OnboardingSession::start(store.clone(), &settings, fixed_clock());
        session.set(Field::ChildName, "Emma");
        wait(&mut session, 999);
        assert!(!session.tick());
        wait(&mut session, 1);
        assert!(session.tick());
    }
}
