//! Resume and progress computation.
//!
//! Every operation here is a pure, linear pass over the registry. Nothing
//! mutates the record and nothing can fail.

use serde::Serialize;

use crate::onboarding::OnboardingRecord;

use super::registry::{StepRegistry, FINISHED};

/// Turns a registry and a record snapshot into resume/progress information.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressEvaluator {
    registry: StepRegistry,
}

impl ProgressEvaluator {
    /// Create an evaluator over a registry.
    pub fn new(registry: StepRegistry) -> Self {
        Self { registry }
    }

    /// The registry being evaluated.
    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Path of the first incomplete step, or [`FINISHED`] when every step
    /// is complete (including when the registry is empty).
    pub fn resume_step(&self, record: &OnboardingRecord) -> &'static str {
        self.registry
            .steps()
            .iter()
            .find(|step| !step.is_complete(record))
            .map(|step| step.path)
            .unwrap_or(FINISHED)
    }

    /// Whether at least one step is complete.
    pub fn has_progress(&self, record: &OnboardingRecord) -> bool {
        self.registry
            .steps()
            .iter()
            .any(|step| step.is_complete(record))
    }

    /// Number of complete steps.
    pub fn completed_count(&self, record: &OnboardingRecord) -> usize {
        self.registry
            .steps()
            .iter()
            .filter(|step| step.is_complete(record))
            .count()
    }

    /// Fraction of complete steps in `[0, 1]`.
    ///
    /// An empty registry counts as fully complete.
    pub fn progress_fraction(&self, record: &OnboardingRecord) -> f64 {
        let total = self.registry.len();
        if total == 0 {
            return 1.0;
        }
        self.completed_count(record) as f64 / total as f64
    }

    /// Full per-step report.
    pub fn report(&self, record: &OnboardingRecord) -> ProgressReport {
        let steps: Vec<StepProgress> = self
            .registry
            .steps()
            .iter()
            .map(|step| StepProgress {
                path: step.path,
                complete: step.is_complete(record),
            })
            .collect();
        let completed = steps.iter().filter(|s| s.complete).count();

        ProgressReport {
            resume_step: self.resume_step(record),
            has_progress: completed > 0,
            completed,
            total: steps.len(),
            fraction: self.progress_fraction(record),
            steps,
        }
    }
}

/// Completion of a single step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepProgress {
    pub path: &'static str,
    pub complete: bool,
}

/// Snapshot of onboarding progress, as shown by `storynest status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub resume_step: &'static str,
    pub has_progress: bool,
    pub completed: usize,
    pub total: usize,
    pub fraction: f64,
    pub steps: Vec<StepProgress>,
}

impl ProgressReport {
    /// Whether every step is complete.
    pub fn is_finished(&self) -> bool {
        self.resume_step == FINISHED
    }

    /// Progress as a whole percentage, rounded down.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let percent = self.completed.min(self.total) * 100 / self.total;
        u8::try_from(percent).unwrap_or(100)
    }
}
