//! Where a returning user should land.

use std::fmt;

use serde::Serialize;

use crate::onboarding::OnboardingRecord;
use crate::steps::{ProgressEvaluator, FINISHED};

/// Navigation decision derived from onboarding progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "target", content = "step", rename_all = "kebab-case")]
pub enum ResumeTarget {
    /// Nothing answered yet: show the entry/splash screen.
    Entry,
    /// Partially answered: jump to this onboarding step.
    Step(&'static str),
    /// Every step answered: leave onboarding for the main app.
    MainApp,
}

impl ResumeTarget {
    /// Decide the landing screen for a record.
    pub fn for_record(evaluator: &ProgressEvaluator, record: &OnboardingRecord) -> Self {
        if !evaluator.has_progress(record) {
            return Self::Entry;
        }
        match evaluator.resume_step(record) {
            FINISHED => Self::MainApp,
            path => Self::Step(path),
        }
    }

    /// Route identifier for the navigation layer.
    pub fn route(&self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Step(path) => path,
            Self::MainApp => "main-app",
        }
    }
}

impl fmt::Display for ResumeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(path) => write!(f, "step {}", path),
            other => f.write_str(other.route()),
        }
    }
}
