//! The ordered onboarding step registry.
//!
//! Registry order is the order of the quiz screens in the app's navigation
//! stack. Step paths double as route identifiers, so a path change here must
//! ship together with the matching route change.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Result, StorynestError};
use crate::onboarding::{Field, OnboardingRecord};

use super::presence::field_present;

/// Identifier returned once every step is complete.
///
/// Never a registry step itself.
pub const FINISHED: &str = "finished";

/// Completeness rule for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCheck {
    /// The field has a present answer.
    Present(Field),
    /// Every listed field has a present answer.
    AllOf(&'static [Field]),
    /// At least one listed field has a present answer.
    AnyOf(&'static [Field]),
}

impl StepCheck {
    /// Evaluate the check against a record.
    pub fn is_satisfied(&self, record: &OnboardingRecord) -> bool {
        match self {
            Self::Present(field) => field_present(record, *field),
            Self::AllOf(fields) => fields.iter().all(|f| field_present(record, *f)),
            Self::AnyOf(fields) => fields.iter().any(|f| field_present(record, *f)),
        }
    }

    /// Fields this check reads.
    pub fn fields(&self) -> &[Field] {
        match self {
            Self::Present(field) => std::slice::from_ref(field),
            Self::AllOf(fields) | Self::AnyOf(fields) => fields,
        }
    }

    /// Short description, e.g. `childName + childAge`.
    pub fn describe(&self) -> String {
        let keys: Vec<&str> = self.fields().iter().map(|f| f.key()).collect();
        match self {
            Self::Present(_) => keys.join(""),
            Self::AllOf(_) => keys.join(" + "),
            Self::AnyOf(_) => keys.join(" | "),
        }
    }
}

/// A registry entry: a route identifier and its completeness rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub path: &'static str,
    pub check: StepCheck,
}

impl Step {
    /// Create a step.
    pub const fn new(path: &'static str, check: StepCheck) -> Self {
        Self { path, check }
    }

    /// Whether the record satisfies this step.
    pub fn is_complete(&self, record: &OnboardingRecord) -> bool {
        self.check.is_satisfied(record)
    }
}

/// The StoryNest onboarding quiz, in screen order.
pub const ONBOARDING_STEPS: &[Step] = &[
    Step::new("goals", StepCheck::Present(Field::Goals)),
    Step::new(
        "child-info",
        StepCheck::AllOf(&[Field::ChildName, Field::ChildAge]),
    ),
    Step::new("child-gender", StepCheck::Present(Field::ChildGender)),
    Step::new("vocabulary", StepCheck::Present(Field::VocabularyLevel)),
    Step::new("parenting-style", StepCheck::Present(Field::ParentingStyle)),
    Step::new("personality", StepCheck::Present(Field::PersonalityTags)),
    Step::new("bedtime-routine", StepCheck::Present(Field::BedtimeRoutine)),
    Step::new("story-length", StepCheck::Present(Field::StoryLength)),
    Step::new("themes", StepCheck::Present(Field::FavoriteThemes)),
    Step::new("struggles", StepCheck::Present(Field::Struggles)),
    Step::new(
        "aggression-frequency",
        StepCheck::Present(Field::AggressionFrequency),
    ),
    Step::new(
        "trigger-situations",
        StepCheck::Present(Field::TriggerSituations),
    ),
    Step::new("moral-assessment", StepCheck::Present(Field::MoralAssessment)),
    Step::new("parent-email", StepCheck::Present(Field::ParentEmail)),
    Step::new(
        "mascot",
        StepCheck::AnyOf(&[Field::MascotId, Field::MascotImageUrl]),
    ),
];

/// An ordered, immutable list of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRegistry {
    steps: &'static [Step],
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::onboarding()
    }
}

impl StepRegistry {
    /// Create a registry over a static step list.
    pub const fn new(steps: &'static [Step]) -> Self {
        Self { steps }
    }

    /// The StoryNest onboarding registry.
    pub const fn onboarding() -> Self {
        Self::new(ONBOARDING_STEPS)
    }

    /// Steps in order.
    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the registry has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Look up a step by path.
    pub fn get(&self, path: &str) -> Option<&'static Step> {
        self.steps.iter().find(|s| s.path == path)
    }

    /// Index of a step in registry order.
    pub fn position(&self, path: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.path == path)
    }

    /// Look up a step by path, failing for unknown paths.
    pub fn require(&self, path: &str) -> Result<&'static Step> {
        self.get(path).ok_or_else(|| StorynestError::UnknownStep {
            path: path.to_string(),
        })
    }

    /// Check that paths are unique and none collides with [`FINISHED`].
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for step in self.steps {
            if step.path == FINISHED {
                return Err(StorynestError::InvalidRegistry {
                    message: format!("step path '{}' is reserved", FINISHED),
                });
            }
            if !seen.insert(step.path) {
                return Err(StorynestError::InvalidRegistry {
                    message: format!("duplicate step path '{}'", step.path),
                });
            }
        }
        Ok(())
    }
}

/// Serializable view of a step for listings.
#[derive(Debug, Clone, Serialize)]
pub struct StepInfo {
    pub index: usize,
    pub path: &'static str,
    pub check: String,
    pub fields: Vec<&'static str>,
}

impl StepInfo {
    /// Describe the step at `index`.
    pub fn new(index: usize, step: &Step) -> Self {
        Self {
            index,
            path: step.path,
            check: step.check.describe(),
            fields: step.check.fields().iter().map(|f| f.key()).collect(),
        }
    }
}
