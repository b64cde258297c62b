//! Onboarding steps and progress evaluation.
//!
//! - [`StepRegistry`] - the ordered quiz steps and their completeness checks
//! - [`value_present`] - what counts as an answered field
//! - [`ProgressEvaluator`] - resume step, has-progress and progress fraction
//!
//! # Example
//!
//! ```
//! use storynest::onboarding::{Field, OnboardingRecord};
//! use storynest::steps::{ProgressEvaluator, StepRegistry};
//!
//! let eval = ProgressEvaluator::new(StepRegistry::onboarding());
//!
//! let record = OnboardingRecord::new()
//!     .with(Field::Goals, vec!["bedtime"])
//!     .with(Field::ChildName, "Emma")
//!     .with(Field::ChildAge, "4-5");
//!
//! assert_eq!(eval.resume_step(&record), "child-gender");
//! assert!(eval.has_progress(&record));
//! ```

pub mod presence;
pub mod progress;
pub mod registry;

pub use presence::{field_present, value_present};
pub use progress::{ProgressEvaluator, ProgressReport, StepProgress};
pub use registry::{Step, StepCheck, StepInfo, StepRegistry, FINISHED, ONBOARDING_STEPS};
