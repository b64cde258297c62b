//! StoryNest - onboarding progress and resume engine.
//!
//! The StoryNest app asks parents a sequence of quiz questions before the
//! child-facing experience starts. This crate decides, from whatever answers
//! have been persisted so far, which quiz screen a returning user should land
//! on and how far along they are.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading
//! - [`error`] - Error types and result aliases
//! - [`onboarding`] - The onboarding record data model
//! - [`session`] - The owned onboarding session and resume navigation
//! - [`state`] - Record persistence and save debouncing
//! - [`steps`] - Step registry and progress evaluation
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use storynest::onboarding::{Field, OnboardingRecord};
//! use storynest::steps::{ProgressEvaluator, StepRegistry, FINISHED};
//!
//! let eval = ProgressEvaluator::new(StepRegistry::onboarding());
//!
//! let fresh = OnboardingRecord::new();
//! assert_eq!(eval.resume_step(&fresh), "goals");
//! assert_eq!(eval.progress_fraction(&fresh), 0.0);
//! assert_ne!(eval.resume_step(&fresh), FINISHED);
//!
//! let started = fresh.with(Field::Goals, vec!["bedtime"]);
//! assert!(eval.has_progress(&started));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod onboarding;
pub mod session;
pub mod state;
pub mod steps;
pub mod ui;

pub use error::{Result, StorynestError};
