//! Onboarding record data model.
//!
//! - [`OnboardingRecord`] - the partial answer set collected by the quiz
//! - [`Field`] - the fixed set of record fields and their JSON keys
//! - [`FieldValue`] - a stored answer, tagged by shape
//!
//! # Example
//!
//! ```
//! use storynest::onboarding::{Field, FieldValue, OnboardingRecord};
//!
//! let record = OnboardingRecord::new()
//!     .with(Field::ChildName, "Emma")
//!     .with(Field::Goals, vec!["bedtime"]);
//!
//! assert_eq!(record.get(Field::ChildName), Some(&FieldValue::from("Emma")));
//! assert!(record.get(Field::ChildAge).is_none());
//! ```

pub mod field;
pub mod record;

pub use field::{Field, FieldKind, SKIPPED_PLACEHOLDER};
pub use record::{FieldValue, OnboardingRecord};
