//! What counts as an answered field.
//!
//! Presence is decided by the shape of the stored value, so a value of
//! unexpected shape degrades to "set means present" instead of failing.

use crate::onboarding::{Field, FieldValue, OnboardingRecord};

/// Whether a stored value counts as a non-empty answer.
///
/// - absent: not present
/// - text: present iff non-blank after trimming
/// - list: present iff it has at least one element
/// - anything else (numbers including `0`, booleans): present once set
pub fn value_present(value: Option<&FieldValue>) -> bool {
    match value {
        None => false,
        Some(FieldValue::Text(s)) => !s.trim().is_empty(),
        Some(FieldValue::List(items)) => !items.is_empty(),
        Some(FieldValue::Number(_)) | Some(FieldValue::Flag(_)) => true,
        Some(FieldValue::Other(v)) => !v.is_null(),
    }
}

/// Whether a record has a present answer for the field.
pub fn field_present(record: &OnboardingRecord, field: Field) -> bool {
    value_present(record.get(field))
}
