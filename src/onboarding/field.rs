//! The fixed set of onboarding record fields.
//!
//! Field keys are the camelCase names written to the persisted JSON record.
//! They are part of the storage format: renaming one orphans data written by
//! earlier app versions.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StorynestError};

use super::FieldValue;

/// Placeholder written for answers the navigation layer skipped.
pub const SKIPPED_PLACEHOLDER: &str = "skipped";

/// The natural shape of a field's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text or a single choice.
    Text,
    /// A set of tags; order is irrelevant.
    List,
    /// A numeric answer.
    Number,
}

impl FieldKind {
    /// Value that satisfies the presence rule for this kind.
    pub fn placeholder(&self) -> FieldValue {
        match self {
            Self::Text => FieldValue::Text(SKIPPED_PLACEHOLDER.to_string()),
            Self::List => FieldValue::List(vec![SKIPPED_PLACEHOLDER.to_string()]),
            Self::Number => FieldValue::Number(0.0),
        }
    }

    /// Human-readable kind name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::List => "list",
            Self::Number => "number",
        }
    }
}

/// A known onboarding record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Goals,
    ChildName,
    ChildAge,
    BirthMonth,
    BirthYear,
    ChildGender,
    VocabularyLevel,
    ParentingStyle,
    PersonalityTags,
    BedtimeRoutine,
    StoryLength,
    FavoriteThemes,
    Struggles,
    AggressionFrequency,
    TriggerSituations,
    MoralAssessment,
    ParentEmail,
    MascotId,
    MascotImageUrl,
}

impl Field {
    /// Every field, in record order.
    pub const ALL: [Field; 19] = [
        Field::Goals,
        Field::ChildName,
        Field::ChildAge,
        Field::BirthMonth,
        Field::BirthYear,
        Field::ChildGender,
        Field::VocabularyLevel,
        Field::ParentingStyle,
        Field::PersonalityTags,
        Field::BedtimeRoutine,
        Field::StoryLength,
        Field::FavoriteThemes,
        Field::Struggles,
        Field::AggressionFrequency,
        Field::TriggerSituations,
        Field::MoralAssessment,
        Field::ParentEmail,
        Field::MascotId,
        Field::MascotImageUrl,
    ];

    /// The JSON key this field is stored under.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Goals => "goals",
            Self::ChildName => "childName",
            Self::ChildAge => "childAge",
            Self::BirthMonth => "birthMonth",
            Self::BirthYear => "birthYear",
            Self::ChildGender => "childGender",
            Self::VocabularyLevel => "vocabularyLevel",
            Self::ParentingStyle => "parentingStyle",
            Self::PersonalityTags => "personalityTags",
            Self::BedtimeRoutine => "bedtimeRoutine",
            Self::StoryLength => "storyLength",
            Self::FavoriteThemes => "favoriteThemes",
            Self::Struggles => "struggles",
            Self::AggressionFrequency => "aggressionFrequency",
            Self::TriggerSituations => "triggerSituations",
            Self::MoralAssessment => "moralAssessment",
            Self::ParentEmail => "parentEmail",
            Self::MascotId => "mascotId",
            Self::MascotImageUrl => "mascotImageUrl",
        }
    }

    /// The natural shape of this field's answer.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Goals
            | Self::PersonalityTags
            | Self::FavoriteThemes
            | Self::Struggles
            | Self::TriggerSituations
            | Self::MoralAssessment => FieldKind::List,
            Self::StoryLength => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }

    /// Look up a field by its JSON key.
    pub fn from_key(key: &str) -> Option<Field> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }

    /// Parse user input into a value of this field's natural kind.
    ///
    /// List input is comma-separated; blank items are dropped. Input that
    /// would not count as an answer is rejected, so a parsed value can never
    /// erase one already recorded.
    pub fn parse_value(&self, input: &str) -> Result<FieldValue> {
        let blank = || StorynestError::InvalidValue {
            field: self.key().to_string(),
            message: "answer must not be blank".to_string(),
        };

        match self.kind() {
            FieldKind::Text if input.trim().is_empty() => Err(blank()),
            FieldKind::Text => Ok(FieldValue::Text(input.to_string())),
            FieldKind::List => {
                let items: Vec<String> = input
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                if items.is_empty() {
                    Err(blank())
                } else {
                    Ok(FieldValue::List(items))
                }
            }
            FieldKind::Number => input
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(FieldValue::Number)
                .ok_or_else(|| StorynestError::InvalidValue {
                    field: self.key().to_string(),
                    message: format!("'{}' is not a number", input),
                }),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = StorynestError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s).ok_or_else(|| StorynestError::UnknownField {
            name: s.to_string(),
        })
    }
}
