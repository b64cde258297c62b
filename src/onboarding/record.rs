//! The partial onboarding answer set.

use serde::{Deserialize, Serialize};

use super::Field;

/// A stored answer.
///
/// The variant reflects the JSON shape that was actually stored, which may
/// differ from the field's natural [`FieldKind`](super::FieldKind) when data
/// was written by another app version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Number(f64),
    Flag(bool),
    Other(serde_json::Value),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(String::from).collect())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Everything collected so far about a parent/child pair.
///
/// Serialized as a flat camelCase JSON object. Missing keys load as absent
/// and unknown keys are ignored, so records written by older or newer app
/// versions still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_name: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_age: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_month: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_gender: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary_level: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parenting_style: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality_tags: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedtime_routine: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_length: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_themes: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub struggles: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggression_frequency: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_situations: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moral_assessment: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_email: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mascot_id: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mascot_image_url: Option<FieldValue>,
}

impl OnboardingRecord {
    /// Create an empty record (nothing answered yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Get the stored value for a field.
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.slot(field).as_ref()
    }

    /// Store a value, replacing any previous answer.
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Whether no field has been stored.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// Stored fields with their values, in record order.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &FieldValue)> + '_ {
        Field::ALL
            .iter()
            .filter_map(move |f| self.get(*f).map(|v| (*f, v)))
    }

    fn slot(&self, field: Field) -> &Option<FieldValue> {
        match field {
            Field::Goals => &self.goals,
            Field::ChildName => &self.child_name,
            Field::ChildAge => &self.child_age,
            Field::BirthMonth => &self.birth_month,
            Field::BirthYear => &self.birth_year,
            Field::ChildGender => &self.child_gender,
            Field::VocabularyLevel => &self.vocabulary_level,
            Field::ParentingStyle => &self.parenting_style,
            Field::PersonalityTags => &self.personality_tags,
            Field::BedtimeRoutine => &self.bedtime_routine,
            Field::StoryLength => &self.story_length,
            Field::FavoriteThemes => &self.favorite_themes,
            Field::Struggles => &self.struggles,
            Field::AggressionFrequency => &self.aggression_frequency,
            Field::TriggerSituations => &self.trigger_situations,
            Field::MoralAssessment => &self.moral_assessment,
            Field::ParentEmail => &self.parent_email,
            Field::MascotId => &self.mascot_id,
            Field::MascotImageUrl => &self.mascot_image_url,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<FieldValue> {
        match field {
            Field::Goals => &mut self.goals,
            Field::ChildName => &mut self.child_name,
            Field::ChildAge => &mut self.child_age,
            Field::BirthMonth => &mut self.birth_month,
            Field::BirthYear => &mut self.birth_year,
            Field::ChildGender => &mut self.child_gender,
            Field::VocabularyLevel => &mut self.vocabulary_level,
            Field::ParentingStyle => &mut self.parenting_style,
            Field::PersonalityTags => &mut self.personality_tags,
            Field::BedtimeRoutine => &mut self.bedtime_routine,
            Field::StoryLength => &mut self.story_length,
            Field::FavoriteThemes => &mut self.favorite_themes,
            Field::Struggles => &mut self.struggles,
            Field::AggressionFrequency => &mut self.aggression_frequency,
            Field::TriggerSituations => &mut self.trigger_situations,
            Field::MoralAssessment => &mut self.moral_assessment,
            Field::ParentEmail => &mut self.parent_email,
            Field::MascotId => &mut self.mascot_id,
            Field::MascotImageUrl => &mut self.mascot_image_url,
        }
    }
}
