//! Teacher profile aggregate.
//!
//! A [`Teacher`] is a configurable AI-tutor profile: identity, nested
//! personality, specialization, and adaptation settings, plus derived session
//! and rating counters. The wire shape is snake_case JSON mirroring the field
//! names below.
//!
//! Updates are a shallow merge: a nested object supplied in a
//! [`TeacherUpdate`] replaces the stored value wholesale rather than being
//! deep-merged. This is deliberate legacy behaviour and is locked by tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned when parsing a [`TeacherId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeacherIdError {
    /// The identifier was empty or whitespace.
    #[error("teacher id must not be empty")]
    Empty,
    /// The identifier was not a valid UUID.
    #[error("teacher id must be a valid UUID")]
    Invalid,
}

/// Opaque teacher identifier, generated at creation and never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, format = "uuid")]
pub struct TeacherId(Uuid);

impl TeacherId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form.
    pub fn parse(value: &str) -> Result<Self, TeacherIdError> {
        if value.trim().is_empty() {
            return Err(TeacherIdError::Empty);
        }
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| TeacherIdError::Invalid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for TeacherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TeacherId {
    type Err = TeacherIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TeacherId {
    type Error = TeacherIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TeacherId> for String {
    fn from(value: TeacherId) -> Self {
        value.to_string()
    }
}

fn default_teaching_style() -> String {
    "explanatory".to_owned()
}

fn default_casual() -> String {
    "casual".to_owned()
}

fn default_moderate() -> String {
    "moderate".to_owned()
}

fn default_high() -> String {
    "high".to_owned()
}

fn default_true() -> bool {
    true
}

fn default_beginner() -> String {
    "beginner".to_owned()
}

fn default_expert() -> String {
    "expert".to_owned()
}

/// Personality traits and tone settings for a teacher.
///
/// Every field carries a default so a partial payload deserialises into a
/// fully populated value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Personality {
    /// Dominant personality traits, e.g. `["analytical", "patient"]`.
    #[serde(default)]
    pub primary_traits: Vec<String>,
    /// Teaching style identifier, e.g. `socratic` or `explanatory`.
    #[serde(default = "default_teaching_style")]
    pub teaching_style: String,
    /// How formal the teacher's register is.
    #[serde(default = "default_casual")]
    pub formality_level: String,
    /// How often the teacher poses questions back to the learner.
    #[serde(default = "default_moderate")]
    pub question_frequency: String,
    /// How much encouragement the teacher offers.
    #[serde(default = "default_high")]
    pub encouragement_level: String,
    /// Preferred response length.
    #[serde(default = "default_moderate")]
    pub response_length: String,
    /// Whether the teacher illustrates with worked examples.
    #[serde(default = "default_true")]
    pub use_examples: bool,
    /// Whether the teacher reaches for analogies.
    #[serde(default = "default_true")]
    pub use_analogies: bool,
    /// Patience with repeated questions.
    #[serde(default = "default_high")]
    pub patience_level: String,
    /// How often humour appears in responses.
    #[serde(default = "default_moderate")]
    pub humor_usage: String,
    /// Catchphrases woven into responses.
    #[serde(default)]
    pub signature_phrases: Vec<String>,
    /// Empathy with learner frustration.
    #[serde(default = "default_high")]
    pub empathy_level: String,
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            primary_traits: Vec::new(),
            teaching_style: default_teaching_style(),
            formality_level: default_casual(),
            question_frequency: default_moderate(),
            encouragement_level: default_high(),
            response_length: default_moderate(),
            use_examples: true,
            use_analogies: true,
            patience_level: default_high(),
            humor_usage: default_moderate(),
            signature_phrases: Vec::new(),
            empathy_level: default_high(),
        }
    }
}

/// Domain and capability description of a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Specialization {
    /// Primary subject domain, e.g. `Mathematics`. Required.
    pub primary_domain: String,
    /// Narrower specializations within the domain.
    #[serde(default)]
    pub specializations: Vec<String>,
    /// Lowest difficulty level the teacher covers.
    #[serde(default = "default_beginner")]
    pub min_difficulty: String,
    /// Highest difficulty level the teacher covers.
    #[serde(default = "default_expert")]
    pub max_difficulty: String,
    /// Whether the teacher can produce exercises.
    #[serde(default)]
    pub can_create_exercises: bool,
    /// Whether the teacher can grade submitted work.
    #[serde(default)]
    pub can_grade_work: bool,
    /// Whether the teacher can assemble a curriculum.
    #[serde(default)]
    pub can_create_curriculum: bool,
    /// External references the teacher may point learners at.
    #[serde(default)]
    pub external_resources: Vec<String>,
}

/// Personalisation behaviour flags.
///
/// Stored configuration only; no behaviour hangs off these flags here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct Adaptation {
    /// Adjusts explanations to the learner's style.
    #[serde(default)]
    pub adapts_to_learning_style: bool,
    /// Adjusts pace to the learner.
    #[serde(default)]
    pub pace_adjustment: bool,
    /// Scales difficulty up or down over time.
    #[serde(default)]
    pub difficulty_scaling: bool,
    /// Remembers conversational context between sessions.
    #[serde(default)]
    pub remembers_context: bool,
    /// Tracks learner progress.
    #[serde(default)]
    pub tracks_progress: bool,
}

/// A stored teacher profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Teacher {
    /// Opaque identifier, unique and immutable.
    pub id: TeacherId,
    /// Display name.
    pub name: String,
    /// Role or title, e.g. `Professor`.
    pub title: String,
    /// Optional avatar image URL.
    pub avatar_url: Option<String>,
    /// Personality configuration.
    pub personality: Personality,
    /// Domain and capability configuration.
    pub specialization: Specialization,
    /// Personalisation flags.
    pub adaptation: Adaptation,
    /// Custom system prompt template; when absent a default is synthesized.
    pub system_prompt_template: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last mutation.
    pub updated_at: DateTime<Utc>,
    /// Optional creator reference.
    pub created_by: Option<String>,
    /// Whether the profile is active.
    pub is_active: bool,
    /// Number of tutoring sessions held; monotonically non-decreasing.
    pub total_sessions: u64,
    /// Mean of all ratings, `None` while no ratings exist.
    pub average_rating: Option<f64>,
}

/// Payload for creating a teacher.
///
/// Mirrors [`Teacher`] minus the server-assigned fields (id, timestamps,
/// counters). `personality` and `adaptation` may be omitted entirely;
/// `specialization` is required because `primary_domain` has no default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeacherDraft {
    /// Display name.
    pub name: String,
    /// Role or title.
    pub title: String,
    /// Optional avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Personality configuration; defaults applied per field.
    #[serde(default)]
    pub personality: Personality,
    /// Domain and capability configuration.
    pub specialization: Specialization,
    /// Personalisation flags; all default to off.
    #[serde(default)]
    pub adaptation: Adaptation,
    /// Custom system prompt template.
    #[serde(default)]
    pub system_prompt_template: Option<String>,
    /// Optional creator reference.
    #[serde(default)]
    pub created_by: Option<String>,
    /// Whether the profile starts active.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Partial update for a teacher.
///
/// Absent fields leave the stored value untouched. Present nested objects
/// replace the stored object wholesale; omitted sub-fields inside them fall
/// back to their defaults, not to the previously stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeacherUpdate {
    /// Replacement display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Replacement personality (whole object).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<Personality>,
    /// Replacement specialization (whole object).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<Specialization>,
    /// Replacement adaptation flags (whole object).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptation: Option<Adaptation>,
    /// Replacement system prompt template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt_template: Option<String>,
    /// Replacement creator reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Replacement active flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Teacher {
    /// Build a teacher from a draft with server-assigned fields populated.
    #[must_use]
    pub fn from_draft(id: TeacherId, draft: TeacherDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            title: draft.title,
            avatar_url: draft.avatar_url,
            personality: draft.personality,
            specialization: draft.specialization,
            adaptation: draft.adaptation,
            system_prompt_template: draft.system_prompt_template,
            created_at: now,
            updated_at: now,
            created_by: draft.created_by,
            is_active: draft.is_active,
            total_sessions: 0,
            average_rating: None,
        }
    }

    /// Shallow-merge an update into this record and refresh `updated_at`.
    pub fn apply(&mut self, update: TeacherUpdate, now: DateTime<Utc>) {
        let TeacherUpdate {
            name,
            title,
            avatar_url,
            personality,
            specialization,
            adaptation,
            system_prompt_template,
            created_by,
            is_active,
        } = update;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(avatar_url) = avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(personality) = personality {
            self.personality = personality;
        }
        if let Some(specialization) = specialization {
            self.specialization = specialization;
        }
        if let Some(adaptation) = adaptation {
            self.adaptation = adaptation;
        }
        if let Some(template) = system_prompt_template {
            self.system_prompt_template = Some(template);
        }
        if let Some(created_by) = created_by {
            self.created_by = Some(created_by);
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
        self.updated_at = now;
    }

    /// Record one more tutoring session and refresh `updated_at`.
    pub fn bump_sessions(&mut self, now: DateTime<Utc>) {
        self.total_sessions += 1;
        self.updated_at = now;
    }

    /// Store a freshly computed rating mean and refresh `updated_at`.
    pub fn set_average_rating(&mut self, average: Option<f64>, now: DateTime<Utc>) {
        self.average_rating = average;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(domain: &str) -> TeacherDraft {
        serde_json::from_value(json!({
            "name": "Dr. Test",
            "title": "Professor",
            "specialization": { "primary_domain": domain }
        }))
        .expect("valid draft")
    }

    #[test]
    fn draft_fills_nested_defaults() {
        let parsed = draft("Mathematics");
        assert_eq!(parsed.personality.teaching_style, "explanatory");
        assert_eq!(parsed.personality.formality_level, "casual");
        assert!(parsed.personality.use_examples);
        assert_eq!(parsed.specialization.min_difficulty, "beginner");
        assert_eq!(parsed.specialization.max_difficulty, "expert");
        assert!(!parsed.specialization.can_grade_work);
        assert!(!parsed.adaptation.tracks_progress);
        assert!(parsed.is_active);
    }

    #[test]
    fn draft_requires_primary_domain() {
        let result: Result<TeacherDraft, _> = serde_json::from_value(json!({
            "name": "Dr. Test",
            "title": "Professor",
            "specialization": {}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn from_draft_zeroes_counters() {
        let now = Utc::now();
        let teacher = Teacher::from_draft(TeacherId::random(), draft("Physics"), now);
        assert_eq!(teacher.total_sessions, 0);
        assert_eq!(teacher.average_rating, None);
        assert_eq!(teacher.created_at, now);
        assert_eq!(teacher.updated_at, now);
    }

    #[test]
    fn apply_merges_shallowly_and_replaces_nested_objects() {
        let created = Utc::now();
        let mut teacher = Teacher::from_draft(TeacherId::random(), draft("Chemistry"), created);
        teacher.personality.teaching_style = "socratic".to_owned();
        teacher.personality.signature_phrases = vec!["Onward!".to_owned()];

        let update: TeacherUpdate = serde_json::from_value(json!({
            "personality": { "humor_usage": "frequent" }
        }))
        .expect("valid update");
        let later = created + chrono::Duration::seconds(5);
        teacher.apply(update, later);

        // The partial object replaced the whole personality: unspecified
        // sub-fields reverted to defaults.
        assert_eq!(teacher.personality.humor_usage, "frequent");
        assert_eq!(teacher.personality.teaching_style, "explanatory");
        assert!(teacher.personality.signature_phrases.is_empty());
        assert_eq!(teacher.updated_at, later);
        assert_eq!(teacher.name, "Dr. Test");
    }

    #[test]
    fn apply_leaves_absent_fields_untouched() {
        let now = Utc::now();
        let mut teacher = Teacher::from_draft(TeacherId::random(), draft("Biology"), now);
        teacher.apply(
            TeacherUpdate {
                title: Some("Lecturer".to_owned()),
                ..TeacherUpdate::default()
            },
            now,
        );
        assert_eq!(teacher.title, "Lecturer");
        assert_eq!(teacher.name, "Dr. Test");
        assert_eq!(teacher.specialization.primary_domain, "Biology");
    }

    #[test]
    fn explicit_null_in_update_leaves_the_field_untouched() {
        let now = Utc::now();
        let mut teacher = Teacher::from_draft(TeacherId::random(), draft("Physics"), now);
        teacher.avatar_url = Some("https://example.com/a.png".to_owned());

        let update: TeacherUpdate = serde_json::from_value(json!({ "avatar_url": null }))
            .expect("valid update");
        teacher.apply(update, now);

        // `null` is indistinguishable from an absent field; nullable fields
        // cannot be cleared through a partial update.
        assert_eq!(teacher.avatar_url.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn bump_sessions_increments_and_touches_timestamp() {
        let created = Utc::now();
        let mut teacher = Teacher::from_draft(TeacherId::random(), draft("History"), created);
        let later = created + chrono::Duration::seconds(1);
        teacher.bump_sessions(later);
        assert_eq!(teacher.total_sessions, 1);
        assert_eq!(teacher.updated_at, later);
    }

    #[test]
    fn teacher_id_rejects_garbage() {
        assert_eq!(TeacherId::parse(""), Err(TeacherIdError::Empty));
        assert_eq!(TeacherId::parse("not-a-uuid"), Err(TeacherIdError::Invalid));
    }

    #[test]
    fn teacher_id_round_trips_through_string() {
        let id = TeacherId::random();
        let parsed = TeacherId::parse(&id.to_string()).expect("round trip");
        assert_eq!(parsed, id);
    }
}
