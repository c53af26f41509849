//! Core data models for notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A stored note.
///
/// Reads always hand out owned clones, never references into the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Store-assigned identifier, decimal string from a monotonic counter
    #[schema(example = "1")]
    pub id: String,
    /// Trimmed, never empty
    #[schema(example = "Welcome to Notes")]
    pub title: String,
    #[schema(example = "This is a sample note.")]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated data for a new note, handed to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

/// Validated partial update.
///
/// `None` leaves the stored value untouched; `Some` replaces it, including
/// `Some(String::new())` for content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    /// Merge the present fields into `note`. Does not touch timestamps.
    pub fn apply_to(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
    }
}

// =============================================================================
// REQUEST PAYLOADS
// =============================================================================

/// A JSON field that was present in a request body.
///
/// Request fields are decoded leniently so that a value of the wrong type
/// reaches validation (and gets a proper message) instead of failing the
/// whole body. How `null` decodes depends on the enclosing payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Other(serde_json::Value),
}

impl FieldValue {
    /// The text value, if this field holds a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Other(_) => None,
        }
    }

    /// Consume the field, keeping only a string value.
    pub fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Other(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// Decodes any JSON value, `null` included, as a present field. Used with
/// `#[serde(default)]` so that only an omitted key stays `None`.
fn present_field<'de, D>(deserializer: D) -> std::result::Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    FieldValue::deserialize(deserializer).map(Some)
}

/// Request body for creating a note. `null` fields count as omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, utoipa::ToSchema)]
pub struct CreateNoteRequest {
    /// Required, non-empty after trimming
    #[serde(default)]
    #[schema(value_type = String, example = "Buy milk")]
    pub title: Option<FieldValue>,
    /// Optional, defaults to an empty string
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2% if they have it")]
    pub content: Option<FieldValue>,
}

impl CreateNoteRequest {
    pub fn new(title: impl Into<FieldValue>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<FieldValue>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Request body for updating a note. At least one field must be present.
///
/// An explicit `null` is a present field holding `FieldValue::Other(Null)`,
/// so `{"title": null}` fails title validation and `{"content": null}`
/// passes the presence check.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, utoipa::ToSchema)]
pub struct UpdateNoteRequest {
    /// Non-empty after trimming when provided
    #[serde(default, deserialize_with = "present_field")]
    #[schema(value_type = Option<String>)]
    pub title: Option<FieldValue>,
    /// Replaces the content when provided; may be empty
    #[serde(default, deserialize_with = "present_field")]
    #[schema(value_type = Option<String>)]
    pub content: Option<FieldValue>,
}

impl UpdateNoteRequest {
    pub fn title(title: impl Into<FieldValue>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(content: impl Into<FieldValue>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }
}
