//! # Notes
//!
//! A note is a piece of trimmed, non-empty text with a server-assigned id and
//! creation time. `updated_at` appears after the first edit.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::NoteError;
use crate::identity::NoteId;
use crate::temporal::Timestamp;

/// A stored note, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub updated_at: Option<Timestamp>,
}

impl Note {
    pub fn new(id: NoteId, content: String, created_at: Timestamp) -> Self {
        Self {
            id,
            content,
            created_at,
            updated_at: None,
        }
    }
}

/// Characters stripped from both ends of note content.
///
/// Unicode white space plus the byte-order mark U+FEFF, minus NEL (U+0085).
/// This is the set browser clients strip with `String.prototype.trim`.
pub fn is_trimmable(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Strip [`is_trimmable`] characters from both ends of `s`.
pub fn trim_content(s: &str) -> &str {
    s.trim_matches(is_trimmable)
}

/// Trim `raw` and reject it if nothing is left.
///
/// An absent field and a whitespace-only field are the same error.
pub fn validate_content(raw: Option<&str>) -> Result<String, NoteError> {
    match raw.map(trim_content) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(NoteError::EmptyContent),
    }
}
