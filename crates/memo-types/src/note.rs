use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::NoteId;

/// A single note as held by the store.
///
/// Values handed out by the store are snapshots: changing a returned `Note`
/// does not change what the store holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identifier. Never changes.
    pub id: NoteId,
    /// Note text, always stored trimmed.
    pub content: String,
    /// When the note was created. Never changes.
    pub created_at: DateTime<Utc>,
    /// When the content was last written. Never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a note whose timestamps are both `at`.
    pub fn new(id: NoteId, content: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.into(),
            created_at: at,
            updated_at: at,
        }
    }

    /// Replace the content and move `updated_at` to `at`.
    ///
    /// `updated_at` is clamped so it never falls behind `created_at`, even if
    /// the wall clock stepped backwards since creation.
    pub fn revise(&mut self, content: impl Into<String>, at: DateTime<Utc>) {
        self.content = content.into();
        self.updated_at = at.max(self.created_at);
    }
}
