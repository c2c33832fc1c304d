use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use memo_store::{InMemoryNoteStore, NoteStore};
use memo_types::{Note, NoteId, MAX_NOTE_LENGTH};

use crate::error::{ServiceError, ServiceResult};
use crate::key::NoteKey;
use crate::validation::validate_content;

/// Message returned by a successful [`NoteService::delete_note`].
pub const DELETED_MESSAGE: &str = "Note deleted successfully";

/// Aggregate figures about the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_notes: usize,
    pub max_length: usize,
}

/// Validating front door to a [`NoteStore`].
///
/// Holds no state besides the store handle, so clones are cheap and share the
/// same notes.
#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// A service over the process-wide store.
    pub fn global() -> Self {
        Self::new(InMemoryNoteStore::global())
    }

    /// A service over a fresh private store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryNoteStore::new()))
    }

    pub fn create_note(&self, content: Option<&str>) -> ServiceResult<Note> {
        let content = validate_content(content).inspect_err(|e| {
            debug!(reason = %e, "rejected note creation");
        })?;

        let note = self.store.add(content.to_owned());
        info!(id = %note.id, "note created");
        Ok(note)
    }

    pub fn get_note(&self, id: impl NoteKey) -> ServiceResult<Note> {
        let id = lookup_key(&id)?;
        id.and_then(|id| self.store.get(id))
            .ok_or(ServiceError::NotFound)
    }

    pub fn get_all_notes(&self) -> Vec<Note> {
        self.store.all()
    }

    /// Replace a note's content.
    ///
    /// The id is checked before the content, so a request that gets both
    /// wrong reports the id.
    pub fn update_note(&self, id: impl NoteKey, content: Option<&str>) -> ServiceResult<Note> {
        let id = lookup_key(&id)?;
        let content = validate_content(content).inspect_err(|e| {
            debug!(reason = %e, "rejected note update");
        })?;

        id.and_then(|id| self.store.update(id, content.to_owned()))
            .ok_or(ServiceError::NotFound)
    }

    pub fn delete_note(&self, id: impl NoteKey) -> ServiceResult<&'static str> {
        let id = lookup_key(&id)?.ok_or(ServiceError::NotFound)?;
        if !self.store.delete(id) {
            return Err(ServiceError::NotFound);
        }
        info!(%id, "note deleted");
        Ok(DELETED_MESSAGE)
    }

    pub fn get_statistics(&self) -> Statistics {
        Statistics {
            total_notes: self.store.count(),
            max_length: MAX_NOTE_LENGTH,
        }
    }
}

impl std::fmt::Debug for NoteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteService")
            .field("notes", &self.store.count())
            .finish()
    }
}

fn lookup_key(key: &impl NoteKey) -> ServiceResult<Option<NoteId>> {
    key.resolve().inspect_err(|_| debug!("rejected malformed note id"))
}
