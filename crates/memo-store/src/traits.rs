//! The [`NoteStore`] trait defining the note storage interface.

use memo_types::{Note, NoteId};

/// Storage backend for notes.
///
/// Implementations must be thread-safe (`Send + Sync`). Every operation that
/// touches the note map or the id counter is atomic with respect to every
/// other operation on the same store.
///
/// Content passed to [`add`](NoteStore::add) and
/// [`update`](NoteStore::update) is stored verbatim; validation and trimming
/// are the caller's job.
pub trait NoteStore: Send + Sync {
    /// Store a new note under the next id and return it.
    ///
    /// Both timestamps are set to the current time. Never fails.
    fn add(&self, content: String) -> Note;

    /// Look up a note by id.
    fn get(&self, id: NoteId) -> Option<Note>;

    /// All notes in insertion order, as an owned snapshot.
    fn all(&self) -> Vec<Note>;

    /// Replace a note's content and refresh its `updated_at`.
    ///
    /// Returns `None`, changing nothing, if the id is not present.
    fn update(&self, id: NoteId, content: String) -> Option<Note>;

    /// Remove a note. Returns `true` if it existed.
    fn delete(&self, id: NoteId) -> bool;

    /// Number of notes currently stored.
    fn count(&self) -> usize;

    /// Returns `true` if the store holds no notes.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
