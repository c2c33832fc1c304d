//! In-memory note store.
//!
//! [`InMemoryNoteStore`] keeps every note in a `BTreeMap` keyed by id, next
//! to the id counter, both behind one `Mutex`. Ids only grow, so map order is
//! insertion order. Data lives as long as the store and is gone when the
//! process exits.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use chrono::Utc;
use tracing::debug;

use memo_types::{Note, NoteId};

use crate::traits::NoteStore;

static GLOBAL: OnceLock<Arc<InMemoryNoteStore>> = OnceLock::new();

/// An in-memory implementation of [`NoteStore`].
#[derive(Debug)]
pub struct InMemoryNoteStore {
    inner: Mutex<StoreState>,
}

#[derive(Debug)]
struct StoreState {
    notes: BTreeMap<NoteId, Note>,
    next_id: NoteId,
}

impl InMemoryNoteStore {
    /// Create a new, empty store whose first note gets id 1.
    ///
    /// Servers should use [`global`](Self::global) instead; a private store
    /// is for tests and embedding.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreState {
                notes: BTreeMap::new(),
                next_id: NoteId::FIRST,
            }),
        }
    }

    /// The process-wide store.
    ///
    /// Created on first call; every later call, from any thread, returns a
    /// handle to the same instance. Concurrent first calls race safely and
    /// only one store is ever built.
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| {
            debug!("initializing process-wide note store");
            Arc::new(Self::new())
        }))
    }

    // Every mutation is a single step under the lock, so a panic elsewhere
    // can never leave the state half-written.
    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore for InMemoryNoteStore {
    fn add(&self, content: String) -> Note {
        let mut state = self.state();
        let id = state.next_id;
        state.next_id = id.next();

        let note = Note::new(id, content, Utc::now());
        state.notes.insert(id, note.clone());
        debug!(%id, "note added");
        note
    }

    fn get(&self, id: NoteId) -> Option<Note> {
        self.state().notes.get(&id).cloned()
    }

    fn all(&self) -> Vec<Note> {
        self.state().notes.values().cloned().collect()
    }

    fn update(&self, id: NoteId, content: String) -> Option<Note> {
        let mut state = self.state();
        let note = state.notes.get_mut(&id)?;
        note.revise(content, Utc::now());
        debug!(%id, "note updated");
        Some(note.clone())
    }

    fn delete(&self, id: NoteId) -> bool {
        let removed = self.state().notes.remove(&id).is_some();
        if removed {
            debug!(%id, "note deleted");
        }
        removed
    }

    fn count(&self) -> usize {
        self.state().notes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;
    use std::time::Duration;

    use proptest::prelude::*;

    fn id(raw: u64) -> NoteId {
        NoteId::new(raw).unwrap()
    }

    #[test]
    fn add_assigns_sequential_ids_from_one() {
        let store = InMemoryNoteStore::new();
        let a = store.add("first".into());
        let b = store.add("second".into());
        assert_eq!(a.id, id(1));
        assert_eq!(b.id, id(2));
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn get_returns_stored_note() {
        let store = InMemoryNoteStore::new();
        let added = store.add("hello".into());
        assert_eq!(store.get(added.id), Some(added));
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryNoteStore::new();
        assert!(store.get(id(999)).is_none());
    }

    #[test]
    fn all_is_in_insertion_order() {
        let store = InMemoryNoteStore::new();
        store.add("a".into());
        store.add("b".into());
        store.add("c".into());
        store.delete(id(2));
        store.add("d".into());

        let contents: Vec<_> = store.all().into_iter().map(|n| n.content).collect();
        assert_eq!(contents, vec!["a", "c", "d"]);
    }

    #[test]
    fn all_is_a_snapshot() {
        let store = InMemoryNoteStore::new();
        store.add("before".into());
        let snapshot = store.all();

        store.update(id(1), "after".into());
        store.add("extra".into());

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].content, "before");
    }

    #[test]
    fn returned_note_is_detached_from_store() {
        let store = InMemoryNoteStore::new();
        let mut note = store.add("original".into());
        note.content = "tampered".into();
        assert_eq!(store.get(id(1)).unwrap().content, "original");
    }

    #[test]
    fn update_changes_content_and_updated_at() {
        let store = InMemoryNoteStore::new();
        let created = store.add("old".into());
        let updated = store.update(created.id, "new".into()).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.content, "new");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(store.get(created.id).unwrap().content, "new");
    }

    #[test]
    fn update_refreshes_updated_at() {
        let store = InMemoryNoteStore::new();
        let created = store.add("old".into());
        thread::sleep(Duration::from_millis(5));

        let updated = store.update(created.id, "new".into()).unwrap();
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(store.get(created.id).unwrap().updated_at, updated.updated_at);
    }

    #[test]
    fn update_missing_has_no_side_effect() {
        let store = InMemoryNoteStore::new();
        store.add("keep".into());
        assert!(store.update(id(42), "x".into()).is_none());
        assert_eq!(store.count(), 1);
        assert_eq!(store.all()[0].content, "keep");
    }

    #[test]
    fn delete_twice_returns_true_then_false() {
        let store = InMemoryNoteStore::new();
        let note = store.add("bye".into());
        assert!(store.delete(note.id));
        assert!(!store.delete(note.id));
        assert!(store.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = InMemoryNoteStore::new();
        let a = store.add("a".into());
        store.delete(a.id);
        let b = store.add("b".into());
        assert_eq!(b.id, id(2));
    }

    #[test]
    fn concurrent_adds_get_distinct_gap_free_ids() {
        let store = Arc::new(InMemoryNoteStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| store.add(format!("{t}-{i}")).id.get())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(ids.len(), 400);
        assert_eq!(ids, (1..=400).collect::<HashSet<u64>>());
        assert_eq!(store.count(), 400);
    }

    #[test]
    fn global_is_one_instance_across_threads() {
        let handles: Vec<_> = (0..16)
            .map(|_| thread::spawn(InMemoryNoteStore::global))
            .collect();
        let stores: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let first = InMemoryNoteStore::global();
        for store in &stores {
            assert!(Arc::ptr_eq(&first, store));
        }
    }

    #[derive(Clone, Debug)]
    enum Op {
        Add,
        Delete(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![Just(Op::Add), (1u64..32).prop_map(Op::Delete)]
    }

    proptest! {
        #[test]
        fn new_ids_exceed_every_previous_id(ops in proptest::collection::vec(op(), 1..64)) {
            let store = InMemoryNoteStore::new();
            let mut highest = 0u64;
            let mut live = 0usize;

            for op in ops {
                match op {
                    Op::Add => {
                        let note = store.add("x".into());
                        prop_assert!(note.id.get() > highest);
                        highest = note.id.get();
                        live += 1;
                    }
                    Op::Delete(raw) => {
                        if store.delete(id(raw)) {
                            live -= 1;
                        }
                    }
                }
                prop_assert_eq!(store.count(), live);
            }
        }
    }
}
