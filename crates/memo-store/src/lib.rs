//! Note storage for memo.
//!
//! The store is the single owner of every [`Note`](memo_types::Note) and the
//! only place note identifiers are assigned. It performs no validation:
//! callers (the service layer) hand it content that is already trimmed and
//! within limits.
//!
//! # Modules
//!
//! - [`traits`] — The [`NoteStore`] trait defining the storage interface
//! - [`memory`] — [`InMemoryNoteStore`], the process-wide store

pub mod memory;
pub mod traits;

pub use memory::InMemoryNoteStore;
pub use traits::NoteStore;
