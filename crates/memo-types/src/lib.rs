//! Foundation types for memo.
//!
//! This crate holds the record and identifier types shared by the store, the
//! service facade, and the HTTP transport. Every other memo crate depends on
//! `memo-types`.
//!
//! # Key Types
//!
//! - [`Note`] — A stored note: id, trimmed content, and timestamps
//! - [`NoteId`] — Positive, store-assigned note identifier
//! - [`MAX_NOTE_LENGTH`] — Upper bound on note content length, in characters

pub mod error;
pub mod id;
pub mod note;

pub use error::TypeError;
pub use id::NoteId;
pub use note::Note;

/// Maximum number of characters a note may contain.
pub const MAX_NOTE_LENGTH: usize = 300;
