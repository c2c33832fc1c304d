//! Validating facade over the memo note store.
//!
//! [`NoteService`] is what transports call. It checks ids and content before
//! anything reaches the store and reports every expected failure as a
//! [`ServiceError`], so callers never inspect store internals.

pub mod error;
pub mod key;
pub mod service;
pub mod validation;

pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use key::NoteKey;
pub use service::{NoteService, Statistics, DELETED_MESSAGE};
pub use validation::validate_content;

pub use memo_types::{Note, NoteId, MAX_NOTE_LENGTH};
