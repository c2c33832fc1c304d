//! Coercion of caller-supplied note identifiers.
//!
//! Transports hand the service whatever they pulled out of a request: a path
//! segment, a JSON number, an already-typed [`NoteId`]. [`NoteKey`] turns all
//! of those into a lookup key.

use memo_types::NoteId;

use crate::error::{ServiceError, ServiceResult};

/// A value that can be coerced into a note id.
pub trait NoteKey {
    /// Resolve this key.
    ///
    /// Fails with [`ServiceError::InvalidId`] when the value is not an
    /// integer at all. Returns `Ok(None)` for integers no note can carry
    /// (zero, negatives, values beyond `u64`); looking those up simply
    /// finds nothing.
    fn resolve(&self) -> ServiceResult<Option<NoteId>>;
}

impl NoteKey for NoteId {
    fn resolve(&self) -> ServiceResult<Option<NoteId>> {
        Ok(Some(*self))
    }
}

impl NoteKey for str {
    fn resolve(&self) -> ServiceResult<Option<NoteId>> {
        match self.parse::<NoteId>() {
            Ok(id) => Ok(Some(id)),
            Err(e) if e.is_integer() => Ok(None),
            Err(_) => Err(ServiceError::InvalidId),
        }
    }
}

impl NoteKey for String {
    fn resolve(&self) -> ServiceResult<Option<NoteId>> {
        self.as_str().resolve()
    }
}

impl<K: NoteKey + ?Sized> NoteKey for &K {
    fn resolve(&self) -> ServiceResult<Option<NoteId>> {
        (**self).resolve()
    }
}

macro_rules! impl_note_key_for_int {
    ($($t:ty),*) => {
        $(
            impl NoteKey for $t {
                fn resolve(&self) -> ServiceResult<Option<NoteId>> {
                    Ok(u64::try_from(*self).ok().and_then(NoteId::new))
                }
            }
        )*
    };
}

impl_note_key_for_int!(i32, i64, isize, u32, u64, usize);
