use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Store-assigned identifier of a [`Note`](crate::Note).
///
/// Identifiers start at 1 and are handed out in strictly increasing order by
/// the store. A deleted note's identifier is never issued again. Zero is not
/// a valid identifier, so every `NoteId` value refers to a note that exists
/// or once existed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct NoteId(u64);

impl NoteId {
    /// The first identifier a fresh store assigns.
    pub const FIRST: Self = Self(1);

    /// Create an id from a raw value. Returns `None` for zero.
    pub const fn new(raw: u64) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The raw integer value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier that follows this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<NoteId> for u64 {
    fn from(id: NoteId) -> Self {
        id.0
    }
}

impl TryFrom<u64> for NoteId {
    type Error = TypeError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or(TypeError::NonPositiveId)
    }
}

impl FromStr for NoteId {
    type Err = TypeError;

    /// Parse a decimal integer, tolerating surrounding whitespace and a
    /// leading sign.
    ///
    /// Anything that is not an integer is [`TypeError::InvalidId`]; integers
    /// that cannot be ids fail with [`TypeError::NonPositiveId`] or
    /// [`TypeError::IdOutOfRange`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::InvalidId(s.to_string()));
        }
        if negative {
            return Err(TypeError::NonPositiveId);
        }
        let raw: u64 = digits.parse().map_err(|_| TypeError::IdOutOfRange)?;
        Self::try_from(raw)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
