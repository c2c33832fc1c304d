use thiserror::Error;

/// Errors produced by type conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("note id must be positive")]
    NonPositiveId,

    #[error("note id is out of range")]
    IdOutOfRange,

    #[error("invalid note id: {0:?}")]
    InvalidId(String),
}

impl TypeError {
    /// Returns `true` if the input was an integer, just not a usable id.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::NonPositiveId | Self::IdOutOfRange)
    }
}
