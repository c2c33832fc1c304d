use thiserror::Error;

/// Broad class of a [`ServiceError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller's input was rejected before touching the store.
    Validation,
    /// The targeted note does not exist.
    NotFound,
}

/// Expected failures of note operations.
///
/// The `Display` text of each variant is the user-facing message.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Note content cannot be empty")]
    EmptyContent,

    #[error("Note content cannot exceed {max} characters")]
    ContentTooLong { max: usize },

    #[error("Invalid note ID")]
    InvalidId,

    #[error("Note not found")]
    NotFound,
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound => ErrorKind::NotFound,
            Self::EmptyContent | Self::ContentTooLong { .. } | Self::InvalidId => {
                ErrorKind::Validation
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(ServiceError::EmptyContent.to_string(), "Note content cannot be empty");
        assert_eq!(
            ServiceError::ContentTooLong { max: 300 }.to_string(),
            "Note content cannot exceed 300 characters"
        );
        assert_eq!(ServiceError::InvalidId.to_string(), "Invalid note ID");
        assert_eq!(ServiceError::NotFound.to_string(), "Note not found");
    }

    #[test]
    fn kinds() {
        assert!(ServiceError::NotFound.is_not_found());
        assert_eq!(ServiceError::InvalidId.kind(), ErrorKind::Validation);
        assert_eq!(ServiceError::EmptyContent.kind(), ErrorKind::Validation);
    }
}
