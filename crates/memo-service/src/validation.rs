//! Content checks applied before a note is written.

use memo_types::MAX_NOTE_LENGTH;

use crate::error::{ServiceError, ServiceResult};

/// Whitespace as note content sees it: Unicode white space plus the ASCII
/// information separators U+001C..=U+001F.
fn is_note_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Validate note content and return its trimmed form.
///
/// Absent, empty, and whitespace-only content is rejected first. The length
/// limit is then checked against the content as given, before trimming, so
/// 301 characters fail even when trimming would bring them under the limit.
/// Length is counted in characters, not bytes.
pub fn validate_content(content: Option<&str>) -> ServiceResult<&str> {
    let content = content.ok_or(ServiceError::EmptyContent)?;
    let trimmed = content.trim_matches(is_note_whitespace);
    if trimmed.is_empty() {
        return Err(ServiceError::EmptyContent);
    }

    if content.chars().count() > MAX_NOTE_LENGTH {
        return Err(ServiceError::ContentTooLong {
            max: MAX_NOTE_LENGTH,
        });
    }

    Ok(trimmed)
}
