//! Errors raised while parsing verse notation
//!
//! Every variant carries the byte offset into the input where the problem was
//! detected. None of them is fatal: the caller decides whether to reject the
//! request or fall back to an unfiltered query.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// A `-` with no previous verse to anchor the range to.
    #[error("range at byte {position} has no preceding verse to start from")]
    MalformedRange { position: usize },

    /// A digit run was required but none was found.
    #[error("expected a number at byte {position}")]
    MalformedNumber { position: usize },

    /// A digit run does not fit in a chapter or verse number.
    #[error("number at byte {position} is too large")]
    NumberOverflow { position: usize },

    #[error("unexpected character {found:?} at byte {position}")]
    UnexpectedCharacter { found: char, position: usize },

    /// A `:` appeared before any chapter number.
    #[error("verse list at byte {position} has no chapter")]
    MissingChapter { position: usize },

    #[error("range at byte {position} spans {len} verses, more than the limit of {limit}")]
    RangeTooLong {
        position: usize,
        len: u64,
        limit: usize,
    },
}

impl NotationError {
    /// Byte offset of the offending input.
    pub fn position(&self) -> usize {
        match self {
            NotationError::MalformedRange { position }
            | NotationError::MalformedNumber { position }
            | NotationError::NumberOverflow { position }
            | NotationError::UnexpectedCharacter { position, .. }
            | NotationError::MissingChapter { position }
            | NotationError::RangeTooLong { position, .. } => *position,
        }
    }
}

impl From<NotationError> for String {
    fn from(err: NotationError) -> Self {
        err.to_string()
    }
}
