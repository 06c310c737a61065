use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::value::ValueError;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("result column {column:?} appears more than once")]
    AmbiguousColumn { column: String },

    // Only reachable through case-insensitive matching; exact duplicates
    // are rejected when the shape is built.
    #[error("more than one field binds result column {column:?}")]
    DuplicateBinding { column: String },

    #[error("field {field:?} is bound to column {column:?}, which is missing from the result set")]
    MissingColumn {
        field: &'static str,
        column: &'static str,
    },

    #[error("result column {column:?} is not bound by any field")]
    UnclaimedColumn { column: String },

    #[error("row {row}, column {column:?}: {source}")]
    Bind {
        row: usize,
        column: String,
        source: ValueError,
    },

    #[error("cursor failure: {0}")]
    Cursor(#[from] CursorError),
}

/// Failure reported by a [`Cursor`](crate::cursor::Cursor) implementation.
///
/// Cursors wrap whatever error their backend produces; the original error
/// stays reachable through [`std::error::Error::source`].
#[derive(Debug)]
pub struct CursorError {
    message: String,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl CursorError {
    pub fn new(message: impl Into<String>) -> Self {
        CursorError {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        CursorError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {}", self.message, source),
            None => write!(f, "{}", self.message),
        }
    }
}

impl StdError for CursorError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
