//! Error types for study-core.

use thiserror::Error;

use crate::types::Kind;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while decoding a single question block.
///
/// These never escape [`crate::parse`]: a block that fails to decode is
/// dropped from the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown question kind: {0}")]
    UnknownKind(String),

    #[error("invalid {axis} coordinate: {value}")]
    InvalidCoordinate { axis: char, value: String },
}

/// Errors that can occur while grading an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeError {
    #[error("answer of kind {found} does not fit a {expected} question")]
    KindMismatch { expected: Kind, found: Kind },
}

/// Errors from reading placeholder tokens and policies from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceholderError {
    #[error("not a question placeholder")]
    NotAPlaceholder,

    #[error("unknown dropped block policy: {0}")]
    UnknownPolicy(String),
}
