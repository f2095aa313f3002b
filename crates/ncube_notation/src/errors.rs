use std::num::ParseIntError;

use thiserror::Error;

/// Error produced when parsing a single move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Empty string
    #[error("empty move")]
    Empty,
    /// First character is not a face letter
    #[error("unknown face {0:?}")]
    BadFace(String),
    /// Text between the face and the depth is not `'` or `2`
    #[error("unknown turn suffix {0:?}")]
    BadSuffix(String),
    /// Text after the `.` is not a nonnegative integer
    #[error("bad depth: {0}")]
    BadDepth(#[from] ParseIntError),
}
