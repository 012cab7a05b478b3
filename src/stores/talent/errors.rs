//! Talent directory load errors
//!
//! Raised only while the bundled directory is loaded and validated.
//! Lookups themselves never fail; a miss is a normal outcome.

use std::fmt;

#[derive(Debug)]
pub enum DirectoryError {
    /// The directory document is not valid JSON or has the wrong shape
    Parse(serde_json::Error),
    /// A record carries id 0
    InvalidId { index: usize },
    /// Two records share the same id
    DuplicateId(u32),
    /// A record has an empty or whitespace-only name
    MissingName(u32),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Parse(e) => write!(f, "Invalid talent directory: {}", e),
            DirectoryError::InvalidId { index } => {
                write!(f, "Talent at position {} has a non-positive id", index)
            }
            DirectoryError::DuplicateId(id) => write!(f, "Duplicate talent id {}", id),
            DirectoryError::MissingName(id) => write!(f, "Talent {} has no name", id),
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::Parse(err)
    }
}
