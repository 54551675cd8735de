//! Range compaction errors.

use thiserror::Error;

/// An entry handed to [`try_compact`](crate::try_compact) could not be read as an integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid input at position {index}: {value:?} is not an integer")]
pub struct InvalidInputError {
    /// Position of the offending entry in the input.
    pub index: usize,
    /// The entry as it was received.
    pub value: String,
}
