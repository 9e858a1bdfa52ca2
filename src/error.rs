//! Errors returned by `IndexedList` operations.

use std::fmt;

use thiserror::Error;

/// Result type alias for list operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// The operation that rejected an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Get,
    Set,
    Insert,
    Remove,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Get => "get",
            Op::Set => "set",
            Op::Insert => "insert",
            Op::Remove => "remove",
        };
        f.write_str(name)
    }
}

/// Error returned when an index falls outside the valid range.
///
/// `get`, `set` and `remove` accept `index < len`; `insert` accepts
/// `index <= len`. Nothing is mutated when this error is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("{op} error: index {index} out of range for list of length {len}")]
    IndexOutOfRange { op: Op, index: usize, len: usize },
}

impl IndexError {
    /// The index that was rejected.
    pub fn index(&self) -> usize {
        match self {
            IndexError::IndexOutOfRange { index, .. } => *index,
        }
    }

    /// The operation that rejected it.
    pub fn op(&self) -> Op {
        match self {
            IndexError::IndexOutOfRange { op, .. } => *op,
        }
    }
}
