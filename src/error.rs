//! Error types for idxsort.
//!
//! The sorting engine never produces an error of its own. Errors come from the
//! caller's primitives and travel back through the engine unchanged. The
//! variants below are the ones produced by the adapters and configuration
//! that ship with this crate.

use std::fmt;

/// Errors raised by the bundled adapters and by configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A primitive was asked for a position outside the collection.
    IndexOutOfBounds {
        /// The offending position.
        index: usize,
        /// Length of the collection.
        len: usize,
    },

    /// A companion column does not have as many elements as the key column.
    LengthMismatch { expected: usize, got: usize },

    /// A threshold is below the smallest value the algorithms terminate with.
    InvalidThreshold {
        name: &'static str,
        value: usize,
        min: usize,
    },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::IndexOutOfBounds { index, len } => {
                write!(f, "index out of bounds: the len is {} but the index is {}", len, index)
            }
            SortError::LengthMismatch { expected, got } => {
                write!(f, "column length mismatch: expected {}, got {}", expected, got)
            }
            SortError::InvalidThreshold { name, value, min } => {
                write!(f, "invalid {}: {} (must be at least {})", name, value, min)
            }
        }
    }
}

impl std::error::Error for SortError {}
