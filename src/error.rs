//! Errors reported while constructing a [`SuffixTree`][crate::SuffixTree].
//!
//! Only problems with the caller's input (or a caller-requested cancellation)
//! are reported here. A broken invariant inside the builder is a bug and
//! panics instead.

use thiserror::Error;

/// Ways an input sequence can be rejected before any building starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The sequence had no symbols.
    #[error("input sequence is empty")]
    Empty,

    /// The terminator symbol appears somewhere other than the very end of
    /// the sequence, so suffix boundaries would be ambiguous.
    #[error("terminator symbol occurs inside the input at position {position}")]
    TerminatorCollision {
        /// Index of the first offending symbol.
        position: usize,
    },
}

/// Errors that can occur while building a suffix tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The input was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// The cancellation flag was raised between two extension phases.
    #[error("construction cancelled after {processed} symbols")]
    Cancelled {
        /// How many symbols had been consumed when the flag was seen.
        processed: usize,
    },
}

/// Result type alias for suffix tree construction.
pub type Result<T> = std::result::Result<T, Error>;
