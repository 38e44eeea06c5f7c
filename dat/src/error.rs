//! Errors raised by the double-array trie's fallible operations.

use thiserror::Error;

/// The signed-index space the heap can address before placement must fail.
///
/// Mirrors the overflow boundary a 32-bit signed cell index imposes: once a
/// prospective base would push `base + label` past this bound the trie
/// refuses to grow rather than silently wrapping.
pub const MAX_KEYS: i64 = i32::MAX as i64 / 4;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// A value proxy was assigned a negative value. Stored values are
    /// non-negative; the sign bit distinguishes a terminal cell's stored
    /// value from an ordinary transition base.
    #[error("trie values must be non-negative, got {0}")]
    NegativeValue(i64),

    /// Placing a new sibling set would push a cell index beyond what a
    /// signed 32-bit index can address.
    #[error("trie capacity exhausted (at most {MAX_KEYS} keys)")]
    Overflow,

    /// `at()` (the panicking/`Result`-strict lookup) found no entry for the
    /// given key.
    #[error("key not found in trie")]
    KeyNotFound,

    /// Decoding a serialized trie found fewer cells than the header
    /// promised.
    #[error("truncated trie encoding: expected {expected} cells, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, TrieError>;
