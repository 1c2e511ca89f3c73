//! Errors raised at the key-expansion boundary.

use thiserror::Error;

/// Caller contract violations detected before any round keys are derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The key byte count does not match the declared key-length class.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Byte length implied by the key class.
        expected: usize,
        /// Byte length supplied by the caller.
        actual: usize,
    },

    /// Nk is not one of 4, 6 or 8.
    #[error("invalid key class: Nk must be 4, 6 or 8, got {0}")]
    InvalidKeyClass(usize),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, KeyError>;
