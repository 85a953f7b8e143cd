//! The error type for reading trees from text.

use thiserror::Error;

/// Errors building a [`Tree`][crate::tree::Tree] from its level-order form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A slot's text couldn't be parsed into a value.
    #[error("invalid value {token:?} at position {position}: {reason}")]
    InvalidValue {
        /// Zero-based index of the slot.
        position: usize,
        /// The offending text.
        token: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Every present node already had both of its children when this slot was reached.
    #[error("value at position {position} has no parent")]
    DanglingValues {
        /// Zero-based index of the first slot without a parent.
        position: usize,
    },
}

/// Convenience alias for results carrying a [`ParseError`].
pub type ParseResult<T> = Result<T, ParseError>;
