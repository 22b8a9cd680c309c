//! Parse errors.

use thiserror::Error;

/// Failure to parse a `BigUint` from hex text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseUintError {
    /// No digits were supplied.
    #[error("no hex digits")]
    Empty,
    /// A character that is neither a hex digit nor `_`.
    #[error("invalid hex digit {found:?} at byte {position}")]
    InvalidDigit {
        /// Byte offset of the offending character in the input.
        position: usize,
        /// The offending character.
        found: char,
    },
    /// The value needs more bits than the target width provides.
    #[error("value does not fit in {bits} bits")]
    Overflow {
        /// Width of the target type.
        bits: usize,
    },
}
