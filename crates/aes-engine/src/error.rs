//! Errors for the runtime-shaped entry points (slices and hex strings).

use thiserror::Error;

/// Failure to build an [`AesKey`](crate::AesKey) from untyped input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KeyError {
    /// The key is not 16, 24 or 32 bytes long.
    #[error("AES key must be 16, 24 or 32 bytes, got {got}")]
    InvalidLength {
        /// Length that was supplied.
        got: usize,
    },
    /// The hex text could not be decoded.
    #[error("invalid key hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Failure to build a [`Block`](crate::Block) from untyped input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BlockError {
    /// The block is not exactly 16 bytes long.
    #[error("AES block must be 16 bytes, got {got}")]
    InvalidLength {
        /// Length that was supplied.
        got: usize,
    },
    /// The hex text could not be decoded.
    #[error("invalid block hex: {0}")]
    Hex(#[from] hex::FromHexError),
}
