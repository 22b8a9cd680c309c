//! AES-128/192/256 built directly on GF(2^8) arithmetic.
//!
//! This crate follows FIPS-197 and provides:
//! - GF(2^8) multiplication and a four-lane doubling operator.
//! - Key schedule for all three key sizes.
//! - Single-block encryption and decryption (no modes, IVs or padding).
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
pub mod sbox;

pub use crate::block::{block_from_hex, block_from_slice, Block, State};
pub use crate::cipher::{
    decrypt_block, decrypt_state, encrypt_block, encrypt_state, expand_key, Aes,
};
pub use crate::error::{BlockError, KeyError};
pub use crate::key::{AesKey, KeySize, RoundKeySchedule, MAX_ROUNDS};
