//! Fixed-bit-width unsigned integers.
//!
//! [`BigUint<BITS, LIMBS>`](BigUint) stores exactly `BITS` bits in `LIMBS`
//! 64-bit words and supports:
//! - Addition, subtraction and multiplication, all wrapping modulo `2^BITS`.
//! - Bitwise AND, OR and XOR.
//! - Ordered comparison.
//!
//! Operands may have different widths. Operators promote to the wider width;
//! the `from_*_of` constructors compute directly into any chosen width.
//! Division is not provided.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod fmt;
mod ops;
#[cfg(feature = "serde")]
mod serde_impl;
mod uint;
mod word;

pub use crate::error::ParseUintError;
pub use crate::ops::{FixedWidth, Promoted, Widest};
pub use crate::uint::BigUint;
pub use crate::word::{limbs_for, BitOp, Word, WORD_BITS};

/// 8-bit unsigned integer.
pub type U8 = BigUint<8, 1>;
/// 16-bit unsigned integer.
pub type U16 = BigUint<16, 1>;
/// 32-bit unsigned integer.
pub type U32 = BigUint<32, 1>;
/// 64-bit unsigned integer.
pub type U64 = BigUint<64, 1>;
/// 128-bit unsigned integer.
pub type U128 = BigUint<128, 2>;
/// 192-bit unsigned integer.
pub type U192 = BigUint<192, 3>;
/// 256-bit unsigned integer.
pub type U256 = BigUint<256, 4>;
/// 384-bit unsigned integer.
pub type U384 = BigUint<384, 6>;
/// 512-bit unsigned integer.
pub type U512 = BigUint<512, 8>;
/// 1024-bit unsigned integer.
pub type U1024 = BigUint<1024, 16>;
/// 2048-bit unsigned integer.
pub type U2048 = BigUint<2048, 32>;
/// 4096-bit unsigned integer.
pub type U4096 = BigUint<4096, 64>;
