//! Shows width promotion and wraparound across `BigUint` widths.

use anyhow::{ensure, Context, Result};
use wide_uint::{uint, U128, U256, U64};

fn main() -> Result<()> {
    let all_ones = U128::MAX;

    let wrapped: U128 = all_ones * u64::MAX;
    println!("{all_ones} * u64::MAX = {wrapped} (128-bit)");
    ensure!(wrapped.words() == &[1, u64::MAX], "unexpected 128-bit product");

    let full = U256::from_multiplication_of(&all_ones, &U64::MAX);
    println!("{all_ones} * u64::MAX = {full} (256-bit)");

    let small: uint!(24) = "0xffffff".parse().context("parse 24-bit value")?;
    let promoted = small + 1u32;
    println!("{small} + 1 = {promoted} (promoted to {} bits)", wide_uint::U32::BITS);
    ensure!(promoted == 0x0100_0000u32, "promotion lost the carry");

    let (sum, overflow) = small.overflowing_add(1u8.into());
    println!("{small} + 1 = {sum} in 24 bits, overflow: {overflow}");
    Ok(())
}
