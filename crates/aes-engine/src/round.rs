//! AES round transformations on the lane-wise [`State`] layout.
//!
//! Word `r` of the state is row `r` of the AES matrix, its most significant byte
//! being column 0, so a row rotation is a word rotation and the column mixing
//! runs on all four columns at once.

use crate::block::State;
use crate::gf::double_lanes;
use crate::sbox::{inv_sub_word, sub_word};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for word in state.0.iter_mut() {
        *word = sub_word(*word);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for word in state.0.iter_mut() {
        *word = inv_sub_word(*word);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` bytes.
#[inline]
pub fn shift_rows(state: &mut State) {
    for (row, word) in state.0.iter_mut().enumerate().skip(1) {
        *word = word.rotate_left(8 * row as u32);
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r` bytes.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for (row, word) in state.0.iter_mut().enumerate().skip(1) {
        *word = word.rotate_right(8 * row as u32);
    }
}

/// MixColumns over all four columns.
///
/// Row `r` becomes `2·a[r] ⊕ 3·a[r+1] ⊕ a[r+2] ⊕ a[r+3]`, computed as
/// `a[r] ⊕ total ⊕ 2·(a[r] ⊕ a[r+1])` with `total` the XOR of all four rows.
#[inline]
pub fn mix_columns(state: &mut State) {
    let a = state.0;
    let total = a[0] ^ a[1] ^ a[2] ^ a[3];
    for (row, word) in state.0.iter_mut().enumerate() {
        *word = a[row] ^ total ^ double_lanes(a[row] ^ a[(row + 1) % 4]);
    }
}

/// Inverse MixColumns over all four columns.
///
/// Row `r` becomes `e·a[r] ⊕ b·a[r+1] ⊕ d·a[r+2] ⊕ 9·a[r+3]`. Every coefficient
/// contains the `8` term and all but `e` contain the `1` term, so those are
/// folded into one running total and the remaining `2` and `4` terms are added
/// per row.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    let a = state.0;
    let x2 = a.map(double_lanes);
    let x4 = x2.map(double_lanes);
    let x8 = x4.map(double_lanes);
    let total = (0..4).fold(0u32, |acc, i| acc ^ x8[i] ^ a[i]);
    for (row, word) in state.0.iter_mut().enumerate() {
        *word = total ^ a[row] ^ x4[row] ^ x2[row] ^ x2[(row + 1) % 4] ^ x4[(row + 2) % 4];
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    for (word, key) in state.0.iter_mut().zip(round_key.0.iter()) {
        *word ^= *key;
    }
}
