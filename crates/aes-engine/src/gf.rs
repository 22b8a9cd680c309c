//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reduction polynomial `0x11B`.
pub const REDUCTION: u8 = 0x1b;

const LANE_HIGH_BITS: u32 = 0x8080_8080;

/// Multiplies `value` by `factor` as polynomials over GF(2), reduced modulo `0x11B`.
///
/// Shift-and-add: `value` is doubled once per bit of `factor` and folded into the
/// product wherever that bit is set.
#[inline]
pub const fn multiply(mut value: u8, mut factor: u8) -> u8 {
    let mut product = 0u8;
    while factor != 0 {
        if factor & 1 != 0 {
            product ^= value;
        }
        value = double(value);
        factor >>= 1;
    }
    product
}

/// Multiplies a single element by `x` (i.e. by 2).
#[inline]
pub const fn double(value: u8) -> u8 {
    let shifted = value << 1;
    if value & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Doubles each of the four bytes packed in `word` independently.
///
/// Byte-identical to calling [`double`] on every lane: the high bit of each lane
/// is masked off before the shift so nothing carries into the neighbouring lane,
/// and the reduction constant is XORed into every lane whose high bit was set.
#[inline]
pub const fn double_lanes(word: u32) -> u32 {
    let high = word & LANE_HIGH_BITS;
    let shifted = (word & !LANE_HIGH_BITS) << 1;
    shifted ^ ((high >> 7) * REDUCTION as u32)
}
