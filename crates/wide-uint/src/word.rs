//! Word-array algorithms shared by every width.
//!
//! Operands are little-endian word slices of any length. A word past the end of
//! a slice reads as zero, which is how narrower operands are zero-extended. The
//! result slice decides how many words are produced; anything beyond it is
//! dropped.

use core::cmp::Ordering;

/// One digit of the multi-word representation.
pub type Word = u64;

type HalfWord = u32;

/// Bits per [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

const HALF_BITS: u32 = HalfWord::BITS;
const HALF_MASK: Word = HalfWord::MAX as Word;

/// Number of words needed to hold `bits` bits.
pub const fn limbs_for(bits: usize) -> usize {
    (bits + WORD_BITS - 1) / WORD_BITS
}

/// Word-wise bitwise operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitOp {
    /// `a & b`; a missing word makes the result word zero.
    And,
    /// `a | b`.
    Or,
    /// `a ^ b`.
    Xor,
}

impl BitOp {
    #[inline]
    const fn apply(self, a: Word, b: Word) -> Word {
        match self {
            Self::And => a & b,
            Self::Or => a | b,
            Self::Xor => a ^ b,
        }
    }
}

#[inline]
fn word_at(words: &[Word], index: usize) -> Word {
    words.get(index).copied().unwrap_or(0)
}

/// `a + b + carry`, returning the sum word and the outgoing carry (0 or 1).
#[inline]
pub(crate) const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(carry);
    (sum, c1 as Word + c2 as Word)
}

/// `a - b - borrow`, returning the difference word and the outgoing borrow (0 or 1).
#[inline]
pub(crate) const fn sbb(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(borrow);
    (diff, (b1 | b2) as Word)
}

/// Full `a * b` as `(low, high)` words, built from half-word partial products
/// so no intermediate exceeds one word.
#[inline]
pub(crate) const fn mul_wide(a: Word, b: Word) -> (Word, Word) {
    let (a_lo, a_hi) = (a & HALF_MASK, a >> HALF_BITS);
    let (b_lo, b_hi) = (b & HALF_MASK, b >> HALF_BITS);

    let lo_lo = a_lo * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_lo = a_hi * b_lo;
    let hi_hi = a_hi * b_hi;

    // At most three half-words summed: fits comfortably in one word.
    let middle = (lo_lo >> HALF_BITS) + (lo_hi & HALF_MASK) + (hi_lo & HALF_MASK);
    let low = (middle << HALF_BITS) | (lo_lo & HALF_MASK);
    let high = hi_hi + (lo_hi >> HALF_BITS) + (hi_lo >> HALF_BITS) + (middle >> HALF_BITS);
    (low, high)
}

/// Ripple-carry addition. Returns the carry out of the top result word.
pub(crate) fn add(res: &mut [Word], lhs: &[Word], rhs: &[Word]) -> Word {
    let mut carry = 0;
    for (i, out) in res.iter_mut().enumerate() {
        let (sum, c) = adc(word_at(lhs, i), word_at(rhs, i), carry);
        *out = sum;
        carry = c;
    }
    carry
}

/// Ripple-borrow subtraction. Returns the borrow out of the top result word.
///
/// An outstanding borrow keeps propagating into the zero-extended high words,
/// which therefore fill with ones: the result is `lhs - rhs` modulo the result
/// width.
pub(crate) fn sub(res: &mut [Word], lhs: &[Word], rhs: &[Word]) -> Word {
    let mut borrow = 0;
    for (i, out) in res.iter_mut().enumerate() {
        let (diff, b) = sbb(word_at(lhs, i), word_at(rhs, i), borrow);
        *out = diff;
        borrow = b;
    }
    borrow
}

/// Schoolbook multiplication truncated to `res.len()` words.
pub(crate) fn mul(res: &mut [Word], lhs: &[Word], rhs: &[Word]) {
    res.fill(0);
    let len = res.len();
    for (i, &a) in lhs.iter().enumerate().take(len) {
        if a == 0 {
            continue;
        }
        let mut carry: Word = 0;
        for (j, &b) in rhs.iter().enumerate().take(len - i) {
            let (low, high) = mul_wide(a, b);
            let (sum, c) = adc(res[i + j], low, carry);
            res[i + j] = sum;
            // a*b + res + carry < 2^128, so this cannot overflow.
            carry = high + c;
        }
        let mut k = i + rhs.len();
        while carry != 0 && k < len {
            let (sum, c) = res[k].overflowing_add(carry);
            res[k] = sum;
            carry = c as Word;
            k += 1;
        }
    }
}

/// Word-wise bitwise combination.
pub(crate) fn bitwise(res: &mut [Word], lhs: &[Word], rhs: &[Word], op: BitOp) {
    for (i, out) in res.iter_mut().enumerate() {
        *out = op.apply(word_at(lhs, i), word_at(rhs, i));
    }
}

/// Numeric comparison: the most significant differing word decides.
pub(crate) fn compare(lhs: &[Word], rhs: &[Word]) -> Ordering {
    let len = lhs.len().max(rhs.len());
    for i in (0..len).rev() {
        match word_at(lhs, i).cmp(&word_at(rhs, i)) {
            Ordering::Equal => {}
            order => return order,
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn limbs_for_rounds_up() {
        assert_eq!(limbs_for(1), 1);
        assert_eq!(limbs_for(24), 1);
        assert_eq!(limbs_for(64), 1);
        assert_eq!(limbs_for(65), 2);
        assert_eq!(limbs_for(256), 4);
    }

    #[test]
    fn mul_wide_matches_u128() {
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        let mut cases: Vec<(Word, Word)> = (0..1000).map(|_| (rng.gen(), rng.gen())).collect();
        cases.extend([(Word::MAX, Word::MAX), (0, Word::MAX), (1 << 32, 1 << 32)]);
        for (a, b) in cases {
            let wide = u128::from(a) * u128::from(b);
            assert_eq!(mul_wide(a, b), (wide as Word, (wide >> 64) as Word));
        }
    }

    #[test]
    fn add_propagates_carry_through_longer_operand() {
        let mut res = [0; 3];
        let carry = add(&mut res, &[Word::MAX, Word::MAX], &[1]);
        assert_eq!(res, [0, 0, 1]);
        assert_eq!(carry, 0);

        let mut narrow = [0; 2];
        assert_eq!(add(&mut narrow, &[Word::MAX, Word::MAX], &[1]), 1);
        assert_eq!(narrow, [0, 0]);
    }

    #[test]
    fn sub_borrow_fills_high_words() {
        let mut res = [0; 3];
        let borrow = sub(&mut res, &[0], &[1]);
        assert_eq!(res, [Word::MAX; 3]);
        assert_eq!(borrow, 1);

        let borrow = sub(&mut res, &[5, 1], &[6]);
        assert_eq!(res, [Word::MAX, 0, 0]);
        assert_eq!(borrow, 0);
    }

    #[test]
    fn mul_truncates_to_result_length() {
        let mut res = [0; 2];
        mul(&mut res, &[Word::MAX, Word::MAX], &[Word::MAX]);
        assert_eq!(res, [1, Word::MAX]);

        let mut wide = [0; 4];
        mul(&mut wide, &[Word::MAX, Word::MAX], &[Word::MAX]);
        assert_eq!(wide, [1, Word::MAX, Word::MAX - 1, 0]);
    }

    #[test]
    fn bitwise_and_clears_missing_words() {
        let mut res = [0; 2];
        bitwise(&mut res, &[0xff, 0xff], &[0x0f], BitOp::And);
        assert_eq!(res, [0x0f, 0]);
        bitwise(&mut res, &[0xf0, 0xff], &[0x0f], BitOp::Or);
        assert_eq!(res, [0xff, 0xff]);
        bitwise(&mut res, &[0xff, 0xff], &[0x0f], BitOp::Xor);
        assert_eq!(res, [0xf0, 0xff]);
    }

    #[test]
    fn compare_treats_missing_words_as_zero() {
        assert_eq!(compare(&[1, 0, 0], &[1]), Ordering::Equal);
        assert_eq!(compare(&[0, 0, 1], &[Word::MAX]), Ordering::Greater);
        assert_eq!(compare(&[Word::MAX], &[0, 1]), Ordering::Less);
        assert_eq!(compare(&[2, 1], &[3, 1]), Ordering::Less);
        assert_eq!(compare(&[], &[]), Ordering::Equal);
    }
}
