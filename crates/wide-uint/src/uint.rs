//! The fixed-width integer type and its width-aware operations.

use core::hash::{Hash, Hasher};
use core::ops::Index;

use crate::ops::FixedWidth;
use crate::word::{self, limbs_for, BitOp, Word, WORD_BITS};

/// Unsigned integer of exactly `BITS` bits stored in `LIMBS` little-endian words.
///
/// `LIMBS` must equal [`limbs_for(BITS)`](limbs_for); the [`uint!`](crate::uint)
/// macro fills it in. Bits above `BITS` in the top word are always zero.
///
/// Arithmetic wraps: every result is reduced modulo `2^BITS` of the type it is
/// produced in. Operands of different widths are zero-extended.
#[derive(Clone, Copy)]
pub struct BigUint<const BITS: usize, const LIMBS: usize> {
    pub(crate) limbs: [Word; LIMBS],
}

impl<const BITS: usize, const LIMBS: usize> BigUint<BITS, LIMBS> {
    const SHAPE: () = assert!(
        BITS > 0 && LIMBS == limbs_for(BITS),
        "BigUint<BITS, LIMBS> requires LIMBS == limbs_for(BITS)"
    );

    const TOP_MASK: Word = if BITS % WORD_BITS == 0 {
        Word::MAX
    } else {
        (1 << (BITS % WORD_BITS)) - 1
    };

    /// Declared width in bits.
    pub const BITS: usize = BITS;

    /// Number of words.
    pub const LIMBS: usize = LIMBS;

    /// The value 0.
    pub const ZERO: Self = Self::from_words([0; LIMBS]);

    /// The value 1.
    pub const ONE: Self = Self::from_u128(1);

    /// `2^BITS - 1`.
    pub const MAX: Self = Self::from_words([Word::MAX; LIMBS]);

    /// Builds a value from little-endian words, discarding bits beyond `BITS`.
    pub const fn from_words(mut limbs: [Word; LIMBS]) -> Self {
        let () = Self::SHAPE;
        if LIMBS > 0 {
            limbs[LIMBS - 1] &= Self::TOP_MASK;
        }
        Self { limbs }
    }

    /// Builds a value from a native integer, truncated to `BITS`.
    ///
    /// Words are filled from the low end and filling stops as soon as the
    /// remaining high bits are all zero.
    pub const fn from_u128(value: u128) -> Self {
        let mut limbs = [0; LIMBS];
        let mut rest = value;
        let mut i = 0;
        while rest != 0 && i < LIMBS {
            limbs[i] = rest as Word;
            rest >>= WORD_BITS;
            i += 1;
        }
        Self::from_words(limbs)
    }

    /// Converts from any other width, zero-extending or truncating.
    pub fn from_uint<const OTHER_BITS: usize, const OTHER_LIMBS: usize>(
        other: &BigUint<OTHER_BITS, OTHER_LIMBS>,
    ) -> Self {
        let mut limbs = [0; LIMBS];
        let shared = LIMBS.min(OTHER_LIMBS);
        limbs[..shared].copy_from_slice(&other.limbs[..shared]);
        Self::from_words(limbs)
    }

    /// Converts into another width, zero-extending or truncating.
    pub fn resize<const OTHER_BITS: usize, const OTHER_LIMBS: usize>(
        &self,
    ) -> BigUint<OTHER_BITS, OTHER_LIMBS> {
        BigUint::from_uint(self)
    }

    /// Little-endian words.
    #[inline]
    pub const fn words(&self) -> &[Word; LIMBS] {
        &self.limbs
    }

    /// Consumes the value, returning its little-endian words.
    #[inline]
    pub const fn into_words(self) -> [Word; LIMBS] {
        self.limbs
    }

    /// Lowest word, i.e. the value truncated to 64 bits.
    #[inline]
    pub const fn low_u64(&self) -> u64 {
        self.limbs[0]
    }

    /// Lowest two words, i.e. the value truncated to 128 bits.
    pub const fn low_u128(&self) -> u128 {
        let high = if LIMBS > 1 { self.limbs[1] } else { 0 };
        ((high as u128) << WORD_BITS) | self.limbs[0] as u128
    }

    /// True for zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&word| word == 0)
    }

    /// Bit `index`, counting from the least significant. Out-of-range bits are zero.
    pub fn bit(&self, index: usize) -> bool {
        index < BITS && (self.limbs[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    /// Number of significant bits (0 for zero).
    pub fn bit_len(&self) -> usize {
        self.limbs
            .iter()
            .rposition(|&word| word != 0)
            .map_or(0, |i| i * WORD_BITS + (WORD_BITS - self.limbs[i].leading_zeros() as usize))
    }

    /// `lhs + rhs` computed in this type's width.
    pub fn from_addition_of<const LB: usize, const LL: usize, const RB: usize, const RL: usize>(
        lhs: &BigUint<LB, LL>,
        rhs: &BigUint<RB, RL>,
    ) -> Self {
        <Self as FixedWidth>::from_fill(|res| {
            word::add(res, &lhs.limbs, &rhs.limbs);
        })
    }

    /// `lhs - rhs` computed in this type's width (borrows wrap).
    pub fn from_subtraction_of<
        const LB: usize,
        const LL: usize,
        const RB: usize,
        const RL: usize,
    >(
        lhs: &BigUint<LB, LL>,
        rhs: &BigUint<RB, RL>,
    ) -> Self {
        <Self as FixedWidth>::from_fill(|res| {
            word::sub(res, &lhs.limbs, &rhs.limbs);
        })
    }

    /// `lhs * rhs` computed in this type's width; high product words are dropped.
    pub fn from_multiplication_of<
        const LB: usize,
        const LL: usize,
        const RB: usize,
        const RL: usize,
    >(
        lhs: &BigUint<LB, LL>,
        rhs: &BigUint<RB, RL>,
    ) -> Self {
        <Self as FixedWidth>::from_fill(|res| word::mul(res, &lhs.limbs, &rhs.limbs))
    }

    /// Word-wise `op` computed in this type's width.
    pub fn from_bitwise_of<const LB: usize, const LL: usize, const RB: usize, const RL: usize>(
        op: BitOp,
        lhs: &BigUint<LB, LL>,
        rhs: &BigUint<RB, RL>,
    ) -> Self {
        <Self as FixedWidth>::from_fill(|res| word::bitwise(res, &lhs.limbs, &rhs.limbs, op))
    }

    /// `self + rhs` modulo `2^BITS`, for a right operand of any width.
    pub fn wrapping_add<const RB: usize, const RL: usize>(self, rhs: BigUint<RB, RL>) -> Self {
        Self::from_addition_of(&self, &rhs)
    }

    /// `self - rhs` modulo `2^BITS`, for a right operand of any width.
    pub fn wrapping_sub<const RB: usize, const RL: usize>(self, rhs: BigUint<RB, RL>) -> Self {
        Self::from_subtraction_of(&self, &rhs)
    }

    /// `self * rhs` modulo `2^BITS`, for a right operand of any width.
    pub fn wrapping_mul<const RB: usize, const RL: usize>(self, rhs: BigUint<RB, RL>) -> Self {
        Self::from_multiplication_of(&self, &rhs)
    }

    /// `self + rhs` modulo `2^BITS`, plus whether the true sum did not fit.
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let mut limbs = [0; LIMBS];
        let carry = word::add(&mut limbs, &self.limbs, &rhs.limbs);
        let spilled = LIMBS > 0 && limbs[LIMBS - 1] & !Self::TOP_MASK != 0;
        (Self::from_words(limbs), carry != 0 || spilled)
    }

    /// `self - rhs` modulo `2^BITS`, plus whether `rhs > self`.
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let mut limbs = [0; LIMBS];
        let borrow = word::sub(&mut limbs, &self.limbs, &rhs.limbs);
        (Self::from_words(limbs), borrow != 0)
    }

    /// `self + rhs`, or `None` if the sum needs more than `BITS` bits.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    /// `self - rhs`, or `None` if `rhs > self`.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }
}

impl<const BITS: usize, const LIMBS: usize> Default for BigUint<BITS, LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const BITS: usize, const LIMBS: usize> Hash for BigUint<BITS, LIMBS> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs.hash(state);
    }
}

impl<const BITS: usize, const LIMBS: usize> Index<usize> for BigUint<BITS, LIMBS> {
    type Output = Word;

    fn index(&self, word_index: usize) -> &Word {
        &self.limbs[word_index]
    }
}

macro_rules! impl_from_native {
    ($($int:ty),*) => {
        $(
            impl<const BITS: usize, const LIMBS: usize> From<$int> for BigUint<BITS, LIMBS> {
                #[inline]
                fn from(value: $int) -> Self {
                    Self::from_u128(value as u128)
                }
            }
        )*
    };
}

impl_from_native!(u8, u16, u32, u64, u128, usize);

/// Spells the `BigUint` type of a given bit width: `uint!(24)` is `BigUint<24, 1>`.
#[macro_export]
macro_rules! uint {
    ($bits:expr) => {
        $crate::BigUint<{ $bits }, { $crate::limbs_for($bits) }>
    };
}
