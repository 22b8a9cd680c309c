//! Operators with width promotion.
//!
//! A binary operator between `BigUint<A, _>` and `BigUint<B, _>` yields a value
//! of width `max(A, B)`, the narrower operand being zero-extended. Native
//! unsigned integers take part as a `BigUint` of their own bit size. Compound
//! assignment keeps the left operand's width.

use core::cmp::Ordering;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul,
    MulAssign, Sub, SubAssign,
};

use crate::uint::BigUint;
use crate::word::{self, BitOp, Word};

mod sealed {
    /// Restricts [`FixedWidth`](super::FixedWidth) to `BigUint`.
    pub trait Sealed {}
}

/// A `BigUint` of some width, usable as the result of a promoted operation.
pub trait FixedWidth: sealed::Sealed + Copy {
    /// Builds a value by letting `fill` write its words, then trims.
    fn from_fill(fill: impl FnOnce(&mut [Word])) -> Self;
}

impl<const BITS: usize, const LIMBS: usize> sealed::Sealed for BigUint<BITS, LIMBS> {}

impl<const BITS: usize, const LIMBS: usize> FixedWidth for BigUint<BITS, LIMBS> {
    fn from_fill(fill: impl FnOnce(&mut [Word])) -> Self {
        let mut limbs = [0; LIMBS];
        fill(&mut limbs[..]);
        Self::from_words(limbs)
    }
}

/// Names the wider of `Self` and `Rhs`.
///
/// Every width is its own widest. Between distinct widths it is provided for
/// 8, 16, 24, 32, 64, 128, 192, 256, 384, 512, 1024, 2048 and 4096 bits; other
/// combinations go through the `from_*_of` constructors with an explicit
/// result type.
pub trait Widest<Rhs> {
    /// The promoted type.
    type Output: FixedWidth;
}

impl<const BITS: usize, const LIMBS: usize> Widest<BigUint<BITS, LIMBS>> for BigUint<BITS, LIMBS> {
    type Output = Self;
}

macro_rules! impl_widest {
    () => {};
    (($nb:literal, $nl:literal) $(, ($wb:literal, $wl:literal))*) => {
        $(
            impl Widest<BigUint<$wb, $wl>> for BigUint<$nb, $nl> {
                type Output = BigUint<$wb, $wl>;
            }
            impl Widest<BigUint<$nb, $nl>> for BigUint<$wb, $wl> {
                type Output = BigUint<$wb, $wl>;
            }
        )*
        impl_widest!($(($wb, $wl)),*);
    };
}

impl_widest!(
    (8, 1),
    (16, 1),
    (24, 1),
    (32, 1),
    (64, 1),
    (128, 2),
    (192, 3),
    (256, 4),
    (384, 6),
    (512, 8),
    (1024, 16),
    (2048, 32),
    (4096, 64)
);

/// Result type of `Lhs op Rhs`.
pub type Promoted<Lhs, Rhs> = <Lhs as Widest<Rhs>>::Output;

macro_rules! impl_promoted_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, |$res:ident, $l:ident, $r:ident| $body:expr) => {
        impl<const LB: usize, const LL: usize, const RB: usize, const RL: usize>
            $trait<BigUint<RB, RL>> for BigUint<LB, LL>
        where
            Self: Widest<BigUint<RB, RL>>,
        {
            type Output = Promoted<Self, BigUint<RB, RL>>;

            #[inline]
            fn $method(self, rhs: BigUint<RB, RL>) -> Self::Output {
                let ($l, $r) = (&self.limbs[..], &rhs.limbs[..]);
                <Self::Output as FixedWidth>::from_fill(|$res| {
                    $body;
                })
            }
        }

        impl<const LB: usize, const LL: usize, const RB: usize, const RL: usize>
            $assign_trait<BigUint<RB, RL>> for BigUint<LB, LL>
        {
            #[inline]
            fn $assign_method(&mut self, rhs: BigUint<RB, RL>) {
                let ($l, $r) = (&self.limbs[..], &rhs.limbs[..]);
                *self = <Self as FixedWidth>::from_fill(|$res| {
                    $body;
                });
            }
        }
    };
}

impl_promoted_op!(Add, add, AddAssign, add_assign, |res, l, r| word::add(res, l, r));
impl_promoted_op!(Sub, sub, SubAssign, sub_assign, |res, l, r| word::sub(res, l, r));
impl_promoted_op!(Mul, mul, MulAssign, mul_assign, |res, l, r| word::mul(res, l, r));
impl_promoted_op!(BitAnd, bitand, BitAndAssign, bitand_assign, |res, l, r| {
    word::bitwise(res, l, r, BitOp::And)
});
impl_promoted_op!(BitOr, bitor, BitOrAssign, bitor_assign, |res, l, r| {
    word::bitwise(res, l, r, BitOp::Or)
});
impl_promoted_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, |res, l, r| {
    word::bitwise(res, l, r, BitOp::Xor)
});

macro_rules! impl_native_ops {
    (@op $int:ty, $bits:literal, $limbs:literal, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<const BITS: usize, const LIMBS: usize> $trait<$int> for BigUint<BITS, LIMBS>
        where
            Self: Widest<BigUint<$bits, $limbs>>,
        {
            type Output = Promoted<Self, BigUint<$bits, $limbs>>;

            #[inline]
            fn $method(self, rhs: $int) -> Self::Output {
                $trait::$method(self, BigUint::<$bits, $limbs>::from(rhs))
            }
        }

        impl<const BITS: usize, const LIMBS: usize> $assign_trait<$int> for BigUint<BITS, LIMBS> {
            #[inline]
            fn $assign_method(&mut self, rhs: $int) {
                $assign_trait::$assign_method(self, BigUint::<$bits, $limbs>::from(rhs));
            }
        }
    };
    ($($int:ty => $bits:literal, $limbs:literal);* $(;)?) => {
        $(
            impl_native_ops!(@op $int, $bits, $limbs, Add, add, AddAssign, add_assign);
            impl_native_ops!(@op $int, $bits, $limbs, Sub, sub, SubAssign, sub_assign);
            impl_native_ops!(@op $int, $bits, $limbs, Mul, mul, MulAssign, mul_assign);
            impl_native_ops!(@op $int, $bits, $limbs, BitAnd, bitand, BitAndAssign, bitand_assign);
            impl_native_ops!(@op $int, $bits, $limbs, BitOr, bitor, BitOrAssign, bitor_assign);
            impl_native_ops!(@op $int, $bits, $limbs, BitXor, bitxor, BitXorAssign, bitxor_assign);

            impl<const BITS: usize, const LIMBS: usize> PartialEq<$int> for BigUint<BITS, LIMBS> {
                #[inline]
                fn eq(&self, other: &$int) -> bool {
                    *self == BigUint::<$bits, $limbs>::from(*other)
                }
            }

            impl<const BITS: usize, const LIMBS: usize> PartialOrd<$int> for BigUint<BITS, LIMBS> {
                #[inline]
                fn partial_cmp(&self, other: &$int) -> Option<Ordering> {
                    self.partial_cmp(&BigUint::<$bits, $limbs>::from(*other))
                }
            }
        )*
    };
}

impl_native_ops!(
    u8 => 8, 1;
    u16 => 16, 1;
    u32 => 32, 1;
    u64 => 64, 1;
    u128 => 128, 2;
);

impl<const LB: usize, const LL: usize, const RB: usize, const RL: usize>
    PartialEq<BigUint<RB, RL>> for BigUint<LB, LL>
{
    #[inline]
    fn eq(&self, other: &BigUint<RB, RL>) -> bool {
        word::compare(&self.limbs, &other.limbs) == Ordering::Equal
    }
}

impl<const BITS: usize, const LIMBS: usize> Eq for BigUint<BITS, LIMBS> {}

impl<const LB: usize, const LL: usize, const RB: usize, const RL: usize>
    PartialOrd<BigUint<RB, RL>> for BigUint<LB, LL>
{
    #[inline]
    fn partial_cmp(&self, other: &BigUint<RB, RL>) -> Option<Ordering> {
        Some(word::compare(&self.limbs, &other.limbs))
    }
}

impl<const BITS: usize, const LIMBS: usize> Ord for BigUint<BITS, LIMBS> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        word::compare(&self.limbs, &other.limbs)
    }
}

#[cfg(test)]
mod tests {
    use crate::word::Word;
    use crate::{uint, U128, U256, U64};

    type U24 = uint!(24);

    #[test]
    fn addition() {
        let a = U128::from_words([Word::MAX, 1]);
        let b: U128 = a + a;
        assert_eq!(b[0], !1);
        assert_eq!(b[1], 3);

        let c: U128 = a + u64::MAX;
        assert_eq!(c[0], !1);
        assert_eq!(c[1], 2);
    }

    #[test]
    fn subtraction() {
        let a = U128::from_words([1, 1]);
        let b: U128 = a - 2u32;
        assert_eq!(b[0], Word::MAX);
        assert_eq!(b[1], 0);
    }

    #[test]
    fn multiplication() {
        let a = U128::from_words([0x1000_1000_1000_1000; 2]);
        let b: U128 = a * 0x1_0001u64;
        assert_eq!(b[0], 0x1000_1000_1000_1000 + 0x1000_1000_1000_0000);
        assert_eq!(b[1], 0x1000_1000_1000_1000 + 0x1000_1000_1000_1000);

        let c = U128::MAX;
        let d: U128 = c * u64::MAX;
        assert_eq!(d[0], 0x0000_0000_0000_0001);
        assert_eq!(d[1], 0xffff_ffff_ffff_ffff);
    }

    #[test]
    fn binary_operations() {
        let a = U128::from(0x0102_0304u32);
        let b = U128::from(0x0403_0201u32);
        assert_eq!((a & b)[0], 0x0002_0200);
        assert_eq!((a | b)[0], 0x0503_0305);
        assert_eq!((a ^ b)[0], 0x0501_0105);

        let n = 0x0403_0201u32;
        assert_eq!((a & n)[0], 0x0002_0200);
        assert_eq!((a | n)[0], 0x0503_0305);
        assert_eq!((a ^ n)[0], 0x0501_0105);
    }

    #[test]
    fn mixed_widths_promote_to_wider() {
        let narrow = U64::from(u64::MAX);
        let wide = U128::from_words([1, 1]);

        let sum: U128 = narrow + wide;
        assert_eq!(sum.into_words(), [0, 2]);
        let sum_rev: U128 = wide + narrow;
        assert_eq!(sum_rev, sum);

        let diff: U128 = narrow - wide;
        assert_eq!(diff.into_words(), [Word::MAX - 1, Word::MAX]);

        let and: U128 = narrow & U128::MAX;
        assert_eq!(and.into_words(), [Word::MAX, 0]);
        let xor: U128 = narrow ^ wide;
        assert_eq!(xor.into_words(), [Word::MAX - 1, 1]);

        let product: U256 = U128::MAX * U256::from(2u8);
        assert_eq!(product.into_words(), [Word::MAX - 1, Word::MAX, 1, 0]);
    }

    #[test]
    fn narrow_native_operands_promote_small_types() {
        let small = U24::from(0xff_ffffu32);
        let sum: crate::U32 = small + 1u32;
        assert_eq!(sum, 0x0100_0000u32);
        let wrapped: U24 = small + U24::ONE;
        assert_eq!(wrapped, U24::ZERO);
        let byte_sum: U24 = small + 1u8;
        assert!(byte_sum.is_zero());
    }

    #[test]
    fn compound_assignment_keeps_left_width() {
        let mut value = U64::from(u64::MAX);
        value += U128::from_words([1, 1]);
        assert_eq!(value, U64::ZERO);

        let mut value = U24::from(3u8);
        value *= 0x55_5556u32;
        assert_eq!(value, 2u8);
        value -= 3u8;
        assert_eq!(value, U24::MAX);
        value &= 0xf0u8;
        assert_eq!(value, 0xf0u8);
        value |= U128::from_words([0x0f, 7]);
        assert_eq!(value, 0xffu8);
        value ^= 0xffu16;
        assert!(value.is_zero());
    }

    #[test]
    fn compare() {
        let a = U128::from(0x0102_0304_0506_0708u64);
        let b = U128::from(0x1020_3040_5060_7080u64);
        assert!(a < b);
        assert!(!(b < a));
        assert!(!(a < a));
        assert!(!(a > b));
        assert!(b > a);
        assert!(!(a > a));
        assert!(a <= b);
        assert!(!(b <= a));
        assert!(a <= a);
        assert!(!(a >= b));
        assert!(b >= a);
        assert!(a >= a);
        assert!(a != b);
        assert!(a == a);
    }

    #[test]
    fn compare_across_widths() {
        let small = U64::from(7u8);
        let same = U256::from(7u8);
        let high = U128::from_words([0, 1]);
        assert_eq!(small, same);
        assert!(small < high);
        assert!(high > small);
        assert!(high > u64::MAX);
        assert!(small == 7u32);
        assert!(small < 8u128);
        assert_eq!(high.cmp(&U128::from_words([Word::MAX, 0])), core::cmp::Ordering::Greater);
    }
}
