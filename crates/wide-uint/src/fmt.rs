//! Hex formatting and parsing.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseUintError;
use crate::uint::BigUint;
use crate::word::{Word, WORD_BITS};

const NIBBLE_BITS: usize = 4;

impl<const BITS: usize, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Parses big-endian hex digits, with an optional `0x` prefix and `_` separators.
    pub fn from_hex(text: &str) -> Result<Self, ParseUintError> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        let offset = text.len() - digits.len();

        let mut limbs = [0; LIMBS];
        let mut shift = 0usize;
        let mut seen = false;
        for (position, found) in digits.char_indices().rev() {
            if found == '_' {
                continue;
            }
            let nibble = found.to_digit(16).ok_or(ParseUintError::InvalidDigit {
                position: offset + position,
                found,
            })? as Word;
            seen = true;
            if nibble != 0 {
                let top = shift + (Word::BITS - nibble.leading_zeros()) as usize;
                if top > BITS {
                    return Err(ParseUintError::Overflow { bits: BITS });
                }
                limbs[shift / WORD_BITS] |= nibble << (shift % WORD_BITS);
            }
            shift += NIBBLE_BITS;
        }

        if !seen {
            return Err(ParseUintError::Empty);
        }
        Ok(Self::from_words(limbs))
    }

    fn hex_digits(&self, upper: bool) -> String {
        let mut out = String::new();
        let mut words = self.limbs.iter().rev().skip_while(|&&word| word == 0);
        match words.next() {
            None => out.push('0'),
            Some(first) if upper => out.push_str(&format!("{first:X}")),
            Some(first) => out.push_str(&format!("{first:x}")),
        }
        for word in words {
            if upper {
                out.push_str(&format!("{word:016X}"));
            } else {
                out.push_str(&format!("{word:016x}"));
            }
        }
        out
    }
}

impl<const BITS: usize, const LIMBS: usize> FromStr for BigUint<BITS, LIMBS> {
    type Err = ParseUintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<const BITS: usize, const LIMBS: usize> fmt::LowerHex for BigUint<BITS, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_digits(false))
    }
}

impl<const BITS: usize, const LIMBS: usize> fmt::UpperHex for BigUint<BITS, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_digits(true))
    }
}

impl<const BITS: usize, const LIMBS: usize> fmt::Display for BigUint<BITS, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:#x}")
    }
}

impl<const BITS: usize, const LIMBS: usize> fmt::Debug for BigUint<BITS, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUint<{BITS}>({self:#x})")
    }
}
