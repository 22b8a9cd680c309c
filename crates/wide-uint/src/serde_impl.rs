//! Serde support: a value serializes as its little-endian word array.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_big_array::BigArray;

use crate::uint::BigUint;
use crate::word::Word;

impl<const BITS: usize, const LIMBS: usize> Serialize for BigUint<BITS, LIMBS> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BigArray::serialize(&self.limbs, serializer)
    }
}

impl<'de, const BITS: usize, const LIMBS: usize> Deserialize<'de> for BigUint<BITS, LIMBS> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let limbs = <[Word; LIMBS] as BigArray<'de, Word>>::deserialize(deserializer)?;
        let value = Self::from_words(limbs);
        if value.limbs != limbs {
            return Err(D::Error::custom(format!("value does not fit in {BITS} bits")));
        }
        Ok(value)
    }
}
