//! Key sizes, root keys and expanded round-key schedules.

use crate::block::State;
use crate::error::KeyError;

/// Largest round count (AES-256).
pub const MAX_ROUNDS: usize = 14;

/// The three AES key lengths. Everything else about the cipher follows from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Maps a key length in bytes to its size, if it is one of 16, 24 or 32.
    pub const fn from_key_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Aes128),
            24 => Some(Self::Aes192),
            32 => Some(Self::Aes256),
            _ => None,
        }
    }

    /// Key length in bits.
    pub const fn bits(self) -> usize {
        self.key_bytes() * 8
    }

    /// Key length in bytes.
    pub const fn key_bytes(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Key length in 32-bit words.
    pub const fn key_words(self) -> usize {
        self.key_bytes() / 4
    }

    /// Number of rounds.
    pub const fn rounds(self) -> usize {
        match self {
            Self::Aes128 => 10,
            Self::Aes192 => 12,
            Self::Aes256 => 14,
        }
    }

    /// Number of round keys in the expanded schedule (`rounds + 1`).
    pub const fn schedule_len(self) -> usize {
        self.rounds() + 1
    }
}

/// Root key for one of the three AES variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AesKey {
    /// 128-bit key.
    Aes128([u8; 16]),
    /// 192-bit key.
    Aes192([u8; 24]),
    /// 256-bit key.
    Aes256([u8; 32]),
}

impl AesKey {
    /// Size of this key.
    pub const fn size(&self) -> KeySize {
        match self {
            Self::Aes128(_) => KeySize::Aes128,
            Self::Aes192(_) => KeySize::Aes192,
            Self::Aes256(_) => KeySize::Aes256,
        }
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Aes128(bytes) => bytes,
            Self::Aes192(bytes) => bytes,
            Self::Aes256(bytes) => bytes,
        }
    }

    /// Decodes a key from 32, 48 or 64 hex characters.
    pub fn from_hex(text: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(text.trim())?;
        Self::try_from(bytes.as_slice())
    }
}

impl From<[u8; 16]> for AesKey {
    fn from(value: [u8; 16]) -> Self {
        Self::Aes128(value)
    }
}

impl From<[u8; 24]> for AesKey {
    fn from(value: [u8; 24]) -> Self {
        Self::Aes192(value)
    }
}

impl From<[u8; 32]> for AesKey {
    fn from(value: [u8; 32]) -> Self {
        Self::Aes256(value)
    }
}

impl TryFrom<&[u8]> for AesKey {
    type Error = KeyError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let invalid = || KeyError::InvalidLength { got: bytes.len() };
        match KeySize::from_key_len(bytes.len()).ok_or_else(invalid)? {
            KeySize::Aes128 => bytes.try_into().map(Self::Aes128).map_err(|_| invalid()),
            KeySize::Aes192 => bytes.try_into().map(Self::Aes192).map_err(|_| invalid()),
            KeySize::Aes256 => bytes.try_into().map(Self::Aes256).map_err(|_| invalid()),
        }
    }
}

/// Expanded round keys, already in the lane-wise layout the rounds consume.
///
/// Computed once per key and reusable for any number of blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundKeySchedule {
    size: KeySize,
    keys: [State; MAX_ROUNDS + 1],
}

impl RoundKeySchedule {
    pub(crate) fn new(size: KeySize, keys: [State; MAX_ROUNDS + 1]) -> Self {
        Self { size, keys }
    }

    /// Size of the key this schedule was expanded from.
    #[inline]
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Returns the round key at the requested index (`0..=rounds`).
    ///
    /// # Panics
    ///
    /// Panics if `round > self.rounds()`.
    #[inline]
    pub fn round_key(&self, round: usize) -> &State {
        &self.round_keys()[round]
    }

    /// All `rounds + 1` round keys in order.
    #[inline]
    pub fn round_keys(&self) -> &[State] {
        &self.keys[..self.size.schedule_len()]
    }
}
