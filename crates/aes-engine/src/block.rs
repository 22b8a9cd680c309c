//! Block and state representation helpers.

use crate::error::BlockError;

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// Copies a 16-byte slice into a [`Block`].
pub fn block_from_slice(bytes: &[u8]) -> Result<Block, BlockError> {
    bytes
        .try_into()
        .map_err(|_| BlockError::InvalidLength { got: bytes.len() })
}

/// Decodes 32 hex characters into a [`Block`].
pub fn block_from_hex(text: &str) -> Result<Block, BlockError> {
    let bytes = hex::decode(text.trim())?;
    block_from_slice(&bytes)
}

/// The 4×4 byte cipher state held as four 32-bit words.
///
/// Outside the cipher the words are the block read four bytes at a time, most
/// significant byte first (word `c` holds bytes `4c..4c+4`). The round
/// transforms work on the [`transpose`](State::transpose)d form, where word `r`
/// carries byte `r` of every group, so each transform runs lane-wise over a
/// whole word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State(pub [u32; 4]);

impl State {
    /// Packs a block into words, big-endian within each word.
    pub fn from_block(block: &Block) -> Self {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self(words)
    }

    /// Unpacks the words back into a block, big-endian within each word.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        for (chunk, word) in block.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        block
    }

    /// Swaps between the external and the lane-wise layout.
    ///
    /// Byte `j` (from the most significant end) of word `i` becomes byte `i` of
    /// word `j`. Applying it twice is the identity.
    pub fn transpose(&self) -> Self {
        let mut out = [0u32; 4];
        for (row, dst) in out.iter_mut().enumerate() {
            let shift = 24 - 8 * row;
            *dst = self
                .0
                .iter()
                .fold(0u32, |acc, word| (acc << 8) | ((word >> shift) & 0xff));
        }
        Self(out)
    }

    /// The four words.
    #[inline]
    pub fn words(&self) -> &[u32; 4] {
        &self.0
    }
}

impl From<[u32; 4]> for State {
    fn from(words: [u32; 4]) -> Self {
        Self(words)
    }
}

impl From<&Block> for State {
    fn from(block: &Block) -> Self {
        Self::from_block(block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}
