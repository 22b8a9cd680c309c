//! AES key schedule and single-block encryption/decryption.

use crate::block::{Block, State};
use crate::gf::double_lanes;
use crate::key::{AesKey, RoundKeySchedule, MAX_ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sub_word;

const SCHEDULE_WORDS: usize = 4 * (MAX_ROUNDS + 1);

/// Round constant 1 in the most significant byte.
const RCON_START: u32 = 0x0100_0000;

/// Expands a 128, 192 or 256-bit key into `rounds + 1` round keys.
pub fn expand_key(key: &AesKey) -> RoundKeySchedule {
    let size = key.size();
    let _scope = tracing::trace_span!(
        "AES key expansion",
        key_bits = size.bits(),
        rounds = size.rounds(),
    )
    .entered();

    let nk = size.key_words();
    let total = 4 * size.schedule_len();

    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let mut rcon = RCON_START;
    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ rcon;
            rcon = double_lanes(rcon);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let mut keys = [State::default(); MAX_ROUNDS + 1];
    for (round_key, words) in keys.iter_mut().zip(w[..total].chunks_exact(4)) {
        *round_key = State([words[0], words[1], words[2], words[3]]).transpose();
    }

    RoundKeySchedule::new(size, keys)
}

/// Encrypts one state given in the external word layout.
pub fn encrypt_state(input: State, round_keys: &RoundKeySchedule) -> State {
    let rounds = round_keys.rounds();
    let mut state = input.transpose();

    add_round_key(&mut state, round_keys.round_key(0));

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.round_key(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.round_key(rounds));

    state.transpose()
}

/// Decrypts one state given in the external word layout.
pub fn decrypt_state(input: State, round_keys: &RoundKeySchedule) -> State {
    let rounds = round_keys.rounds();
    let mut state = input.transpose();

    add_round_key(&mut state, round_keys.round_key(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.round_key(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.round_key(0));

    state.transpose()
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeySchedule) -> Block {
    encrypt_state(State::from_block(block), round_keys).to_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeySchedule) -> Block {
    decrypt_state(State::from_block(block), round_keys).to_block()
}

/// A key schedule bundled with the block operations.
///
/// Blocks are processed independently (no chaining, IV or padding).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aes {
    round_keys: RoundKeySchedule,
}

impl Aes {
    /// Expands `key` once for reuse across blocks.
    pub fn new(key: &AesKey) -> Self {
        Self::from_schedule(expand_key(key))
    }

    /// Wraps an already expanded schedule.
    pub fn from_schedule(round_keys: RoundKeySchedule) -> Self {
        Self { round_keys }
    }

    /// The expanded schedule.
    pub fn schedule(&self) -> &RoundKeySchedule {
        &self.round_keys
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }

    /// Encrypts each block of `blocks` independently, in place.
    pub fn encrypt_blocks(&self, blocks: &mut [Block]) {
        for block in blocks.iter_mut() {
            *block = self.encrypt_block(block);
        }
    }

    /// Decrypts each block of `blocks` independently, in place.
    pub fn decrypt_blocks(&self, blocks: &mut [Block]) {
        for block in blocks.iter_mut() {
            *block = self.decrypt_block(block);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::block_from_hex;
    use crate::key::KeySize;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    struct Vector {
        key: &'static str,
        plain: &'static str,
        cipher: &'static str,
    }

    const VECTORS: [Vector; 4] = [
        // FIPS-197 Appendix B.
        Vector {
            key: "2b7e151628aed2a6abf7158809cf4f3c",
            plain: "3243f6a8885a308d313198a2e0370734",
            cipher: "3925841d02dc09fbdc118597196a0b32",
        },
        // FIPS-197 Appendix C.1 - C.3.
        Vector {
            key: "000102030405060708090a0b0c0d0e0f",
            plain: "00112233445566778899aabbccddeeff",
            cipher: "69c4e0d86a7b0430d8cdb78070b4c55a",
        },
        Vector {
            key: "000102030405060708090a0b0c0d0e0f1011121314151617",
            plain: "00112233445566778899aabbccddeeff",
            cipher: "dda97ca4864cdfe06eaf70a0ec0d7191",
        },
        Vector {
            key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            plain: "00112233445566778899aabbccddeeff",
            cipher: "8ea2b7ca516745bfeafc49904b496089",
        },
    ];

    /// Round key `round` back in the external word order, as FIPS-197 lists it.
    fn schedule_words(round_keys: &RoundKeySchedule, round: usize) -> [u32; 4] {
        round_keys.round_key(round).transpose().0
    }

    #[test]
    fn encrypt_matches_fips_vectors() {
        for vector in &VECTORS {
            let round_keys = expand_key(&AesKey::from_hex(vector.key).unwrap());
            let ct = encrypt_block(&block_from_hex(vector.plain).unwrap(), &round_keys);
            assert_eq!(hex::encode(ct), vector.cipher, "key {}", vector.key);
        }
    }

    #[test]
    fn decrypt_matches_fips_vectors() {
        for vector in &VECTORS {
            let round_keys = expand_key(&AesKey::from_hex(vector.key).unwrap());
            let pt = decrypt_block(&block_from_hex(vector.cipher).unwrap(), &round_keys);
            assert_eq!(hex::encode(pt), vector.plain, "key {}", vector.key);
        }
    }

    #[test]
    fn expand_key_128_matches_appendix_a1() {
        let key = AesKey::from_hex("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let round_keys = expand_key(&key);
        assert_eq!(round_keys.key_size(), KeySize::Aes128);
        assert_eq!(round_keys.round_keys().len(), 11);
        assert_eq!(
            schedule_words(&round_keys, 0),
            [0x2b7e_1516, 0x28ae_d2a6, 0xabf7_1588, 0x09cf_4f3c]
        );
        assert_eq!(schedule_words(&round_keys, 1)[..2], [0xa0fa_fe17, 0x8854_2cb1]);
        assert_eq!(
            schedule_words(&round_keys, 10),
            [0xd014_f9a8, 0xc9ee_2589, 0xe13f_0cc8, 0xb663_0ca6]
        );
    }

    #[test]
    fn expand_key_192_matches_appendix_a2() {
        let key = AesKey::from_hex("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b").unwrap();
        let round_keys = expand_key(&key);
        assert_eq!(round_keys.round_keys().len(), 13);
        assert_eq!(schedule_words(&round_keys, 0)[..2], [0x8e73_b0f7, 0xda0e_6452]);
        // w[6] and w[7] are the first two words derived from the key.
        assert_eq!(schedule_words(&round_keys, 1)[2..], [0xfe0c_91f7, 0x2402_f5a5]);
        assert_eq!(
            schedule_words(&round_keys, 12),
            [0xe98b_a06f, 0x448c_773c, 0x8ecc_7204, 0x0100_2202]
        );
    }

    #[test]
    fn expand_key_256_matches_appendix_a3() {
        let key = AesKey::from_hex(
            "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        )
        .unwrap();
        let round_keys = expand_key(&key);
        assert_eq!(round_keys.round_keys().len(), 15);
        assert_eq!(schedule_words(&round_keys, 0)[..2], [0x603d_eb10, 0x15ca_71be]);
        assert_eq!(schedule_words(&round_keys, 2)[..2], [0x9ba3_5411, 0x8e69_25af]);
        assert_eq!(
            schedule_words(&round_keys, 14),
            [0xfe48_90d1, 0xe618_8d0b, 0x046d_f344, 0x706c_631e]
        );
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        for _ in 0..100 {
            let mut key_bytes = [0u8; 32];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            for len in [16usize, 24, 32] {
                let key = AesKey::try_from(&key_bytes[..len]).unwrap();
                let rks = expand_key(&key);
                let ct = encrypt_block(&block, &rks);
                assert_ne!(ct, block);
                let pt = decrypt_block(&ct, &rks);
                assert_eq!(pt, block);
            }
        }
    }

    #[test]
    fn state_api_agrees_with_block_api() {
        let key = AesKey::from([0x42u8; 24]);
        let rks = expand_key(&key);
        let block = block_from_hex("00112233445566778899aabbccddeeff").unwrap();
        let state = encrypt_state(State::from_block(&block), &rks);
        assert_eq!(state.to_block(), encrypt_block(&block, &rks));
        assert_eq!(decrypt_state(state, &rks).to_block(), block);
    }

    #[test]
    fn aes_processes_blocks_independently() {
        let aes = Aes::new(&AesKey::from_hex("000102030405060708090a0b0c0d0e0f").unwrap());
        let plain = block_from_hex("00112233445566778899aabbccddeeff").unwrap();
        let mut blocks = [plain; 3];
        aes.encrypt_blocks(&mut blocks);
        for block in &blocks {
            assert_eq!(hex::encode(block), "69c4e0d86a7b0430d8cdb78070b4c55a");
        }
        aes.decrypt_blocks(&mut blocks);
        assert_eq!(blocks, [plain; 3]);
        assert_eq!(aes.schedule().rounds(), 10);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn schedule_serialize_roundtrip() {
        let round_keys = expand_key(&AesKey::from([7u8; 32]));
        let bytes = bincode::serialize(&round_keys).expect("serialize");
        let decoded: RoundKeySchedule = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(decoded, round_keys);
        assert_eq!(decoded.key_size(), KeySize::Aes256);
    }
}
