//! Property-based tests for the AES engine.

use aes_engine::gf::{double_lanes, multiply};
use aes_engine::round::{inv_mix_columns, inv_shift_rows, mix_columns, shift_rows};
use aes_engine::{decrypt_block, encrypt_block, expand_key, Aes, AesKey, State};
use proptest::prelude::*;

fn any_state() -> impl Strategy<Value = State> {
    any::<[u32; 4]>().prop_map(State)
}

proptest! {
    #[test]
    fn aes128_roundtrip(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let round_keys = expand_key(&AesKey::from(key));
        prop_assert_eq!(decrypt_block(&encrypt_block(&block, &round_keys), &round_keys), block);
    }

    #[test]
    fn aes192_roundtrip(key in any::<[u8; 24]>(), block in any::<[u8; 16]>()) {
        let aes = Aes::new(&AesKey::from(key));
        prop_assert_eq!(aes.decrypt_block(&aes.encrypt_block(&block)), block);
    }

    #[test]
    fn aes256_roundtrip(key in any::<[u8; 32]>(), block in any::<[u8; 16]>()) {
        let aes = Aes::new(&AesKey::from(key));
        prop_assert_eq!(aes.decrypt_block(&aes.encrypt_block(&block)), block);
    }

    #[test]
    fn multiply_distributes_over_xor(a in any::<u8>(), b in any::<u8>(), factor in any::<u8>()) {
        prop_assert_eq!(multiply(a, factor) ^ multiply(b, factor), multiply(a ^ b, factor));
    }

    #[test]
    fn multiply_is_associative(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
        prop_assert_eq!(multiply(multiply(a, b), c), multiply(a, multiply(b, c)));
    }

    #[test]
    fn double_lanes_is_multiply_by_two(word in any::<u32>()) {
        let expected = u32::from_be_bytes(word.to_be_bytes().map(|b| multiply(b, 2)));
        prop_assert_eq!(double_lanes(word), expected);
    }

    #[test]
    fn mix_columns_inverts(state in any_state()) {
        let mut mixed = state;
        mix_columns(&mut mixed);
        inv_mix_columns(&mut mixed);
        prop_assert_eq!(mixed, state);
    }

    #[test]
    fn shift_rows_inverts(state in any_state()) {
        let mut shifted = state;
        shift_rows(&mut shifted);
        prop_assert_eq!(shifted.0[0], state.0[0]);
        inv_shift_rows(&mut shifted);
        prop_assert_eq!(shifted, state);
    }

    #[test]
    fn transpose_is_involution(state in any_state()) {
        prop_assert_eq!(state.transpose().transpose(), state);
    }
}

#[test]
fn doubling_two_cycles_with_order_51() {
    let mut power = 2u8;
    let mut order = 1;
    while power != 1 {
        power = multiply(power, 2);
        order += 1;
    }
    assert_eq!(order, 51);
}
