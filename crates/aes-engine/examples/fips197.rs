//! Encrypts and decrypts the FIPS-197 Appendix B block.

use aes_engine::{block_from_hex, Aes, AesKey};
use anyhow::{bail, Context, Result};

fn main() -> Result<()> {
    let key = AesKey::from_hex("2b7e151628aed2a6abf7158809cf4f3c").context("decode key")?;
    let plaintext = block_from_hex("3243f6a8885a308d313198a2e0370734").context("decode block")?;

    let aes = Aes::new(&key);
    let ciphertext = aes.encrypt_block(&plaintext);
    let decrypted = aes.decrypt_block(&ciphertext);

    println!("key:        {}", hex::encode(key.as_bytes()));
    println!("plaintext:  {}", hex::encode(plaintext));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted:  {}", hex::encode(decrypted));

    if hex::encode(ciphertext) != "3925841d02dc09fbdc118597196a0b32" {
        bail!("ciphertext does not match FIPS-197 Appendix B");
    }
    if decrypted != plaintext {
        bail!("roundtrip failed");
    }
    Ok(())
}
