//! Runs the FIPS-197 Appendix B example and prints the expanded schedule.

use anyhow::{ensure, Context, Result};
use fips197_core::{encrypt_block, expand_key, KeySize};

const KEY_HEX: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const PLAINTEXT_HEX: &str = "3243f6a8885a308d313198a2e0370734";
const EXPECTED_HEX: &str = "3925841d02dc09fbdc118597196a0b32";

fn main() -> Result<()> {
    let key = hex::decode(KEY_HEX).context("decode key hex")?;
    let plaintext: [u8; 16] = hex::decode(PLAINTEXT_HEX)
        .context("decode plaintext hex")?
        .try_into()
        .map_err(|_| anyhow::anyhow!("plaintext must be 16 bytes"))?;

    let schedule = expand_key(&key, KeySize::Aes128).context("expand key")?;
    for (i, word) in schedule.words().iter().enumerate() {
        println!("w[{i:2}] = {word}");
    }

    let ciphertext = encrypt_block(&plaintext, &schedule);
    println!("key:        {KEY_HEX}");
    println!("plaintext:  {PLAINTEXT_HEX}");
    println!("ciphertext: {}", hex::encode(ciphertext));
    ensure!(
        hex::encode(ciphertext) == EXPECTED_HEX,
        "ciphertext does not match FIPS-197 Appendix B"
    );
    Ok(())
}
