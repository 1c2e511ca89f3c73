//! FIPS-197 AES forward cipher for 128-, 192- and 256-bit keys.
//!
//! This crate follows FIPS-197 closely and provides:
//! - Key expansion for all three key sizes into a read-only [`RoundKeySchedule`].
//! - Single-block encryption driven by that schedule.
//!
//! Decryption, modes of operation and padding live outside this crate. Table
//! lookups are not constant time; do not treat this as side-channel hardened.
//!
//! ```
//! use fips197_core::{encrypt_block, expand_key, KeySize};
//!
//! let key = [0u8; 16];
//! let schedule = expand_key(&key, KeySize::Aes128)?;
//! let ciphertext = encrypt_block(&[0u8; 16], &schedule);
//! assert_eq!(ciphertext[0], 0x66);
//! # Ok::<(), fips197_core::KeyError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;
mod schedule;
mod state;
mod word;

pub use crate::cipher::{encrypt_block, encrypt_block_with_key, Aes};
pub use crate::error::{KeyError, Result};
pub use crate::gf::xtime;
pub use crate::key::{KeySize, RoundKeySchedule, NB};
pub use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
pub use crate::sbox::sbox;
pub use crate::schedule::{expand_key, expand_key_nk};
pub use crate::state::{Block, State};
pub use crate::word::Word;
