//! Key-length classes and the expanded round-key schedule.

use core::fmt;

use crate::error::{KeyError, Result};
use crate::state::Block;
use crate::word::Word;

/// State width in 32-bit words.
pub const NB: usize = 4;

/// AES key-length class; fixes both Nk and Nr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key: Nk = 4, Nr = 10.
    Aes128,
    /// 192-bit key: Nk = 6, Nr = 12.
    Aes192,
    /// 256-bit key: Nk = 8, Nr = 14.
    Aes256,
}

impl KeySize {
    /// Resolves a raw Nk value.
    pub fn from_nk(nk: usize) -> Result<Self> {
        match nk {
            4 => Ok(Self::Aes128),
            6 => Ok(Self::Aes192),
            8 => Ok(Self::Aes256),
            other => Err(KeyError::InvalidKeyClass(other)),
        }
    }

    /// Key length in 32-bit words.
    pub const fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds.
    pub const fn nr(self) -> usize {
        match self {
            Self::Aes128 => 10,
            Self::Aes192 => 12,
            Self::Aes256 => 14,
        }
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        4 * self.nk()
    }

    /// Number of words in the expanded schedule, `Nb * (Nr + 1)`.
    pub const fn schedule_len(self) -> usize {
        NB * (self.nr() + 1)
    }
}

impl TryFrom<usize> for KeySize {
    type Error = KeyError;

    fn try_from(nk: usize) -> Result<Self> {
        Self::from_nk(nk)
    }
}

/// Expanded key words, read-only once built.
///
/// Only [`crate::expand_key`] constructs a schedule, so the word count always
/// equals `key_size().schedule_len()`.
#[derive(Clone, PartialEq, Eq)]
pub struct RoundKeySchedule {
    size: KeySize,
    words: Vec<Word>,
}

impl RoundKeySchedule {
    pub(crate) fn new(size: KeySize, words: Vec<Word>) -> Self {
        debug_assert_eq!(words.len(), size.schedule_len());
        Self { size, words }
    }

    /// Key-length class the schedule was expanded for.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of cipher rounds (Nr).
    pub fn rounds(&self) -> usize {
        self.size.nr()
    }

    /// All expanded words in order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of expanded words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the round key for `round` (0..=Nr) as a column-major block.
    ///
    /// # Panics
    ///
    /// Panics if `round > Nr`.
    pub fn round_key(&self, round: usize) -> Block {
        let mut block = [0u8; 16];
        let words = &self.words[round * NB..(round + 1) * NB];
        for (column, word) in block.chunks_exact_mut(4).zip(words) {
            column.copy_from_slice(&word.to_be_bytes());
        }
        block
    }
}

impl fmt::Debug for RoundKeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeySchedule")
            .field("size", &self.size)
            .field("words", &self.words.len())
            .finish_non_exhaustive()
    }
}
