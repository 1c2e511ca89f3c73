//! 32-bit key-schedule words.

use core::fmt;
use core::ops::{BitXor, Index};

use crate::gf::rcon;
use crate::sbox::sbox;

/// Four bytes `b3 b2 b1 b0`, most significant first.
///
/// Indexing follows significance: `word[0]` is `b0`, `word[3]` is `b3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Word([u8; 4]);

impl Word {
    /// Builds a word from its bytes, most significant first.
    pub const fn new(b3: u8, b2: u8, b1: u8, b0: u8) -> Self {
        Self([b3, b2, b1, b0])
    }

    /// Builds a word from four key bytes in stream order.
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Returns the bytes most significant first.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0
    }

    /// RotWord: `b3 b2 b1 b0` becomes `b2 b1 b0 b3`.
    pub fn rot_word(self) -> Self {
        let [b3, b2, b1, b0] = self.0;
        Self([b2, b1, b0, b3])
    }

    /// SubWord: applies the S-box to every byte.
    pub fn sub_word(self) -> Self {
        Self(self.0.map(sbox))
    }

    /// Round constant word `(rcon(k), 0, 0, 0)`.
    pub fn rcon(k: usize) -> Self {
        Self::new(rcon(k), 0, 0, 0)
    }
}

impl From<u32> for Word {
    fn from(value: u32) -> Self {
        Self(value.to_be_bytes())
    }
}

impl From<Word> for u32 {
    fn from(word: Word) -> Self {
        u32::from_be_bytes(word.0)
    }
}

impl BitXor for Word {
    type Output = Word;

    fn bitxor(self, rhs: Word) -> Word {
        let [a3, a2, a1, a0] = self.0;
        let [b3, b2, b1, b0] = rhs.0;
        Word::new(a3 ^ b3, a2 ^ b2, a1 ^ b1, a0 ^ b0)
    }
}

impl Index<usize> for Word {
    type Output = u8;

    fn index(&self, i: usize) -> &u8 {
        assert!(i < 4, "word byte index {i} out of range");
        &self.0[3 - i]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b3, b2, b1, b0] = self.0;
        write!(f, "{b3:02x} {b2:02x} {b1:02x} {b0:02x}")
    }
}

impl fmt::LowerHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
