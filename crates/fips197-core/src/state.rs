//! The 4x4 cipher state.

use core::fmt;

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// Column-major 4x4 byte matrix; `(row, col)` lives at `row + 4 * col`.
///
/// Because input byte `i` lands at `(i % 4, i / 4)`, the backing array is the
/// block itself and conversion in both directions is a copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State([u8; 16]);

#[inline]
const fn idx(row: usize, col: usize) -> usize {
    row + 4 * col
}

impl State {
    /// Loads a block by column-major fill.
    pub const fn from_block(block: &Block) -> Self {
        Self(*block)
    }

    /// Writes the state back out; `(row, col)` goes to output index `4 * col + row`.
    pub const fn to_block(&self) -> Block {
        self.0
    }

    /// Byte at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[idx(row, col)]
    }

    /// Overwrites the byte at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.0[idx(row, col)] = value;
    }

    /// Column `col`, top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        let start = idx(0, col);
        [
            self.0[start],
            self.0[start + 1],
            self.0[start + 2],
            self.0[start + 3],
        ]
    }

    /// Replaces column `col`.
    #[inline]
    pub fn set_column(&mut self, col: usize, column: [u8; 4]) {
        let start = idx(0, col);
        self.0[start..start + 4].copy_from_slice(&column);
    }

    /// Cyclically rotates row `row` left by `n` positions.
    pub fn rotate_row_left(&mut self, row: usize, n: usize) {
        let mut values = [0u8; 4];
        for (col, value) in values.iter_mut().enumerate() {
            *value = self.get(row, col);
        }
        values.rotate_left(n % 4);
        for (col, value) in values.into_iter().enumerate() {
            self.set(row, col, value);
        }
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8; 16] {
        &mut self.0
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:02x} {:02x} {:02x} {:02x}",
                self.get(row, 0),
                self.get(row, 1),
                self.get(row, 2),
                self.get(row, 3)
            )?;
        }
        Ok(())
    }
}
