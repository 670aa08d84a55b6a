//! Bingo cards: random generation and validated custom layouts.

use core::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use super::common::BoardError;
use super::config::{in_range, CELL_COUNT, GRID_SIZE, MIN_NUMBER};
use super::lines::Line;
use super::number_set::NumberSet;

/// A 5x5 card holding each of its 25 numbers exactly once.
///
/// Cards are immutable; a new game builds a new card.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Shuffle `1..=25` uniformly (Fisher-Yates) and lay it out row-major.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut numbers: [u8; CELL_COUNT] = core::array::from_fn(|i| MIN_NUMBER + i as u8);
        numbers.shuffle(rng);
        Self::row_major(numbers)
    }

    /// Parse and lay out 25 raw values typed by a player.
    ///
    /// Tokens are trimmed and must be integers in `1..=25` with no repeats.
    /// The count is checked first, then cells in order; the first problem
    /// found is returned.
    pub fn from_custom<S: AsRef<str>>(inputs: &[S]) -> Result<Self, BoardError> {
        if inputs.len() != CELL_COUNT {
            return Err(BoardError::WrongCount {
                found: inputs.len(),
            });
        }
        let mut numbers = [0u8; CELL_COUNT];
        for (index, raw) in inputs.iter().enumerate() {
            let value: i64 = raw
                .as_ref()
                .trim()
                .parse()
                .map_err(|_| BoardError::NonNumericInput { index })?;
            if !in_range(value) {
                return Err(BoardError::OutOfRange { index, value });
            }
            numbers[index] = value as u8;
        }
        Self::from_numbers(numbers)
    }

    /// Lay out already-typed numbers row-major after checking range and
    /// uniqueness.
    pub fn from_numbers(numbers: [u8; CELL_COUNT]) -> Result<Self, BoardError> {
        let mut seen = NumberSet::new();
        for (index, &n) in numbers.iter().enumerate() {
            match seen.insert(n) {
                Ok(true) => {}
                Ok(false) => return Err(BoardError::DuplicateValue { value: n }),
                Err(_) => {
                    return Err(BoardError::OutOfRange {
                        index,
                        value: n as i64,
                    })
                }
            }
        }
        // 25 in-range inserts with no repeat means the set is exactly 1..=25
        debug_assert!(seen.is_full());
        Ok(Self::row_major(numbers))
    }

    fn row_major(numbers: [u8; CELL_COUNT]) -> Self {
        let cells = core::array::from_fn(|r| core::array::from_fn(|c| numbers[r * GRID_SIZE + c]));
        Board { cells }
    }

    /// Rows of the card.
    pub fn cells(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Number at (row, col), or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Numbers in row-major order.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// The five numbers making up `line`.
    pub fn line(&self, line: Line) -> [u8; GRID_SIZE] {
        let coords = line.cells();
        core::array::from_fn(|i| {
            let (r, c) = coords[i];
            self.cells[r][c]
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.iter()).finish()
    }
}
