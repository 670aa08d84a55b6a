use core::time::Duration;

use super::game::Mode;
use super::strategy::Difficulty;

/// Cards are `GRID_SIZE` x `GRID_SIZE`.
pub const GRID_SIZE: usize = 5;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Smallest and largest number that can appear on a card.
pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = CELL_COUNT as u8;

/// Rows, columns and the two diagonals.
pub const LINE_COUNT: usize = 2 * GRID_SIZE + 2;

/// Completed lines needed to win; also the cap on the reported line count.
pub const BINGO_TARGET: u8 = 5;

/// Marked cells a line must hold before the computer treats it as one move
/// away from completion.
pub const CANDIDATE_THRESHOLD: usize = GRID_SIZE - 1;

/// Pause before the computer's move is applied.
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(1000);

/// Settings a front end chooses before a table starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub mode: Mode,
    /// Ask the player for their own card instead of shuffling one.
    pub custom_board: bool,
    pub difficulty: Difficulty,
    pub think_delay: Duration,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            mode: Mode::VsComputer,
            custom_board: false,
            difficulty: Difficulty::Easy,
            think_delay: DEFAULT_THINK_DELAY,
        }
    }
}

/// Returns `true` if `n` may appear on a card.
#[inline]
pub const fn in_range(n: i64) -> bool {
    n >= MIN_NUMBER as i64 && n <= MAX_NUMBER as i64
}
