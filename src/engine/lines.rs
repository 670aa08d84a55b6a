//! Line analysis shared by scoring and the computer opponent.
//!
//! A card has twelve lines: five rows, five columns, the main diagonal
//! (`[i][i]`) and the anti-diagonal (`[i][4 - i]`). No heap allocation.

use super::board::Board;
use super::config::{BINGO_TARGET, GRID_SIZE, LINE_COUNT};
use super::number_set::NumberSet;

/// One of the twelve scoring lines of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Line {
    Row(u8),
    Column(u8),
    MainDiagonal,
    AntiDiagonal,
}

impl Line {
    /// Every line in scan order: rows, columns, main then anti diagonal.
    pub const ALL: [Line; LINE_COUNT] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Row(3),
        Line::Row(4),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Column(3),
        Line::Column(4),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// (row, col) coordinates covered by the line.
    pub fn cells(self) -> [(usize, usize); GRID_SIZE] {
        core::array::from_fn(|i| match self {
            Line::Row(r) => (r as usize, i),
            Line::Column(c) => (i, c as usize),
            Line::MainDiagonal => (i, i),
            Line::AntiDiagonal => (i, GRID_SIZE - 1 - i),
        })
    }
}

/// How many of `line`'s numbers are marked.
pub fn marked_in_line(board: &Board, line: Line, marked: NumberSet) -> usize {
    board
        .line(line)
        .iter()
        .filter(|&&n| marked.contains(n))
        .count()
}

/// Lines of `board` whose every number is marked.
pub fn completed_lines(board: &Board, marked: NumberSet) -> impl Iterator<Item = Line> + '_ {
    Line::ALL
        .into_iter()
        .filter(move |&line| marked_in_line(board, line, marked) == GRID_SIZE)
}

/// Completed lines on `board`, capped at [`BINGO_TARGET`].
///
/// A fully marked card completes all twelve lines but still reports 5.
pub fn count_completed_lines(board: &Board, marked: NumberSet) -> u8 {
    let count = completed_lines(board, marked).count();
    count.min(BINGO_TARGET as usize) as u8
}

/// Unmarked numbers of every line holding exactly `threshold` marks.
///
/// With `threshold = 4` these are the numbers that would finish a line.
/// Numbers shared by several matching lines appear once.
pub fn find_line_completion_candidates(
    board: &Board,
    marked: NumberSet,
    threshold: usize,
) -> NumberSet {
    let mut candidates = NumberSet::new();
    for line in Line::ALL {
        let numbers = board.line(line);
        if numbers.iter().filter(|&&n| marked.contains(n)).count() != threshold {
            continue;
        }
        for n in numbers.into_iter().filter(|&n| !marked.contains(n)) {
            // board numbers are always in range
            let _ = candidates.insert(n);
        }
    }
    candidates
}
