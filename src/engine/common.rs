//! Common types for Bingo: validation and move errors, sides of the table.

use core::fmt;

use super::config::{CELL_COUNT, MAX_NUMBER, MIN_NUMBER};

/// Owner of a board or a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Computer,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Computer => f.write_str("Computer"),
        }
    }
}

/// Errors returned when laying out a card from caller-supplied values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Not exactly `CELL_COUNT` values were supplied.
    WrongCount { found: usize },
    /// The value at `index` is not an integer.
    NonNumericInput { index: usize },
    /// The value at `index` lies outside `MIN_NUMBER..=MAX_NUMBER`.
    OutOfRange { index: usize, value: i64 },
    /// A number appears more than once.
    DuplicateValue { value: u8 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongCount { found } => {
                write!(f, "Expected {} numbers, got {}", CELL_COUNT, found)
            }
            BoardError::NonNumericInput { index } => {
                write!(f, "Cell {} does not hold a number", index + 1)
            }
            BoardError::OutOfRange { index, value } => write!(
                f,
                "Cell {} holds {}, numbers must be between {} and {}",
                index + 1,
                value,
                MIN_NUMBER,
                MAX_NUMBER
            ),
            BoardError::DuplicateValue { value } => {
                write!(f, "Number {} is used more than once", value)
            }
        }
    }
}

/// Errors returned by session commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The session already has a result; restart to play again.
    GameOver,
    /// A human mark arrived while the computer was thinking.
    NotPlayerTurn,
    /// A computer move was requested outside the computer's turn.
    NotComputerTurn,
    /// Number lies outside `MIN_NUMBER..=MAX_NUMBER`.
    OutOfRange(u8),
    /// Number has already been called this session.
    AlreadyMarked(u8),
    /// The pending move belongs to a session that has since been restarted.
    StaleMove,
    /// Difficulty cannot change once numbers are marked.
    DifficultyLocked,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "The game is over"),
            MoveError::NotPlayerTurn => write!(f, "It is not your turn"),
            MoveError::NotComputerTurn => write!(f, "It is not the computer's turn"),
            MoveError::OutOfRange(n) => write!(
                f,
                "{} is not between {} and {}",
                n, MIN_NUMBER, MAX_NUMBER
            ),
            MoveError::AlreadyMarked(n) => write!(f, "{} is already marked", n),
            MoveError::StaleMove => write!(f, "Pending move belongs to a previous game"),
            MoveError::DifficultyLocked => {
                write!(f, "Difficulty is locked until the game is over")
            }
        }
    }
}

/// Every number has been called; the computer has nothing left to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoMoveAvailable;

impl fmt::Display for NoMoveAvailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No unmarked numbers remain")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
#[cfg(feature = "std")]
impl std::error::Error for NoMoveAvailable {}
