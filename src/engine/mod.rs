//! Core bingo game engine (no_std compatible)
//!
//! Card generation, line scoring, the computer opponent and the session
//! state machine. Needs only `alloc` (for the mark history), `rand` and
//! `log`, so it builds without the `std` feature.

pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod lines;
pub mod number_set;
pub mod strategy;

// Re-export commonly used types
pub use board::Board;
pub use common::{BoardError, MoveError, NoMoveAvailable, Side};
pub use config::*;
pub use game::{
    GameSession, GameSnapshot, GameStatus, Mark, Mode, MoveReport, PendingMove, TurnState,
};
pub use lines::{
    completed_lines, count_completed_lines, find_line_completion_candidates, marked_in_line, Line,
};
pub use number_set::{NumberSet, NumberSetError};
pub use strategy::{
    pick_uniform, select_move, Difficulty, HardStrategy, MediumStrategy, ParseDifficultyError,
    RandomStrategy, Strategy,
};
