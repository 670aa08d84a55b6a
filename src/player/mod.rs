//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AutoPlayer: picks the human side's numbers with a computer strategy
//! - CliPlayer: interactive command-line player
//! - Table: orchestrator combining Player + GameSession + thinking timer

use alloc::string::String;
use alloc::vec::Vec;

use crate::engine::{BoardError, Difficulty, GameSnapshot, GameStatus, Mark, MoveError};

/// What the human side asks the table to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Mark(u8),
    Restart,
    SetDifficulty(Difficulty),
    Quit,
}

/// Notifications the table sends back to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A number was called, by either side.
    Marked {
        mark: Mark,
        player_lines: u8,
        computer_lines: Option<u8>,
    },
    /// The computer owes a move and is waiting out the delay.
    ComputerThinking,
    /// A command was refused; the session is unchanged.
    Rejected(MoveError),
    /// Custom card input did not validate; setup continues.
    SetupRejected(BoardError),
    DifficultyChanged(Difficulty),
    Restarted,
    GameOver(GameStatus),
}

/// Interface implemented by the human side of a table.
///
/// A Player is responsible for:
/// - Supplying raw numbers for a custom card
/// - Choosing the next command given the current view
/// - Reacting to table events
#[async_trait::async_trait]
pub trait Player: Send {
    /// Raw values for a custom card, row-major.
    async fn board_inputs(&mut self) -> anyhow::Result<Vec<String>>;

    /// Next command. Also polled while the computer is thinking, so
    /// implementations must be cancel safe.
    async fn next_command(&mut self, view: &GameSnapshot) -> anyhow::Result<Command>;

    /// Inform the player of something that happened at the table.
    fn handle_event(&mut self, _event: &TableEvent) {}
}

pub mod auto;
pub use auto::AutoPlayer;

pub mod cli;
pub use cli::{bingo_banner, parse_command, print_board, print_player_view, CliPlayer};

pub mod table;
pub use table::Table;
