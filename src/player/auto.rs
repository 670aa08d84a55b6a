use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::{
    engine::{Difficulty, GameSnapshot, TurnState, MAX_NUMBER, MIN_NUMBER},
    player::{Command, Player, TableEvent},
};

/// Plays the human side automatically using a computer strategy.
///
/// Quits as soon as the game is over and never interrupts the computer's
/// thinking delay.
pub struct AutoPlayer {
    difficulty: Difficulty,
    rng: SmallRng,
    rejected: usize,
}

impl AutoPlayer {
    pub fn new(difficulty: Difficulty, rng: SmallRng) -> Self {
        Self {
            difficulty,
            rng,
            rejected: 0,
        }
    }

    /// Commands the table refused so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

#[async_trait::async_trait]
impl Player for AutoPlayer {
    async fn board_inputs(&mut self) -> anyhow::Result<Vec<String>> {
        let mut numbers: Vec<u8> = (MIN_NUMBER..=MAX_NUMBER).collect();
        numbers.shuffle(&mut self.rng);
        Ok(numbers.iter().map(|n| n.to_string()).collect())
    }

    async fn next_command(&mut self, view: &GameSnapshot) -> anyhow::Result<Command> {
        match view.turn {
            TurnState::GameOver => Ok(Command::Quit),
            TurnState::ComputerThinking => core::future::pending().await,
            TurnState::PlayerTurn => {
                let pick = self.difficulty.strategy().select_move(
                    &mut self.rng,
                    &view.player_board,
                    view.computer_board.as_ref(),
                    view.marked,
                );
                Ok(pick.map(Command::Mark).unwrap_or(Command::Quit))
            }
        }
    }

    fn handle_event(&mut self, event: &TableEvent) {
        if let TableEvent::Rejected(e) = event {
            log::warn!("auto player command rejected: {}", e);
            self.rejected += 1;
        }
    }
}
