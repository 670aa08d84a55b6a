use alloc::boxed::Box;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    engine::{Board, GameSession, GameSnapshot, Mode, MoveReport, PendingMove, TableConfig},
    player::{Command, Player, TableEvent},
};

enum Wake {
    Timer,
    Command(Command),
}

/// Runs one human-side [`Player`] against a [`GameSession`].
///
/// Human commands are applied synchronously. The computer's reply waits out
/// `think_delay` on a tokio timer that races the player's next command, so a
/// restart or quit during the delay drops the owed move.
pub struct Table {
    player: Box<dyn Player>,
    session: GameSession,
    config: TableConfig,
    rng: SmallRng,
    pending: Option<PendingMove>,
}

impl Table {
    /// Set up the first game. Custom tables keep asking the player for a
    /// card until one validates.
    pub async fn start(
        mut player: Box<dyn Player>,
        config: TableConfig,
        mut rng: SmallRng,
    ) -> anyhow::Result<Self> {
        let session = match (config.mode, config.custom_board) {
            (Mode::Solo, false) => {
                GameSession::new(Board::random(&mut rng), None, config.difficulty)
            }
            (Mode::Solo, true) => {
                let board = setup_custom(player.as_mut()).await?;
                GameSession::new(board, None, config.difficulty)
            }
            (Mode::VsComputer, false) => GameSession::vs_computer(&mut rng, config.difficulty),
            (Mode::VsComputer, true) => {
                let board = setup_custom(player.as_mut()).await?;
                GameSession::new(board, Some(Board::random(&mut rng)), config.difficulty)
            }
        };
        info!(
            "table ready: {:?}, difficulty {}, custom card {}",
            config.mode,
            session.difficulty(),
            config.custom_board
        );
        Ok(Self {
            player,
            session,
            config,
            rng,
            pending: None,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns `true` while a computer move is owed.
    pub fn has_pending_move(&self) -> bool {
        self.pending.is_some()
    }

    /// Play until the player quits; returns the final view.
    pub async fn run(&mut self) -> anyhow::Result<GameSnapshot> {
        loop {
            let Some(pending) = self.pending.take() else {
                let view = self.session.snapshot();
                let cmd = self.player.next_command(&view).await?;
                if !self.handle_command(cmd).await? {
                    break;
                }
                continue;
            };

            self.player.handle_event(&TableEvent::ComputerThinking);
            let mut pending = Some(pending);
            let delay = tokio::time::sleep(self.config.think_delay);
            tokio::pin!(delay);
            while pending.is_some() {
                let view = self.session.snapshot();
                let wake = tokio::select! {
                    _ = &mut delay => Wake::Timer,
                    cmd = self.player.next_command(&view) => Wake::Command(cmd?),
                };
                match wake {
                    Wake::Timer => {
                        if let Some(ticket) = pending.take() {
                            self.play_computer(ticket);
                        }
                    }
                    Wake::Command(Command::Restart) => {
                        // the owed move dies with the old game
                        pending = None;
                        self.restart().await?;
                    }
                    Wake::Command(Command::Quit) => return Ok(self.session.snapshot()),
                    Wake::Command(cmd) => {
                        // marks and difficulty changes are refused mid-turn
                        self.handle_command(cmd).await?;
                    }
                }
            }
        }
        Ok(self.session.snapshot())
    }

    /// Apply one command; returns `false` when the player quits.
    async fn handle_command(&mut self, cmd: Command) -> anyhow::Result<bool> {
        debug!("command {:?}", cmd);
        match cmd {
            Command::Mark(n) => match self.session.apply_human_move(n) {
                Ok(report) => {
                    self.pending = self.publish(report);
                }
                Err(e) => self.player.handle_event(&TableEvent::Rejected(e)),
            },
            Command::SetDifficulty(d) => match self.session.set_difficulty(d) {
                Ok(()) => self.player.handle_event(&TableEvent::DifficultyChanged(d)),
                Err(e) => self.player.handle_event(&TableEvent::Rejected(e)),
            },
            Command::Restart => self.restart().await?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn play_computer(&mut self, ticket: PendingMove) {
        match self.session.apply_computer_move(ticket, &mut self.rng) {
            Ok(report) => {
                self.pending = self.publish(report);
            }
            Err(e) => self.player.handle_event(&TableEvent::Rejected(e)),
        }
    }

    fn publish(&mut self, report: MoveReport) -> Option<PendingMove> {
        if let Some(mark) = report.mark {
            self.player.handle_event(&TableEvent::Marked {
                mark,
                player_lines: report.player_lines,
                computer_lines: report.computer_lines,
            });
        }
        if self.session.is_over() {
            self.player.handle_event(&TableEvent::GameOver(report.status));
        }
        report.pending
    }

    async fn restart(&mut self) -> anyhow::Result<()> {
        self.pending = None;
        if self.config.custom_board {
            let board = setup_custom(self.player.as_mut()).await?;
            match self.config.mode {
                Mode::VsComputer => self.session.restart_custom(board, &mut self.rng),
                Mode::Solo => {
                    self.session = GameSession::new(board, None, self.session.difficulty())
                }
            }
        } else {
            self.session.restart(&mut self.rng);
        }
        self.player.handle_event(&TableEvent::Restarted);
        Ok(())
    }
}

/// Ask for a custom card until the input validates.
async fn setup_custom(player: &mut dyn Player) -> anyhow::Result<Board> {
    loop {
        let inputs = player.board_inputs().await?;
        match Board::from_custom(&inputs) {
            Ok(board) => return Ok(board),
            Err(e) => {
                debug!("custom card rejected: {}", e);
                player.handle_event(&TableEvent::SetupRejected(e));
            }
        }
    }
}
