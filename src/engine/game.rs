use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::engine::{
    board::Board,
    common::{BoardError, MoveError, Side},
    config::{BINGO_TARGET, MAX_NUMBER, MIN_NUMBER},
    lines::count_completed_lines,
    number_set::NumberSet,
    strategy::Difficulty,
};

/// Ids handed to new sessions; a ticket only redeems in the session that
/// issued it.
static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// How many cards are in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// One card, marked by the player alone.
    Solo,
    /// Player and computer cards sharing one marked set.
    VsComputer,
}

/// Whose move the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum TurnState {
    PlayerTurn,
    ComputerThinking,
    GameOver,
}

/// Outcome of the session so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    InProgress,
    Won(Side),
    /// The computer had no number left to call.
    Drawn,
}

/// One called number and who called it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Mark {
    pub number: u8,
    pub by: Side,
}

/// Ticket for the computer move owed after a human mark.
///
/// Redeemed once through [`GameSession::apply_computer_move`]. A ticket
/// issued by another session, or before a restart, is refused.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "the computer's move is only applied when the ticket is redeemed"]
pub struct PendingMove {
    session: u64,
    generation: u64,
}

/// State after a mark has been applied.
#[derive(Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// `None` only when the computer found nothing left to mark.
    pub mark: Option<Mark>,
    pub player_lines: u8,
    pub computer_lines: Option<u8>,
    pub status: GameStatus,
    /// Present when the computer now owes a move.
    pub pending: Option<PendingMove>,
}

/// Everything a front end displays, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub player_board: Board,
    pub computer_board: Option<Board>,
    pub marked: NumberSet,
    pub player_lines: u8,
    pub computer_lines: Option<u8>,
    pub turn: TurnState,
    pub status: GameStatus,
    pub history: Vec<Mark>,
}

/// One game: the cards in play, the shared marked set and turn tracking.
pub struct GameSession {
    id: u64,
    difficulty: Difficulty,
    player_board: Board,
    computer_board: Option<Board>,
    marked: NumberSet,
    history: Vec<Mark>,
    turn: TurnState,
    status: GameStatus,
    generation: u64,
}

impl GameSession {
    /// Session over the given cards; a computer card makes it two-player.
    pub fn new(player_board: Board, computer_board: Option<Board>, difficulty: Difficulty) -> Self {
        Self {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            difficulty,
            player_board,
            computer_board,
            marked: NumberSet::new(),
            history: Vec::new(),
            turn: TurnState::PlayerTurn,
            status: GameStatus::InProgress,
            generation: 0,
        }
    }

    /// Single random card for self-marking.
    pub fn solo<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Board::random(rng), None, Difficulty::default())
    }

    /// Random cards for the player and the computer.
    pub fn vs_computer<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Self {
        let player = Board::random(rng);
        let computer = Board::random(rng);
        Self::new(player, Some(computer), difficulty)
    }

    /// Player card from raw input, random computer card.
    ///
    /// No session exists until the input validates.
    pub fn custom<R: Rng + ?Sized, S: AsRef<str>>(
        inputs: &[S],
        rng: &mut R,
        difficulty: Difficulty,
    ) -> Result<Self, BoardError> {
        let player = Board::from_custom(inputs)?;
        Ok(Self::new(player, Some(Board::random(rng)), difficulty))
    }

    /// Rebuild a session at a known position with the player to move.
    ///
    /// The status is evaluated immediately, so a position that already has
    /// five lines comes back as game over.
    pub fn resume(
        player_board: Board,
        computer_board: Option<Board>,
        difficulty: Difficulty,
        marked: NumberSet,
    ) -> Self {
        let mut session = Self::new(player_board, computer_board, difficulty);
        session.marked = marked;
        session.evaluate();
        session
    }

    pub fn mode(&self) -> Mode {
        if self.computer_board.is_some() {
            Mode::VsComputer
        } else {
            Mode::Solo
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> Option<&Board> {
        self.computer_board.as_ref()
    }

    /// Numbers called so far, shared by every card.
    pub fn marked(&self) -> NumberSet {
        self.marked
    }

    /// Calls in order.
    pub fn history(&self) -> &[Mark] {
        &self.history
    }

    pub fn player_lines(&self) -> u8 {
        count_completed_lines(&self.player_board, self.marked)
    }

    pub fn computer_lines(&self) -> Option<u8> {
        self.computer_board
            .as_ref()
            .map(|b| count_completed_lines(b, self.marked))
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won(side) => Some(side),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Change the opponent's strength. Locked once marks exist, until the
    /// game is over.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), MoveError> {
        if !self.marked.is_empty() && !self.is_over() {
            return Err(MoveError::DifficultyLocked);
        }
        self.difficulty = difficulty;
        Ok(())
    }

    /// Mark `number` for the human player.
    pub fn apply_human_move(&mut self, number: u8) -> Result<MoveReport, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.turn != TurnState::PlayerTurn {
            return Err(MoveError::NotPlayerTurn);
        }
        self.mark(number, Side::Player)?;

        let pending = if self.is_over() {
            None
        } else if self.computer_board.is_some() {
            self.turn = TurnState::ComputerThinking;
            Some(PendingMove {
                session: self.id,
                generation: self.generation,
            })
        } else {
            None
        };
        let mark = Mark {
            number,
            by: Side::Player,
        };
        Ok(self.report(Some(mark), pending))
    }

    /// Redeem `ticket`: let the strategy pick a number and mark it.
    ///
    /// If every number is already called the game ends drawn and the
    /// report carries no mark.
    pub fn apply_computer_move(
        &mut self,
        ticket: PendingMove,
        rng: &mut SmallRng,
    ) -> Result<MoveReport, MoveError> {
        if ticket.session != self.id || ticket.generation != self.generation {
            warn!(
                "discarding computer move from session {} game {} (current session {} game {})",
                ticket.session, ticket.generation, self.id, self.generation
            );
            return Err(MoveError::StaleMove);
        }
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.turn != TurnState::ComputerThinking {
            return Err(MoveError::NotComputerTurn);
        }
        let Some(own) = self.computer_board.as_ref() else {
            return Err(MoveError::NotComputerTurn);
        };

        let choice = self.difficulty.strategy().select_move(
            rng,
            own,
            Some(&self.player_board),
            self.marked,
        );
        let number = match choice {
            Ok(n) => n,
            Err(_) => {
                info!("no numbers left to call, game drawn");
                self.status = GameStatus::Drawn;
                self.turn = TurnState::GameOver;
                return Ok(self.report(None, None));
            }
        };
        self.mark(number, Side::Computer)?;
        if !self.is_over() {
            self.turn = TurnState::PlayerTurn;
        }
        let mark = Mark {
            number,
            by: Side::Computer,
        };
        Ok(self.report(Some(mark), None))
    }

    /// New random cards; clears marks and invalidates pending moves.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let player = Board::random(rng);
        let computer = self.computer_board.map(|_| Board::random(rng));
        self.reset(player, computer);
    }

    /// New game on a freshly validated custom card plus a random computer
    /// card.
    pub fn restart_custom<R: Rng + ?Sized>(&mut self, player_board: Board, rng: &mut R) {
        let computer = Board::random(rng);
        self.reset(player_board, Some(computer));
    }

    fn reset(&mut self, player_board: Board, computer_board: Option<Board>) {
        self.player_board = player_board;
        self.computer_board = computer_board;
        self.marked.clear();
        self.history.clear();
        self.turn = TurnState::PlayerTurn;
        self.status = GameStatus::InProgress;
        self.generation = self.generation.wrapping_add(1);
        info!("game {} started ({:?})", self.generation, self.mode());
    }

    fn mark(&mut self, number: u8, by: Side) -> Result<(), MoveError> {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&number) {
            return Err(MoveError::OutOfRange(number));
        }
        if self.marked.contains(number) {
            return Err(MoveError::AlreadyMarked(number));
        }
        self.marked
            .insert(number)
            .map_err(|_| MoveError::OutOfRange(number))?;
        self.history.push(Mark { number, by });
        debug!("{} marked {}", by, number);
        self.evaluate();
        Ok(())
    }

    /// Player card is checked before the computer card, so a simultaneous
    /// fifth line goes to the player.
    fn evaluate(&mut self) {
        let player = self.player_lines();
        let computer = self.computer_lines();
        debug!("lines: player {} computer {:?}", player, computer);
        if self.is_over() {
            return;
        }
        let winner = if player >= BINGO_TARGET {
            Some(Side::Player)
        } else if computer.is_some_and(|c| c >= BINGO_TARGET) {
            Some(Side::Computer)
        } else {
            None
        };
        if let Some(side) = winner {
            info!("{} wins after {} calls", side, self.marked.len());
            self.status = GameStatus::Won(side);
            self.turn = TurnState::GameOver;
        }
    }

    fn report(&self, mark: Option<Mark>, pending: Option<PendingMove>) -> MoveReport {
        MoveReport {
            mark,
            player_lines: self.player_lines(),
            computer_lines: self.computer_lines(),
            status: self.status,
            pending,
        }
    }

    /// Read-only view for display.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            mode: self.mode(),
            difficulty: self.difficulty,
            player_board: self.player_board,
            computer_board: self.computer_board,
            marked: self.marked,
            player_lines: self.player_lines(),
            computer_lines: self.computer_lines(),
            turn: self.turn,
            status: self.status,
            history: self.history.clone(),
        }
    }
}
