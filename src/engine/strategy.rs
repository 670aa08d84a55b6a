//! Computer opponent move selection.
//!
//! Each difficulty maps to one [`Strategy`] implementation. The two smarter
//! strategies reuse [`find_line_completion_candidates`] instead of scanning
//! lines themselves.

use core::fmt;
use core::str::FromStr;

use rand::rngs::SmallRng;
use rand::Rng;

use super::board::Board;
use super::common::NoMoveAvailable;
use super::config::CANDIDATE_THRESHOLD;
use super::lines::find_line_completion_candidates;
use super::number_set::NumberSet;

/// Opponent strength chosen before the first mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Uniformly random unmarked number.
    #[default]
    Easy,
    /// Finish its own nearly complete lines, otherwise random.
    Medium,
    /// Finish its own lines, then pre-empt the opponent's, otherwise random.
    Hard,
}

impl Difficulty {
    /// Strategy implementing this difficulty.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Difficulty::Easy => &RandomStrategy,
            Difficulty::Medium => &MediumStrategy,
            Difficulty::Hard => &HardStrategy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("easy"),
            Difficulty::Medium => f.write_str("medium"),
            Difficulty::Hard => f.write_str("hard"),
        }
    }
}

/// Unrecognised difficulty name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDifficultyError;

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of: easy, medium, hard")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("easy") || s.eq_ignore_ascii_case("random") {
            Ok(Difficulty::Easy)
        } else if s.eq_ignore_ascii_case("medium") {
            Ok(Difficulty::Medium)
        } else if s.eq_ignore_ascii_case("hard") {
            Ok(Difficulty::Hard)
        } else {
            Err(ParseDifficultyError)
        }
    }
}

/// Picks the computer's next number.
pub trait Strategy: Sync {
    /// Choose an unmarked number for the side owning `own`.
    ///
    /// `opponent` is the other card in play, if any. Returns
    /// [`NoMoveAvailable`] only when every number is already marked.
    fn select_move(
        &self,
        rng: &mut SmallRng,
        own: &Board,
        opponent: Option<&Board>,
        marked: NumberSet,
    ) -> Result<u8, NoMoveAvailable>;
}

/// Uniform choice among the members of `set`.
pub fn pick_uniform<R: Rng + ?Sized>(set: NumberSet, rng: &mut R) -> Option<u8> {
    if set.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..set.len());
    set.nth(idx)
}

/// Easy: any unmarked number.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_move(
        &self,
        rng: &mut SmallRng,
        _own: &Board,
        _opponent: Option<&Board>,
        marked: NumberSet,
    ) -> Result<u8, NoMoveAvailable> {
        pick_uniform(marked.complement(), rng).ok_or(NoMoveAvailable)
    }
}

/// Medium: complete one of its own lines when possible.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediumStrategy;

impl Strategy for MediumStrategy {
    fn select_move(
        &self,
        rng: &mut SmallRng,
        own: &Board,
        opponent: Option<&Board>,
        marked: NumberSet,
    ) -> Result<u8, NoMoveAvailable> {
        let candidates = find_line_completion_candidates(own, marked, CANDIDATE_THRESHOLD);
        match pick_uniform(candidates, rng) {
            Some(n) => Ok(n),
            None => RandomStrategy.select_move(rng, own, opponent, marked),
        }
    }
}

/// Hard: complete its own line, else take the number that would complete
/// the opponent's.
///
/// The marked set is shared, so the "block" also completes the opponent's
/// line; it pre-empts the number rather than denying it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardStrategy;

impl Strategy for HardStrategy {
    fn select_move(
        &self,
        rng: &mut SmallRng,
        own: &Board,
        opponent: Option<&Board>,
        marked: NumberSet,
    ) -> Result<u8, NoMoveAvailable> {
        let own_candidates = find_line_completion_candidates(own, marked, CANDIDATE_THRESHOLD);
        if let Some(n) = pick_uniform(own_candidates, rng) {
            return Ok(n);
        }
        if let Some(opp) = opponent {
            let blocks = find_line_completion_candidates(opp, marked, CANDIDATE_THRESHOLD);
            if let Some(n) = pick_uniform(blocks, rng) {
                return Ok(n);
            }
        }
        RandomStrategy.select_move(rng, own, opponent, marked)
    }
}

/// Select the computer's move for `difficulty`.
pub fn select_move(
    rng: &mut SmallRng,
    own: &Board,
    opponent: Option<&Board>,
    marked: NumberSet,
    difficulty: Difficulty,
) -> Result<u8, NoMoveAvailable> {
    difficulty.strategy().select_move(rng, own, opponent, marked)
}
