use std::time::Duration;

use bingo::{init_logging, AutoPlayer, Difficulty, GameStatus, Mode, Side, Table, TableConfig};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!(
            "Usage: {} <seed> [computer-difficulty] [player-difficulty]",
            args[0]
        );
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let computer: Difficulty = match args.get(2) {
        Some(s) => s.parse()?,
        None => Difficulty::Hard,
    };
    let human: Difficulty = match args.get(3) {
        Some(s) => s.parse()?,
        None => Difficulty::Easy,
    };

    let player = AutoPlayer::new(human, SmallRng::seed_from_u64(seed.wrapping_add(1)));
    let config = TableConfig {
        mode: Mode::VsComputer,
        custom_board: false,
        difficulty: computer,
        think_delay: Duration::ZERO,
    };
    let mut table = Table::start(Box::new(player), config, SmallRng::seed_from_u64(seed)).await?;
    let last = table.run().await?;

    let winner = match last.status {
        GameStatus::Won(Side::Player) => Some("player"),
        GameStatus::Won(Side::Computer) => Some("computer"),
        GameStatus::Drawn => Some("draw"),
        GameStatus::InProgress => None,
    };

    let result = json!({
        "seed": seed,
        "computer_difficulty": computer.to_string(),
        "player_difficulty": human.to_string(),
        "marks": last.history.len(),
        "player_lines": last.player_lines,
        "computer_lines": last.computer_lines,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
