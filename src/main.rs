#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use bingo::{init_logging, CliPlayer, Difficulty, GameStatus, Mode, Side, Table, TableConfig};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Mark numbers on a single card until you get BINGO.
    Solo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play against the computer on random cards.
    Computer {
        #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1000, help = "Computer thinking delay in milliseconds")]
        delay_ms: u64,
    },
    /// Play against the computer on a card you fill in yourself.
    Custom {
        #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1000, help = "Computer thinking delay in milliseconds")]
        delay_ms: u64,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (config, seed) = match cli.command {
        Commands::Solo { seed } => {
            println!("Solo bingo: mark numbers on your card. r = new card, q = quit.");
            (
                TableConfig {
                    mode: Mode::Solo,
                    ..TableConfig::default()
                },
                seed,
            )
        }
        Commands::Computer {
            difficulty,
            seed,
            delay_ms,
        } => {
            println!("Bingo: player vs computer ({} difficulty).", difficulty);
            (
                TableConfig {
                    mode: Mode::VsComputer,
                    custom_board: false,
                    difficulty,
                    think_delay: Duration::from_millis(delay_ms),
                },
                seed,
            )
        }
        Commands::Custom {
            difficulty,
            seed,
            delay_ms,
        } => {
            println!("Custom bingo: fill in your own card ({} difficulty).", difficulty);
            (
                TableConfig {
                    mode: Mode::VsComputer,
                    custom_board: true,
                    difficulty,
                    think_delay: Duration::from_millis(delay_ms),
                },
                seed,
            )
        }
    };

    let rng = make_rng(seed);
    let mut table = Table::start(Box::new(CliPlayer::new()), config, rng).await?;
    let last = table.run().await?;

    match last.status {
        GameStatus::Won(Side::Player) => println!("Final result: you won."),
        GameStatus::Won(Side::Computer) => println!("Final result: the computer won."),
        GameStatus::Drawn => println!("Final result: draw."),
        GameStatus::InProgress => println!("Game abandoned after {} calls.", last.history.len()),
    }
    Ok(())
}
