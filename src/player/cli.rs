use std::io::{self, Write};
use std::string::String;
use std::vec::Vec;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::{
    engine::{
        Board, GameSnapshot, GameStatus, NumberSet, Side, TurnState, BINGO_TARGET, CELL_COUNT,
    },
    player::{Command, Player, TableEvent},
};

const BANNER: [char; BINGO_TARGET as usize] = ['B', 'I', 'N', 'G', 'O'];

/// Interactive player reading commands from stdin.
pub struct CliPlayer {
    lines: Lines<BufReader<Stdin>>,
    prompted: bool,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            prompted: false,
        }
    }

    async fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.next_line().await?)
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Banner letters lit for each completed line, e.g. `B I N _ _`.
pub fn bingo_banner(lines: u8) -> String {
    BANNER
        .iter()
        .enumerate()
        .map(|(i, &ch)| if i < lines as usize { ch } else { '_' })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse one input line into a command.
///
/// Accepts a bare number, `r`/`restart`, `q`/`quit` and `d <difficulty>`.
pub fn parse_command(input: &str) -> Option<Command> {
    let mut parts = input.split_whitespace();
    let head = parts.next()?;
    match head.to_ascii_lowercase().as_str() {
        "r" | "restart" => Some(Command::Restart),
        "q" | "quit" | "exit" => Some(Command::Quit),
        "d" | "difficulty" => parts.next()?.parse().ok().map(Command::SetDifficulty),
        _ => head.parse().ok().map(Command::Mark),
    }
}

/// Print a card; marked numbers are shown in brackets.
pub fn print_board(board: &Board, marked: NumberSet) {
    for row in board.cells().iter() {
        for &n in row.iter() {
            if marked.contains(n) {
                std::print!(" [{:>2}]", n);
            } else {
                std::print!("  {:>2} ", n);
            }
        }
        std::println!();
    }
}

/// Display the player's card and, once the game is over, the computer's.
pub fn print_player_view(view: &GameSnapshot) {
    std::println!("\nYour card   {}", bingo_banner(view.player_lines));
    print_board(&view.player_board, view.marked);
    if let (Some(board), Some(lines), true) = (
        view.computer_board.as_ref(),
        view.computer_lines,
        view.turn == TurnState::GameOver,
    ) {
        std::println!("\nComputer's card   {}", bingo_banner(lines));
        print_board(board, view.marked);
    }
}

#[async_trait::async_trait]
impl Player for CliPlayer {
    async fn board_inputs(&mut self) -> anyhow::Result<Vec<String>> {
        std::println!(
            "Enter {} numbers between 1 and {} (no repeats), separated by spaces or commas:",
            CELL_COUNT,
            CELL_COUNT
        );
        let mut values = Vec::new();
        while values.len() < CELL_COUNT {
            std::print!("{:>2}/{}> ", values.len(), CELL_COUNT);
            io::stdout().flush()?;
            let Some(line) = self.read_line().await? else {
                anyhow::bail!("input closed during card setup");
            };
            if line.trim().is_empty() {
                // an empty line submits whatever was typed so far
                break;
            }
            values.extend(
                line.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|t| !t.is_empty())
                    .map(String::from),
            );
        }
        Ok(values)
    }

    async fn next_command(&mut self, view: &GameSnapshot) -> anyhow::Result<Command> {
        loop {
            if !self.prompted && view.turn != TurnState::ComputerThinking {
                print_player_view(view);
                match view.turn {
                    TurnState::GameOver => std::print!("(r)estart or (q)uit: "),
                    _ => std::print!("Your turn, pick a number: "),
                }
                io::stdout().flush()?;
                self.prompted = true;
            }
            let Some(line) = self.read_line().await? else {
                return Ok(Command::Quit);
            };
            match parse_command(&line) {
                Some(cmd) => {
                    self.prompted = false;
                    return Ok(cmd);
                }
                None if line.trim().is_empty() => continue,
                None => {
                    std::print!(
                        "Unrecognised input '{}'. Try a number, r, d <level> or q: ",
                        line.trim()
                    );
                    io::stdout().flush()?;
                }
            }
        }
    }

    fn handle_event(&mut self, event: &TableEvent) {
        match event {
            TableEvent::Marked { mark, .. } => match mark.by {
                Side::Player => std::println!("You marked {}", mark.number),
                Side::Computer => std::println!("Computer marked {}", mark.number),
            },
            TableEvent::ComputerThinking => std::println!("Computer's turn..."),
            TableEvent::Rejected(e) => std::println!("Not allowed: {}", e),
            TableEvent::SetupRejected(e) => {
                std::println!("Please enter unique numbers between 1 and 25 in all cells ({})", e)
            }
            TableEvent::DifficultyChanged(d) => std::println!("Difficulty set to {}", d),
            TableEvent::Restarted => std::println!("New game!"),
            TableEvent::GameOver(status) => match status {
                GameStatus::Won(Side::Player) => std::println!("\nBINGO! You win!"),
                GameStatus::Won(Side::Computer) => std::println!("\nComputer wins!"),
                GameStatus::Drawn => std::println!("\nNo numbers left, it's a draw."),
                GameStatus::InProgress => {}
            },
        }
        if !matches!(event, TableEvent::ComputerThinking) {
            self.prompted = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Difficulty;

    #[test]
    fn parses_numbers_and_keywords() {
        assert_eq!(parse_command("17"), Some(Command::Mark(17)));
        assert_eq!(parse_command("  3 \n"), Some(Command::Mark(3)));
        assert_eq!(parse_command("R"), Some(Command::Restart));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(
            parse_command("d hard"),
            Some(Command::SetDifficulty(Difficulty::Hard))
        );
        assert_eq!(parse_command("d impossible"), None);
        assert_eq!(parse_command("abc"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn banner_lights_one_letter_per_line() {
        assert_eq!(bingo_banner(0), "_ _ _ _ _");
        assert_eq!(bingo_banner(3), "B I N _ _");
        assert_eq!(bingo_banner(5), "B I N G O");
    }
}
