#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod engine;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;

pub use engine::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player::{
    bingo_banner, parse_command, print_board, print_player_view, AutoPlayer, CliPlayer, Command,
    Player, Table, TableEvent,
};
