//! MNK Game - generalized tic-tac-toe on the console.
//!
//! The rules and the computer opponents live in [`mnk_core`]; this crate
//! adds everything around them: configuration, the command line, players
//! that read moves from a text stream, the turn loop and board rendering.
//!
//! # Example
//!
//! ```
//! use mnk_game::{GameConfig, play_mnk};
//! use mnk_core::{Difficulty, Outcome, Player};
//! use std::io::Cursor;
//!
//! // Human plays X on a 2 x 2 board needing two in a row, and opens at 1.
//! let config = GameConfig::new(2, 2, 2, Player::X, Difficulty::Easy);
//! let mut output = Vec::new();
//! let result = play_mnk(&config, Cursor::new("1\n2\n"), &mut output)?;
//! assert_eq!(result, Outcome::Winner(Player::X));
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod players;
mod render;
mod session;

pub use cli::{BoardArgs, Cli, Command};
pub use config::{ConfigError, GameConfig, MAX_COLS};
pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use render::render_board;
pub use session::{play_mnk, watch};
