//! Pure game logic for MNK games: generalized tic-tac-toe on an R×C board
//! won by k marks in a row.
//!
//! # Architecture
//!
//! - **Board**: immutable grid, validity predicates, 1-based positions
//! - **Geometry**: row, column, diagonal and neighbourhood queries
//! - **Rules**: k-run detection and end-of-game detection
//! - **Ordering**: center-first ordering of candidate cells
//! - **Strategy**: easy, normal and hard computer players
//!
//! Nothing here performs I/O. Every move returns a new [`Board`].
//!
//! # Example
//!
//! ```
//! use mnk_core::{Board, Difficulty, Player, choose_move, is_game_over};
//!
//! # fn main() -> Result<(), mnk_core::InvalidArgument> {
//! let board = Board::new(3, 3)?;
//! let pos = choose_move(&board, Player::X, 3, Difficulty::Easy)?;
//! assert_eq!(pos, 5);
//! let board = board.apply_move(pos, Player::X)?;
//! assert!(!is_game_over(&board, 3)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod geometry;
mod ordering;
mod parse;
pub mod rules;
pub mod strategy;
mod types;

pub use board::{
    Board, MAX_POSITION, MAX_ROWS, MIN_ROWS, Position, is_board, is_position, is_position_token,
};
pub use error::{InvalidArgument, ParseError};
pub use geometry::{Lines, adjacent_positions, column_of, diagonals_of, lines_of, row_of};
pub use ordering::{center_distance, order_by_center_distance};
pub use parse::{parse_move, parse_move_on};
pub use rules::{has_k_run, is_game_over, longest_run_through, outcome, winner};
pub use strategy::{Easy, Hard, Normal, Strategy, choose_move};
pub use types::{Difficulty, Outcome, Player, Square};
