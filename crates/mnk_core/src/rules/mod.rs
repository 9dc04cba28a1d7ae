//! Game rules for MNK games.
//!
//! Pure functions over a [`Board`](crate::Board): run detection along the
//! four lines through a cell, and end-of-game detection built on it.

pub mod game_over;
pub mod win;

pub use game_over::{is_game_over, outcome, winner};
pub use win::{has_k_run, longest_run_through};
