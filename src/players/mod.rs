//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use mnk_core::{Board, Position};
use std::io::Write;

/// Something that can pick moves: a person at the console or the computer.
pub trait Player {
    /// Gets the next move on `board`, writing any prompts to `out`.
    ///
    /// The returned position must be free on `board`.
    fn next_move(&mut self, board: &Board, k: usize, out: &mut dyn Write) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether a person is choosing the moves.
    fn is_human(&self) -> bool {
        false
    }
}
