//! Computer player backed by a difficulty tier.

use super::Player;
use anyhow::Result;
use mnk_core::{Board, Difficulty, Player as Mark, Position, choose_move};
use std::io::Write;
use tracing::{debug, instrument};

/// Computer opponent.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
    mark: Mark,
    difficulty: Difficulty,
}

impl ComputerPlayer {
    /// Creates a computer player for `mark` at the given difficulty.
    pub fn new(mark: Mark, difficulty: Difficulty) -> Self {
        Self {
            name: format!("Computer ({})", difficulty),
            mark,
            difficulty,
        }
    }

    /// Difficulty this player uses.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip(self, board, out), fields(mark = %self.mark, difficulty = %self.difficulty))]
    fn next_move(&mut self, board: &Board, k: usize, out: &mut dyn Write) -> Result<Position> {
        writeln!(out, "Computer's turn ({}):", self.difficulty)?;
        let pos = choose_move(board, self.mark, k, self.difficulty)?;
        debug!(position = pos, "Computer chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announces_turn_and_moves() {
        let mut player = ComputerPlayer::new(Mark::O, Difficulty::Easy);
        let board = Board::new(3, 3).unwrap();
        let mut out = Vec::new();

        let pos = player.next_move(&board, 3, &mut out).unwrap();
        assert_eq!(pos, 5);
        assert_eq!(String::from_utf8(out).unwrap(), "Computer's turn (easy):\n");
        assert_eq!(player.name(), "Computer (easy)");
        assert!(!player.is_human());
    }

    #[test]
    fn test_finished_board_is_an_error() {
        let mut player = ComputerPlayer::new(Mark::O, Difficulty::Normal);
        let board = Board::from_values(&[[1i8, 1], [0, 0]]).unwrap();
        assert!(player.next_move(&board, 2, &mut Vec::new()).is_err());
    }
}
