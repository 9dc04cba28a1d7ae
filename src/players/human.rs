//! Human player reading positions from a text stream.

use super::Player;
use anyhow::Result;
use mnk_core::{Board, Position, parse_move_on};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Prompt shown before every human move.
pub const PROMPT: &str = "Player's turn. Choose a free position: ";

/// Human player typing positions, one per line.
///
/// Anything that is not a free position on the board is reported and the
/// prompt is shown again.
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    #[instrument(skip(self, board, out), fields(player = %self.name))]
    fn next_move(&mut self, board: &Board, _k: usize, out: &mut dyn Write) -> Result<Position> {
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("Input closed before a move was entered");
            }

            match parse_move_on(board, &line) {
                Ok(pos) => {
                    debug!(position = pos, "Human chose position");
                    return Ok(pos);
                }
                Err(e) => {
                    warn!(input = %line.trim(), error = %e, "Rejected move");
                    writeln!(out, "Invalid position: {}", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnk_core::Player as Mark;
    use std::io::Cursor;

    #[test]
    fn test_reads_a_move() {
        let mut player = HumanPlayer::new("Human", Cursor::new("4\n"));
        let board = Board::new(3, 3).unwrap();
        let mut out = Vec::new();
        assert_eq!(player.next_move(&board, 3, &mut out).unwrap(), 4);
        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
    }

    #[test]
    fn test_reprompts_until_valid() {
        let board = Board::new(3, 3).unwrap().apply_move(5, Mark::O).unwrap();
        let mut player = HumanPlayer::new("Human", Cursor::new("abc\n5\n42\n\n7\n"));
        let mut out = Vec::new();

        assert_eq!(player.next_move(&board, 3, &mut out).unwrap(), 7);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(PROMPT).count(), 5);
        assert!(text.contains("Invalid position: 'abc' is not a number"));
        assert!(text.contains("Invalid position: position 5 is already taken"));
        assert!(text.contains("Invalid position: position 42 is off the board"));
        assert!(text.contains("Invalid position: no position entered"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut player = HumanPlayer::new("Human", Cursor::new(""));
        let board = Board::new(2, 2).unwrap();
        assert!(player.next_move(&board, 2, &mut Vec::new()).is_err());
        assert!(player.is_human());
    }
}
