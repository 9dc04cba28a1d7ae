//! Computer move selection.
//!
//! Three stateless policies, one per [`Difficulty`]. Each call looks only at
//! the board it is given and returns a free position for `player`.

mod easy;
mod hard;
mod normal;

pub use easy::Easy;
pub use hard::Hard;
pub use normal::Normal;

use tracing::instrument;

use crate::rules::is_game_over;
use crate::{Board, Difficulty, InvalidArgument, Player, Position};

/// A computer move-selection policy.
pub trait Strategy {
    /// Picks a free position for `player` to mark.
    ///
    /// Fails when `k` is zero or the game on `board` is already over.
    fn choose(&self, board: &Board, player: Player, k: usize) -> Result<Position, InvalidArgument>;

    /// Difficulty tier this policy implements.
    fn difficulty(&self) -> Difficulty;
}

impl Difficulty {
    /// The policy for this tier.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Difficulty::Easy => &Easy,
            Difficulty::Normal => &Normal,
            Difficulty::Hard => &Hard,
        }
    }
}

/// Picks a move for `player` at the given difficulty.
#[track_caller]
#[instrument(skip(board), fields(rows = board.rows(), cols = board.cols()))]
pub fn choose_move(
    board: &Board,
    player: Player,
    k: usize,
    difficulty: Difficulty,
) -> Result<Position, InvalidArgument> {
    difficulty.strategy().choose(board, player, k)
}

/// Rejects a zero `k` and boards whose game is already decided.
#[track_caller]
fn ensure_playable(
    board: &Board,
    k: usize,
    operation: &'static str,
) -> Result<(), InvalidArgument> {
    if k == 0 {
        return Err(InvalidArgument::new(operation, "k must be positive"));
    }
    if is_game_over(board, k)? {
        return Err(InvalidArgument::new(operation, "the game is already over"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_tier_rejects_finished_games() {
        let board = Board::from_values(&[[1i8, 1, 1], [-1, -1, 0], [0, 0, 0]]).unwrap();
        for difficulty in Difficulty::iter() {
            assert!(choose_move(&board, Player::O, 3, difficulty).is_err());
        }
    }

    #[test]
    fn test_every_tier_rejects_zero_k() {
        let board = Board::new(3, 3).unwrap();
        for difficulty in Difficulty::iter() {
            assert!(choose_move(&board, Player::X, 0, difficulty).is_err());
        }
    }

    #[test]
    fn test_every_tier_returns_a_free_cell() {
        let board = Board::from_values(&[[1i8, -1, 0], [0, 1, 0], [-1, 0, 0]]).unwrap();
        for difficulty in Difficulty::iter() {
            let pos = choose_move(&board, Player::O, 3, difficulty).unwrap();
            assert!(board.is_free(pos), "{difficulty} chose taken cell {pos}");
            assert_eq!(difficulty.strategy().difficulty(), difficulty);
        }
    }
}
