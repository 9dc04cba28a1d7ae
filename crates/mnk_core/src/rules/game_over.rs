//! End-of-game detection.

use tracing::instrument;

use super::win::has_k_run;
use crate::{Board, InvalidArgument, Outcome, Player};

/// Players in the order they are checked for a winning run.
const CHECK_ORDER: [Player; 2] = [Player::O, Player::X];

#[track_caller]
fn check_k(k: usize, operation: &'static str) -> Result<(), InvalidArgument> {
    if k == 0 {
        Err(InvalidArgument::new(operation, "k must be positive"))
    } else {
        Ok(())
    }
}

/// Returns the first player (O before X) holding a run of `k` marks.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board, k: usize) -> Result<Option<Player>, InvalidArgument> {
    check_k(k, "winner")?;
    for player in CHECK_ORDER {
        for pos in board.positions_of(player) {
            if has_k_run(board, pos, player, k)? {
                return Ok(Some(player));
            }
        }
    }
    Ok(None)
}

/// Whether the game is over: the board is full or someone has `k` in a row.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn is_game_over(board: &Board, k: usize) -> Result<bool, InvalidArgument> {
    check_k(k, "is_game_over")?;
    if board.free_positions().is_empty() {
        return Ok(true);
    }
    Ok(winner(board, k)?.is_some())
}

/// Final result of the game, or `None` while it is still in progress.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board, k: usize) -> Result<Option<Outcome>, InvalidArgument> {
    if let Some(player) = winner(board, k)? {
        return Ok(Some(Outcome::Winner(player)));
    }
    if board.free_positions().is_empty() {
        return Ok(Some(Outcome::Draw));
    }
    Ok(None)
}
