//! Hard tier: play every candidate out with the normal policy.

use tracing::{debug, instrument, trace};

use super::{Normal, Strategy, ensure_playable};
use crate::rules::{is_game_over, outcome};
use crate::{Board, Difficulty, InvalidArgument, Outcome, Player, Position};

/// Playout policy.
///
/// For each free cell in ascending order it assumes the computer plays
/// there, then lets [`Normal`] move for both sides until the game ends. The
/// first cell whose playout the computer wins or draws is returned. When
/// every playout is lost it plays the first free cell.
///
/// This is one fixed-policy rollout per candidate, not a game-tree search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hard;

impl Strategy for Hard {
    #[instrument(name = "hard", skip(self, board))]
    fn choose(&self, board: &Board, player: Player, k: usize) -> Result<Position, InvalidArgument> {
        ensure_playable(board, k, "hard")?;
        let free = board.free_positions();

        for &candidate in &free {
            let start = board.apply_move(candidate, player)?;
            match play_out(start, player.opponent(), k)? {
                Some(Outcome::Winner(winner)) if winner == player => {
                    debug!(pos = candidate, "Hard move wins its playout");
                    return Ok(candidate);
                }
                Some(Outcome::Draw) => {
                    debug!(pos = candidate, "Hard move draws its playout");
                    return Ok(candidate);
                }
                result => trace!(pos = candidate, ?result, "Playout lost"),
            }
        }

        debug!(pos = free[0], "Every playout lost, taking first free cell");
        Ok(free[0])
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }
}

/// Plays `board` to the end with [`Normal`] on both sides, `to_move` first.
///
/// Bounded by the board's cell count, since every move fills a cell.
fn play_out(
    mut board: Board,
    mut to_move: Player,
    k: usize,
) -> Result<Option<Outcome>, InvalidArgument> {
    for _ in 0..board.cell_count() {
        if is_game_over(&board, k)? {
            break;
        }
        let pos = Normal.choose(&board, to_move, k)?;
        board = board.apply_move(pos, to_move)?;
        to_move = to_move.opponent();
    }
    outcome(&board, k)
}
