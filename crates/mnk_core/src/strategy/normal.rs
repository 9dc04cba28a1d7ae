//! Normal tier: extend or block the longest run on the board.

use tracing::{debug, instrument, trace};

use super::{Strategy, ensure_playable};
use crate::geometry::lines_of;
use crate::ordering::order_by_center_distance;
use crate::rules::{has_k_run, longest_run_through};
use crate::{Board, Difficulty, InvalidArgument, Player, Position};

/// Greedy one-ply policy.
///
/// For each side it measures the longest run already on the board plus one,
/// the length that side could reach with one more mark. The side with the
/// larger reach is handled first, its own side on a tie: the computer takes
/// the cell that would give that side the run, which wins for itself or
/// blocks the opponent. When no cell reaches a target length for either
/// side the next shorter length is tried. With nothing to extend it plays
/// center first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normal;

impl Strategy for Normal {
    #[instrument(name = "normal", skip(self, board))]
    fn choose(&self, board: &Board, player: Player, k: usize) -> Result<Position, InvalidArgument> {
        ensure_playable(board, k, "normal")?;

        let sides = sides_by_reach(board, player, k)?;
        let top = sides.first().map_or(0, |&(_, reach)| reach);
        for target in (2..=top).rev() {
            for &(side, _) in sides.iter().filter(|&&(_, reach)| reach >= target) {
                if let Some(pos) = extending_cell(board, side, target)? {
                    debug!(pos, %side, target, "Normal move extends run");
                    return Ok(pos);
                }
            }
        }

        let pos = order_by_center_distance(board, &board.free_positions())?[0];
        debug!(pos, "Normal move falls back to center");
        Ok(pos)
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Normal
    }
}

/// Sides with at least one mark, paired with their longest run plus one and
/// ordered by that reach, `player` first on a tie.
fn sides_by_reach(
    board: &Board,
    player: Player,
    k: usize,
) -> Result<Vec<(Player, usize)>, InvalidArgument> {
    let mut sides = Vec::with_capacity(2);
    for side in [player, player.opponent()] {
        let mut longest = 0;
        for pos in board.positions_of(side) {
            longest = longest.max(longest_run_through(board, pos, side)?);
        }
        if longest > 0 {
            sides.push((side, (longest + 1).min(k)));
        }
    }
    // Stable sort keeps `player` ahead on equal reach.
    sides.sort_by(|a, b| b.1.cmp(&a.1));
    trace!(?sides, "Reach per side");
    Ok(sides)
}

/// First free cell that gives `side` a run of `target` marks.
///
/// Anchors are `side`'s cells holding a run of `target - 1`, scanned in
/// ascending order; candidates are the free cells of the anchor's row,
/// column, diagonal and anti-diagonal, in that order.
fn extending_cell(
    board: &Board,
    side: Player,
    target: usize,
) -> Result<Option<Position>, InvalidArgument> {
    for anchor in board.positions_of(side) {
        if !has_k_run(board, anchor, side, target - 1)? {
            continue;
        }
        let lines = lines_of(board, anchor)?;
        for line in lines.iter() {
            for &pos in line.iter().filter(|&&p| board.is_free(p)) {
                let trial = board.apply_move(pos, side)?;
                if has_k_run(&trial, pos, side, target)? {
                    return Ok(Some(pos));
                }
            }
        }
    }
    Ok(None)
}
