//! Run detection: k consecutive marks through a cell.

use tracing::instrument;

use crate::geometry::lines_of;
use crate::{Board, InvalidArgument, Player, Position};

/// Checks whether `player` has at least `k` consecutive marks through `pos`.
///
/// Each of the row, column, diagonal and anti-diagonal of `pos` is scanned in
/// order; the count resets on every cell not held by `player` and the scan
/// succeeds as soon as a run containing `pos` reaches `k`.
///
/// Fails when `k` is zero or `pos` is off the board.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn has_k_run(
    board: &Board,
    pos: Position,
    player: Player,
    k: usize,
) -> Result<bool, InvalidArgument> {
    if k == 0 {
        return Err(InvalidArgument::new("has_k_run", "k must be positive"));
    }
    let lines = lines_of(board, pos)?;
    if !board.squares()[pos - 1].is(player) {
        return Ok(false);
    }
    let found = lines.iter().any(|line| run_reaches(board, line, pos, player, k));
    Ok(found)
}

fn run_reaches(board: &Board, line: &[Position], pos: Position, player: Player, k: usize) -> bool {
    let mut count = 0;
    let mut covers_pos = false;
    for &p in line {
        if board.squares()[p - 1].is(player) {
            count += 1;
            covers_pos |= p == pos;
            if covers_pos && count >= k {
                return true;
            }
        } else {
            count = 0;
            covers_pos = false;
        }
    }
    false
}

/// Length of the longest run of `player` marks through `pos` in any line.
///
/// Zero when `pos` is not held by `player`.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn longest_run_through(
    board: &Board,
    pos: Position,
    player: Player,
) -> Result<usize, InvalidArgument> {
    let lines = lines_of(board, pos)?;
    Ok(lines
        .iter()
        .map(|line| {
            let Some(idx) = line.iter().position(|&p| p == pos) else {
                return 0;
            };
            if !board.squares()[pos - 1].is(player) {
                return 0;
            }
            let held = |p: &&Position| board.squares()[**p - 1].is(player);
            let before = line[..idx].iter().rev().take_while(held).count();
            let after = line[idx + 1..].iter().take_while(held).count();
            before + 1 + after
        })
        .max()
        .unwrap_or(0))
}
