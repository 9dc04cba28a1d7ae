//! Center-first move ordering.

use tracing::instrument;

use crate::{Board, InvalidArgument, Position};

/// Chebyshev distance from `pos` to the center cell `(rows/2, cols/2)`.
///
/// Fails when `pos` is off the board.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn center_distance(board: &Board, pos: Position) -> Result<usize, InvalidArgument> {
    let (row, col) = board.coordinates(pos)?;
    Ok(distance_from_center(board, row, col))
}

fn distance_from_center(board: &Board, row: usize, col: usize) -> usize {
    let (center_row, center_col) = (board.rows() / 2, board.cols() / 2);
    row.abs_diff(center_row).max(col.abs_diff(center_col))
}

/// Reorders `positions` by ascending Chebyshev distance to the board center.
///
/// Positions at the same distance keep their relative order. Fails when
/// `positions` is empty or names a cell off the board.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn order_by_center_distance(
    board: &Board,
    positions: &[Position],
) -> Result<Vec<Position>, InvalidArgument> {
    if positions.is_empty() {
        return Err(InvalidArgument::new(
            "order_by_center_distance",
            "no positions to order",
        ));
    }
    if let Some(&bad) = positions.iter().find(|&&p| !board.is_valid_position(p)) {
        return Err(InvalidArgument::new(
            "order_by_center_distance",
            format!("position {} is off the board", bad),
        ));
    }
    let mut ordered = positions.to_vec();
    ordered.sort_by_key(|&p| {
        let (row, col) = board.cell_of(p);
        distance_from_center(board, row, col)
    });
    Ok(ordered)
}
