//! Line and neighbourhood queries for a cell.
//!
//! Every query takes an on-board position; callers validate with
//! [`Board::is_valid_position`] first. Lines are returned in walking order,
//! so the neighbours of a cell are always its adjacent entries in a line.

use tracing::instrument;

use crate::{Board, InvalidArgument, Position};

/// The four lines through a cell, in scanning order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lines {
    /// Row, ascending.
    pub row: Vec<Position>,
    /// Column, ascending.
    pub column: Vec<Position>,
    /// Main (↘) diagonal, ascending.
    pub diagonal: Vec<Position>,
    /// Anti (↙) diagonal, descending.
    pub anti_diagonal: Vec<Position>,
}

impl Lines {
    /// Iterates over the lines as row, column, diagonal, anti-diagonal.
    pub fn iter(&self) -> impl Iterator<Item = &[Position]> {
        [
            self.row.as_slice(),
            self.column.as_slice(),
            self.diagonal.as_slice(),
            self.anti_diagonal.as_slice(),
        ]
        .into_iter()
    }
}

#[track_caller]
fn check_on_board(
    board: &Board,
    pos: Position,
    operation: &'static str,
) -> Result<(), InvalidArgument> {
    if board.is_valid_position(pos) {
        Ok(())
    } else {
        Err(InvalidArgument::new(
            operation,
            format!("position {} is off a {}x{} board", pos, board.rows(), board.cols()),
        ))
    }
}

/// Positions in the same row as `pos`, ascending.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn row_of(board: &Board, pos: Position) -> Result<Vec<Position>, InvalidArgument> {
    check_on_board(board, pos, "row_of")?;
    let (row, _) = board.cell_of(pos);
    Ok((0..board.cols()).map(|col| board.position_at(row, col)).collect())
}

/// Positions in the same column as `pos`, top to bottom.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn column_of(board: &Board, pos: Position) -> Result<Vec<Position>, InvalidArgument> {
    check_on_board(board, pos, "column_of")?;
    let (_, col) = board.cell_of(pos);
    Ok((0..board.rows()).map(|row| board.position_at(row, col)).collect())
}

/// The diagonal (ascending) and anti-diagonal (descending) through `pos`.
///
/// The diagonal is walked from the cell nearest the top-left corner in steps
/// of `cols + 1`; the anti-diagonal from the cell nearest the top-right
/// corner in steps of `cols - 1`.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn diagonals_of(
    board: &Board,
    pos: Position,
) -> Result<(Vec<Position>, Vec<Position>), InvalidArgument> {
    check_on_board(board, pos, "diagonals_of")?;
    let (rows, cols) = board.dimensions();
    let (row, col) = board.cell_of(pos);

    let back = row.min(col);
    let (mut r, mut c) = (row - back, col - back);
    let mut diagonal = Vec::new();
    while r < rows && c < cols {
        diagonal.push(board.position_at(r, c));
        r += 1;
        c += 1;
    }

    let back = row.min(cols - 1 - col);
    let (mut r, mut c) = (row - back, col + back);
    let mut anti_diagonal = Vec::new();
    loop {
        anti_diagonal.push(board.position_at(r, c));
        r += 1;
        if r >= rows || c == 0 {
            break;
        }
        c -= 1;
    }
    anti_diagonal.reverse();

    Ok((diagonal, anti_diagonal))
}

/// All four lines through `pos`.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn lines_of(board: &Board, pos: Position) -> Result<Lines, InvalidArgument> {
    let (diagonal, anti_diagonal) = diagonals_of(board, pos)?;
    Ok(Lines {
        row: row_of(board, pos)?,
        column: column_of(board, pos)?,
        diagonal,
        anti_diagonal,
    })
}

/// The up to eight cells touching `pos` orthogonally or diagonally, ascending.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn adjacent_positions(board: &Board, pos: Position) -> Result<Vec<Position>, InvalidArgument> {
    let lines = lines_of(board, pos)?;
    let mut adjacent: Vec<Position> = lines
        .iter()
        .flat_map(|line| neighbours_in(line, pos))
        .collect();
    adjacent.sort_unstable();
    adjacent.dedup();
    Ok(adjacent)
}

/// Entries just before and after `pos` in `line`.
fn neighbours_in(line: &[Position], pos: Position) -> Vec<Position> {
    let Some(idx) = line.iter().position(|&p| p == pos) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(2);
    if idx > 0 {
        out.push(line[idx - 1]);
    }
    if let Some(&next) = line.get(idx + 1) {
        out.push(next);
    }
    out
}
