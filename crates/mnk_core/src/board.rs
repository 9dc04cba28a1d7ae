//! Board model: an immutable R×C grid addressed by 1-based row-major positions.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{InvalidArgument, Player, Square};

/// A 1-based index into the row-major flattening of a board.
pub type Position = usize;

/// Largest value accepted by [`is_position`], whatever the board size.
pub const MAX_POSITION: Position = 10_000;

/// Smallest number of rows a board may have.
pub const MIN_ROWS: usize = 2;

/// Largest number of rows a board may have.
pub const MAX_ROWS: usize = 100;

/// Checks whether raw rows of cell values describe a board.
///
/// The row count must be within `2..=100`, every row must have the same
/// non-zero length and every value must be `-1`, `0` or `1`.
#[instrument(level = "trace", skip(rows), fields(row_count = rows.len()))]
pub fn is_board<R: AsRef<[i8]>>(rows: &[R]) -> bool {
    if !(MIN_ROWS..=MAX_ROWS).contains(&rows.len()) {
        return false;
    }
    let cols = rows[0].as_ref().len();
    cols > 0
        && rows.iter().all(|row| {
            let row = row.as_ref();
            row.len() == cols && row.iter().all(|value| (-1..=1).contains(value))
        })
}

/// Checks whether a number can be a position on some board (`1..=10000`).
#[instrument(level = "trace")]
pub fn is_position(pos: Position) -> bool {
    (1..=MAX_POSITION).contains(&pos)
}

/// Checks whether a text token is a decimal number accepted by [`is_position`].
#[instrument(level = "trace")]
pub fn is_position_token(token: &str) -> bool {
    !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && token.parse::<Position>().is_ok_and(is_position)
}

/// Immutable MNK board.
///
/// Every move produces a new board through [`Board::apply_move`]; a board
/// value is never modified after construction. Serialized as rows of raw
/// values and checked with [`is_board`] when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i8>>", into = "Vec<Vec<i8>>")]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    #[track_caller]
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, InvalidArgument> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) || cols == 0 {
            return Err(InvalidArgument::new(
                "new_board",
                format!("cannot build a {}x{} board", rows, cols),
            ));
        }
        Ok(Self {
            rows,
            cols,
            squares: vec![Square::Empty; rows * cols],
        })
    }

    /// Builds a board from rows of raw values (`-1`, `0`, `1`).
    #[track_caller]
    #[instrument(skip(values), fields(row_count = values.len()))]
    pub fn from_values<R: AsRef<[i8]>>(values: &[R]) -> Result<Self, InvalidArgument> {
        if !is_board(values) {
            return Err(InvalidArgument::new(
                "from_values",
                "rows do not describe a board",
            ));
        }
        let squares = values
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .map(Square::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows: values.len(),
            cols: values[0].as_ref().len(),
            squares,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Raw values, one `Vec` per row.
    pub fn to_values(&self) -> Vec<Vec<i8>> {
        self.squares
            .chunks(self.cols)
            .map(|row| row.iter().map(|square| square.value()).collect())
            .collect()
    }

    /// Whether `pos` names a cell of this board (`1..=rows*cols`).
    #[instrument(level = "trace", skip(self))]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        is_position(pos) && pos <= self.cell_count()
    }

    /// Whether `pos` is on the board and empty.
    #[instrument(level = "trace", skip(self))]
    pub fn is_free(&self, pos: Position) -> bool {
        self.square(pos) == Some(Square::Empty)
    }

    /// Square at `pos`, or `None` when `pos` is off the board.
    pub fn square(&self, pos: Position) -> Option<Square> {
        if self.is_valid_position(pos) {
            self.squares.get(pos - 1).copied()
        } else {
            None
        }
    }

    /// Cell value at `pos`: `0` empty, `1` for X, `-1` for O.
    #[track_caller]
    #[instrument(level = "trace", skip(self))]
    pub fn value_at(&self, pos: Position) -> Result<i8, InvalidArgument> {
        if !is_position(pos) {
            return Err(InvalidArgument::new(
                "value_at",
                format!("{} is not a position", pos),
            ));
        }
        self.square(pos).map(Square::value).ok_or_else(|| {
            InvalidArgument::new(
                "value_at",
                format!("position {} is off a {}x{} board", pos, self.rows, self.cols),
            )
        })
    }

    /// Zero-based `(row, column)` of `pos`.
    ///
    /// Fails when `pos` is off the board.
    #[track_caller]
    pub fn coordinates(&self, pos: Position) -> Result<(usize, usize), InvalidArgument> {
        if !self.is_valid_position(pos) {
            return Err(InvalidArgument::new(
                "coordinates",
                format!("position {} is off a {}x{} board", pos, self.rows, self.cols),
            ));
        }
        Ok(self.cell_of(pos))
    }

    /// Zero-based `(row, column)` of a position already known to be on the board.
    pub(crate) fn cell_of(&self, pos: Position) -> (usize, usize) {
        ((pos - 1) / self.cols, (pos - 1) % self.cols)
    }

    /// Position of the zero-based cell `(row, column)`, which must be on the board.
    pub(crate) fn position_at(&self, row: usize, col: usize) -> Position {
        row * self.cols + col + 1
    }

    /// All empty positions, ascending.
    #[instrument(level = "trace", skip(self))]
    pub fn free_positions(&self) -> Vec<Position> {
        self.positions_where(|square| square == Square::Empty)
    }

    /// All positions held by `player`, ascending.
    #[instrument(level = "trace", skip(self))]
    pub fn positions_of(&self, player: Player) -> Vec<Position> {
        self.positions_where(|square| square.is(player))
    }

    fn positions_where(&self, keep: impl Fn(Square) -> bool) -> Vec<Position> {
        self.squares
            .iter()
            .enumerate()
            .filter(|&(_, &square)| keep(square))
            .map(|(idx, _)| idx + 1)
            .collect()
    }

    /// Returns a new board with `player` marked at `pos`.
    ///
    /// Fails unless `pos` is currently free. `self` is left untouched.
    #[track_caller]
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(&self, pos: Position, player: Player) -> Result<Board, InvalidArgument> {
        if !self.is_free(pos) {
            return Err(InvalidArgument::new(
                "apply_move",
                format!("position {} is not free", pos),
            ));
        }
        let mut next = self.clone();
        next.squares[pos - 1] = Square::Occupied(player);
        debug!(pos, %player, "Marked position");
        Ok(next)
    }
}

impl TryFrom<Vec<Vec<i8>>> for Board {
    type Error = InvalidArgument;

    #[track_caller]
    fn try_from(values: Vec<Vec<i8>>) -> Result<Self, Self::Error> {
        Self::from_values(&values)
    }
}

impl From<Board> for Vec<Vec<i8>> {
    fn from(board: Board) -> Self {
        board.to_values()
    }
}
