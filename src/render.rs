//! Text rendering of a board.

use mnk_core::{Board, Player as Mark, Square};
use tracing::instrument;

/// Character shown for a square.
fn symbol(square: Square) -> char {
    match square {
        Square::Empty => '+',
        Square::Occupied(Mark::X) => 'X',
        Square::Occupied(Mark::O) => 'O',
    }
}

/// Formats the board as a text grid.
///
/// Cells are joined by `---` and rows are separated by a line of `|`
/// aligned under each column:
///
/// ```text
/// X---+---O
/// |   |   |
/// +---X---+
/// ```
#[instrument(level = "trace", skip(board))]
pub fn render_board(board: &Board) -> String {
    let cols = board.cols();
    let separator = vec!["|"; cols].join("   ");
    board
        .squares()
        .chunks(cols)
        .map(|row| {
            row.iter()
                .map(|&square| symbol(square).to_string())
                .collect::<Vec<_>>()
                .join("---")
        })
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", separator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let board = Board::new(2, 3).unwrap();
        assert_eq!(render_board(&board), "+---+---+\n|   |   |\n+---+---+");
    }

    #[test]
    fn test_render_marks() {
        let board = Board::from_values(&[[1i8, 0, -1], [0, 1, 0], [-1, 0, 1]]).unwrap();
        let expected = "X---+---O\n|   |   |\n+---X---+\n|   |   |\nO---+---X";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_render_single_column() {
        let board = Board::from_values(&[[1i8], [0]]).unwrap();
        assert_eq!(render_board(&board), "X\n|\n+");
    }
}
