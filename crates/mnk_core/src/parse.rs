//! Turning a line of user input into a position.

use tracing::instrument;

use crate::{Board, ParseError, Position, is_position_token};

/// Parses a position typed by a player.
///
/// Surrounding whitespace is ignored; the rest must be decimal digits naming
/// a number in `1..=10000`. Whether the position exists on a particular
/// board is checked by [`parse_move_on`].
#[instrument(level = "debug")]
pub fn parse_move(text: &str) -> Result<Position, ParseError> {
    let token = text.trim();
    if token.is_empty() {
        return Err(ParseError::Empty);
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NotANumber(token.to_string()));
    }
    if !is_position_token(token) {
        return Err(ParseError::OutOfRange(token.to_string()));
    }
    token
        .parse::<Position>()
        .map_err(|_| ParseError::OutOfRange(token.to_string()))
}

/// Parses a position and checks it is a free cell of `board`.
#[instrument(level = "debug", skip(board))]
pub fn parse_move_on(board: &Board, text: &str) -> Result<Position, ParseError> {
    let pos = parse_move(text)?;
    if !board.is_valid_position(pos) {
        return Err(ParseError::OffBoard(pos));
    }
    if !board.is_free(pos) {
        return Err(ParseError::Occupied(pos));
    }
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_move("5"), Ok(5));
        assert_eq!(parse_move("  12\n"), Ok(12));
        assert_eq!(parse_move("10000"), Ok(10_000));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_move(""), Err(ParseError::Empty));
        assert_eq!(parse_move("   "), Err(ParseError::Empty));
        assert_eq!(parse_move("x"), Err(ParseError::NotANumber("x".to_string())));
        assert_eq!(parse_move("-1"), Err(ParseError::NotANumber("-1".to_string())));
        assert_eq!(parse_move("1 2"), Err(ParseError::NotANumber("1 2".to_string())));
        assert_eq!(parse_move("0"), Err(ParseError::OutOfRange("0".to_string())));
        assert_eq!(
            parse_move("99999999999999999999999"),
            Err(ParseError::OutOfRange("99999999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_parse_against_board() {
        let board = Board::new(3, 3).unwrap().apply_move(5, Player::X).unwrap();
        assert_eq!(parse_move_on(&board, "4"), Ok(4));
        assert_eq!(parse_move_on(&board, "5"), Err(ParseError::Occupied(5)));
        assert_eq!(parse_move_on(&board, "10"), Err(ParseError::OffBoard(10)));
    }
}
