//! Easy tier: grow next to your own marks, center first.

use std::collections::HashSet;

use tracing::{debug, instrument};

use super::{Strategy, ensure_playable};
use crate::geometry::adjacent_positions;
use crate::ordering::order_by_center_distance;
use crate::{Board, Difficulty, InvalidArgument, Player, Position};

/// Plays the center-closest free cell touching one of its own marks.
///
/// On its first move, or when none of its marks has a free neighbour, it
/// plays the center-closest free cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Easy;

impl Strategy for Easy {
    #[instrument(name = "easy", skip(self, board))]
    fn choose(&self, board: &Board, player: Player, k: usize) -> Result<Position, InvalidArgument> {
        ensure_playable(board, k, "easy")?;
        let ordered = order_by_center_distance(board, &board.free_positions())?;

        let mut touching = HashSet::new();
        for own in board.positions_of(player) {
            touching.extend(adjacent_positions(board, own)?);
        }

        let pos = ordered
            .iter()
            .copied()
            .find(|pos| touching.contains(pos))
            .unwrap_or(ordered[0]);
        debug!(pos, "Easy move");
        Ok(pos)
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_takes_center() {
        let board = Board::new(3, 3).unwrap();
        assert_eq!(Easy.choose(&board, Player::X, 3).unwrap(), 5);

        let board = Board::new(5, 5).unwrap();
        assert_eq!(Easy.choose(&board, Player::O, 4).unwrap(), 13);
    }

    #[test]
    fn test_first_move_when_center_taken() {
        let board = Board::new(3, 3).unwrap().apply_move(5, Player::X).unwrap();
        assert_eq!(Easy.choose(&board, Player::O, 3).unwrap(), 1);
    }

    #[test]
    fn test_plays_next_to_own_mark() {
        // O in the corner: the center touches it and is closest.
        let board = Board::from_values(&[[0i8, 0, 0], [0, 0, 0], [0, 0, -1]]).unwrap();
        assert_eq!(Easy.choose(&board, Player::O, 3).unwrap(), 5);

        // Center taken: 6 is the first center-distance-1 cell touching 9.
        let board = board.apply_move(5, Player::X).unwrap();
        assert_eq!(Easy.choose(&board, Player::O, 3).unwrap(), 6);
    }

    #[test]
    fn test_falls_back_when_boxed_in() {
        // O at 1 is surrounded; only 6, 8 and 9 are free.
        let board = Board::from_values(&[[-1i8, 1, 1], [1, 1, 0], [1, 0, 0]]).unwrap();
        assert_eq!(Easy.choose(&board, Player::O, 4).unwrap(), 6);
    }
}
