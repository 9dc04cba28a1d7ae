//! Core domain types for MNK games.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::InvalidArgument;

/// Player mark. `X` is stored as `+1`, `O` as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Player X (value `+1`, moves first).
    X,
    /// Player O (value `-1`).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Numeric cell value of this mark.
    pub fn value(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl TryFrom<i8> for Player {
    type Error = InvalidArgument;

    #[track_caller]
    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::X),
            -1 => Ok(Player::O),
            other => Err(InvalidArgument::new(
                "player",
                format!("{} is not a player mark (expected 1 or -1)", other),
            )),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell (value `0`).
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Square {
    /// Numeric value of the cell: `0`, `1` or `-1`.
    pub fn value(self) -> i8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(player) => player.value(),
        }
    }

    /// Converts a raw cell value, accepting only `-1`, `0` and `1`.
    #[track_caller]
    pub fn from_value(value: i8) -> Result<Self, InvalidArgument> {
        match value {
            0 => Ok(Square::Empty),
            other => Player::try_from(other).map(Square::Occupied),
        }
    }

    /// Whether this cell holds the given player's mark.
    pub fn is(self, player: Player) -> bool {
        self == Square::Occupied(player)
    }
}

/// Computer difficulty tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Plays next to its own marks, center first.
    Easy,
    /// Extends or blocks the longest run on the board.
    #[default]
    Normal,
    /// Plays out every candidate with the normal policy.
    Hard,
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a run of k marks.
    Winner(Player),
    /// The board filled up with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner, if any.
    #[instrument(level = "trace")]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_player_values_round_trip() {
        assert_eq!(Player::try_from(1).unwrap(), Player::X);
        assert_eq!(Player::try_from(-1).unwrap(), Player::O);
        assert!(Player::try_from(0).is_err());
        assert!(Player::try_from(2).is_err());
    }

    #[test]
    fn test_square_from_value() {
        assert_eq!(Square::from_value(0).unwrap(), Square::Empty);
        assert_eq!(Square::from_value(-1).unwrap(), Square::Occupied(Player::O));
        assert!(Square::from_value(3).is_err());
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!(Difficulty::from_str("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::from_str("HARD").unwrap(), Difficulty::Hard);
        assert!(Difficulty::from_str("impossible").is_err());
        assert_eq!(Difficulty::Normal.to_string(), "normal");
    }
}
