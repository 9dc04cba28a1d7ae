//! Console games driven through in-memory input and output.

use mnk_core::{Difficulty, Outcome, Player};
use mnk_game::{GameConfig, play_mnk, watch};
use std::io::Cursor;

const PROMPT: &str = "Player's turn. Choose a free position: ";

fn play(config: &GameConfig, input: &str) -> (Outcome, String) {
    let mut output = Vec::new();
    let result = play_mnk(config, Cursor::new(input.to_string()), &mut output).unwrap();
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_victory_against_easy() {
    // X 1, O 5, X 4, O 2, X 7 completes the first column.
    let config = GameConfig::new(3, 3, 3, Player::X, Difficulty::Easy);
    let (result, text) = play(&config, "1\n4\n7\n");

    assert_eq!(result, Outcome::Winner(Player::X));
    assert!(text.starts_with("Welcome to the MNK GAME.\nThe player plays with 'X'.\n"));
    assert_eq!(text.matches("Computer's turn (easy):").count(), 2);
    assert_eq!(text.matches(PROMPT).count(), 3);
    assert!(text.ends_with("X---O---+\n|   |   |\nX---O---+\n|   |   |\nX---+---+\nVICTORY\n"));
}

#[test]
fn test_defeat_when_human_plays_o() {
    // X 5, O 1, X 2, O 3, X 4, O 9, X 6 completes the middle row.
    let config = GameConfig::new(3, 3, 3, Player::O, Difficulty::Easy);
    let (result, text) = play(&config, "1\n3\n9\n");

    assert_eq!(result, Outcome::Winner(Player::X));
    assert!(text.contains("The player plays with 'O'."));
    // The computer opens, so the first thing after the greeting is its turn.
    assert!(text.starts_with(
        "Welcome to the MNK GAME.\nThe player plays with 'O'.\nComputer's turn (easy):\n"
    ));
    assert!(text.ends_with("DEFEAT\n"));
}

#[test]
fn test_draw_with_invalid_input() {
    // 2 x 2 needing three in a row cannot be won.
    let config = GameConfig::new(2, 2, 3, Player::X, Difficulty::Easy);
    let (result, text) = play(&config, "hello\n1\n1\n2\n");

    assert_eq!(result, Outcome::Draw);
    assert!(text.contains("Invalid position: 'hello' is not a number"));
    assert!(text.contains("Invalid position: position 1 is already taken"));
    assert_eq!(text.matches(PROMPT).count(), 4);
    assert!(text.ends_with("X---X\n|   |\nO---O\nDRAW\n"));
}

#[test]
fn test_input_ending_early_is_an_error() {
    let config = GameConfig::default();
    let mut output = Vec::new();
    assert!(play_mnk(&config, Cursor::new("5\n"), &mut output).is_err());
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = GameConfig::new(1, 3, 3, Player::X, Difficulty::Easy);
    let mut output = Vec::new();
    assert!(play_mnk(&config, Cursor::new(""), &mut output).is_err());
    assert!(output.is_empty());
}

#[test]
fn test_watch_every_level_pair_finishes() {
    let config = GameConfig::new(3, 4, 3, Player::X, Difficulty::Normal);
    for x_level in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
        for o_level in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let mut output = Vec::new();
            let result = watch(&config, x_level, o_level, &mut output).unwrap();
            let text = String::from_utf8(output).unwrap();
            let verdict = match result {
                Outcome::Winner(winner) => format!("{} WINS\n", winner),
                Outcome::Draw => "DRAW\n".to_string(),
            };
            assert!(text.ends_with(&verdict));
        }
    }
}
