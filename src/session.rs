//! Console game sessions.

use crate::config::GameConfig;
use crate::orchestrator::Orchestrator;
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use anyhow::Result;
use mnk_core::{Difficulty, Outcome, Player as Mark};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Plays one human-versus-computer game on the console.
///
/// The human plays `config.mark()`; X always moves first, so the computer
/// opens when the human is O. Moves are read from `input` one per line and
/// everything shown to the player goes to `output`. The result is reported
/// from the human's side as `VICTORY`, `DEFEAT` or `DRAW`.
#[instrument(skip_all, fields(mark = %config.mark(), difficulty = %config.difficulty()))]
pub fn play_mnk<R: BufRead, W: Write>(
    config: &GameConfig,
    input: R,
    mut output: W,
) -> Result<Outcome> {
    config.validate()?;
    let mark = *config.mark();

    writeln!(output, "Welcome to the MNK GAME.")?;
    writeln!(output, "The player plays with '{}'.", mark)?;

    let human: Box<dyn Player + '_> = Box::new(HumanPlayer::new("Player", input));
    let computer: Box<dyn Player + '_> =
        Box::new(ComputerPlayer::new(mark.opponent(), *config.difficulty()));
    let (player_x, player_o) = match mark {
        Mark::X => (human, computer),
        Mark::O => (computer, human),
    };

    let mut orchestrator =
        Orchestrator::new(*config.rows(), *config.cols(), *config.k(), player_x, player_o)?;
    let result = orchestrator.run(&mut output)?;

    let verdict = match result {
        Outcome::Winner(winner) if winner == mark => "VICTORY",
        Outcome::Winner(_) => "DEFEAT",
        Outcome::Draw => "DRAW",
    };
    info!(verdict, "Game over");
    writeln!(output, "{}", verdict)?;
    Ok(result)
}

/// Plays one computer-versus-computer game, printing every move.
#[instrument(skip(config, output))]
pub fn watch<W: Write>(
    config: &GameConfig,
    x_level: Difficulty,
    o_level: Difficulty,
    mut output: W,
) -> Result<Outcome> {
    config.validate()?;

    writeln!(output, "Welcome to the MNK GAME.")?;
    writeln!(output, "X ({}) against O ({}).", x_level, o_level)?;

    let mut orchestrator = Orchestrator::new(
        *config.rows(),
        *config.cols(),
        *config.k(),
        Box::new(ComputerPlayer::new(Mark::X, x_level)),
        Box::new(ComputerPlayer::new(Mark::O, o_level)),
    )?;
    let result = orchestrator.run(&mut output)?;

    match result {
        Outcome::Winner(winner) => writeln!(output, "{} WINS", winner)?,
        Outcome::Draw => writeln!(output, "DRAW")?,
    }
    Ok(result)
}
