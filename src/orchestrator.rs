//! Turn loop between two players.

use crate::players::Player;
use crate::render::render_board;
use anyhow::{Context, Result};
use mnk_core::{Board, Outcome, Player as Mark, is_game_over, outcome};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs one game between two players, X moving first.
pub struct Orchestrator<'a> {
    board: Board,
    k: usize,
    player_x: Box<dyn Player + 'a>,
    player_o: Box<dyn Player + 'a>,
}

impl<'a> Orchestrator<'a> {
    /// Creates an orchestrator for a fresh `rows` x `cols` board.
    pub fn new(
        rows: usize,
        cols: usize,
        k: usize,
        player_x: Box<dyn Player + 'a>,
        player_o: Box<dyn Player + 'a>,
    ) -> Result<Self> {
        Ok(Self {
            board: Board::new(rows, cols)?,
            k,
            player_x,
            player_o,
        })
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until the board is full or someone has `k` in a row.
    ///
    /// The board is printed before every human move and after every move.
    #[instrument(
        skip(self, out),
        fields(rows = self.board.rows(), cols = self.board.cols(), k = self.k)
    )]
    pub fn run(&mut self, out: &mut dyn Write) -> Result<Outcome> {
        info!("Starting game");
        let mut to_move = Mark::X;

        while !is_game_over(&self.board, self.k)? {
            let player = match to_move {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            if player.is_human() {
                writeln!(out, "{}", render_board(&self.board))?;
            }

            debug!(player = %player.name(), mark = %to_move, "Waiting for move");
            let pos = player.next_move(&self.board, self.k, out)?;
            self.board = self
                .board
                .apply_move(pos, to_move)
                .with_context(|| format!("{} chose an unplayable position", player.name()))?;
            writeln!(out, "{}", render_board(&self.board))?;

            to_move = to_move.opponent();
        }

        let result = outcome(&self.board, self.k)?
            .context("Game loop ended before the game was over")?;
        info!(?result, "Game finished");
        Ok(result)
    }
}
