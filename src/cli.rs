//! Command-line interface for mnk_game.

use crate::config::{ConfigError, GameConfig};
use clap::{Args, Parser, Subcommand};
use mnk_core::{Difficulty, Player as Mark};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// MNK Game - generalized tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "mnk_game")]
#[command(about = "Play K-in-a-row on an M x N board against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter directive (overrides RUST_LOG), e.g. "debug" or "mnk_core=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer on the console
    Play {
        /// Board and config file options
        #[command(flatten)]
        board: BoardArgs,

        /// Mark you play with: X moves first, O moves second
        #[arg(short, long, value_parser = parse_mark, allow_hyphen_values = true)]
        mark: Option<Mark>,

        /// Computer difficulty: easy, normal or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Watch the computer play against itself
    Watch {
        /// Board and config file options
        #[command(flatten)]
        board: BoardArgs,

        /// Difficulty of the X side
        #[arg(long, default_value = "normal")]
        x_level: Difficulty,

        /// Difficulty of the O side
        #[arg(long, default_value = "normal")]
        o_level: Difficulty,
    },
}

/// Board dimensions, shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of rows (M)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of columns (N)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Marks in a row needed to win (K)
    #[arg(short, long)]
    pub k: Option<usize>,
}

impl BoardArgs {
    /// Builds the game config: flags override the file, the file overrides
    /// the defaults.
    #[instrument(skip(self))]
    pub fn resolve(
        &self,
        mark: Option<Mark>,
        difficulty: Option<Difficulty>,
    ) -> Result<GameConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        let config = GameConfig::new(
            self.rows.unwrap_or(*base.rows()),
            self.cols.unwrap_or(*base.cols()),
            self.k.unwrap_or(*base.k()),
            mark.unwrap_or(*base.mark()),
            difficulty.unwrap_or(*base.difficulty()),
        );
        config.validate()?;
        debug!(?config, "Resolved game config");
        Ok(config)
    }
}

/// Parses a mark given as `X`/`O` (any case) or as `1`/`-1`.
fn parse_mark(s: &str) -> Result<Mark, String> {
    match s.trim() {
        "X" | "x" | "1" | "+1" => Ok(Mark::X),
        "O" | "o" | "-1" => Ok(Mark::O),
        other => Err(format!("expected X or O, got '{}'", other)),
    }
}
