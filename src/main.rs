//! MNK Game - console entry point.

use anyhow::Result;
use clap::Parser;
use mnk_game::{Cli, Command, play_mnk, watch};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;
    debug!(?cli, "Parsed command line");

    let stdout = std::io::stdout();
    match cli.command {
        Command::Play {
            board,
            mark,
            difficulty,
        } => {
            let config = board.resolve(mark, difficulty)?;
            info!(?config, "Starting console game");
            let stdin = std::io::stdin();
            play_mnk(&config, stdin.lock(), stdout.lock())?;
        }
        Command::Watch {
            board,
            x_level,
            o_level,
        } => {
            let config = board.resolve(None, None)?;
            info!(?config, "Starting computer game");
            watch(&config, x_level, o_level, stdout.lock())?;
        }
    }
    Ok(())
}

/// Sends logs to stderr so they never mix with the board on stdout.
fn init_tracing(log_level: Option<&str>) -> Result<()> {
    let filter = match log_level {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}
