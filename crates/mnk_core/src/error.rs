//! Error types for the MNK core.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::Position;

/// An operation was called with arguments outside its documented domain.
///
/// This is the only error the core raises. Validators such as
/// [`is_board`](crate::is_board) and [`is_position`](crate::is_position)
/// never fail and are the guards callers use to avoid it.
#[derive(Debug, Clone, Display, Error)]
#[display("{}: invalid arguments ({}) at {}:{}", operation, reason, file, line)]
pub struct InvalidArgument {
    /// Operation that rejected its arguments.
    pub operation: &'static str,
    /// What was wrong with them.
    pub reason: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl InvalidArgument {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(level = "debug", skip(reason))]
    pub fn new(operation: &'static str, reason: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            operation,
            reason: reason.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Why a line of text could not be turned into a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// Nothing but whitespace was entered.
    #[display("no position entered")]
    Empty,

    /// The input contains something other than decimal digits.
    #[display("'{}' is not a number", _0)]
    NotANumber(#[error(not(source))] String),

    /// The number is outside the global position range.
    #[display("{} is not a position (expected 1-10000)", _0)]
    OutOfRange(#[error(not(source))] String),

    /// The position does not exist on this board.
    #[display("position {} is off the board", _0)]
    OffBoard(#[error(not(source))] Position),

    /// The position is already marked.
    #[display("position {} is already taken", _0)]
    Occupied(#[error(not(source))] Position),
}
