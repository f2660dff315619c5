//! Universal Chess Interface (UCI) plumbing.
//!
//! Command parsing for the pieces of the protocol the engine binary
//! composes on top of the board API.

use std::fmt;

use crate::board::{Board, FenError, Move, MoveParseError};

/// Error type for UCI position command parsing.
#[derive(Debug, Clone)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Invalid move in the move list
    InvalidMove {
        move_str: String,
        error: MoveParseError,
    },
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
        }
    }
}

impl std::error::Error for UciError {}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Parse a UCI position command, returning an error on failure.
///
/// Supports "position startpos" and "position fen <6 fields>", each
/// optionally followed by "moves <move1> <move2> ...".
pub fn try_parse_position_command(board: &mut Board, parts: &[&str]) -> Result<(), UciError> {
    let mut i = 1;

    if i >= parts.len() {
        return Err(UciError::MissingParts);
    }

    if parts[i] == "startpos" {
        *board = Board::new();
        i += 1;
    } else if parts[i] == "fen" {
        if i + 6 >= parts.len() {
            return Err(UciError::MissingParts);
        }
        let fen = parts[i + 1..i + 7].join(" ");
        *board = Board::try_from_fen(&fen)?;
        i += 7;
    } else {
        return Err(UciError::MissingParts);
    }

    if i < parts.len() && parts[i] == "moves" {
        i += 1;
        while i < parts.len() {
            board
                .make_move_uci(parts[i])
                .map_err(|e| UciError::InvalidMove {
                    move_str: parts[i].to_string(),
                    error: e,
                })?;
            i += 1;
        }
    }

    Ok(())
}

/// Parse a UCI position command, logging errors to stderr.
///
/// Convenience wrapper for the main loop, where a bad command is reported
/// but does not tear the engine down.
pub fn parse_position_command(board: &mut Board, parts: &[&str]) {
    if let Err(e) = try_parse_position_command(board, parts) {
        eprintln!("Error: {e}");
    }
}

/// Format a move in UCI long algebraic notation.
#[must_use]
pub fn format_uci_move(mv: &Move) -> String {
    mv.to_string()
}
