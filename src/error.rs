//! Error types for the noughts crate

use thiserror::Error;

use crate::board::Seat;

/// Main error type for the noughts crate
///
/// Engine operations reject invalid calls with one of these variants and
/// leave all state unchanged, so a caller that ignores the `Err` observes
/// the silent no-op behavior a click-driven UI expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds (must be 0-8)")]
    OutOfBounds { position: usize },

    #[error("invalid move: position {position} is already occupied")]
    CellOccupied { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("it is not the {seat}'s turn")]
    OutOfTurn { seat: Seat },

    #[error("no empty cell available for the computer move")]
    NoMoveAvailable,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
