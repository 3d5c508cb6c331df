//! Single-player Tic-Tac-Toe engine
//!
//! This crate provides:
//! - A 3x3 board with win/draw detection over the 8 fixed winning lines
//! - A [`GameEngine`] owning board, turn, outcome, and a running scoreboard
//! - A rule-based opponent heuristic: win, else block, else random
//! - A staleness guard ([`OpponentCue`]) for the frontend's deferred
//!   computer move
//!
//! The presentation layer is an external collaborator: it calls
//! [`GameEngine::apply_human_move`] on a click, schedules
//! [`GameEngine::computer_move`] after a short delay when handed an
//! [`OpponentCue`], and re-renders from [`GameEngine::snapshot`] after
//! every change. A terminal frontend ships as the `noughts` binary.

pub mod board;
pub mod engine;
pub mod error;
pub mod lines;
pub mod strategy;

pub use board::{Board, Cell, Player, Seat};
pub use engine::{GameEngine, GameSnapshot, OpponentCue, Outcome, ScoreBoard};
pub use error::{Error, Result};
pub use lines::{WINNING_LINES, has_won, winner};
pub use strategy::{completing_move, select_move};
