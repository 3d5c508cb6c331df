//! Opponent move selection
//!
//! A deliberately simple heuristic: take a winning move, else block the
//! human's winning move, else pick an empty cell at random. It never looks
//! further ahead, so a fork (two simultaneous threats) beats it.

use rand::{Rng, seq::IndexedRandom};

use crate::board::{Board, Cell, Player};
use crate::lines::WINNING_LINES;

/// Find a move that completes three-in-a-row for `marker`.
///
/// Scans [`WINNING_LINES`] in declared order and returns the empty cell of
/// the first line holding two `marker` pieces and one empty cell. When
/// several completions exist the first qualifying line wins.
pub fn completing_move(board: &Board, marker: Player) -> Option<usize> {
    let target = marker.cell();
    for &line in &WINNING_LINES {
        let mut empty_pos = None;
        let mut count = 0;
        for &idx in &line {
            match board.get(idx) {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        count = 0;
                        break;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => {
                    count = 0;
                    break;
                }
            }
        }
        if count == 2 {
            return empty_pos;
        }
    }
    None
}

/// Select the opponent's move: win, else block, else random empty cell.
///
/// The priority is fixed: the opponent never sacrifices an immediate win
/// to block. Returns `None` only when the board has no empty cell, which
/// the engine rules out by detecting a draw first.
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    completing_move(board, Player::O)
        .or_else(|| completing_move(board, Player::X))
        .or_else(|| board.empty_positions().choose(rng).copied())
}
