//! Winning line analysis

use crate::board::{Board, Cell, Player};

/// Winning line indices on the 3x3 board.
///
/// The order is fixed and load-bearing: both [`winner`] and the opponent
/// heuristic in [`crate::strategy`] scan lines in this order and take the
/// first match, so it doubles as the tie-break rule.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Find the winning marker, if any line is fully occupied by one player.
///
/// Lines are checked in [`WINNING_LINES`] order and the first match wins.
/// Under alternating play at most one marker can have a completed line, but
/// the first-in-order rule keeps the result well-defined for arbitrary
/// (including malformed) boards.
pub fn winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    for &[a, b, c] in &WINNING_LINES {
        if cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c] {
            return cells[a].player();
        }
    }
    None
}

/// Check if a player has won by having three in a row
pub fn has_won(board: &Board, player: Player) -> bool {
    let target = player.cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| board.get(idx) == target))
}
