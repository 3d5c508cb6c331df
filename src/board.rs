//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player whose piece occupies this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A marker in the game: X is the human, O is the computer opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opposing marker
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert marker to cell
    pub fn cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Which side moves next
///
/// Distinct from [`Player`]: the seat is who sits at the board, the player
/// is the marker they place. The human always plays X and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Opponent,
}

impl Seat {
    /// The marker this seat places
    pub fn marker(self) -> Player {
        match self {
            Seat::Human => Player::X,
            Seat::Opponent => Player::O,
        }
    }

    /// The other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Opponent,
            Seat::Opponent => Seat::Human,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => write!(f, "human"),
            Seat::Opponent => write!(f, "opponent"),
        }
    }
}

/// The 3x3 grid, stored row-major: indices {0,1,2} are the top row,
/// {3,4,5} the middle, {6,7,8} the bottom.
///
/// Only 10 bytes, so it implements `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a 9-character string representation.
    ///
    /// Whitespace is filtered out, so multi-line literals work:
    /// `"XX.\nOO.\n..."` and `"XX.OO...."` parse to the same board.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 non-whitespace characters remain or
    /// any character is not a valid cell representation.
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Raw cell array, for line scans
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a marker on an empty cell.
    ///
    /// Crate-internal: the engine is the sole mutator of the board.
    ///
    /// # Errors
    ///
    /// Returns error if the position is out of bounds or already occupied;
    /// the board is unchanged on error.
    pub(crate) fn place(&mut self, pos: usize, player: Player) -> crate::Result<()> {
        if pos >= 9 {
            return Err(crate::Error::OutOfBounds { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::CellOccupied { position: pos });
        }
        self.cells[pos] = player.cell();
        Ok(())
    }

    /// Clear every cell
    pub(crate) fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.get(i), Cell::Empty);
        }
        assert!(!board.is_full());
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();
        board.place(4, Player::X).unwrap();
        assert_eq!(board.get(4), Cell::X);
        assert_eq!(board.empty_positions().len(), 8);

        // Occupied cell is rejected and the board unchanged
        let before = board;
        let err = board.place(4, Player::O).unwrap_err();
        assert_eq!(err, crate::Error::CellOccupied { position: 4 });
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new();
        let err = board.place(9, Player::X).unwrap_err();
        assert_eq!(err, crate::Error::OutOfBounds { position: 9 });
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.get(0), Cell::X);
        assert_eq!(board.get(1), Cell::O);
        assert_eq!(board.get(2), Cell::X);
        assert_eq!(board.get(3), Cell::Empty);

        // Whitespace is ignored
        let spaced = Board::from_string("XOX\n...\n...").unwrap();
        assert_eq!(spaced.get(0), Cell::X);

        // Too short
        assert!(Board::from_string("XO").is_err());

        // Invalid character
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert!(display.contains("XOX"));
        assert!(display.contains(".O."));
        assert!(display.contains("X.."));
    }

    #[test]
    fn test_seat_marker() {
        assert_eq!(Seat::Human.marker(), Player::X);
        assert_eq!(Seat::Opponent.marker(), Player::O);
        assert_eq!(Seat::Human.other(), Seat::Opponent);
        assert_eq!(Seat::Opponent.other(), Seat::Human);
    }

    #[test]
    fn test_cell_roundtrip() {
        for cell in [Cell::Empty, Cell::X, Cell::O] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('Z'), None);
    }
}
