//! Game engine: turn sequencing, terminal detection, and the scoreboard
//!
//! [`GameEngine`] is the authoritative owner of game state and the sole
//! mutator of the board. The presentation layer drives it: it applies the
//! human's move on a click, and when the engine hands back an
//! [`OpponentCue`] it schedules [`GameEngine::computer_move`] after its own
//! presentation delay. The engine never sleeps and owns no timer.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Seat};
use crate::{lines, strategy};

/// Outcome of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Drawn,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Running win counts, kept across rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub human: u32,
    pub opponent: u32,
}

/// Permission to make one computer move, issued when the opponent's turn
/// begins and handed to whatever scheduler the frontend uses.
///
/// The cue captures the engine epoch at issue time. A `reset` bumps the
/// epoch, so a cue that was scheduled before the reset is recognized as
/// stale when it finally fires and is skipped instead of stamping an O
/// onto the fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentCue {
    epoch: u64,
}

/// Read-only view of engine state for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub turn: Seat,
    pub outcome: Outcome,
    pub scores: ScoreBoard,
}

/// Authoritative game state: board, turn, outcome, and scoreboard
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    turn: Seat,
    outcome: Outcome,
    scores: ScoreBoard,
    epoch: u64,
}

impl GameEngine {
    /// Create an engine with an empty board, human to move, zero scores
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            turn: Seat::Human,
            outcome: Outcome::InProgress,
            scores: ScoreBoard::default(),
            epoch: 0,
        }
    }

    /// Build an engine over an existing position.
    ///
    /// Lets tests and demos start mid-game. Scores start at zero; the
    /// outcome is derived from the board, and a board that is already
    /// terminal credits neither side (scores only move on transitions
    /// during play).
    pub fn from_position(board: Board, turn: Seat) -> Self {
        let outcome = if let Some(marker) = lines::winner(&board) {
            Outcome::Won(marker)
        } else if board.is_full() {
            Outcome::Drawn
        } else {
            Outcome::InProgress
        };
        GameEngine {
            board,
            turn,
            outcome,
            scores: ScoreBoard::default(),
            epoch: 0,
        }
    }

    /// Cue for the opponent's pending move, if it is currently owed one.
    ///
    /// `Some` exactly when the round is in progress and the opponent is to
    /// move; the cue is bound to the current epoch.
    pub fn opponent_cue(&self) -> Option<OpponentCue> {
        if self.outcome == Outcome::InProgress && self.turn == Seat::Opponent {
            Some(OpponentCue { epoch: self.epoch })
        } else {
            None
        }
    }

    /// Apply the human's move at `pos`.
    ///
    /// Returns `Some(OpponentCue)` when the game continues and the opponent
    /// should be scheduled; the caller invokes [`computer_move`] with the
    /// cue after its presentation delay. Returns `None` when the move ended
    /// the round.
    ///
    /// # Errors
    ///
    /// Rejects the call with state unchanged when the round is over, it is
    /// not the human's turn, `pos` is out of bounds, or the cell is
    /// occupied.
    ///
    /// [`computer_move`]: Self::computer_move
    pub fn apply_human_move(&mut self, pos: usize) -> crate::Result<Option<OpponentCue>> {
        if self.outcome.is_terminal() {
            return Err(crate::Error::GameOver);
        }
        if self.turn != Seat::Human {
            return Err(crate::Error::OutOfTurn { seat: Seat::Human });
        }
        self.board.place(pos, Seat::Human.marker())?;
        self.turn = Seat::Opponent;
        self.evaluate_terminal();
        Ok(self.opponent_cue())
    }

    /// Make the computer's move, honoring a previously issued cue.
    ///
    /// Fire-time guard: if the cue is stale (a reset happened since it was
    /// issued), or the round has ended, or it is no longer the opponent's
    /// turn, the call is a skip: `Ok(false)` with state unchanged. On a
    /// real move returns `Ok(true)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMoveAvailable`] if no empty cell exists, which is
    /// unreachable through the engine's own sequencing: a full board is
    /// declared drawn before any cue is issued.
    ///
    /// [`Error::NoMoveAvailable`]: crate::Error::NoMoveAvailable
    pub fn computer_move<R: Rng + ?Sized>(
        &mut self,
        cue: OpponentCue,
        rng: &mut R,
    ) -> crate::Result<bool> {
        if cue.epoch != self.epoch
            || self.outcome.is_terminal()
            || self.turn != Seat::Opponent
        {
            return Ok(false);
        }

        let pos = strategy::select_move(&self.board, rng).ok_or(crate::Error::NoMoveAvailable)?;
        self.board.place(pos, Seat::Opponent.marker())?;
        self.turn = Seat::Human;
        self.evaluate_terminal();
        Ok(true)
    }

    /// Start a new round: board cleared, human to move, scores kept.
    ///
    /// Bumps the epoch so any opponent move still sitting in a scheduler
    /// becomes stale.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Seat::Human;
        self.outcome = Outcome::InProgress;
        self.epoch += 1;
    }

    /// Evaluate win/draw after a move.
    ///
    /// The score increments exactly once, on the transition into `Won`;
    /// this is only called while `outcome` is still `InProgress`.
    fn evaluate_terminal(&mut self) {
        debug_assert_eq!(self.outcome, Outcome::InProgress);
        if let Some(marker) = lines::winner(&self.board) {
            self.outcome = Outcome::Won(marker);
            match marker {
                Player::X => self.scores.human += 1,
                Player::O => self.scores.opponent += 1,
            }
        } else if self.board.is_full() {
            self.outcome = Outcome::Drawn;
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    /// Read-only state view for the renderer
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            turn: self.turn,
            outcome: self.outcome,
            scores: self.scores,
        }
    }

    /// Status text for the UI's status line
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::Won(marker) => format!("{marker} wins!"),
            Outcome::Drawn => "It's a draw!".to_string(),
            Outcome::InProgress => match self.turn {
                Seat::Human => "Your turn (X)".to_string(),
                Seat::Opponent => "Computer's turn (O)".to_string(),
            },
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::board::Cell;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_human_move_places_x_and_passes_turn() {
        let mut engine = GameEngine::new();
        let cue = engine.apply_human_move(4).unwrap();
        assert!(cue.is_some());
        assert_eq!(engine.board().get(4), Cell::X);
        assert_eq!(engine.turn(), Seat::Opponent);
        assert_eq!(engine.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_occupied_cell_rejected_without_state_change() {
        let mut engine = GameEngine::new();
        let cue = engine.apply_human_move(4).unwrap().unwrap();
        engine.computer_move(cue, &mut rng()).unwrap();

        let before = engine.snapshot();
        let err = engine.apply_human_move(4).unwrap_err();
        assert_eq!(err, crate::Error::CellOccupied { position: 4 });
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_move_out_of_turn_rejected() {
        let mut engine = GameEngine::new();
        engine.apply_human_move(0).unwrap();
        // Opponent to move now; a second human move must be rejected.
        let before = engine.snapshot();
        let err = engine.apply_human_move(1).unwrap_err();
        assert_eq!(err, crate::Error::OutOfTurn { seat: Seat::Human });
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = GameEngine::new();
        let err = engine.apply_human_move(9).unwrap_err();
        assert_eq!(err, crate::Error::OutOfBounds { position: 9 });
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_computer_move_skips_stale_cue_after_reset() {
        let mut engine = GameEngine::new();
        let cue = engine.apply_human_move(0).unwrap().unwrap();
        engine.reset();

        let moved = engine.computer_move(cue, &mut rng()).unwrap();
        assert!(!moved, "stale cue must be skipped");
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.turn(), Seat::Human);
    }

    #[test]
    fn test_computer_move_skips_when_not_opponent_turn() {
        let mut engine = GameEngine::new();
        let cue = engine.apply_human_move(0).unwrap().unwrap();
        assert!(engine.computer_move(cue, &mut rng()).unwrap());

        // The cue is spent; replaying it out of turn is a skip.
        let before = engine.snapshot();
        assert!(!engine.computer_move(cue, &mut rng()).unwrap());
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_human_win_freezes_turn_and_increments_score() {
        let board = Board::from_string("XX.OO....").unwrap();
        let mut engine = GameEngine::from_position(board, Seat::Human);

        let cue = engine.apply_human_move(2).unwrap();
        assert!(cue.is_none(), "a finished round issues no cue");
        assert_eq!(engine.outcome(), Outcome::Won(Player::X));
        assert_eq!(engine.scores(), ScoreBoard { human: 1, opponent: 0 });

        // Turn is frozen until reset
        assert_eq!(engine.apply_human_move(5).unwrap_err(), crate::Error::GameOver);
    }

    #[test]
    fn test_opponent_win_increments_opponent_score() {
        let board = Board::from_string("OO.XX....").unwrap();
        let mut engine = GameEngine::from_position(board, Seat::Opponent);
        let cue = engine.opponent_cue().unwrap();

        assert!(engine.computer_move(cue, &mut rng()).unwrap());
        assert_eq!(engine.board().get(2), Cell::O);
        assert_eq!(engine.outcome(), Outcome::Won(Player::O));
        assert_eq!(engine.scores(), ScoreBoard { human: 0, opponent: 1 });
    }

    #[test]
    fn test_draw_leaves_scores_alone() {
        // Final human move at 8 fills the board with no line made:
        // X O X
        // X O O
        // O X .
        let board = Board::from_string("XOXXOOOX.").unwrap();
        let mut engine = GameEngine::from_position(board, Seat::Human);

        assert!(engine.apply_human_move(8).unwrap().is_none());
        assert_eq!(engine.outcome(), Outcome::Drawn);
        assert_eq!(engine.scores(), ScoreBoard::default());
    }

    #[test]
    fn test_reset_clears_round_but_keeps_scores() {
        let board = Board::from_string("XX.OO....").unwrap();
        let mut engine = GameEngine::from_position(board, Seat::Human);
        engine.apply_human_move(2).unwrap();
        assert_eq!(engine.scores().human, 1);

        engine.reset();
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.turn(), Seat::Human);
        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert_eq!(engine.scores(), ScoreBoard { human: 1, opponent: 0 });
    }

    #[test]
    fn test_status_line_wording() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.status_line(), "Your turn (X)");

        engine.apply_human_move(0).unwrap();
        assert_eq!(engine.status_line(), "Computer's turn (O)");

        let won = GameEngine::from_position(Board::from_string("XXXOO....").unwrap(), Seat::Opponent);
        assert_eq!(won.status_line(), "X wins!");

        let drawn = GameEngine::from_position(Board::from_string("XOXXOOOXX").unwrap(), Seat::Human);
        assert_eq!(drawn.status_line(), "It's a draw!");
    }

    #[test]
    fn test_no_cue_while_human_to_move() {
        let engine = GameEngine::new();
        assert!(engine.opponent_cue().is_none());
    }
}
