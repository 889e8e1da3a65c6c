//! The game session state machine.

use crate::rules::{Line, find_winner, is_draw};
use crate::types::{Board, Cell, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Reason a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RejectedMove {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
    /// The index is outside the board.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
}

impl std::error::Error for RejectedMove {}

/// A single game between two players alternating at one board.
///
/// The session owns the board, tracks which mark moves next, and
/// holds a status recomputed wholesale from the board after every
/// accepted move. X always moves first; turns never skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    next_mark: Mark,
    status: GameStatus,
}

impl GameSession {
    /// Creates a session with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_mark: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// Returns the current status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the completed line when the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won(_, line) => Some(line),
            _ => None,
        }
    }

    /// Checks whether a move at the given index would be accepted.
    ///
    /// Pure query; the session is never touched.
    pub fn validate_move(&self, index: usize) -> Result<(), RejectedMove> {
        if self.status != GameStatus::InProgress {
            return Err(RejectedMove::GameOver);
        }
        if index >= 9 {
            return Err(RejectedMove::OutOfRange(index));
        }
        if !self.board.is_empty(index) {
            return Err(RejectedMove::Occupied(index));
        }
        Ok(())
    }

    /// Places the next mark at the given index (0-8).
    ///
    /// Returns whether the move was accepted. Invalid input — a
    /// finished game, an out-of-range index, or an occupied cell —
    /// leaves the session unchanged and returns `false`.
    #[instrument(skip(self), fields(mark = %self.next_mark))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        if let Err(rejected) = self.validate_move(index) {
            debug!(index, %rejected, "move ignored");
            return false;
        }

        self.board.set(index, Cell::Occupied(self.next_mark));
        self.next_mark = self.next_mark.opponent();

        // Win check first: a move can fill the board and complete a
        // line at the same time.
        self.status = match find_winner(&self.board) {
            Some((mark, line)) => GameStatus::Won(mark, line),
            None if is_draw(&self.board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };

        debug!(index, status = ?self.status, "move applied");
        true
    }

    /// Discards all state and starts over: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("resetting session");
        *self = Self::new();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
