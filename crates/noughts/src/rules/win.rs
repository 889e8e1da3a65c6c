//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// A line of three cell indices.
pub type Line = [usize; 3];

/// The eight winning lines: rows, columns, then diagonals.
///
/// The scan order is fixed so a board with more than one complete
/// line always reports the same one.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a completed line on the board.
///
/// Returns the owning mark together with the line, or `None` when no
/// three matching marks line up. The first complete line in [`LINES`]
/// order wins.
#[instrument]
pub fn find_winner(board: &Board) -> Option<(Mark, Line)> {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(Cell::Occupied(mark)) = board.get(a)
            && board.get(b) == Some(Cell::Occupied(mark))
            && board.get(c) == Some(Cell::Occupied(mark))
        {
            return Some((mark, line));
        }
    }

    None
}
