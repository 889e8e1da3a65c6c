//! Draw detection logic for tic-tac-toe.

use super::win::find_winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is a draw: every cell occupied and no
/// completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && find_winner(board).is_none()
}
