//! Application state and input handling.

use noughts::{GameSession, GameStatus};
use tracing::debug;

const TURN_HINT: &str = "Press 1-9, or move the cursor and press Enter.";

/// Main application state: the session plus cursor and status line.
pub struct App {
    session: GameSession,
    cursor: usize,
    status_message: String,
}

impl App {
    /// Creates a new application with a fresh session.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: 4,
            status_message: format!("Player X's turn. {TURN_HINT}"),
        }
    }

    /// Returns the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the cell index under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Places the next mark at the given cell (0-8).
    ///
    /// The session silently ignores invalid input; the rejection
    /// reason only shows up in the status line.
    pub fn place_at(&mut self, index: usize) {
        debug!(index, "placing mark");

        if let Err(rejected) = self.session.validate_move(index) {
            self.status_message = format!("{rejected}. Try again.");
            return;
        }

        self.session.apply_move(index);
        self.refresh_status();
    }

    /// Places the next mark at the cell under the cursor.
    pub fn place_at_cursor(&mut self) {
        self.place_at(self.cursor);
    }

    /// Moves the cursor by one cell, clamped to the grid.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let col = ((self.cursor % 3) as i32 + dx).clamp(0, 2);
        let row = ((self.cursor / 3) as i32 + dy).clamp(0, 2);
        self.cursor = (row * 3 + col) as usize;
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.session.reset();
        self.cursor = 4;
        self.status_message = format!("Player X's turn. {TURN_HINT}");
    }

    fn refresh_status(&mut self) {
        self.status_message = match self.session.status() {
            GameStatus::InProgress => {
                format!("Player {}'s turn. {TURN_HINT}", self.session.next_mark())
            }
            GameStatus::Won(mark, _) => {
                format!("Player {mark} wins! Press 'r' to restart or 'q' to quit.")
            }
            GameStatus::Draw => {
                "It's a draw! Press 'r' to restart or 'q' to quit.".to_string()
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts::{Cell, Mark};

    #[test]
    fn test_cursor_clamps_to_grid() {
        let mut app = App::new();
        app.move_cursor(-1, -1);
        app.move_cursor(-1, -1);
        assert_eq!(app.cursor(), 0);
        for _ in 0..5 {
            app.move_cursor(1, 1);
        }
        assert_eq!(app.cursor(), 8);
    }

    #[test]
    fn test_place_at_cursor_marks_the_cell() {
        let mut app = App::new();
        app.place_at_cursor();
        assert_eq!(app.session().board().get(4), Some(Cell::Occupied(Mark::X)));
        assert!(app.status_message().contains("Player O's turn"));
    }

    #[test]
    fn test_rejected_move_explains_itself() {
        let mut app = App::new();
        app.place_at(4);
        app.place_at(4);
        assert!(app.status_message().contains("already occupied"));
        // Session untouched by the second press.
        assert_eq!(app.session().next_mark(), Mark::O);
    }

    #[test]
    fn test_win_banner() {
        let mut app = App::new();
        for index in [0, 1, 3, 4, 6] {
            app.place_at(index);
        }
        assert!(app.status_message().contains("Player X wins"));
    }

    #[test]
    fn test_restart_clears_the_board() {
        let mut app = App::new();
        app.place_at(0);
        app.restart();
        assert_eq!(app.session(), &GameSession::new());
        assert_eq!(app.cursor(), 4);
    }
}
