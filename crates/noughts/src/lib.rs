//! Noughts - tic-tac-toe game logic for two players on a 3x3 grid.
//!
//! This crate is the game core only: a session state machine
//! ([`GameSession`]) governing turn alternation, move validation, and
//! terminal-state detection, plus pure rules over board snapshots
//! ([`find_winner`], [`is_draw`]). Rendering and input belong to a
//! front-end that drives the session; `noughts_tui` in this workspace
//! is one such consumer.
//!
//! # Example
//!
//! ```
//! use noughts::{GameSession, GameStatus, Mark};
//!
//! let mut session = GameSession::new();
//! assert_eq!(session.next_mark(), Mark::X);
//!
//! // X takes the center, O the top-left corner.
//! assert!(session.apply_move(4));
//! assert!(session.apply_move(0));
//! assert_eq!(session.status(), &GameStatus::InProgress);
//!
//! // Moves on occupied cells are ignored.
//! assert!(!session.apply_move(4));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod session;
mod types;

// Pure rules are public for callers that evaluate board snapshots directly.
pub mod rules;

// Crate-level exports - session state machine
pub use session::{GameSession, RejectedMove};

// Crate-level exports - rules
pub use rules::{LINES, Line, find_winner, is_draw};

// Crate-level exports - domain types
pub use types::{Board, Cell, GameStatus, Mark};
