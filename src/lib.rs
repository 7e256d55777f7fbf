//! # tictactoe-minimax
//!
//! An exact minimax solver for 3x3 tic-tac-toe.
//!
//! Given any position, the crate computes the move that guarantees the best
//! achievable outcome when both sides play perfectly. Values are backed up
//! from terminal positions only: `+1` when X (the first player) wins, `-1`
//! when O wins and `0` for a draw. There is no heuristic evaluation of
//! unfinished positions.
//!
//! ## Basic Usage
//!
//! ```
//! use tictactoe_minimax::{apply_move, best_move, initial_board, Move};
//!
//! fn main() -> Result<(), tictactoe_minimax::SolverError> {
//!     let board = initial_board();
//!
//!     // X opens in the corner, what should O answer?
//!     let board = apply_move(&board, Move::new(0, 0)?)?;
//!     let reply = best_move(&board)?.expect("the game is not over");
//!
//!     // Every reply except the centre loses for O
//!     assert_eq!(reply, Move::new(1, 1)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuring the search
//!
//! ```
//! use tictactoe_minimax::{initial_board, Minimax, SearchConfig, config::MoveOrder};
//!
//! fn main() -> Result<(), tictactoe_minimax::SolverError> {
//!     let config = SearchConfig::default()
//!         .with_transpositions(true)
//!         .with_move_order(MoveOrder::Priority);
//!
//!     let mut minimax = Minimax::new(config);
//!     assert_eq!(minimax.evaluate(&initial_board())?, 0);
//!     println!("{}", minimax.get_statistics().summary());
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! The search is two mutually recursive value functions. `max_value` returns
//! the best value X can force from a position, `min_value` the best value O
//! can force. Both return the terminal value directly once the game is over.
//! `best_move` computes the target value of the position once and then scans
//! the legal moves in a fixed order, returning the first whose successor
//! backs up to that target.

pub mod board;
pub mod config;
pub mod game_state;
pub mod moves;
pub mod playout;
pub mod rules;
pub mod search;
pub mod stats;

pub use board::{initial_board, side_to_move, Board, Cell, Side};
pub use config::SearchConfig;
pub use game_state::GameState;
pub use moves::{apply_move, legal_moves, Move};
pub use rules::{board_full, is_terminal, value, winner, winning_line_present};
pub use search::{best_move, max_value, min_value, Minimax};
pub use stats::SearchStatistics;

/// Error types for the solver
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The targeted cell is already occupied
    #[error("Illegal move: cell ({row}, {col}) is not empty")]
    IllegalMove { row: usize, col: usize },

    /// A coordinate outside the 3x3 grid
    #[error("Move ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// The board violates an invariant or a precondition of the operation
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Search was stopped before completion
    #[error("Search stopped: {0}")]
    SearchStopped(String),

    /// No legal move reproduced the backed-up value of the position
    #[error("Search inconsistency: no move reaches the backed-up value {target}")]
    Inconsistent { target: i32 },
}

/// Result type for solver operations
pub type Result<T> = std::result::Result<T, SolverError>;
