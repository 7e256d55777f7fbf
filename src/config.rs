//! Configuration options for the minimax search
//!
//! None of these options change the values the search returns. They trade
//! memory for speed, bound the running time, or fix the order in which
//! equally good moves are found.

use std::time::Duration;

/// Order in which legal moves are scanned
///
/// The first move that reaches the optimal value wins a tie, so the order
/// decides which of several equally good moves [`crate::best_move`] returns.
/// Both orders are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrder {
    /// The order the game generates its legal moves in
    #[default]
    Generated,

    /// Sorted by [`crate::GameState::move_priority`], lowest first; ties keep
    /// the generated order
    Priority,
}

/// Configuration for the minimax search
///
/// # Example
///
/// ```
/// use tictactoe_minimax::{SearchConfig, config::MoveOrder};
/// use std::time::Duration;
///
/// let config = SearchConfig::default()
///     .with_transpositions(true)
///     .with_max_time(Duration::from_secs(1))
///     .with_move_order(MoveOrder::Priority);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchConfig {
    /// Whether to cache backed-up values of positions already searched
    pub use_transpositions: bool,

    /// Maximum time to run a single search
    ///
    /// Checked at every node. When it elapses the search fails with
    /// [`crate::SolverError::SearchStopped`].
    pub max_time: Option<Duration>,

    /// Scan order for legal moves
    pub move_order: MoveOrder,
}

impl SearchConfig {
    /// Sets whether to use a transposition table
    pub fn with_transpositions(mut self, use_transpositions: bool) -> Self {
        self.use_transpositions = use_transpositions;
        self
    }

    /// Sets the maximum time to run a search
    pub fn with_max_time(mut self, duration: Duration) -> Self {
        self.max_time = Some(duration);
        self
    }

    /// Sets the move scan order
    pub fn with_move_order(mut self, order: MoveOrder) -> Self {
        self.move_order = order;
        self
    }
}
