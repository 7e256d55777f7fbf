//! Trait defining the position interface the minimax search runs on.
//!
//! [`Board`] is the only implementation shipped with the crate. The search in
//! [`crate::search`] is written against this trait so that it only touches
//! positions through move generation, transitions and terminal values.

use std::fmt::Debug;
use std::hash::Hash;

use crate::{board::Board, moves::Move, rules, Result};

/// Trait for two-player, zero-sum positions searched by [`crate::Minimax`]
///
/// Values are from the first player's point of view: the first player
/// maximises, the second minimises.
pub trait GameState: Clone + Debug + Eq + Hash {
    /// The type of moves that can be played from a position
    type Move: Copy + Debug + Eq;

    /// Returns the legal moves
    ///
    /// The order must be deterministic; the search breaks ties by taking the
    /// first optimal move it meets.
    ///
    /// # Errors
    ///
    /// Fails if the position is terminal.
    fn legal_moves(&self) -> Result<Vec<Self::Move>>;

    /// Sort key used by [`crate::config::MoveOrder::Priority`], lowest first
    ///
    /// The default ranks every move equally, which keeps the generated order.
    fn move_priority(&self, _mv: Self::Move) -> usize {
        0
    }

    /// Returns the position after playing `mv`, leaving `self` untouched
    fn apply_move(&self, mv: Self::Move) -> Result<Self>;

    /// Returns true if the game is over
    fn is_terminal(&self) -> bool;

    /// Returns the exact value of a terminal position
    fn terminal_value(&self) -> i32;

    /// Returns true if the first (maximising) player is to move
    fn first_player_to_move(&self) -> bool;
}

impl GameState for Board {
    type Move = Move;

    /// Row-major
    fn legal_moves(&self) -> Result<Vec<Move>> {
        crate::moves::legal_moves(self)
    }

    /// Centre, then corners, then edges
    fn move_priority(&self, mv: Move) -> usize {
        match (mv.row(), mv.col()) {
            (1, 1) => 0,
            (row, col) if row != 1 && col != 1 => 1,
            _ => 2,
        }
    }

    fn apply_move(&self, mv: Move) -> Result<Board> {
        crate::moves::apply_move(self, mv)
    }

    fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    fn terminal_value(&self) -> i32 {
        rules::value(self)
    }

    fn first_player_to_move(&self) -> bool {
        crate::board::side_to_move(self) == crate::board::Side::X
    }
}
