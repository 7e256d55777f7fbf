//! Complete games driven by the solver
//!
//! These drivers play a game from the empty board to the end. They are what
//! an interactive front end does between turns, without any input or output.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    board::{initial_board, side_to_move, Board, Side},
    config::SearchConfig,
    moves::{apply_move, legal_moves, Move},
    rules::{is_terminal, value, winner},
    search::Minimax,
    Result, SolverError,
};

/// The moves of a finished game and the position it ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub final_board: Board,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Side> {
        winner(&self.final_board)
    }

    /// `+1`, `-1` or `0` from X's point of view
    pub fn value(&self) -> i32 {
        value(&self.final_board)
    }
}

/// Plays both sides with [`Minimax::best_move`] until the game ends.
///
/// With perfect play on both sides the result is always a draw.
pub fn self_play(config: SearchConfig) -> Result<GameRecord> {
    let mut search = Minimax::new(config);
    let mut board = initial_board();
    let mut moves = Vec::new();

    while let Some(mv) = search.best_move(&board)? {
        log::debug!("{} plays {}", side_to_move(&board), mv);
        board = apply_move(&board, mv)?;
        moves.push(mv);
    }

    Ok(GameRecord {
        moves,
        final_board: board,
    })
}

/// Plays `solver_side` with the solver against an opponent choosing uniformly
/// random legal moves.
///
/// The solver never loses.
pub fn play_against_random<R: Rng + ?Sized>(
    solver_side: Side,
    rng: &mut R,
    config: SearchConfig,
) -> Result<GameRecord> {
    let mut search = Minimax::new(config);
    let mut board = initial_board();
    let mut moves = Vec::new();

    while !is_terminal(&board) {
        let mover = side_to_move(&board);
        let choice = if mover == solver_side {
            search.best_move(&board)?
        } else {
            legal_moves(&board)?.choose(rng).copied()
        };
        let mv = choice.ok_or_else(|| {
            SolverError::InvalidState("no move in an unfinished game".to_string())
        })?;

        log::debug!("{} plays {}", mover, mv);
        board = apply_move(&board, mv)?;
        moves.push(mv);
    }

    Ok(GameRecord {
        moves,
        final_board: board,
    })
}
