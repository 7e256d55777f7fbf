//! Exhaustive minimax search
//!
//! Values are backed up from terminal positions by two mutually recursive
//! functions: the maximising side (X) takes the largest successor value and
//! the minimising side (O) the smallest. No pruning is done; the 3x3 tree is
//! small enough to search in full.

use std::collections::HashMap;
use std::time::Instant;

use crate::{
    board::Board,
    config::{MoveOrder, SearchConfig},
    game_state::GameState,
    stats::SearchStatistics,
    Result, SolverError,
};

/// Which value function a cached entry was computed by
///
/// `max_value` and `min_value` can disagree on the same position when called
/// on a position where the other side is to move, so they are cached apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Role {
    Max,
    Min,
}

/// The minimax searcher
///
/// Holds the configuration, the statistics of the last search and, when
/// enabled, a transposition table. Cached values are exact, so the table is
/// kept between searches until [`Minimax::clear_transpositions`] is called.
pub struct Minimax<S: GameState = Board> {
    config: SearchConfig,
    statistics: SearchStatistics,
    transpositions: HashMap<(S, Role), i32>,
    deadline: Option<Instant>,
}

impl<S: GameState> Minimax<S> {
    /// Creates a new searcher with the given configuration
    pub fn new(config: SearchConfig) -> Self {
        Minimax {
            config,
            statistics: SearchStatistics::new(),
            transpositions: HashMap::new(),
            deadline: None,
        }
    }

    /// Returns the configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the statistics of the last search
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Number of cached position values
    pub fn transposition_count(&self) -> usize {
        self.transpositions.len()
    }

    pub fn clear_transpositions(&mut self) {
        self.transpositions.clear();
    }

    /// Best value the maximising player can force from `state`
    pub fn max_value(&mut self, state: &S) -> Result<i32> {
        self.run(|search| search.max_at(state, 0))
    }

    /// Best value the minimising player can force from `state`
    pub fn min_value(&mut self, state: &S) -> Result<i32> {
        self.run(|search| search.min_at(state, 0))
    }

    /// Value of `state` under optimal play by both sides, starting with the
    /// side to move
    pub fn evaluate(&mut self, state: &S) -> Result<i32> {
        self.run(|search| search.value_for_mover(state))
    }

    /// Returns the optimal move for the side to move, or `None` if the game
    /// is over.
    ///
    /// Among several optimal moves the first in the configured scan order is
    /// returned.
    ///
    /// # Errors
    ///
    /// [`SolverError::SearchStopped`] if the configured time limit elapses,
    /// and [`SolverError::Inconsistent`] if no move reproduces the value of
    /// the position.
    pub fn best_move(&mut self, state: &S) -> Result<Option<S::Move>> {
        self.run(|search| {
            if state.is_terminal() {
                return Ok(None);
            }

            let maximizing = state.first_player_to_move();
            let target = search.value_for_mover(state)?;
            log::debug!("target value {} for {:?}", target, state);

            for mv in search.ordered_moves(state)? {
                let child = state.apply_move(mv)?;
                let value = if maximizing {
                    search.min_at(&child, 1)?
                } else {
                    search.max_at(&child, 1)?
                };
                if value == target {
                    log::debug!("selected move {:?} with value {}", mv, value);
                    return Ok(Some(mv));
                }
            }

            log::error!("no move of {:?} reaches value {}", state, target);
            Err(SolverError::Inconsistent { target })
        })
    }

    /// Every legal move with the value of the position it leads to, in scan
    /// order.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidState`] if the game is over.
    pub fn scored_moves(&mut self, state: &S) -> Result<Vec<(S::Move, i32)>> {
        self.run(|search| {
            let maximizing = state.first_player_to_move();
            let mut scored = Vec::new();
            for mv in search.ordered_moves(state)? {
                let child = state.apply_move(mv)?;
                let value = if maximizing {
                    search.min_at(&child, 1)?
                } else {
                    search.max_at(&child, 1)?
                };
                scored.push((mv, value));
            }
            Ok(scored)
        })
    }

    /// Resets statistics and the deadline, runs `f` and records timing.
    fn run<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.statistics = SearchStatistics::new();
        let start_time = Instant::now();
        self.deadline = self.config.max_time.map(|limit| start_time + limit);

        let result = f(self);

        self.statistics.total_time = start_time.elapsed();
        self.deadline = None;
        log::debug!("{}", self.statistics.summary());
        result
    }

    /// Legal moves in the configured scan order
    fn ordered_moves(&self, state: &S) -> Result<Vec<S::Move>> {
        let mut moves = state.legal_moves()?;
        if self.config.move_order == MoveOrder::Priority {
            // Stable, so equal priorities keep the generated order
            moves.sort_by_key(|mv| state.move_priority(*mv));
        }
        Ok(moves)
    }

    fn value_for_mover(&mut self, state: &S) -> Result<i32> {
        if state.first_player_to_move() {
            self.max_at(state, 0)
        } else {
            self.min_at(state, 0)
        }
    }

    fn max_at(&mut self, state: &S, depth: usize) -> Result<i32> {
        self.visit(depth)?;
        if state.is_terminal() {
            return Ok(self.leaf(state));
        }
        if let Some(value) = self.cached(state, Role::Max) {
            return Ok(value);
        }

        let mut best = i32::MIN;
        for mv in self.ordered_moves(state)? {
            let child = state.apply_move(mv)?;
            best = best.max(self.min_at(&child, depth + 1)?);
        }

        log::trace!("max_value at depth {} of {:?} is {}", depth, state, best);
        self.store(state, Role::Max, best);
        Ok(best)
    }

    fn min_at(&mut self, state: &S, depth: usize) -> Result<i32> {
        self.visit(depth)?;
        if state.is_terminal() {
            return Ok(self.leaf(state));
        }
        if let Some(value) = self.cached(state, Role::Min) {
            return Ok(value);
        }

        let mut best = i32::MAX;
        for mv in self.ordered_moves(state)? {
            let child = state.apply_move(mv)?;
            best = best.min(self.max_at(&child, depth + 1)?);
        }

        log::trace!("min_value at depth {} of {:?} is {}", depth, state, best);
        self.store(state, Role::Min, best);
        Ok(best)
    }

    /// Counts a node and enforces the time limit
    fn visit(&mut self, depth: usize) -> Result<()> {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.statistics.stopped_early = true;
                return Err(SolverError::SearchStopped(format!(
                    "time limit reached after {} nodes",
                    self.statistics.nodes_visited
                )));
            }
        }
        self.statistics.nodes_visited += 1;
        self.statistics.max_depth = self.statistics.max_depth.max(depth);
        Ok(())
    }

    fn leaf(&mut self, state: &S) -> i32 {
        self.statistics.terminal_nodes += 1;
        let value = state.terminal_value();
        log::trace!("terminal {:?} has value {}", state, value);
        value
    }

    fn cached(&mut self, state: &S, role: Role) -> Option<i32> {
        if !self.config.use_transpositions {
            return None;
        }
        let value = self.transpositions.get(&(state.clone(), role)).copied();
        if value.is_some() {
            self.statistics.transposition_hits += 1;
        }
        value
    }

    fn store(&mut self, state: &S, role: Role, value: i32) {
        if self.config.use_transpositions {
            self.transpositions.insert((state.clone(), role), value);
        }
    }
}

impl<S: GameState> Default for Minimax<S> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Best value X can force from `board`, with X choosing first.
pub fn max_value(board: &Board) -> Result<i32> {
    Minimax::<Board>::default().max_value(board)
}

/// Best value O can force from `board`, with O choosing first.
pub fn min_value(board: &Board) -> Result<i32> {
    Minimax::<Board>::default().min_value(board)
}

/// Optimal move for the side to move, `None` once the game is over.
///
/// Ties go to the first optimal move in row-major order.
pub fn best_move(board: &Board) -> Result<Option<crate::moves::Move>> {
    Minimax::<Board>::default().best_move(board)
}
