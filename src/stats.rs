//! Statistics collection for minimax searches

use std::time::Duration;

/// Statistics collected during a search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatistics {
    /// Number of positions visited, including the root
    pub nodes_visited: usize,

    /// Number of terminal positions evaluated
    pub terminal_nodes: usize,

    /// Number of values answered from the transposition table
    pub transposition_hits: usize,

    /// Deepest ply reached below the root
    pub max_depth: usize,

    /// Total time spent searching
    pub total_time: Duration,

    /// Whether the search was stopped early due to time constraints
    pub stopped_early: bool,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            nodes_visited: 0,
            terminal_nodes: 0,
            transposition_hits: 0,
            max_depth: 0,
            total_time: Duration::from_secs(0),
            stopped_early: false,
        }
    }

    /// Returns the number of nodes visited per second
    pub fn nodes_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.nodes_visited as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Minimax Search Statistics:\n\
             - Nodes visited: {}\n\
             - Terminal nodes: {}\n\
             - Transposition hits: {}\n\
             - Max depth: {}\n\
             - Total time: {:.3} seconds\n\
             - Nodes per second: {:.1}\n\
             - Stopped early: {}",
            self.nodes_visited,
            self.terminal_nodes,
            self.transposition_hits,
            self.max_depth,
            self.total_time.as_secs_f64(),
            self.nodes_per_second(),
            self.stopped_early
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
