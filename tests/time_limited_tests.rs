use std::time::Duration;
use tictactoe_minimax::{initial_board, Board, Minimax, SearchConfig, SolverError};

#[test]
fn test_generous_time_limit_completes() {
    let config = SearchConfig::default().with_max_time(Duration::from_secs(60));
    let mut minimax = Minimax::new(config);

    let result = minimax.best_move(&initial_board());
    assert!(result.is_ok(), "Search should have found a move");
    assert!(!minimax.get_statistics().stopped_early);

    println!("Stats: {}", minimax.get_statistics().summary());
}

#[test]
fn test_expired_time_limit_stops_search() {
    let config = SearchConfig::default().with_max_time(Duration::from_nanos(1));
    let mut minimax = Minimax::<Board>::new(config);

    let result = minimax.evaluate(&initial_board());
    match result {
        Err(SolverError::SearchStopped(_)) => {
            assert!(minimax.get_statistics().stopped_early);
        }
        Ok(_) => panic!("a full-tree search cannot finish within 1ns"),
        Err(e) => panic!("unexpected error: {}", e),
    }
}
