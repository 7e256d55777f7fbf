//! Self-play example for the minimax solver
//!
//! Both sides play the solver's move. The game always ends in a draw.
//! Run with `RUST_LOG=debug` to see the search log.

use tictactoe_minimax::{
    apply_move, initial_board, side_to_move, winner, Minimax, SearchConfig,
};

fn main() -> Result<(), tictactoe_minimax::SolverError> {
    // Initialize logging
    env_logger::init();

    println!("Minimax Tic-Tac-Toe Self-Play");
    println!("=============================");
    println!();

    let config = SearchConfig::default().with_transpositions(true);
    let mut minimax = Minimax::new(config);
    let mut board = initial_board();

    while let Some(mv) = minimax.best_move(&board)? {
        let mover = side_to_move(&board);
        println!("{}", minimax.get_statistics().summary());

        // Show the value of every candidate before moving
        let hints = minimax.scored_moves(&board)?;
        for (candidate, value) in hints {
            println!("  {} -> {:+}", candidate, value);
        }

        board = apply_move(&board, mv)?;
        println!("{} plays {}", mover, mv);
        println!("{}", board);
        println!();
    }

    match winner(&board) {
        Some(side) => println!("Player {} wins!", side),
        None => println!("The game is a draw!"),
    }

    Ok(())
}
