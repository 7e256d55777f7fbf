//! Terminal detection and game values.

use crate::board::{side_to_move, Board, Cell, Side};

/// The eight winning lines as (row, col) triples: rows, columns, diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Value of a position X has won
pub const WIN_X: i32 = 1;
/// Value of a position O has won
pub const WIN_O: i32 = -1;
/// Value of a drawn position
pub const DRAW: i32 = 0;

fn line_complete(board: &Board, line: &[(usize, usize); 3]) -> bool {
    let [a, b, c] = line.map(|(row, col)| board.cell(row, col));
    a != Cell::Empty && a == b && b == c
}

/// True if any row, column or diagonal holds three identical marks.
pub fn winning_line_present(board: &Board) -> bool {
    LINES.iter().any(|line| line_complete(board, line))
}

/// True if no cell is empty.
pub fn board_full(board: &Board) -> bool {
    board.count(Cell::Empty) == 0
}

/// True once a line is completed or the grid is full.
pub fn is_terminal(board: &Board) -> bool {
    winning_line_present(board) || board_full(board)
}

/// Returns the winner of a finished game.
///
/// `None` for a draw and for any game still in progress. The winner is the
/// side that made the last move, i.e. the opponent of [`side_to_move`].
pub fn winner(board: &Board) -> Option<Side> {
    if winning_line_present(board) {
        Some(side_to_move(board).opponent())
    } else {
        None
    }
}

/// `+1` if X has won, `-1` if O has won, `0` otherwise.
///
/// Unfinished boards also score `0`; the search only asks once
/// [`is_terminal`] holds.
pub fn value(board: &Board) -> i32 {
    match winner(board) {
        Some(Side::X) => WIN_X,
        Some(Side::O) => WIN_O,
        None => DRAW,
    }
}
