//! Moves, move generation and the transition function.

use std::fmt;

use crate::{
    board::{side_to_move, Board, SIZE},
    rules::is_terminal,
    Result, SolverError,
};

/// A (row, col) coordinate on the grid, both in `0..3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl Move {
    /// Creates a move, rejecting coordinates outside the grid.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= SIZE || col >= SIZE {
            return Err(SolverError::OutOfBounds { row, col });
        }
        Ok(Move { row, col })
    }

    /// Move for a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Result<Self> {
        if index >= SIZE * SIZE {
            return Err(SolverError::OutOfBounds {
                row: index / SIZE,
                col: index % SIZE,
            });
        }
        Ok(Move {
            row: index / SIZE,
            col: index % SIZE,
        })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major cell index (0-8)
    pub fn index(&self) -> usize {
        self.row * SIZE + self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Returns every empty cell in row-major order.
///
/// # Errors
///
/// [`SolverError::InvalidState`] if the game is already over.
pub fn legal_moves(board: &Board) -> Result<Vec<Move>> {
    if is_terminal(board) {
        return Err(SolverError::InvalidState(
            "no moves on a finished board".to_string(),
        ));
    }

    let mut moves = Vec::with_capacity(SIZE * SIZE);
    for row in 0..SIZE {
        for col in 0..SIZE {
            if board.cell(row, col).is_empty() {
                moves.push(Move { row, col });
            }
        }
    }
    Ok(moves)
}

/// Places the mark of the side to move at `mv`, returning the new board.
///
/// The input board is left untouched.
///
/// # Errors
///
/// [`SolverError::IllegalMove`] if the cell is occupied.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board> {
    if !board.cell(mv.row, mv.col).is_empty() {
        return Err(SolverError::IllegalMove {
            row: mv.row,
            col: mv.col,
        });
    }
    let mark = side_to_move(board).mark();
    Ok(board.with_cell(mv.row, mv.col, mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{initial_board, Cell};

    #[test]
    fn test_move_bounds() {
        assert!(Move::new(2, 2).is_ok());
        assert_eq!(
            Move::new(3, 0),
            Err(SolverError::OutOfBounds { row: 3, col: 0 })
        );
        assert!(Move::from_index(9).is_err());
        assert_eq!(Move::from_index(5).unwrap(), Move::new(1, 2).unwrap());
        assert_eq!(Move::new(2, 1).unwrap().index(), 7);
    }

    #[test]
    fn test_legal_moves_on_empty_board() {
        let moves = legal_moves(&initial_board()).unwrap();
        assert_eq!(moves.len(), 9);
        let indices: Vec<usize> = moves.iter().map(Move::index).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_legal_moves_skip_occupied() {
        let board: Board = "XO./.X./O..".parse().unwrap();
        let moves = legal_moves(&board).unwrap();
        let indices: Vec<usize> = moves.iter().map(Move::index).collect();
        assert_eq!(indices, vec![2, 3, 5, 7, 8]);
    }

    #[test]
    fn test_legal_moves_on_finished_board() {
        let board: Board = "XX./X../OOO".parse().unwrap();
        assert!(matches!(
            legal_moves(&board),
            Err(SolverError::InvalidState(_))
        ));
    }

    #[test]
    fn test_apply_move_alternates_marks() {
        let board = initial_board();
        let after_x = apply_move(&board, Move::new(1, 1).unwrap()).unwrap();
        assert_eq!(after_x.cell(1, 1), Cell::X);

        let after_o = apply_move(&after_x, Move::new(0, 0).unwrap()).unwrap();
        assert_eq!(after_o.cell(0, 0), Cell::O);
        assert_eq!(after_o.cell(1, 1), Cell::X);
        assert_eq!(after_o.filled(), 2);
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let board: Board = "XO./.../...".parse().unwrap();
        let before = *board.cells();
        let _ = apply_move(&board, Move::new(2, 2).unwrap()).unwrap();
        assert_eq!(*board.cells(), before);
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let board: Board = "XO./.../...".parse().unwrap();
        assert_eq!(
            apply_move(&board, Move::new(0, 1).unwrap()),
            Err(SolverError::IllegalMove { row: 0, col: 1 })
        );
    }
}
