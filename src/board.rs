//! Board representation for 3x3 tic-tac-toe.
//!
//! A [`Board`] is a plain `Copy` value. Every transition produces a new board,
//! so branches of the search tree never share a grid. The side to move is not
//! stored; it is derived from how many cells are occupied.

use std::fmt;
use std::str::FromStr;

use crate::{Result, SolverError};

/// Side length of the grid
pub const SIZE: usize = 3;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Mark of the first player
    X,
    /// Mark of the second player
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// One of the two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    X,
    O,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// The cell value this side places on the board
    pub fn mark(self) -> Cell {
        match self {
            Side::X => Cell::X,
            Side::O => Cell::O,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().symbol())
    }
}

/// A 3x3 grid of cells
///
/// Boards built through [`initial_board`] and [`crate::apply_move`], or
/// checked by [`Board::from_cells`], always hold as many X marks as O marks,
/// or exactly one more X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

/// Returns the empty starting board.
pub fn initial_board() -> Board {
    Board::default()
}

/// Returns the side whose turn it is: X after an even number of moves, O
/// after an odd number.
///
/// Defined for every board, including finished ones where the answer is of
/// no use to the caller.
pub fn side_to_move(board: &Board) -> Side {
    if board.filled() % 2 == 0 {
        Side::X
    } else {
        Side::O
    }
}

impl Board {
    /// Builds a board from a grid, checking the mark-count invariant.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidState`] if O has more marks than X, or X is ahead
    /// by more than one.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Result<Self> {
        let board = Board { cells };
        let xs = board.count(Cell::X);
        let os = board.count(Cell::O);
        if xs != os && xs != os + 1 {
            return Err(SolverError::InvalidState(format!(
                "board has {} X marks and {} O marks",
                xs, os
            )));
        }
        Ok(board)
    }

    /// Cell at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 3 or more. Coordinates checked through
    /// [`crate::Move::new`] are always in range.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Number of occupied cells
    pub fn filled(&self) -> usize {
        SIZE * SIZE - self.count(Cell::Empty)
    }

    /// Copy of this board with `cell` written at (row, col). Callers check
    /// bounds and occupancy.
    pub(crate) fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[row][col] = cell;
        next
    }
}

/// Parses nine cells in row-major order.
///
/// `X`/`x` and `O`/`o` are marks; `.`, `-`, `_` and a space are empty cells.
/// Line breaks, tabs and `/` are ignored, so `"XO./.X./..O"` and a three-line
/// grid both work.
impl FromStr for Board {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        let mut index = 0;

        let symbols = s.chars().filter(|c| !matches!(c, '\n' | '\r' | '\t' | '/'));
        for ch in symbols {
            let cell = match ch {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '-' | '_' | ' ' => Cell::Empty,
                other => {
                    return Err(SolverError::InvalidState(format!(
                        "unexpected character {:?} in board",
                        other
                    )))
                }
            };
            if index >= SIZE * SIZE {
                return Err(SolverError::InvalidState(
                    "board has more than 9 cells".to_string(),
                ));
            }
            cells[index / SIZE][index % SIZE] = cell;
            index += 1;
        }

        if index != SIZE * SIZE {
            return Err(SolverError::InvalidState(format!(
                "board has {} cells, expected 9",
                index
            )));
        }

        Board::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_is_empty() {
        let board = initial_board();
        assert_eq!(board.count(Cell::Empty), 9);
        assert_eq!(board.filled(), 0);
        assert_eq!(side_to_move(&board), Side::X);
    }

    #[test]
    fn test_side_to_move_follows_parity() {
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(side_to_move(&board), Side::O);

        let board: Board = "XO./.../...".parse().unwrap();
        assert_eq!(side_to_move(&board), Side::X);

        // Full board still answers
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(side_to_move(&board), Side::O);
    }

    #[test]
    fn test_from_cells_rejects_bad_counts() {
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][0] = Cell::O;
        assert!(matches!(
            Board::from_cells(cells),
            Err(SolverError::InvalidState(_))
        ));

        cells[0][0] = Cell::X;
        cells[0][1] = Cell::X;
        assert!(Board::from_cells(cells).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "xo.\n.X.\n--o".parse().unwrap();
        assert_eq!(board.cell(0, 0), Cell::X);
        assert_eq!(board.cell(0, 1), Cell::O);
        assert_eq!(board.cell(1, 1), Cell::X);
        assert_eq!(board.cell(2, 2), Cell::O);
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");

        let reparsed: Board = board.to_string().parse().unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn test_parse_spaces_are_empty_cells() {
        let board: Board = "XO \n   \n   ".parse().unwrap();
        assert_eq!(board.cell(0, 0), Cell::X);
        assert_eq!(board.cell(0, 1), Cell::O);
        assert_eq!(board.count(Cell::Empty), 7);

        let result = "XX / X /  O\r\n".parse::<Board>();
        assert!(result.is_err(), "X ahead by two is not a legal board");

        let board: Board = "X  / O /   ".parse().unwrap();
        assert_eq!(board.cell(1, 1), Cell::O);
        assert_eq!(board.filled(), 2);
    }

    #[test]
    #[should_panic]
    fn test_cell_out_of_range_panics() {
        initial_board().cell(3, 0);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XO./.../..../".parse::<Board>().is_err());
        assert!("XZ./.../...".parse::<Board>().is_err());
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::X.opponent(), Side::O);
        assert_eq!(Side::O.opponent(), Side::X);
        assert_eq!(Side::O.mark(), Cell::O);
        assert_eq!(Side::X.to_string(), "X");
    }
}
