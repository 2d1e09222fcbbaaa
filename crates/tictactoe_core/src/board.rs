use std::fmt;

use thiserror::Error;

use crate::Mark;

/// Number of cells on the 3x3 grid.
pub const BOARD_SIZE: usize = 9;

/// The 8 completable lines: 3 rows, 3 columns, 2 diagonals.
/// The scan order is fixed; `winner` and `winning_line` report the first
/// match in this order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Rejected move attempts. Callers recover from these locally; none are
/// fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell index {0} is outside the board")]
    OutOfRange(usize),
    #[error("cell {0} is already occupied")]
    Occupied(usize),
    #[error("the game is already over")]
    GameOver,
    #[error("only X or O can be placed on the board")]
    NotAPlayer,
}

/// Row-major 3x3 grid of marks, indexed 0..8.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    /// An all-empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_SIZE],
        }
    }

    /// Builds a board from an explicit cell layout.
    pub fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// The mark at `index`. Panics if the index is outside 0..9, like any
    /// slice access.
    pub fn cell(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    /// Marks a cell. A cell transitions Empty -> player mark exactly once
    /// and never reverts short of a full reset.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        if !mark.is_player() {
            return Err(MoveError::NotAPlayer);
        }
        if index >= BOARD_SIZE {
            return Err(MoveError::OutOfRange(index));
        }
        if self.cells[index] != Mark::Empty {
            return Err(MoveError::Occupied(index));
        }
        self.cells[index] = mark;
        log::trace!("placed {} at cell {}", mark, index);
        Ok(())
    }

    /// A copy of this board with one extra mark placed. The receiver is
    /// never mutated.
    pub fn with_move(&self, index: usize, mark: Mark) -> Result<Self, MoveError> {
        let mut next = self.clone();
        next.place(index, mark)?;
        Ok(next)
    }

    /// Empty-cell indices in ascending order. Search relies on this order
    /// for deterministic tie-breaking.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// The mark holding a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.completed_line().map(|[a, _, _]| self.cells[a])
    }

    /// The completed line itself, in `WIN_LINES` scan order.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.completed_line()
    }

    fn completed_line(&self) -> Option<[usize; 3]> {
        WIN_LINES.into_iter().find(|&[a, b, c]| {
            self.cells[a] != Mark::Empty
                && self.cells[a] == self.cells[b]
                && self.cells[a] == self.cells[c]
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{} {} {}",
                self.cells[row * 3],
                self.cells[row * 3 + 1],
                self.cells[row * 3 + 2]
            )?;
        }
        Ok(())
    }
}
