use crate::{Board, Mark};

/// Where a game stands, derived from the board alone and never stored.
///
/// Invariants: `winner` and `is_draw` are mutually exclusive,
/// `winning_line` is present exactly when `winner` is, and `is_game_over`
/// holds exactly when one of the two outcomes does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    pub winner: Option<Mark>,
    pub winning_line: Option<[usize; 3]>,
    pub is_draw: bool,
    pub is_game_over: bool,
}

impl GameStatus {
    pub fn of(board: &Board) -> Self {
        let winner = board.winner();
        let winning_line = board.winning_line();
        let is_draw = winner.is_none() && board.is_full();
        Self {
            winner,
            winning_line,
            is_draw,
            is_game_over: winner.is_some() || is_draw,
        }
    }
}
