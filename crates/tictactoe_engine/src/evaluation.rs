use tictactoe_core::{Board, Mark, WIN_LINES};

// Per-line contributions, summed over all 8 win lines. The offense/defense
// asymmetry is part of the contract: an opponent pair costs twice what an
// own pair earns.
const COMPLETED_LINE: i32 = 100; // three own marks
const OPEN_PAIR: i32 = 10; // two own marks, one empty
const OPEN_SINGLE: i32 = 1; // one own mark, two empty
const OPPONENT_OPEN_PAIR: i32 = -20; // two opponent marks, one empty
const OPPONENT_OPEN_SINGLE: i32 = -2; // one opponent mark, two empty

/// Heuristic score of a position from `player`'s perspective, used when the
/// search bottoms out on a non-terminal node.
pub fn evaluate(board: &Board, player: Mark) -> i32 {
    WIN_LINES
        .iter()
        .map(|&line| evaluate_line(board, line, player))
        .sum()
}

/// Scores one line from the counts of own, opponent and empty cells. Any
/// line holding marks of both players is dead and contributes nothing.
fn evaluate_line(board: &Board, line: [usize; 3], player: Mark) -> i32 {
    let mut own = 0;
    let mut opponent = 0;
    let mut empty = 0;
    for index in line {
        match board.cell(index) {
            Mark::Empty => empty += 1,
            mark if mark == player => own += 1,
            _ => opponent += 1,
        }
    }

    match (own, opponent, empty) {
        (3, 0, 0) => COMPLETED_LINE,
        (2, 0, 1) => OPEN_PAIR,
        (1, 0, 2) => OPEN_SINGLE,
        (0, 2, 1) => OPPONENT_OPEN_PAIR,
        (0, 1, 2) => OPPONENT_OPEN_SINGLE,
        _ => 0,
    }
}
