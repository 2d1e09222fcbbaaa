use log::debug;
use thiserror::Error;
use tictactoe_core::{Board, Mark};

use crate::evaluation::evaluate;
use crate::opening_book;

// Terminal score for a decided game, before the depth adjustment. Leaf
// scores therefore stay within roughly [-100, 100].
const WIN_SCORE: i32 = 100;

/// Bounds for one search: how deep to recurse and whether to prune.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub use_pruning: bool,
}

/// Contract violations at the search boundary. Nothing below the boundary
/// can fail: every reachable position has a defined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search requires X or O as the player")]
    InvalidPlayer,
}

/// Picks the strongest cell for `player`, or `Ok(None)` on a full board.
///
/// Candidate moves are tried in ascending index order and only a strictly
/// better score replaces the current choice, so ties keep the lowest index.
pub fn best_move(
    board: &Board,
    player: Mark,
    config: SearchConfig,
) -> Result<Option<usize>, SearchError> {
    if !player.is_player() {
        return Err(SearchError::InvalidPlayer);
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return Ok(None);
    }

    if let Some(reply) = opening_book::book_move(board) {
        debug!("book reply {} for {}", reply, player);
        return Ok(Some(reply));
    }

    let mut best_score = i32::MIN;
    let mut best = moves[0];
    for &index in &moves {
        let child = hypothetical(board, index, player);
        // Each root child gets a fresh full window; the opponent moves next.
        let score = if config.use_pruning {
            alpha_beta(
                &child,
                0,
                false,
                player,
                i32::MIN,
                i32::MAX,
                config.max_depth,
            )
        } else {
            minimax(&child, 0, false, player, config.max_depth)
        };
        if score > best_score {
            best_score = score;
            best = index;
        }
    }

    debug!("best move {} for {} scores {}", best, player, best_score);
    Ok(Some(best))
}

/// Plain minimax over every available move.
///
/// `is_maximizing` is true at nodes where `player` moves. Terminal positions
/// score `WIN_SCORE - depth` for a win and `depth - WIN_SCORE` for a loss:
/// faster wins rank higher, faster losses rank lower.
fn minimax(board: &Board, depth: u8, is_maximizing: bool, player: Mark, max_depth: u8) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == player {
            WIN_SCORE - i32::from(depth)
        } else {
            i32::from(depth) - WIN_SCORE
        };
    }

    let moves = board.available_moves();
    if moves.is_empty() || depth >= max_depth {
        return evaluate(board, player);
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for index in moves {
            let child = hypothetical(board, index, player);
            best = best.max(minimax(&child, depth + 1, false, player, max_depth));
        }
        best
    } else {
        let rival = opponent_of(player);
        let mut best = i32::MAX;
        for index in moves {
            let child = hypothetical(board, index, rival);
            best = best.min(minimax(&child, depth + 1, true, player, max_depth));
        }
        best
    }
}

/// Minimax with alpha-beta pruning. Identical results to `minimax` for
/// every input; pruning only skips subtrees that cannot change the value.
fn alpha_beta(
    board: &Board,
    depth: u8,
    is_maximizing: bool,
    player: Mark,
    mut alpha: i32,
    mut beta: i32,
    max_depth: u8,
) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == player {
            WIN_SCORE - i32::from(depth)
        } else {
            i32::from(depth) - WIN_SCORE
        };
    }

    let moves = board.available_moves();
    if moves.is_empty() || depth >= max_depth {
        return evaluate(board, player);
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for index in moves {
            let child = hypothetical(board, index, player);
            let score = alpha_beta(&child, depth + 1, false, player, alpha, beta, max_depth);
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let rival = opponent_of(player);
        let mut best = i32::MAX;
        for index in moves {
            let child = hypothetical(board, index, rival);
            let score = alpha_beta(&child, depth + 1, true, player, alpha, beta, max_depth);
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Applies a candidate move to a fresh clone; the searched board is never
/// mutated in place.
fn hypothetical(board: &Board, index: usize, mark: Mark) -> Board {
    board
        .with_move(index, mark)
        .expect("candidate index comes from available_moves")
}

fn opponent_of(player: Mark) -> Mark {
    player
        .opponent()
        .expect("player mark was checked at the search boundary")
}
