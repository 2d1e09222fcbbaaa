use tictactoe_core::{Board, GameStatus, Mark};
use tictactoe_engine::{best_move, Difficulty, SearchConfig};

fn hard() -> SearchConfig {
    Difficulty::Hard.search_config()
}

fn winning_cell(board: &Board, mark: Mark) -> Option<usize> {
    board
        .available_moves()
        .into_iter()
        .find(|&index| board.with_move(index, mark).unwrap().winner() == Some(mark))
}

#[test]
fn hard_self_play_ends_in_a_draw() {
    let mut board = Board::new();
    let mut to_move = Mark::X;
    while !GameStatus::of(&board).is_game_over {
        let index = best_move(&board, to_move, hard())
            .unwrap()
            .expect("game not over, a move must exist");
        board = board.with_move(index, to_move).unwrap();
        to_move = to_move.opponent().unwrap();
    }
    let status = GameStatus::of(&board);
    assert_eq!(status.winner, None, "self-play was decided:\n{}", board);
    assert!(status.is_draw);
}

/// Walks every opponent reply while the engine answers with its search,
/// failing on any line the engine loses.
fn assert_never_loses(board: &Board, to_move: Mark, engine: Mark) {
    let status = GameStatus::of(board);
    if status.is_game_over {
        assert_ne!(
            status.winner,
            Some(engine.opponent().unwrap()),
            "engine lost this line:\n{}",
            board
        );
        return;
    }
    if to_move == engine {
        let index = best_move(board, engine, hard()).unwrap().unwrap();
        let next = board.with_move(index, engine).unwrap();
        assert_never_loses(&next, engine.opponent().unwrap(), engine);
    } else {
        for index in board.available_moves() {
            let next = board.with_move(index, to_move).unwrap();
            assert_never_loses(&next, engine, engine);
        }
    }
}

#[test]
fn hard_engine_never_loses_moving_first() {
    assert_never_loses(&Board::new(), Mark::X, Mark::X);
}

#[test]
fn hard_engine_never_loses_moving_second() {
    assert_never_loses(&Board::new(), Mark::X, Mark::O);
}

#[test]
fn corner_strategy_against_hard_engine_is_a_draw() {
    // A human opener who grabs corners whenever safe: take a win if one is
    // open, block the engine's open win, otherwise the first free corner,
    // otherwise the first free cell.
    let corners = [0, 2, 6, 8];
    let mut board = Board::new();
    let mut human_to_move = true;
    while !GameStatus::of(&board).is_game_over {
        if human_to_move {
            let index = winning_cell(&board, Mark::X)
                .or_else(|| winning_cell(&board, Mark::O))
                .or_else(|| {
                    corners
                        .into_iter()
                        .find(|&corner| board.cell(corner) == Mark::Empty)
                })
                .or_else(|| board.available_moves().first().copied())
                .unwrap();
            board = board.with_move(index, Mark::X).unwrap();
        } else {
            let index = best_move(&board, Mark::O, hard()).unwrap().unwrap();
            board = board.with_move(index, Mark::O).unwrap();
        }
        human_to_move = !human_to_move;
    }
    let status = GameStatus::of(&board);
    assert!(status.is_draw, "expected a draw, got:\n{}", board);
}

#[test]
fn pruning_never_changes_the_chosen_move_early_on() {
    // Exhaustive over all three-ply openings: the pruned and plain searches
    // must agree, since both break ties toward the lowest index and pruning
    // preserves every score.
    let plain = SearchConfig {
        max_depth: 8,
        use_pruning: false,
    };
    for first in 0..9 {
        for second in 0..9 {
            for third in 0..9 {
                if second == first || third == first || third == second {
                    continue;
                }
                let board = Board::new()
                    .with_move(first, Mark::X)
                    .unwrap()
                    .with_move(second, Mark::O)
                    .unwrap()
                    .with_move(third, Mark::X)
                    .unwrap();
                assert_eq!(
                    best_move(&board, Mark::O, hard()),
                    best_move(&board, Mark::O, plain),
                    "divergence on:\n{}",
                    board
                );
            }
        }
    }
}
