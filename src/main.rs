use tictactoe_core::Mark;
use tictactoe_engine::{best_move, Difficulty};
use tictactoe_session::{GameMode, GameSession};

/// Plays both seats of a Hard-mode game through the session layer and
/// prints the final position.
fn main() {
    env_logger::init();

    let config = Difficulty::Hard.search_config();
    let mut session = GameSession::new(GameMode::VsComputerHard);
    let mut turn = 1;

    while !session.status().is_game_over {
        let mark = session.current_player();
        let index = match mark {
            // The session automates O; the engine stands in for the human
            // seat so the demo plays itself.
            Mark::O => session
                .request_ai_move()
                .expect("session AI move")
                .expect("game not over"),
            _ => {
                let index = best_move(session.board(), mark, config)
                    .expect("player mark is valid")
                    .expect("game not over");
                session.apply_move(index).expect("searched move is legal");
                index
            }
        };
        println!("move {}: {} takes cell {}", turn, mark, index);
        turn += 1;
    }

    println!("\n{}\n", session.board());
    let status = session.status();
    match status.winner {
        Some(winner) => println!("{} wins on {:?}", winner, status.winning_line.unwrap()),
        None => println!("draw after {} moves", session.history().len()),
    }
}
