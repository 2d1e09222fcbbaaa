use std::time::Duration;

use log::{debug, info};
use thiserror::Error;
use tictactoe_core::{Board, GameStatus, Mark, MoveError};
use tictactoe_engine::{SearchError, TicTacToeAi};

use crate::GameMode;

/// Pacing delay the presentation layer should wait before letting a pending
/// computer move fire. Pacing only; correctness never depends on it.
pub const AI_MOVE_DELAY: Duration = Duration::from_millis(500);

/// Mark of the player who opens every game.
const FIRST_PLAYER: Mark = Mark::X;
/// Mark the computer owns in the vs-computer modes.
const AI_MARK: Mark = Mark::O;

/// Failures on the session's AI-move path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Claim on a single future computer move, stamped with the session
/// generation at issue time. Any state change in between voids it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiMoveTicket {
    generation: u64,
}

/// One game in progress: the board, whose turn it is, the configured mode
/// and the ordered history of applied cell indices.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current_player: Mark,
    mode: GameMode,
    ai: Option<TicTacToeAi>,
    history: Vec<usize>,
    generation: u64,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: FIRST_PLAYER,
            mode,
            ai: mode.difficulty().map(TicTacToeAi::new),
            history: Vec::new(),
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Applied cell indices in play order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// True when the configured computer owns the current turn of a live
    /// game.
    pub fn is_ai_turn(&self) -> bool {
        self.mode.has_computer()
            && self.current_player == AI_MARK
            && !self.status().is_game_over
    }

    /// Applies a move for the current turn owner. On any error the board
    /// and the turn owner are left untouched.
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.status().is_game_over {
            return Err(MoveError::GameOver);
        }
        self.board.place(index, self.current_player)?;
        debug!("{} played cell {}", self.current_player, index);
        self.history.push(index);
        self.generation += 1;
        self.current_player = self
            .current_player
            .opponent()
            .expect("turn owner is always a player mark");
        Ok(())
    }

    /// Restores an all-empty board with the opener to move and no history.
    /// The configured mode is untouched; pending AI tickets are voided.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = FIRST_PLAYER;
        self.history.clear();
        self.generation += 1;
        info!("session reset");
    }

    /// Switches mode and starts a fresh game.
    pub fn set_mode(&mut self, mode: GameMode) {
        info!("mode set to {:?}", mode);
        self.mode = mode;
        self.ai = mode.difficulty().map(TicTacToeAi::new);
        self.reset();
    }

    /// Issues a claim for the computer's next move, meant to be cashed in
    /// after `AI_MOVE_DELAY`. `None` when the computer does not own the
    /// current turn.
    pub fn begin_ai_move(&self) -> Option<AiMoveTicket> {
        if self.is_ai_turn() {
            Some(AiMoveTicket {
                generation: self.generation,
            })
        } else {
            None
        }
    }

    /// Cashes in a claim from `begin_ai_move` and reports the applied cell.
    /// A ticket whose generation has moved on (a move, reset or mode switch
    /// happened since) is discarded rather than applied against the changed
    /// board.
    pub fn finish_ai_move(&mut self, ticket: AiMoveTicket) -> Result<Option<usize>, SessionError> {
        if ticket.generation != self.generation {
            debug!("discarding stale AI move ticket");
            return Ok(None);
        }
        self.run_ai_move()
    }

    /// Immediate computer move with no pacing: issue and cash a claim in
    /// one step. No-op unless the computer owns the current turn.
    pub fn request_ai_move(&mut self) -> Result<Option<usize>, SessionError> {
        match self.begin_ai_move() {
            Some(ticket) => self.finish_ai_move(ticket),
            None => Ok(None),
        }
    }

    fn run_ai_move(&mut self) -> Result<Option<usize>, SessionError> {
        let ai = match self.ai {
            Some(ai) => ai,
            None => return Ok(None),
        };
        match ai.choose_move(&self.board, AI_MARK)? {
            Some(index) => {
                self.apply_move(index)?;
                Ok(Some(index))
            }
            // Full board: nothing to apply.
            None => Ok(None),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
