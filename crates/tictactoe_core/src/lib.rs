// Core tic-tac-toe game logic modules
pub mod board;
pub mod mark;
pub mod status;

// Re-export main types for convenience
pub use board::{Board, MoveError, BOARD_SIZE, WIN_LINES};
pub use mark::Mark;
pub use status::GameStatus;
