pub mod mode;
pub mod session;

pub use mode::GameMode;
pub use session::{AiMoveTicket, GameSession, SessionError, AI_MOVE_DELAY};
