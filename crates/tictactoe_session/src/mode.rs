use tictactoe_engine::Difficulty;

/// Who sits on each side of the board. The computer, when present, always
/// owns the second mark; the opener is human in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Two humans alternate; AI move requests are no-ops.
    TwoPlayer,
    VsComputerEasy,
    #[default]
    VsComputerHard,
}

impl GameMode {
    /// Search difficulty for the computer seat, when one exists.
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VsComputerEasy => Some(Difficulty::Easy),
            GameMode::VsComputerHard => Some(Difficulty::Hard),
        }
    }

    pub fn has_computer(self) -> bool {
        self.difficulty().is_some()
    }
}
