use log::debug;
use tictactoe_core::{Board, Mark};

use crate::search::{best_move, SearchConfig, SearchError};

const EASY_DEPTH: u8 = 2;
const HARD_DEPTH: u8 = 8;

/// Difficulty tiers exposed to the session layer. Each maps to one fixed
/// search configuration; there are no free-form knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Shallow unpruned search; beatable.
    Easy,
    /// Full-depth pruned search. A 3x3 game tree never exceeds nine plies,
    /// so depth 8 from any reachable position plays optimally.
    #[default]
    Hard,
}

impl Difficulty {
    pub fn search_config(self) -> SearchConfig {
        match self {
            Difficulty::Easy => SearchConfig {
                max_depth: EASY_DEPTH,
                use_pruning: false,
            },
            Difficulty::Hard => SearchConfig {
                max_depth: HARD_DEPTH,
                use_pruning: true,
            },
        }
    }
}

/// Move provider for one seat at the board: configured once, queried per
/// turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeAi {
    config: SearchConfig,
}

impl TicTacToeAi {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            config: difficulty.search_config(),
        }
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Cell choice for `mark` on the given board; `Ok(None)` when the board
    /// is full.
    pub fn choose_move(&self, board: &Board, mark: Mark) -> Result<Option<usize>, SearchError> {
        debug!(
            "choosing move for {} at depth {} (pruning: {})",
            mark, self.config.max_depth, self.config.use_pruning
        );
        best_move(board, mark, self.config)
    }
}

impl Default for TicTacToeAi {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_presets_map_to_search_configs() {
        assert_eq!(
            Difficulty::Easy.search_config(),
            SearchConfig {
                max_depth: 2,
                use_pruning: false
            }
        );
        assert_eq!(
            Difficulty::Hard.search_config(),
            SearchConfig {
                max_depth: 8,
                use_pruning: true
            }
        );
    }

    #[test]
    fn test_default_ai_plays_the_hard_tier() {
        let ai = TicTacToeAi::default();
        assert_eq!(ai.config(), Difficulty::Hard.search_config());
    }

    #[test]
    fn test_easy_ai_still_takes_an_open_win() {
        // X X . / O O . / . . .  with X to move: even two plies see the
        // terminal score.
        let mut board = Board::new();
        for &(index, mark) in &[(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O)] {
            board.place(index, mark).unwrap();
        }
        let ai = TicTacToeAi::new(Difficulty::Easy);
        assert_eq!(ai.choose_move(&board, Mark::X), Ok(Some(2)));
    }
}
