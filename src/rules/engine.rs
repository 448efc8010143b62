//! Win/loss predicates over a board.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The winning token appeared on the board.
    Won,
    /// The board filled up.
    Lost,
}

impl GameResult {
    /// Whether this result is a win.
    #[must_use]
    pub fn is_win(self) -> bool {
        self == GameResult::Won
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Won => f.write_str("won"),
            GameResult::Lost => f.write_str("lost"),
        }
    }
}

/// Every cell is occupied, so there is no room for a spawn.
///
/// This does not check whether a merge is still possible; see
/// [`is_stalemate`] for that.
#[must_use]
pub fn is_lost(board: &Board) -> bool {
    board.is_full()
}

/// Some cell holds the maximum token of the scale.
#[must_use]
pub fn is_won(board: &Board) -> bool {
    board.contains(board.scale().max())
}

/// The board is full and no direction would change it.
#[must_use]
pub fn is_stalemate(board: &Board) -> bool {
    !board.can_move()
}

/// Check loss, then win.
///
/// Returns `None` if the game continues.
#[must_use]
pub fn evaluate(board: &Board) -> Option<GameResult> {
    if is_lost(board) {
        Some(GameResult::Lost)
    } else if is_won(board) {
        Some(GameResult::Won)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TokenScale;

    fn board(cells: &[u32]) -> Board {
        Board::from_cells(2, cells.to_vec(), TokenScale::new(16).unwrap()).unwrap()
    }

    #[test]
    fn test_is_lost_only_when_full() {
        assert!(!is_lost(&board(&[2, 4, 8, 0])));
        assert!(is_lost(&board(&[2, 4, 8, 2])));
        // Full but mergeable still counts as lost by this check.
        assert!(is_lost(&board(&[2, 2, 2, 2])));
    }

    #[test]
    fn test_is_won() {
        assert!(!is_won(&board(&[2, 4, 8, 0])));
        assert!(is_won(&board(&[16, 0, 0, 0])));
    }

    #[test]
    fn test_is_stalemate() {
        assert!(!is_stalemate(&board(&[2, 2, 2, 2])));
        assert!(!is_stalemate(&board(&[2, 4, 8, 0])));
        assert!(is_stalemate(&board(&[2, 4, 8, 2])));
    }

    #[test]
    fn test_evaluate_prefers_loss() {
        assert_eq!(evaluate(&board(&[2, 4, 8, 0])), None);
        assert_eq!(evaluate(&board(&[16, 0, 0, 0])), Some(GameResult::Won));
        assert_eq!(evaluate(&board(&[16, 4, 8, 2])), Some(GameResult::Lost));
    }

    #[test]
    fn test_game_result_display() {
        assert_eq!(GameResult::Won.to_string(), "won");
        assert_eq!(GameResult::Lost.to_string(), "lost");
        assert!(GameResult::Won.is_win());
        assert!(!GameResult::Lost.is_win());
    }
}
