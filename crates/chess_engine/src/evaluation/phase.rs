//! Game phase detection from the heavy pieces left on the board

use crate::types::*;
use crate::constants::*;
use serde::Serialize;

/// Coarse stage of the game, recomputed on every evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

impl GamePhase {
    /// Classify by the number of queens and rooks of both colours
    pub fn of(board: &Board) -> GamePhase {
        let heavy = board
            .iter()
            .filter(|&&piece| matches!(piece.abs(), ROOK_ID | QUEEN_ID))
            .count();
        match heavy {
            6.. => GamePhase::Opening,
            3..=5 => GamePhase::Middlegame,
            _ => GamePhase::Endgame,
        }
    }

    pub fn is_endgame(self) -> bool {
        self == GamePhase::Endgame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::init_board;

    #[test]
    fn test_phase_thresholds() {
        assert_eq!(GamePhase::of(&init_board()), GamePhase::Opening);

        let mut board = [VOID_ID; 64];
        board[0] = W_ROOK;
        board[1] = W_QUEEN;
        assert_eq!(GamePhase::of(&board), GamePhase::Endgame);
        board[63] = B_ROOK;
        assert_eq!(GamePhase::of(&board), GamePhase::Middlegame);
    }
}
