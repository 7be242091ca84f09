//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::constants::*;
use crate::types::*;

/// Evaluate material balance in pawns, White minus Black
pub fn evaluate_material(board: &Board) -> Score {
    board
        .iter()
        .filter(|&&piece| piece != VOID_ID)
        .map(|&piece| {
            let value = FIGURE_VALUE[piece.unsigned_abs() as usize];
            if piece > 0 {
                value
            } else {
                -value
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::init_board;

    #[test]
    fn test_starting_position_material_balance() {
        assert_eq!(evaluate_material(&init_board()), 0.0);
    }

    #[test]
    fn test_white_up_queen() {
        let mut board = init_board();
        board[D8 as usize] = VOID_ID;
        assert_eq!(evaluate_material(&board), QUEEN_VALUE);
    }

    #[test]
    fn test_black_up_pawn() {
        let mut board = init_board();
        board[12] = VOID_ID; // e2
        assert_eq!(evaluate_material(&board), -PAWN_VALUE);
    }
}
