//! Knight move generation
//!
//! Knights jump in an L-shape and are never blocked, so a destination is valid
//! whenever it is on the board and not occupied by a friendly piece.

use crate::board::*;
use crate::constants::*;
use crate::types::*;

/// Generate single-step moves along a fixed pattern (knight and king)
pub(crate) fn generate_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    pattern: &[(i8, i8)],
    moves: &mut Vec<ChessMove>,
) {
    for &dir in pattern {
        if let Some(to) = offset(from, dir) {
            if !piece_belongs_to(board[to as usize], color) {
                moves.push(ChessMove::new(from, to));
            }
        }
    }
}

/// Generate knight moves from a given square
pub fn generate_knight_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<ChessMove>) {
    generate_step_moves(board, from, color, &KNIGHT_DIRS, moves);
}
