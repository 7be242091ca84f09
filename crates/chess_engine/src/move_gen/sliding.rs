//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For every direction of the piece we walk square by square:
//! 1. Empty squares are valid destinations
//! 2. An opponent piece is a valid capture and ends the ray
//! 3. An own piece ends the ray without a move

use crate::board::*;
use crate::constants::*;
use crate::types::*;

/// Generate moves for a sliding piece along the given directions
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<ChessMove>,
) {
    for &dir in directions {
        let mut current = from;
        while let Some(to) = offset(current, dir) {
            let target = board[to as usize];
            if target == VOID_ID {
                moves.push(ChessMove::new(from, to));
            } else {
                if !piece_belongs_to(target, color) {
                    moves.push(ChessMove::new(from, to));
                }
                break;
            }
            current = to;
        }
    }
}

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<ChessMove>) {
    generate_sliding_moves(board, from, color, &BISHOP_DIRS, moves);
}

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<ChessMove>) {
    generate_sliding_moves(board, from, color, &ROOK_DIRS, moves);
}

/// Queens combine rook and bishop rays
pub fn generate_queen_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<ChessMove>) {
    generate_sliding_moves(board, from, color, &KING_DIRS, moves);
}
