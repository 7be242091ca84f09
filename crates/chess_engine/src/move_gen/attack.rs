//! Attack detection and square checking
//!
//! Provides functions to check if squares are under attack and if kings are in check.
//! This module is critical for move legality validation and check detection.
//!
//! ## Algorithm
//!
//! Instead of generating every enemy move, we look outward from the target square:
//! a knight pattern, a king pattern, the two pawn-capture squares and the eight
//! sliding rays. A square is attacked if the first piece met along each pattern is
//! an enemy piece able to move that way.

use crate::board::*;
use crate::constants::*;
use crate::types::*;

/// Check if a square is under attack by pieces of the specified color
///
/// # Arguments
///
/// * `board` - Board to inspect
/// * `square` - Target square index (0-63)
/// * `by_color` - Color of the pieces that might attack
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    let knight = colored_piece(KNIGHT_ID, by_color);
    if KNIGHT_DIRS
        .iter()
        .filter_map(|&dir| offset(square, dir))
        .any(|from| board[from as usize] == knight)
    {
        return true;
    }

    let king = colored_piece(KING_ID, by_color);
    if KING_DIRS
        .iter()
        .filter_map(|&dir| offset(square, dir))
        .any(|from| board[from as usize] == king)
    {
        return true;
    }

    // An attacking pawn sits one rank behind the target, from its own point of view
    let pawn = colored_piece(PAWN_ID, by_color);
    let behind = -by_color.forward();
    if [(-1, behind), (1, behind)]
        .iter()
        .filter_map(|&dir| offset(square, dir))
        .any(|from| board[from as usize] == pawn)
    {
        return true;
    }

    let queen = colored_piece(QUEEN_ID, by_color);
    let rook = colored_piece(ROOK_ID, by_color);
    let bishop = colored_piece(BISHOP_ID, by_color);

    ROOK_DIRS
        .iter()
        .any(|&dir| first_piece_on_ray(board, square, dir).is_some_and(|p| p == rook || p == queen))
        || BISHOP_DIRS
            .iter()
            .any(|&dir| first_piece_on_ray(board, square, dir).is_some_and(|p| p == bishop || p == queen))
}

/// First non-empty board value met when walking from `square` along `dir`
fn first_piece_on_ray(board: &Board, square: Square, dir: (i8, i8)) -> Option<i8> {
    let mut current = square;
    while let Some(next) = offset(current, dir) {
        let piece = board[next as usize];
        if piece != VOID_ID {
            return Some(piece);
        }
        current = next;
    }
    None
}

/// Check if the king of the given color is in check
///
/// A board without a king of that colour is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    king_square(board, color).is_some_and(|square| is_square_attacked(board, square, color.opposite()))
}
