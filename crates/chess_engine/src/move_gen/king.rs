//! King move generation
//!
//! Handles king-specific move generation. Kings move one square in any direction
//! (horizontally, vertically, or diagonally).
//!
//! ## Castling
//!
//! Castling is encoded as the king's two-square move toward the rook. It is generated when:
//! - The matching castling right is still held
//! - King and rook stand on their original squares
//! - Every square between them is empty
//! - The king is not in check and does not pass through or land on an attacked square

use super::attack::is_square_attacked;
use super::knight::generate_step_moves;
use crate::board::*;
use crate::constants::*;
use crate::types::*;

/// Generate king moves from a given square, including castling
pub fn generate_king_moves(
    board: &Board,
    from: Square,
    color: Color,
    castling: CastlingRights,
    moves: &mut Vec<ChessMove>,
) {
    generate_step_moves(board, from, color, &KING_DIRS, moves);
    generate_castling_moves(board, from, color, castling, moves);
}

fn generate_castling_moves(
    board: &Board,
    from: Square,
    color: Color,
    castling: CastlingRights,
    moves: &mut Vec<ChessMove>,
) {
    let home = color.home_rank();
    if from != square_at(4, home) {
        return;
    }
    let enemy = color.opposite();
    let rook = colored_piece(ROOK_ID, color);

    if is_square_attacked(board, from, enemy) {
        return;
    }

    if castling.king_side(color)
        && board[square_at(7, home) as usize] == rook
        && [5, 6].iter().all(|&f| board[square_at(f, home) as usize] == VOID_ID)
        && [5, 6].iter().all(|&f| !is_square_attacked(board, square_at(f, home), enemy))
    {
        moves.push(ChessMove::new(from, square_at(6, home)));
    }

    if castling.queen_side(color)
        && board[square_at(0, home) as usize] == rook
        && [1, 2, 3].iter().all(|&f| board[square_at(f, home) as usize] == VOID_ID)
        && [2, 3].iter().all(|&f| !is_square_attacked(board, square_at(f, home), enemy))
    {
        moves.push(ChessMove::new(from, square_at(2, home)));
    }
}

/// Whether a move by a piece standing on `from` is a castling king move
#[inline]
pub fn is_castling_move(board: &Board, mv: ChessMove) -> bool {
    board[mv.src as usize].abs() == KING_ID && (file_of(mv.src) - file_of(mv.dst)).abs() == 2
}
