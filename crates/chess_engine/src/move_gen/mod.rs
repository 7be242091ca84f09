//! Move generation
//!
//! Generates pseudo-legal moves piece by piece, then filters out moves that leave
//! the mover's own king in check. The legality filter plays each candidate on a
//! scratch copy of the 64-byte board, so generation never mutates the caller's state
//! and can be asked for either colour regardless of whose turn it is.

pub mod attack;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;

pub use attack::{is_in_check, is_square_attacked};
pub use king::is_castling_move;

use crate::board::*;
use crate::constants::*;
use crate::types::*;

/// Generate all pseudo-legal moves for `color`
///
/// Moves are produced square by square from a1 to h8, which fixes the
/// generation order the searches rely on for tie-breaking.
pub fn generate_pseudo_legal_moves(
    board: &Board,
    color: Color,
    castling: CastlingRights,
    ep_square: Option<Square>,
    moves: &mut Vec<ChessMove>,
) {
    for from in 0..64u8 {
        let piece = board[from as usize];
        if !piece_belongs_to(piece, color) {
            continue;
        }
        match piece.abs() {
            PAWN_ID => pawn::generate_pawn_moves(board, from, color, ep_square, moves),
            KNIGHT_ID => knight::generate_knight_moves(board, from, color, moves),
            BISHOP_ID => sliding::generate_bishop_moves(board, from, color, moves),
            ROOK_ID => sliding::generate_rook_moves(board, from, color, moves),
            QUEEN_ID => sliding::generate_queen_moves(board, from, color, moves),
            KING_ID => king::generate_king_moves(board, from, color, castling, moves),
            _ => {}
        }
    }
}

/// Whether a pseudo-legal move keeps the mover's king out of check
pub fn is_legal(board: &Board, mv: ChessMove, color: Color) -> bool {
    let mut scratch = *board;
    play_on_board(&mut scratch, mv);
    !is_in_check(&scratch, color)
}

/// Generate all legal moves for `color`
pub fn generate_legal_moves(
    board: &Board,
    color: Color,
    castling: CastlingRights,
    ep_square: Option<Square>,
) -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(48);
    generate_pseudo_legal_moves(board, color, castling, ep_square, &mut moves);
    moves.retain(|&mv| is_legal(board, mv, color));
    moves
}

/// Number of legal moves for `color`, without touching any game state
pub fn legal_move_count(
    board: &Board,
    color: Color,
    castling: CastlingRights,
    ep_square: Option<Square>,
) -> usize {
    let mut moves = Vec::with_capacity(48);
    generate_pseudo_legal_moves(board, color, castling, ep_square, &mut moves);
    moves.iter().filter(|&&mv| is_legal(board, mv, color)).count()
}

/// Whether `color` has at least one legal move
pub fn has_legal_move(
    board: &Board,
    color: Color,
    castling: CastlingRights,
    ep_square: Option<Square>,
) -> bool {
    let mut moves = Vec::with_capacity(48);
    generate_pseudo_legal_moves(board, color, castling, ep_square, &mut moves);
    moves.iter().any(|&mv| is_legal(board, mv, color))
}

/// Whether a pawn move lands diagonally on an empty square (en passant)
#[inline]
pub fn is_en_passant(board: &Board, mv: ChessMove) -> bool {
    board[mv.src as usize].abs() == PAWN_ID
        && file_of(mv.src) != file_of(mv.dst)
        && board[mv.dst as usize] == VOID_ID
}

/// Square of the piece a move captures, if it captures anything
pub fn captured_square(board: &Board, mv: ChessMove) -> Option<Square> {
    if is_en_passant(board, mv) {
        Some(square_at(file_of(mv.dst), rank_of(mv.src)))
    } else if board[mv.dst as usize] != VOID_ID {
        Some(mv.dst)
    } else {
        None
    }
}

/// Whether a move captures a piece (en passant included)
#[inline]
pub fn is_capture(board: &Board, mv: ChessMove) -> bool {
    captured_square(board, mv).is_some()
}

/// Play a move on a bare board and return the captured board value (0 if none)
///
/// Handles the side effects of en passant, castling and promotion. No legality check
/// is performed; castling rights and clocks are the caller's business.
pub fn play_on_board(board: &mut Board, mv: ChessMove) -> i8 {
    let piece = board[mv.src as usize];
    let color_sign = piece.signum();

    let captured = match captured_square(board, mv) {
        Some(square) => {
            let value = board[square as usize];
            board[square as usize] = VOID_ID;
            value
        }
        None => VOID_ID,
    };

    if is_castling_move(board, mv) {
        let rank = rank_of(mv.src);
        let (rook_from, rook_to) = if file_of(mv.dst) == 6 {
            (square_at(7, rank), square_at(5, rank))
        } else {
            (square_at(0, rank), square_at(3, rank))
        };
        board[rook_to as usize] = board[rook_from as usize];
        board[rook_from as usize] = VOID_ID;
    }

    board[mv.src as usize] = VOID_ID;
    board[mv.dst as usize] = match mv.promotion {
        Some(piece_id) => piece_id.abs() * color_sign,
        None => piece,
    };

    captured
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let board = init_board();
        let moves = generate_legal_moves(&board, Color::White, CastlingRights::ALL, None);
        assert_eq!(moves.len(), 20);
        assert_eq!(legal_move_count(&board, Color::Black, CastlingRights::ALL, None), 20);
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        let mut board = [VOID_ID; 64];
        board[E1 as usize] = W_KING;
        board[12] = W_KNIGHT; // e2, pinned
        board[E8 as usize] = B_ROOK;
        board[H8 as usize] = B_KING;
        let moves = generate_legal_moves(&board, Color::White, CastlingRights::default(), None);
        assert!(moves.iter().all(|mv| mv.src == E1));
    }

    #[test]
    fn test_play_en_passant_removes_pawn() {
        let mut board = [VOID_ID; 64];
        board[36] = W_PAWN; // e5
        board[35] = B_PAWN; // d5
        let mv = ChessMove::new(36, 43);
        assert!(is_capture(&board, mv));
        let captured = play_on_board(&mut board, mv);
        assert_eq!(captured, B_PAWN);
        assert_eq!(board[35], VOID_ID);
        assert_eq!(board[43], W_PAWN);
    }

    #[test]
    fn test_play_castling_moves_rook() {
        let mut board = [VOID_ID; 64];
        board[E8 as usize] = B_KING;
        board[A8 as usize] = B_ROOK;
        play_on_board(&mut board, ChessMove::new(E8, C8));
        assert_eq!(board[C8 as usize], B_KING);
        assert_eq!(board[D8 as usize], B_ROOK);
        assert_eq!(board[A8 as usize], VOID_ID);
    }

    #[test]
    fn test_play_promotion_keeps_colour() {
        let mut board = [VOID_ID; 64];
        board[9] = B_PAWN; // b2
        play_on_board(&mut board, ChessMove::with_promotion(9, 1, KNIGHT_ID));
        assert_eq!(board[1], B_KNIGHT);
    }
}
