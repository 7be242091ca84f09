//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - En passant onto the current en-passant target square
//! - Promotion to queen, rook, bishop or knight on the last rank

use crate::board::*;
use crate::constants::*;
use crate::types::*;

/// Rank a pawn of `color` may double-push from
#[inline]
fn start_rank(color: Color) -> i8 {
    color.home_rank() + color.forward()
}

/// Rank on which a pawn of `color` promotes
#[inline]
fn promotion_rank(color: Color) -> i8 {
    color.opposite().home_rank()
}

fn push_pawn_move(from: Square, to: Square, color: Color, moves: &mut Vec<ChessMove>) {
    if rank_of(to) == promotion_rank(color) {
        moves.extend(
            PROMOTION_IDS
                .iter()
                .map(|&piece_id| ChessMove::with_promotion(from, to, piece_id)),
        );
    } else {
        moves.push(ChessMove::new(from, to));
    }
}

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `board` - Board to generate on
/// * `from` - Square of the pawn
/// * `color` - Color of the pawn
/// * `ep_square` - Current en-passant target square, if any
/// * `moves` - Output vector to append moves to
pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    ep_square: Option<Square>,
    moves: &mut Vec<ChessMove>,
) {
    let forward = color.forward();

    if let Some(one) = offset(from, (0, forward)) {
        if board[one as usize] == VOID_ID {
            push_pawn_move(from, one, color, moves);

            if rank_of(from) == start_rank(color) {
                if let Some(two) = offset(one, (0, forward)) {
                    if board[two as usize] == VOID_ID {
                        moves.push(ChessMove::new(from, two));
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        let Some(to) = offset(from, (side, forward)) else {
            continue;
        };
        let target = board[to as usize];
        if target != VOID_ID && !piece_belongs_to(target, color) {
            push_pawn_move(from, to, color, moves);
        } else if target == VOID_ID && ep_square == Some(to) {
            moves.push(ChessMove::new(from, to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_rank_double_push() {
        let board = init_board();
        let mut moves = Vec::new();
        generate_pawn_moves(&board, 12, Color::White, None, &mut moves); // e2
        assert_eq!(moves, vec![ChessMove::new(12, 20), ChessMove::new(12, 28)]);
    }

    #[test]
    fn test_blocked_pawn_has_no_push() {
        let mut board = [VOID_ID; 64];
        board[52] = B_PAWN; // e7
        board[44] = W_KNIGHT; // e6
        let mut moves = Vec::new();
        generate_pawn_moves(&board, 52, Color::Black, None, &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_promotion_generates_four_moves() {
        let mut board = [VOID_ID; 64];
        board[52] = W_PAWN; // e7
        board[59] = B_ROOK; // d8
        let mut moves = Vec::new();
        generate_pawn_moves(&board, 52, Color::White, None, &mut moves);
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&ChessMove::with_promotion(52, 59, KNIGHT_ID)));
        assert!(moves.iter().all(|mv| mv.promotion.is_some()));
    }

    #[test]
    fn test_en_passant_capture_onto_target_square() {
        let mut board = [VOID_ID; 64];
        board[36] = W_PAWN; // e5
        board[35] = B_PAWN; // d5, just double-pushed
        let mut moves = Vec::new();
        generate_pawn_moves(&board, 36, Color::White, Some(43), &mut moves); // d6
        assert!(moves.contains(&ChessMove::new(36, 43)));
    }
}
