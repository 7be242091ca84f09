//! Random low-material starting positions for engine matches

use super::Game;
use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::position::GamePosition;
use crate::types::*;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::trace;

const EXTRA_PIECE_IDS: [i8; 5] = [PAWN_ID, KNIGHT_ID, BISHOP_ID, ROOK_ID, QUEEN_ID];

/// Generate a random legal, non-terminal position with both kings
///
/// The piece total (kings included) lies in `min_pieces..=max_pieces`. A pawn drawn
/// for the first or last rank is skipped rather than moved, so the total may fall
/// short of the drawn count, never below the two kings. Placements that are illegal
/// or already finished are thrown away and redrawn.
pub fn random_endgame<R: Rng + ?Sized>(
    rng: &mut R,
    min_pieces: usize,
    max_pieces: usize,
) -> ChessEngineResult<Game> {
    // Two bare kings are always a dead draw, so at least one extra piece must be possible
    if max_pieces < 3 || min_pieces > max_pieces || max_pieces > 32 {
        return Err(ChessEngineError::InvalidPosition {
            reason: format!("piece range {min_pieces}..={max_pieces} must end within 3..=32"),
        });
    }

    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let mut squares: Vec<Square> = (0..64).collect();
        squares.shuffle(rng);

        let mut board = [VOID_ID; 64];
        let (Some(white_king), Some(black_king)) = (squares.pop(), squares.pop()) else {
            continue;
        };
        board[white_king as usize] = W_KING;
        board[black_king as usize] = B_KING;

        let extra = rng.random_range(min_pieces.saturating_sub(2)..=max_pieces - 2);
        for _ in 0..extra {
            let Some(square) = squares.pop() else {
                break;
            };
            let Some(&piece_id) = EXTRA_PIECE_IDS.choose(rng) else {
                break;
            };
            let color = if rng.random_bool(0.5) {
                Color::White
            } else {
                Color::Black
            };
            if piece_id == PAWN_ID && !(8..56).contains(&square) {
                continue;
            }
            board[square as usize] = piece_id * color.sign();
        }

        let side_to_move = if rng.random_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };

        let Ok(game) = Game::from_pieces(board, side_to_move) else {
            continue;
        };
        if game.is_terminal() {
            continue;
        }
        trace!(attempts, fen = %game.to_fen(), "random endgame generated");
        return Ok(game);
    }
}
