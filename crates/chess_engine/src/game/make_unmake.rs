//! Move making and unmaking
//!
//! Every applied move pushes an [`UndoInfo`] diff record; undo pops it and restores the
//! board, clocks, rights and hash exactly as they were.

use super::Game;
use crate::board::*;
use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::hash::position_key;
use crate::move_gen::{captured_square, is_castling_move, play_on_board};
use crate::types::*;

/// Information needed to undo a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UndoInfo {
    mv: ChessMove,
    moved_piece: i8,
    captured_piece: i8,
    captured_square: Option<Square>,
    castled: bool,
    castling: CastlingRights,
    ep_square: Option<Square>,
    halfmove_clock: u32,
    key: u64,
}

/// Rook source and destination squares for a castling king move
fn castling_rook_squares(mv: ChessMove) -> (Square, Square) {
    let rank = rank_of(mv.src);
    if file_of(mv.dst) == 6 {
        (square_at(7, rank), square_at(5, rank))
    } else {
        (square_at(0, rank), square_at(3, rank))
    }
}

/// Whether a pawn of `color` could capture onto `ep_square`
pub(crate) fn ep_capturable(board: &Board, ep_square: Square, color: Color) -> bool {
    let pawn = colored_piece(PAWN_ID, color);
    let behind = -color.forward();
    [(-1, behind), (1, behind)]
        .iter()
        .filter_map(|&dir| offset(ep_square, dir))
        .any(|square| board[square as usize] == pawn)
}

impl Game {
    pub(crate) fn make_move(&mut self, mv: ChessMove) {
        let color = self.side_to_move;
        let moved_piece = self.board[mv.src as usize];
        let undo = UndoInfo {
            mv,
            moved_piece,
            captured_piece: captured_square(&self.board, mv)
                .map_or(VOID_ID, |square| self.board[square as usize]),
            captured_square: captured_square(&self.board, mv),
            castled: is_castling_move(&self.board, mv),
            castling: self.castling,
            ep_square: self.ep_square,
            halfmove_clock: self.halfmove_clock,
            key: self.key,
        };

        let captured = play_on_board(&mut self.board, mv);

        self.castling.touch(mv.src);
        self.castling.touch(mv.dst);

        let is_pawn = moved_piece.abs() == PAWN_ID;
        self.halfmove_clock = if is_pawn || captured != VOID_ID {
            0
        } else {
            self.halfmove_clock + 1
        };

        self.ep_square = None;
        if is_pawn && (rank_of(mv.dst) - rank_of(mv.src)).abs() == 2 {
            let passed = square_at(file_of(mv.src), rank_of(mv.src) + color.forward());
            if ep_capturable(&self.board, passed, color.opposite()) {
                self.ep_square = Some(passed);
            }
        }

        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = color.opposite();
        self.key = position_key(&self.board, self.side_to_move, self.castling, self.ep_square);

        self.keys.push(self.key);
        self.history.push(undo);
    }

    pub(crate) fn unmake_move(&mut self) -> ChessEngineResult<()> {
        let undo = self.history.pop().ok_or(ChessEngineError::EmptyHistory)?;
        self.keys.pop();

        let mv = undo.mv;
        self.board[mv.src as usize] = undo.moved_piece;
        self.board[mv.dst as usize] = VOID_ID;
        if let Some(square) = undo.captured_square {
            self.board[square as usize] = undo.captured_piece;
        }
        if undo.castled {
            let (rook_from, rook_to) = castling_rook_squares(mv);
            self.board[rook_from as usize] = self.board[rook_to as usize];
            self.board[rook_to as usize] = VOID_ID;
        }

        self.side_to_move = self.side_to_move.opposite();
        if self.side_to_move == Color::Black {
            self.fullmove_number -= 1;
        }
        self.castling = undo.castling;
        self.ep_square = undo.ep_square;
        self.halfmove_clock = undo.halfmove_clock;
        self.key = undo.key;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::game::Game;
    use crate::position::GamePosition;

    fn play_all(game: &mut Game, moves: &[&str]) {
        for text in moves {
            game.play_uci(text).unwrap();
        }
    }

    #[test]
    fn test_make_unmake_restores_every_field() {
        let mut game = Game::new();
        let before = game.clone();
        play_all(&mut game, &["e2e4", "d7d5", "e4d5", "d8d5", "g1f3", "c8g4"]);
        for _ in 0..6 {
            game.undo().unwrap();
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_en_passant_round_trip() {
        let mut game = Game::new();
        play_all(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
        assert_eq!(game.ep_square(), Some(43)); // d6
        let before = game.clone();
        game.play_uci("e5d6").unwrap();
        assert_eq!(game.piece_at(35), 0); // d5 pawn removed
        game.undo().unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn test_castling_round_trip() {
        let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let before = game.clone();
        game.play_uci("e1g1").unwrap();
        assert_eq!(game.piece_at(5), crate::constants::W_ROOK); // f1
        assert!(!game.castling().white_king_side);
        assert!(!game.castling().white_queen_side);
        game.undo().unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn test_undo_without_history_fails() {
        let mut game = Game::new();
        assert_eq!(game.undo(), Err(crate::error::ChessEngineError::EmptyHistory));
    }

    #[test]
    fn test_double_push_without_adjacent_pawn_sets_no_ep() {
        let mut game = Game::new();
        game.play_uci("e2e4").unwrap();
        assert_eq!(game.ep_square(), None);
    }
}
