//! # Chess Game State
//!
//! [`Game`] is the rules engine: a mailbox board plus everything FEN records (side to move,
//! castling rights, en-passant square, clocks) and an undo stack of diff records. It answers
//! the terminal-state questions the searches ask and implements [`GamePosition`].
//!
//! ## Draw Detection
//!
//! | Condition | Trigger |
//! |-----------|---------|
//! | Stalemate | side to move has no legal move and is not in check |
//! | Insufficient material | no pawn, rook or queen, and at most one minor piece or only same-coloured bishops |
//! | Fifty-move claim | halfmove clock reached 100 plies |
//! | Threefold claim | current Zobrist key occurred 3 times since the last pawn move or capture |
//!
//! All four end the game for the purposes of search and match play.

mod fen;
mod make_unmake;
mod random;

pub use random::random_endgame;

pub(crate) use make_unmake::UndoInfo;

use crate::board::*;
use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::hash::position_key;
use crate::move_gen;
use crate::position::GamePosition;
use crate::types::*;

/// Chess position with move history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    ep_square: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    key: u64,
    history: Vec<UndoInfo>,
    keys: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Piece census of one colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCounts {
    pub pawns: usize,
    pub knights: usize,
    pub bishops: usize,
    pub rooks: usize,
    pub queens: usize,
}

impl PieceCounts {
    fn of(board: &Board, color: Color) -> Self {
        PieceCounts {
            pawns: count_pieces(board, PAWN_ID, color),
            knights: count_pieces(board, KNIGHT_ID, color),
            bishops: count_pieces(board, BISHOP_ID, color),
            rooks: count_pieces(board, ROOK_ID, color),
            queens: count_pieces(board, QUEEN_ID, color),
        }
    }

    /// Pieces including the king
    pub fn total(&self) -> usize {
        self.pawns + self.knights + self.bishops + self.rooks + self.queens + 1
    }

    pub fn minors(&self) -> usize {
        self.knights + self.bishops
    }

    pub fn has_heavy(&self) -> bool {
        self.rooks + self.queens > 0
    }
}

impl Game {
    /// Standard starting position
    pub fn new() -> Self {
        let board = init_board();
        let key = position_key(&board, Color::White, CastlingRights::ALL, None);
        Game {
            board,
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            ep_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            key,
            history: Vec::new(),
            keys: vec![key],
        }
    }

    /// Position from a bare piece placement, with no castling rights or en-passant square
    pub fn from_pieces(board: Board, side_to_move: Color) -> ChessEngineResult<Game> {
        Game::from_parts(board, side_to_move, CastlingRights::default(), None, 0, 1)
    }

    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        ep_square: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> ChessEngineResult<Game> {
        validate_placement(&board, side_to_move)?;
        let key = position_key(&board, side_to_move, castling, ep_square);
        Ok(Game {
            board,
            side_to_move,
            castling,
            ep_square,
            halfmove_clock,
            fullmove_number,
            key,
            history: Vec::new(),
            keys: vec![key],
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> i8 {
        self.board[square as usize]
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn ep_square(&self) -> Option<Square> {
        self.ep_square
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Zobrist key of the current position
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Number of moves applied since the position was set up
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        king_square(&self.board, color)
    }

    /// En-passant square usable by `color`; only the side to move may capture en passant
    fn ep_for(&self, color: Color) -> Option<Square> {
        if color == self.side_to_move {
            self.ep_square
        } else {
            None
        }
    }

    /// Legal moves for an arbitrary colour, whoever is to move
    pub fn legal_moves_for(&self, color: Color) -> Vec<ChessMove> {
        move_gen::generate_legal_moves(&self.board, color, self.castling, self.ep_for(color))
    }

    /// Number of legal moves `color` would have if it were to move
    ///
    /// Pure: the side to move is never touched.
    pub fn legal_move_count(&self, color: Color) -> usize {
        move_gen::legal_move_count(&self.board, color, self.castling, self.ep_for(color))
    }

    fn has_legal_move(&self) -> bool {
        move_gen::has_legal_move(&self.board, self.side_to_move, self.castling, self.ep_square)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        move_gen::is_in_check(&self.board, color)
    }

    /// Whether the side to move is in check
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    pub fn is_insufficient_material(&self) -> bool {
        let white = PieceCounts::of(&self.board, Color::White);
        let black = PieceCounts::of(&self.board, Color::Black);
        if white.pawns + black.pawns > 0 || white.has_heavy() || black.has_heavy() {
            return false;
        }
        if white.minors() + black.minors() <= 1 {
            return true;
        }
        if white.knights + black.knights > 0 {
            return false;
        }
        // Only bishops left: dead if they all share a square colour
        let mut shades = self
            .board
            .iter()
            .enumerate()
            .filter(|(_, &piece)| piece.abs() == BISHOP_ID)
            .map(|(square, _)| (file_of(square as Square) + rank_of(square as Square)) % 2);
        match shades.next() {
            Some(first) => shades.all(|shade| shade == first),
            None => true,
        }
    }

    pub fn can_claim_fifty_moves(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_PLIES
    }

    /// Whether the current position occurred at least three times since the last
    /// irreversible move
    pub fn can_claim_threefold_repetition(&self) -> bool {
        let window = (self.halfmove_clock as usize).min(self.keys.len() - 1);
        let recent = &self.keys[self.keys.len() - 1 - window..];
        recent.iter().filter(|&&key| key == self.key).count() >= REPETITION_CLAIM
    }

    /// Why the game is drawn, if it is
    pub fn draw_reason(&self) -> Option<DrawReason> {
        match self.status() {
            GameStatus::Draw(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn status(&self) -> GameStatus {
        if !self.has_legal_move() {
            return if self.in_check() {
                GameStatus::Checkmate {
                    winner: self.side_to_move.opposite(),
                }
            } else {
                GameStatus::Draw(DrawReason::Stalemate)
            };
        }
        if self.is_insufficient_material() {
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        } else if self.can_claim_fifty_moves() {
            GameStatus::Draw(DrawReason::FiftyMove)
        } else if self.can_claim_threefold_repetition() {
            GameStatus::Draw(DrawReason::Threefold)
        } else {
            GameStatus::Ongoing
        }
    }

    /// Apply a move after checking it is legal here
    pub fn play(&mut self, mv: ChessMove) -> ChessEngineResult<()> {
        if !self.legal_moves().contains(&mv) {
            return Err(ChessEngineError::IllegalMove { mv: mv.to_string() });
        }
        self.make_move(mv);
        Ok(())
    }

    /// Resolve UCI move text (`e2e4`, `e7e8q`) against the legal moves of this position
    pub fn parse_uci(&self, text: &str) -> ChessEngineResult<ChessMove> {
        let illegal = || ChessEngineError::IllegalMove { mv: text.to_string() };
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(illegal());
        }
        let src = parse_square(&text[0..2]).ok_or_else(illegal)?;
        let dst = parse_square(&text[2..4]).ok_or_else(illegal)?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => {
                let id = FIG_STR.iter().position(|&f| f == c).ok_or_else(illegal)? as i8;
                Some(id)
            }
        };
        let candidate = ChessMove {
            src,
            dst,
            promotion,
        };
        self.legal_moves()
            .into_iter()
            .find(|&mv| mv == candidate)
            .ok_or_else(illegal)
    }

    /// Parse and play a UCI move
    pub fn play_uci(&mut self, text: &str) -> ChessEngineResult<ChessMove> {
        let mv = self.parse_uci(text)?;
        self.make_move(mv);
        Ok(mv)
    }

    /// Material difference in pawns, positive when White is ahead
    pub fn material_balance(&self) -> Score {
        self.board
            .iter()
            .filter(|&&piece| piece != VOID_ID)
            .map(|&piece| FIGURE_VALUE[piece.unsigned_abs() as usize] * f64::from(piece.signum()))
            .sum()
    }

    /// Whether `color` keeps enough material to force mate in principle
    ///
    /// Any pawn, rook or queen is enough, as are two bishops or bishop and knight.
    pub fn has_mating_material(&self, color: Color) -> bool {
        let counts = self.piece_counts(color);
        counts.pawns + counts.rooks + counts.queens > 0
            || counts.bishops >= 2
            || (counts.bishops >= 1 && counts.knights >= 1)
    }

    pub fn piece_counts(&self, color: Color) -> PieceCounts {
        PieceCounts::of(&self.board, color)
    }

    /// All pieces as `(colour, piece letter, square name)`, a1 to h8
    pub fn piece_list(&self) -> Vec<(Color, char, String)> {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(square, &piece)| {
                let color = Color::of_piece(piece)?;
                let letter = FIG_STR[piece.unsigned_abs() as usize].to_ascii_uppercase();
                Some((color, letter, square_name(square as Square)))
            })
            .collect()
    }

    /// The same position with colours exchanged and the board reflected top to bottom
    ///
    /// History is not carried over.
    pub fn mirrored(&self) -> Game {
        let mut board = [VOID_ID; 64];
        for (square, &piece) in self.board.iter().enumerate() {
            board[mirror_square(square as Square) as usize] = -piece;
        }
        let side_to_move = self.side_to_move.opposite();
        let castling = self.castling.swapped();
        let ep_square = self.ep_square.map(mirror_square);
        let key = position_key(&board, side_to_move, castling, ep_square);
        Game {
            board,
            side_to_move,
            castling,
            ep_square,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            key,
            history: Vec::new(),
            keys: vec![key],
        }
    }
}

/// Reject placements no legal game can reach
fn validate_placement(board: &Board, side_to_move: Color) -> ChessEngineResult<()> {
    let invalid = |reason: &str| ChessEngineError::InvalidPosition {
        reason: reason.to_string(),
    };
    for color in [Color::White, Color::Black] {
        if count_pieces(board, KING_ID, color) != 1 {
            return Err(invalid("each side needs exactly one king"));
        }
    }
    let back_rank_pawn = (0..8)
        .flat_map(|file| [square_at(file, 0), square_at(file, 7)])
        .any(|square| board[square as usize].abs() == PAWN_ID);
    if back_rank_pawn {
        return Err(invalid("pawn on first or last rank"));
    }
    if move_gen::is_in_check(board, side_to_move.opposite()) {
        return Err(invalid("side not to move is in check"));
    }
    Ok(())
}

impl GamePosition for Game {
    type Move = ChessMove;

    fn legal_moves(&self) -> Vec<ChessMove> {
        move_gen::generate_legal_moves(&self.board, self.side_to_move, self.castling, self.ep_square)
    }

    fn apply(&mut self, mv: ChessMove) {
        self.make_move(mv);
    }

    fn undo(&mut self) -> ChessEngineResult<()> {
        self.unmake_move()
    }

    fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_move()
    }

    fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_move()
    }

    fn is_draw_claimable(&self) -> bool {
        self.can_claim_fifty_moves() || self.can_claim_threefold_repetition()
    }

    fn is_terminal(&self) -> bool {
        !self.has_legal_move() || self.is_insufficient_material() || self.is_draw_claimable()
    }

    fn is_capture(&self, mv: ChessMove) -> bool {
        move_gen::is_capture(&self.board, mv)
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_ongoing() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.legal_moves().len(), 20);
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_fools_mate_is_checkmate() {
        let mut game = Game::new();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.play_uci(mv).unwrap();
        }
        assert!(game.is_checkmate());
        assert!(game.is_terminal());
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
    }

    #[test]
    fn test_stalemate_detected() {
        let game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(game.is_stalemate());
        assert!(!game.is_checkmate());
        assert_eq!(game.draw_reason(), Some(DrawReason::Stalemate));
    }

    #[test]
    fn test_insufficient_material_cases() {
        let bare = Game::from_fen("8/8/4k3/8/8/3K4/8/8 w - - 0 1").unwrap();
        assert!(bare.is_insufficient_material());
        assert!(bare.is_terminal());

        let knight = Game::from_fen("8/8/4k3/8/8/3K4/8/6N1 w - - 0 1").unwrap();
        assert!(knight.is_insufficient_material());

        // c1 and f4 are both dark squares
        let same_bishops = Game::from_fen("8/8/4k3/8/5b2/3K4/8/2B5 w - - 0 1").unwrap();
        assert!(same_bishops.is_insufficient_material());

        let rook = Game::from_fen("8/8/4k3/8/8/3K4/8/6R1 w - - 0 1").unwrap();
        assert!(!rook.is_insufficient_material());
    }

    #[test]
    fn test_fifty_move_claim() {
        let game = Game::from_fen("8/8/4k3/8/8/3K4/8/6R1 w - - 100 80").unwrap();
        assert!(game.can_claim_fifty_moves());
        assert_eq!(game.draw_reason(), Some(DrawReason::FiftyMove));
    }

    #[test]
    fn test_threefold_repetition_claim() {
        let mut game = Game::new();
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
        for mv in shuffle {
            game.play_uci(mv).unwrap();
        }
        assert!(!game.can_claim_threefold_repetition());
        for mv in shuffle {
            game.play_uci(mv).unwrap();
        }
        assert!(game.can_claim_threefold_repetition());
        assert!(game.is_draw_claimable());
        assert_eq!(game.draw_reason(), Some(DrawReason::Threefold));
    }

    #[test]
    fn test_legal_move_count_for_side_not_to_move() {
        let mut game = Game::new();
        game.play_uci("e2e4").unwrap();
        let before = game.clone();
        assert_eq!(game.legal_move_count(Color::White), 30);
        assert_eq!(game.legal_move_count(Color::Black), 20);
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_rejects_illegal_move() {
        let mut game = Game::new();
        let err = game.play(ChessMove::new(E1, E8)).unwrap_err();
        assert!(matches!(err, ChessEngineError::IllegalMove { .. }));
        assert!(game.parse_uci("e2e5").is_err());
        assert!(game.parse_uci("zz").is_err());
    }

    #[test]
    fn test_material_and_mating_material() {
        let game = Game::from_fen("4k3/8/8/8/8/8/8/3QK1N1 w - - 0 1").unwrap();
        assert_eq!(game.material_balance(), 12.0);
        assert!(game.has_mating_material(Color::White));
        assert!(!game.has_mating_material(Color::Black));
        assert_eq!(game.piece_counts(Color::White).total(), 3);
    }

    #[test]
    fn test_mirrored_swaps_colours() {
        let game = Game::from_fen("4k3/8/8/8/8/8/4P3/4K2R w K - 0 1").unwrap();
        let mirror = game.mirrored();
        assert_eq!(mirror.to_fen(), "4k2r/4p3/8/8/8/8/8/4K3 b k - 0 1");
        assert_eq!(mirror.mirrored().to_fen(), game.to_fen());
    }

    #[test]
    fn test_rejects_side_not_to_move_in_check() {
        assert!(Game::from_fen("4k3/4Q3/8/8/8/8/8/4K3 w - - 0 1").is_err());
    }
}
