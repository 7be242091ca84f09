//! # Chess Engine Core Types
//!
//! ## Board Representation
//!
//! The board is a mailbox of **signed 8-bit integers** indexed `rank * 8 + file` (a1 = 0,
//! h8 = 63):
//! - Positive values (1-6) represent white pieces
//! - Negative values (-1 to -6) represent black pieces
//! - Zero represents an empty square
//!
//! The sign carries the colour and the absolute value the piece id, so ownership and piece
//! type are each a single comparison, and the whole board is 64 bytes that copy cheaply. The
//! legality filter in [`crate::move_gen`] relies on that: it plays every candidate move on a
//! scratch copy of the board.
//!
//! ## Moves
//!
//! [`ChessMove`] is the opaque move value handed to the search strategies. It is `Copy`, `Eq`
//! and `Hash`, which is all the searches need (set membership, "first move seen" tie-breaks,
//! MCTS untried lists). A move is only meaningful relative to the position whose legal-move
//! list produced it.
//!
//! ## Scores
//!
//! [`Score`] is a signed pawn-unit `f64`; positive favours White. See
//! [`crate::constants::MATE_SCORE`] for the mate sentinel.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Board = [i8; 64];
pub type Square = u8;
pub type Score = f64;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other player
    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// `+1` for White, `-1` for Black
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// [`Color::sign`] as a score multiplier
    #[inline]
    pub fn score_sign(self) -> Score {
        f64::from(self.sign())
    }

    /// Rank on which this colour's pieces start (0 for White, 7 for Black)
    #[inline]
    pub fn home_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank step a pawn of this colour moves by
    #[inline]
    pub fn forward(self) -> i8 {
        self.sign()
    }

    /// Colour owning a non-empty board value
    #[inline]
    pub fn of_piece(piece: i8) -> Option<Color> {
        match piece.signum() {
            1 => Some(Color::White),
            -1 => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// A move from `src` to `dst`, with the promotion piece id for pawn promotions
///
/// Castling is encoded as the king's two-square move and en passant as the pawn's diagonal
/// step onto the empty target square, exactly as in UCI notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub src: Square,
    pub dst: Square,
    pub promotion: Option<i8>,
}

impl ChessMove {
    pub fn new(src: Square, dst: Square) -> Self {
        ChessMove {
            src,
            dst,
            promotion: None,
        }
    }

    pub fn with_promotion(src: Square, dst: Square, piece_id: i8) -> Self {
        ChessMove {
            src,
            dst,
            promotion: Some(piece_id),
        }
    }
}

impl fmt::Display for ChessMove {
    /// Formats the move in UCI long algebraic notation (`e2e4`, `e7e8q`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            crate::board::square_name(self.src),
            crate::board::square_name(self.dst)
        )?;
        if let Some(piece_id) = self.promotion {
            write!(f, "{}", FIG_STR[piece_id.unsigned_abs() as usize])?;
        }
        Ok(())
    }
}

/// Remaining castling rights for both players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    pub fn king_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_side,
            Color::Black => self.black_king_side,
        }
    }

    pub fn queen_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queen_side,
            Color::Black => self.black_queen_side,
        }
    }

    /// Drops any right whose king or rook square was touched by a move
    pub fn touch(&mut self, square: Square) {
        match square {
            E1 => {
                self.white_king_side = false;
                self.white_queen_side = false;
            }
            H1 => self.white_king_side = false,
            A1 => self.white_queen_side = false,
            E8 => {
                self.black_king_side = false;
                self.black_queen_side = false;
            }
            H8 => self.black_king_side = false,
            A8 => self.black_queen_side = false,
            _ => {}
        }
    }

    /// Rights with the colours exchanged
    pub fn swapped(&self) -> CastlingRights {
        CastlingRights {
            white_king_side: self.black_king_side,
            white_queen_side: self.black_queen_side,
            black_king_side: self.white_king_side,
            black_queen_side: self.white_queen_side,
        }
    }
}

/// Why a finished game is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    FiftyMove,
    Threefold,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::InsufficientMaterial => "insufficient_material",
            DrawReason::FiftyMove => "fifty_move",
            DrawReason::Threefold => "threefold",
        };
        f.write_str(name)
    }
}

/// Current state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Draw(DrawReason),
}
