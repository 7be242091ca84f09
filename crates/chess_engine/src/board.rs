//! Board utilities and helper functions
//!
//! Provides fundamental board operations used throughout the engine:
//! - Square indexing and coordinate conversion
//! - Piece queries
//! - Board boundaries checking

use crate::constants::*;
use crate::types::*;

/// Convert file and rank to a square index (0-63)
#[inline]
pub fn square_at(file: i8, rank: i8) -> Square {
    (rank * 8 + file) as Square
}

/// File (0 = a) of a square
#[inline]
pub fn file_of(square: Square) -> i8 {
    (square % 8) as i8
}

/// Rank (0 = first rank) of a square
#[inline]
pub fn rank_of(square: Square) -> i8 {
    (square / 8) as i8
}

/// Check if file/rank coordinates are on the board
#[inline]
pub fn is_valid_square(file: i8, rank: i8) -> bool {
    (0..8).contains(&file) && (0..8).contains(&rank)
}

/// Step from a square by a `(file, rank)` delta, `None` when leaving the board
#[inline]
pub fn offset(square: Square, (df, dr): (i8, i8)) -> Option<Square> {
    let file = file_of(square) + df;
    let rank = rank_of(square) + dr;
    if is_valid_square(file, rank) {
        Some(square_at(file, rank))
    } else {
        None
    }
}

/// Same square seen from the other side of the board (rank reflected)
#[inline]
pub fn mirror_square(square: Square) -> Square {
    square ^ 56
}

/// Manhattan distance between two squares
#[inline]
pub fn manhattan_distance(a: Square, b: Square) -> i8 {
    (file_of(a) - file_of(b)).abs() + (rank_of(a) - rank_of(b)).abs()
}

/// Distance from a square to the nearest board edge (0 on the edge, 3 in the centre)
#[inline]
pub fn distance_to_edge(square: Square) -> i8 {
    let file = file_of(square);
    let rank = rank_of(square);
    file.min(7 - file).min(rank).min(7 - rank)
}

/// Algebraic name of a square (`e4`)
pub fn square_name(square: Square) -> String {
    let file = (b'a' + square % 8) as char;
    let rank = (b'1' + square / 8) as char;
    format!("{file}{rank}")
}

/// Parse an algebraic square name
pub fn parse_square(name: &str) -> Option<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].wrapping_sub(b'a') as i8;
    let rank = bytes[1].wrapping_sub(b'1') as i8;
    if is_valid_square(file, rank) {
        Some(square_at(file, rank))
    } else {
        None
    }
}

/// Check if a board value belongs to the given colour
#[inline]
pub fn piece_belongs_to(piece: i8, color: Color) -> bool {
    piece != VOID_ID && piece.signum() == color.sign()
}

/// Board value for a piece id of the given colour
#[inline]
pub fn colored_piece(piece_id: i8, color: Color) -> i8 {
    piece_id * color.sign()
}

/// Square holding the king of `color`
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    let king = colored_piece(KING_ID, color);
    board
        .iter()
        .position(|&piece| piece == king)
        .map(|square| square as Square)
}

/// Squares holding the given piece id of `color`
pub fn squares_of(board: &Board, piece_id: i8, color: Color) -> impl Iterator<Item = Square> + '_ {
    let wanted = colored_piece(piece_id, color);
    board
        .iter()
        .enumerate()
        .filter(move |(_, &piece)| piece == wanted)
        .map(|(square, _)| square as Square)
}

/// Number of pieces with the given id and colour
pub fn count_pieces(board: &Board, piece_id: i8, color: Color) -> usize {
    squares_of(board, piece_id, color).count()
}

/// Initialize a board to the standard starting position
pub fn init_board() -> Board {
    SETUP
}
