//! Zobrist hashing for repetition detection
//!
//! Each (piece, square) pair, the side to move, each castling right and each en-passant file
//! owns a random 64-bit key; a position's key is the XOR of the keys of its features. The key
//! table is generated at compile time from a fixed splitmix64 stream, so keys are identical
//! across runs and builds.
//!
//! Keys are only used to count repeated positions for threefold-repetition claims. The engine
//! keeps no transposition table.

use crate::board::file_of;
use crate::types::*;

const PIECE_KEYS: usize = 12 * 64;
const SIDE_KEY: usize = PIECE_KEYS;
const CASTLING_KEYS: usize = SIDE_KEY + 1;
const EP_KEYS: usize = CASTLING_KEYS + 4;
const KEY_COUNT: usize = EP_KEYS + 8;

const SEED: u64 = 0x5846_4368_6573_7321;

const fn splitmix64(state: u64) -> (u64, u64) {
    let next = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = next;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    (next, z ^ (z >> 31))
}

const fn build_keys() -> [u64; KEY_COUNT] {
    let mut keys = [0u64; KEY_COUNT];
    let mut state = SEED;
    let mut i = 0;
    while i < KEY_COUNT {
        let (next, key) = splitmix64(state);
        state = next;
        keys[i] = key;
        i += 1;
    }
    keys
}

static KEYS: [u64; KEY_COUNT] = build_keys();

/// Key of one piece on one square
#[inline]
pub fn piece_key(piece: i8, square: Square) -> u64 {
    let piece_index = (piece.unsigned_abs() as usize - 1) * 2 + usize::from(piece < 0);
    KEYS[piece_index * 64 + square as usize]
}

/// Key toggled when Black is to move
#[inline]
pub fn side_key() -> u64 {
    KEYS[SIDE_KEY]
}

/// Combined key of a set of castling rights
pub fn castling_key(rights: CastlingRights) -> u64 {
    let flags = [
        rights.white_king_side,
        rights.white_queen_side,
        rights.black_king_side,
        rights.black_queen_side,
    ];
    flags
        .iter()
        .enumerate()
        .filter(|(_, &set)| set)
        .fold(0, |key, (i, _)| key ^ KEYS[CASTLING_KEYS + i])
}

/// Key of an en-passant target square
#[inline]
pub fn ep_key(square: Square) -> u64 {
    KEYS[EP_KEYS + file_of(square) as usize]
}

/// Full key of a position
pub fn position_key(
    board: &Board,
    side_to_move: Color,
    castling: CastlingRights,
    ep_square: Option<Square>,
) -> u64 {
    let mut key = board
        .iter()
        .enumerate()
        .filter(|(_, &piece)| piece != 0)
        .fold(0, |key, (square, &piece)| key ^ piece_key(piece, square as Square));

    if side_to_move == Color::Black {
        key ^= side_key();
    }
    key ^= castling_key(castling);
    if let Some(square) = ep_square {
        key ^= ep_key(square);
    }
    key
}
