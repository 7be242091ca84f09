//! FEN parsing and printing

use super::make_unmake::ep_capturable;
use super::Game;
use crate::board::*;
use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

fn invalid(fen: &str, reason: impl Into<String>) -> ChessEngineError {
    ChessEngineError::InvalidFen {
        fen: fen.to_string(),
        reason: reason.into(),
    }
}

fn piece_from_char(c: char) -> Option<i8> {
    let id = FIG_STR.iter().position(|&f| f == c.to_ascii_lowercase())? as i8;
    if id == VOID_ID {
        return None;
    }
    Some(if c.is_ascii_uppercase() { id } else { -id })
}

fn piece_to_char(piece: i8) -> char {
    let c = FIG_STR[piece.unsigned_abs() as usize];
    if piece > 0 {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

fn parse_placement(fen: &str, placement: &str) -> ChessEngineResult<Board> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid(fen, "placement must have 8 ranks"));
    }

    let mut board = [VOID_ID; 64];
    for (i, row) in rows.iter().enumerate() {
        let rank = 7 - i as i8;
        let mut file = 0i8;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) || file + skip as i8 > 8 {
                    return Err(invalid(fen, format!("bad empty-square count '{c}' on rank {}", rank + 1)));
                }
                file += skip as i8;
                continue;
            }
            let piece = piece_from_char(c)
                .ok_or_else(|| invalid(fen, format!("unknown piece '{c}'")))?;
            if file > 7 {
                return Err(invalid(fen, format!("rank {} is too long", rank + 1)));
            }
            board[square_at(file, rank) as usize] = piece;
            file += 1;
        }
        if file != 8 {
            return Err(invalid(fen, format!("rank {} does not have 8 files", rank + 1)));
        }
    }
    Ok(board)
}

fn parse_castling(fen: &str, field: &str, board: &Board) -> ChessEngineResult<CastlingRights> {
    let mut rights = CastlingRights::default();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        match c {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => return Err(invalid(fen, format!("bad castling flag '{c}'"))),
        }
    }
    // Rights without king and rook on their original squares are dropped
    if board[E1 as usize] != W_KING {
        rights.white_king_side = false;
        rights.white_queen_side = false;
    }
    if board[E8 as usize] != B_KING {
        rights.black_king_side = false;
        rights.black_queen_side = false;
    }
    rights.white_king_side &= board[H1 as usize] == W_ROOK;
    rights.white_queen_side &= board[A1 as usize] == W_ROOK;
    rights.black_king_side &= board[H8 as usize] == B_ROOK;
    rights.black_queen_side &= board[A8 as usize] == B_ROOK;
    Ok(rights)
}

impl Game {
    /// Parse a position from Forsyth-Edwards Notation
    ///
    /// The two clock fields may be omitted. Castling rights that the piece placement
    /// cannot support are dropped, and an en-passant square no pawn can capture onto is
    /// ignored, so equal positions always hash equally.
    pub fn from_fen(fen: &str) -> ChessEngineResult<Game> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 4 && fields.len() != 6 {
            return Err(invalid(fen, "expected 4 or 6 fields"));
        }

        let board = parse_placement(fen, fields[0])?;
        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(invalid(fen, format!("bad side to move '{other}'"))),
        };
        let castling = parse_castling(fen, fields[2], &board)?;

        let ep_square = match fields[3] {
            "-" => None,
            name => {
                let square = parse_square(name)
                    .ok_or_else(|| invalid(fen, format!("bad en-passant square '{name}'")))?;
                let pusher = side_to_move.opposite();
                let expected_rank = pusher.home_rank() + 2 * pusher.forward();
                if rank_of(square) != expected_rank {
                    return Err(invalid(fen, format!("en-passant square '{name}' on wrong rank")));
                }
                ep_capturable(&board, square, side_to_move).then_some(square)
            }
        };

        let (halfmove_clock, fullmove_number) = if fields.len() == 6 {
            let halfmove = fields[4]
                .parse::<u32>()
                .map_err(|_| invalid(fen, "bad halfmove clock"))?;
            let fullmove = fields[5]
                .parse::<u32>()
                .map_err(|_| invalid(fen, "bad fullmove number"))?;
            (halfmove, fullmove.max(1))
        } else {
            (0, 1)
        };

        Game::from_parts(board, side_to_move, castling, ep_square, halfmove_clock, fullmove_number)
            .map_err(|err| match err {
                ChessEngineError::InvalidPosition { reason } => invalid(fen, reason),
                other => other,
            })
    }

    /// Print the position as Forsyth-Edwards Notation
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                let piece = self.board[square_at(file, rank) as usize];
                if piece == VOID_ID {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    placement.push_str(&empty.to_string());
                    empty = 0;
                }
                placement.push(piece_to_char(piece));
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (set, flag) in [
            (self.castling.white_king_side, 'K'),
            (self.castling.white_queen_side, 'Q'),
            (self.castling.black_king_side, 'k'),
            (self.castling.black_queen_side, 'q'),
        ] {
            if set {
                castling.push(flag);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self.ep_square.map_or_else(|| "-".to_string(), square_name);

        format!(
            "{placement} {side} {castling} {ep} {} {}",
            self.halfmove_clock, self.fullmove_number
        )
    }
}
