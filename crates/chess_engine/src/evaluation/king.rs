//! King terms: safety, opposition, endgame pressure and the mating-net drive
//!
//! Safety is scored per colour. The remaining terms only apply in the endgame and are
//! returned already signed from White's point of view. Opposition and king distance
//! depend only on where the two kings stand, so they keep their sign when the colours
//! are mirrored.

use super::phase::GamePhase;
use crate::board::*;
use crate::constants::*;
use crate::types::*;

pub const HOME_RANK_LEFT_PENALTY: f64 = 0.5;
pub const CASTLED_FILE_BONUS: f64 = 0.2;
pub const CENTRALIZATION_WEIGHT: f64 = 0.3;
pub const OPPOSITION_WEIGHT: f64 = 0.2;
pub const EDGE_PRESSURE_WEIGHT: f64 = 0.4;
pub const RANK_CENTRALIZATION_WEIGHT: f64 = 1.2;
pub const KING_DISTANCE_WEIGHT: f64 = 0.8;

fn center_offset(coordinate: i8) -> f64 {
    (f64::from(coordinate) - 3.5).abs()
}

/// King safety of one colour
///
/// Before the endgame the king should stay home, ideally on a castled file. In the
/// endgame it should head for the centre.
pub fn king_safety(board: &Board, color: Color, phase: GamePhase) -> Score {
    let Some(king) = king_square(board, color) else {
        return 0.0;
    };
    let file = file_of(king);
    let rank = rank_of(king);

    if phase.is_endgame() {
        -(center_offset(file) + center_offset(rank)) * CENTRALIZATION_WEIGHT
    } else if rank != color.home_rank() {
        -HOME_RANK_LEFT_PENALTY
    } else if file == 1 || file == 6 {
        CASTLED_FILE_BONUS
    } else {
        0.0
    }
}

/// Endgame reward for bringing the kings together, credited to White
pub fn king_opposition(board: &Board, phase: GamePhase) -> Score {
    if !phase.is_endgame() {
        return 0.0;
    }
    match (king_square(board, Color::White), king_square(board, Color::Black)) {
        (Some(white), Some(black)) => {
            let distance = f64::from(manhattan_distance(white, black));
            (6.0 - distance) * OPPOSITION_WEIGHT
        }
        _ => 0.0,
    }
}

/// Endgame reward for each side with a queen or rook for driving the enemy king to the edge
pub fn endgame_pressure(board: &Board, phase: GamePhase) -> Score {
    if !phase.is_endgame() {
        return 0.0;
    }
    [Color::White, Color::Black]
        .into_iter()
        .filter(|&color| {
            count_pieces(board, QUEEN_ID, color) + count_pieces(board, ROOK_ID, color) > 0
        })
        .filter_map(|color| {
            let enemy_king = king_square(board, color.opposite())?;
            let edge = f64::from(distance_to_edge(enemy_king));
            Some((3.0 - edge) * EDGE_PRESSURE_WEIGHT * color.score_sign())
        })
        .sum()
}

/// Extra endgame drive: rank centralization of each king
pub fn endgame_drive(board: &Board, phase: GamePhase) -> Score {
    if !phase.is_endgame() {
        return 0.0;
    }
    let (Some(white), Some(black)) = (king_square(board, Color::White), king_square(board, Color::Black))
    else {
        return 0.0;
    };
    (center_offset(rank_of(black)) - center_offset(rank_of(white))) * RANK_CENTRALIZATION_WEIGHT
}

/// Endgame penalty on king-to-king distance, charged to White
pub fn king_distance(board: &Board, phase: GamePhase) -> Score {
    if !phase.is_endgame() {
        return 0.0;
    }
    match (king_square(board, Color::White), king_square(board, Color::Black)) {
        (Some(white), Some(black)) => -f64::from(manhattan_distance(white, black)) * KING_DISTANCE_WEIGHT,
        _ => 0.0,
    }
}
