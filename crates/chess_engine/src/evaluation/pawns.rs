//! Pawn structure: doubled, isolated and passed pawns

use crate::board::*;
use crate::constants::*;
use crate::types::*;

pub const DOUBLED_PAWN_PENALTY: f64 = 0.2;
pub const ISOLATED_PAWN_PENALTY: f64 = 0.3;
pub const PASSED_PAWN_BONUS: f64 = 0.5;

/// Pawn structure score of one colour (higher is better for that colour)
pub fn pawn_structure(board: &Board, color: Color) -> Score {
    let pawns: Vec<Square> = squares_of(board, PAWN_ID, color).collect();
    let enemy_pawns: Vec<Square> = squares_of(board, PAWN_ID, color.opposite()).collect();

    let mut per_file = [0u32; 8];
    for &pawn in &pawns {
        per_file[file_of(pawn) as usize] += 1;
    }

    let doubled: u32 = per_file.iter().filter(|&&n| n > 1).map(|&n| n - 1).sum();
    let mut score = -DOUBLED_PAWN_PENALTY * f64::from(doubled);

    for &pawn in &pawns {
        let file = file_of(pawn);
        let isolated = !pawns
            .iter()
            .any(|&other| (file_of(other) - file).abs() == 1);
        if isolated {
            score -= ISOLATED_PAWN_PENALTY;
        }

        let rank = rank_of(pawn);
        let blocked = enemy_pawns.iter().any(|&other| {
            (file_of(other) - file).abs() <= 1 && (rank_of(other) - rank) * color.forward() > 0
        });
        if !blocked {
            score += PASSED_PAWN_BONUS;
        }
    }

    score
}
