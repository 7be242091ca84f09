//! Static position evaluation
//!
//! Scores positions in pawns from White's point of view using:
//! - Material count (piece values)
//! - Mobility (legal move count of each side)
//! - Pawn structure
//! - King safety, and in the endgame king opposition, edge pressure and a mating-net drive
//! - A bonus for the side giving check
//!
//! Finished games short-circuit: mate returns [`MATE_SCORE`] signed for the winner, and a
//! stalemate or claimable draw scores 0 unless one side is ahead by at least
//! [`DRAW_IMBALANCE`] pawns, in which case the draw counts against that side.
//!
//! ## Module Organization
//!
//! - `phase` - Opening / middlegame / endgame classification
//! - `material` - Material balance evaluation
//! - `pawns` - Doubled, isolated and passed pawns
//! - `king` - King safety and the endgame king terms

mod king;
mod material;
mod pawns;
mod phase;

pub use material::evaluate_material;
pub use pawns::pawn_structure;
pub use phase::GamePhase;

use crate::constants::*;
use crate::game::Game;
use crate::position::GamePosition;
use crate::types::*;
use serde::Serialize;

/// Mobility weight per legal move
pub const MOBILITY_WEIGHT: f64 = 0.1;
/// Bonus for the side delivering check
pub const CHECK_BONUS: f64 = 0.8;
/// Material lead from which a draw is scored as a loss for the leading side
pub const DRAW_IMBALANCE: f64 = 3.0;
/// Scale of the draw penalty relative to the material lead
pub const DRAW_PENALTY_FACTOR: f64 = 2.0;

/// Static evaluation seam shared by every search strategy
pub trait Evaluator<P: GamePosition> {
    /// Score of `position`, positive when White is better
    fn evaluate(&self, position: &P) -> Score;
}

/// Every heuristic term of a non-terminal evaluation, White minus Black
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EvaluationBreakdown {
    pub phase: Option<GamePhase>,
    pub material: Score,
    pub mobility: Score,
    pub pawn_structure: Score,
    pub king_safety: Score,
    pub king_opposition: Score,
    pub endgame_pressure: Score,
    pub endgame_drive: Score,
    pub king_distance: Score,
    pub check: Score,
}

impl EvaluationBreakdown {
    pub fn total(&self) -> Score {
        self.material
            + self.mobility
            + self.pawn_structure
            + self.king_safety
            + self.king_opposition
            + self.endgame_pressure
            + self.endgame_drive
            + self.king_distance
            + self.check
    }

    /// Terms credited to White whichever side owns the position
    ///
    /// Mirroring the colours leaves these unchanged, so
    /// `evaluate(p) + evaluate(mirror(p)) == 2 * king_geometry()` for any position
    /// that has not ended.
    pub fn king_geometry(&self) -> Score {
        self.king_opposition + self.king_distance
    }
}

/// The hand-tuned chess evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticEvaluator;

impl StaticEvaluator {
    /// Heuristic terms of a position, ignoring whether the game has ended
    pub fn breakdown(&self, game: &Game) -> EvaluationBreakdown {
        let board = game.board();
        let phase = GamePhase::of(board);
        let material = evaluate_material(board);

        let mobility = MOBILITY_WEIGHT
            * (game.legal_move_count(Color::White) as f64 - game.legal_move_count(Color::Black) as f64);

        let check = if game.in_check() {
            -CHECK_BONUS * game.side_to_move().score_sign()
        } else {
            0.0
        };

        EvaluationBreakdown {
            phase: Some(phase),
            material,
            mobility,
            pawn_structure: pawn_structure(board, Color::White) - pawn_structure(board, Color::Black),
            king_safety: king::king_safety(board, Color::White, phase)
                - king::king_safety(board, Color::Black, phase),
            king_opposition: king::king_opposition(board, phase),
            endgame_pressure: king::endgame_pressure(board, phase),
            endgame_drive: king::endgame_drive(board, phase),
            king_distance: king::king_distance(board, phase),
            check,
        }
    }
}

/// Score of a finished game, or `None` while play continues
///
/// Insufficient material falls through to the heuristic sum.
fn terminal_score(game: &Game) -> Option<Score> {
    if game.is_checkmate() {
        // The side to move has been mated
        return Some(-MATE_SCORE * game.side_to_move().score_sign());
    }
    if game.is_stalemate() || game.is_draw_claimable() {
        let material = game.material_balance();
        return Some(if material.abs() >= DRAW_IMBALANCE {
            -material * DRAW_PENALTY_FACTOR
        } else {
            0.0
        });
    }
    None
}

impl Evaluator<Game> for StaticEvaluator {
    fn evaluate(&self, game: &Game) -> Score {
        terminal_score(game).unwrap_or_else(|| self.breakdown(game).total())
    }
}

/// Evaluate a position with the [`StaticEvaluator`]
pub fn evaluate_position(game: &Game) -> Score {
    StaticEvaluator.evaluate(game)
}
