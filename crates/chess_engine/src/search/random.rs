//! Uniformly random move selection

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::position::GamePosition;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick one legal move uniformly at random
pub fn random_move<P, R>(position: &P, rng: &mut R) -> ChessEngineResult<P::Move>
where
    P: GamePosition,
    R: Rng + ?Sized,
{
    position
        .legal_moves()
        .choose(rng)
        .copied()
        .ok_or(ChessEngineError::NoLegalMoves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_move_is_legal() {
        let game = Game::new();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let mv = random_move(&game, &mut rng).unwrap();
            assert!(game.legal_moves().contains(&mv));
        }
    }

    #[test]
    fn test_no_moves_is_an_error() {
        let game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(random_move(&game, &mut rng), Err(ChessEngineError::NoLegalMoves));
    }
}
