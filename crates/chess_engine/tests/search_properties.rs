//! Property tests for the search strategies
//!
//! The depth-first searches are generic over [`GamePosition`], so the pruning
//! properties are checked on a small capture-free take-away game where every tree is
//! cheap to search exhaustively.

use chess_engine::error::ChessEngineResult;
use chess_engine::evaluation::{Evaluator, StaticEvaluator};
use chess_engine::game::Game;
use chess_engine::mcts::{MctsConfig, MctsTree};
use chess_engine::position::{Color, GamePosition};
use chess_engine::search::{alpha_beta, iterative_deepening, minimax};
use chess_engine::ChessEngineError;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Players alternately take one to three stones; whoever faces an empty pile has lost
#[derive(Debug, Clone, PartialEq)]
struct TakeAway {
    pile: u32,
    taken: Vec<u32>,
}

impl TakeAway {
    fn new(pile: u32) -> Self {
        TakeAway { pile, taken: Vec::new() }
    }
}

impl GamePosition for TakeAway {
    type Move = u32;

    fn legal_moves(&self) -> Vec<u32> {
        (1..=3).filter(|&n| n <= self.pile).collect()
    }

    fn apply(&mut self, mv: u32) {
        self.pile -= mv;
        self.taken.push(mv);
    }

    fn undo(&mut self) -> ChessEngineResult<()> {
        let mv = self.taken.pop().ok_or(ChessEngineError::EmptyHistory)?;
        self.pile += mv;
        Ok(())
    }

    fn is_checkmate(&self) -> bool {
        self.pile == 0
    }

    fn is_stalemate(&self) -> bool {
        false
    }

    fn is_draw_claimable(&self) -> bool {
        false
    }

    fn is_capture(&self, _mv: u32) -> bool {
        false
    }

    fn side_to_move(&self) -> Color {
        if self.taken.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}

/// Arbitrary but deterministic leaf scores derived from the move sequence
struct SaltedEvaluator(u64);

impl Evaluator<TakeAway> for SaltedEvaluator {
    fn evaluate(&self, position: &TakeAway) -> f64 {
        if position.is_checkmate() {
            return -100.0 * position.side_to_move().score_sign();
        }
        let hash = position
            .taken
            .iter()
            .fold(self.0, |acc, &mv| acc.wrapping_mul(31).wrapping_add(u64::from(mv)));
        (hash % 17) as f64 - 8.0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 48, .. ProptestConfig::default() })]

    #[test]
    fn prop_alpha_beta_matches_minimax(salt in any::<u64>(), pile in 1u32..12, depth in 1u32..6) {
        let evaluator = SaltedEvaluator(salt);
        let mut game = TakeAway::new(pile);
        let maximizing = true;

        let full = minimax(&mut game, depth, maximizing, &evaluator).unwrap();
        let pruned = alpha_beta(&mut game, depth, f64::NEG_INFINITY, f64::INFINITY, maximizing, &evaluator).unwrap();

        prop_assert_eq!(full.score, pruned.score);
        prop_assert!(pruned.nodes <= full.nodes);
        prop_assert_eq!(game, TakeAway::new(pile));
    }

    #[test]
    fn prop_iterative_deepening_matches_final_alpha_beta(salt in any::<u64>(), pile in 1u32..10, depth in 1u32..5) {
        let evaluator = SaltedEvaluator(salt);
        let mut game = TakeAway::new(pile);

        let deepened = iterative_deepening(&mut game, depth, &evaluator).unwrap();
        let direct = alpha_beta(&mut game, depth, f64::NEG_INFINITY, f64::INFINITY, true, &evaluator).unwrap();

        prop_assert_eq!(deepened.score, direct.score);
        prop_assert_eq!(deepened.best_move, direct.best_move);
        prop_assert_eq!(deepened.depth, depth);
    }
}

#[test]
fn test_searches_play_perfect_take_away() {
    //! With enough depth to see the end of the game, every search takes the pile down
    //! to a multiple of four, the known winning strategy.

    let evaluator = SaltedEvaluator(0);
    for pile in [5u32, 6, 7, 9, 10, 11] {
        let mut game = TakeAway::new(pile);
        let expected = Some(pile % 4);
        let depth = pile;

        assert_eq!(minimax(&mut game, depth, true, &evaluator).unwrap().best_move, expected);
        assert_eq!(
            alpha_beta(&mut game, depth, f64::NEG_INFINITY, f64::INFINITY, true, &evaluator)
                .unwrap()
                .best_move,
            expected
        );
    }
}

#[test]
fn test_mcts_root_children_account_for_every_simulation() {
    //! Each simulation walks exactly one path back to the root

    let game = Game::from_fen("r3k2r/ppp2ppp/2n5/3qp3/3P4/2N5/PPP2PPP/R2QK2R w KQkq - 0 1").unwrap();
    for simulations in [1u32, 17, 120] {
        let mut tree = MctsTree::new(&game);
        let mut rng = StdRng::seed_from_u64(u64::from(simulations));
        tree.run(simulations, &MctsConfig::default(), &StaticEvaluator, &mut rng);

        let child_visits: u32 = tree.child_stats().iter().map(|stats| stats.visits).sum();
        assert_eq!(child_visits, simulations);
        assert_eq!(tree.root_visits(), simulations);
    }
}

#[test]
fn test_mcts_on_a_generic_position() {
    //! MCTS only needs the position contract, and a seeded search is reproducible

    let game = TakeAway::new(7);
    let config = MctsConfig {
        rollout_plies: 10,
        ..MctsConfig::default()
    };
    let run = |seed| chess_engine::mcts::mcts(&game, 200, &config, &SaltedEvaluator(0), &mut StdRng::seed_from_u64(seed));

    let first = run(11).unwrap();
    assert!(game.legal_moves().contains(&first));
    assert_eq!(run(11).unwrap(), first);
}
