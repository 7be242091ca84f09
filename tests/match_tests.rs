//! Integration tests for the match runner
//!
//! Runs short matches end to end and checks that the summary agrees with the
//! individual game records.

use chess_engine::{Game, SearchConfig, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use xfchess_search::config::save_json;
use xfchess_search::{run_matchup, GameResult, MatchDrawReason, MatchReport, MatchSettings};

fn quick_config() -> SearchConfig {
    SearchConfig {
        minimax_depth: 1,
        alphabeta_depth: 2,
        iddfs_depth: 2,
        mcts_simulations: 16,
        ..SearchConfig::default()
    }
}

fn quick_settings(games: u32) -> MatchSettings {
    MatchSettings {
        games,
        max_plies: 30,
        ..MatchSettings::default()
    }
}

#[test]
fn test_summary_matches_game_records() {
    //! Wins, draws, draw reasons and the average length must all be derivable from
    //! the per-game records.

    let mut rng = StdRng::seed_from_u64(11);
    let report = run_matchup(
        Strategy::AlphaBeta,
        Strategy::Random,
        &quick_settings(6),
        &[],
        &quick_config(),
        &mut rng,
    )
    .unwrap();

    let summary = &report.summary;
    assert_eq!(summary.games, 6);
    assert_eq!(report.games.len(), 6);
    assert_eq!(summary.white_wins + summary.black_wins + summary.draws, 6);
    assert_eq!(summary.draw_reasons.total(), summary.draws);

    let white_wins = report.games.iter().filter(|g| g.result == GameResult::WhiteWin).count();
    assert_eq!(summary.white_wins as usize, white_wins);

    let total_plies: u32 = report.games.iter().map(|g| g.plies).sum();
    assert!((summary.average_plies - f64::from(total_plies) / 6.0).abs() < 1e-9);

    for game in &report.games {
        assert!(game.plies <= 30);
        assert_eq!(game.moves.len(), game.plies as usize);
        assert!((3..=6).contains(&(game.white_pieces + game.black_pieces)));
        assert_eq!(game.draw_reason.is_some(), game.result == GameResult::Draw);
        if game.draw_reason == Some(MatchDrawReason::MoveLimit) {
            assert_eq!(game.plies, 30);
        }
    }
}

#[test]
fn test_openings_are_cycled() {
    let openings = [
        Game::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap(),
        Game::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap(),
    ];
    let mut rng = StdRng::seed_from_u64(5);
    let report = run_matchup(
        Strategy::Random,
        Strategy::Random,
        &quick_settings(5),
        &openings,
        &quick_config(),
        &mut rng,
    )
    .unwrap();

    let starts: Vec<&str> = report.games.iter().map(|g| g.start_fen.as_str()).collect();
    let first = openings[0].to_fen();
    let second = openings[1].to_fen();
    assert_eq!(starts, vec![first.as_str(), second.as_str(), first.as_str(), second.as_str(), first.as_str()]);
}

#[test]
fn test_seeded_matches_are_reproducible() {
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        run_matchup(
            Strategy::Mcts,
            Strategy::Random,
            &quick_settings(3),
            &[],
            &quick_config(),
            &mut rng,
        )
        .unwrap()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn test_report_survives_a_json_round_trip() {
    let mut rng = StdRng::seed_from_u64(3);
    let report = run_matchup(
        Strategy::Minimax,
        Strategy::IterativeDeepening,
        &quick_settings(2),
        &[],
        &quick_config(),
        &mut rng,
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    save_json(&path, &report).unwrap();

    let restored: MatchReport = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(restored, report);
    assert!(fs::read_to_string(&path).unwrap().contains("\"white\": \"minimax\""));
}
