//! AI-vs-AI match runner
//!
//! Plays strategies against each other from random low-material positions (or a
//! supplied list of starting positions) and tallies the results.
//!
//! # Game endings
//!
//! | Ending                  | Result | Reason                  |
//! |-------------------------|--------|-------------------------|
//! | Checkmate               | ±1     | -                       |
//! | Ply limit reached       | 0      | `move_limit`            |
//! | Stalemate               | 0      | `stalemate`             |
//! | Dead position           | 0      | `insufficient_material` |
//! | 100 plies without progress | 0   | `fifty_move`            |
//! | Third repetition        | 0      | `threefold`             |
//!
//! Draw claims end the game as soon as they become available.

use chess_engine::game::random_endgame;
use chess_engine::{
    choose_move, ChessEngineError, ChessEngineResult, Color, DrawReason, Game, GamePosition, GameStatus,
    SearchConfig, Strategy,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Outcome of one game from White's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    WhiteWin,
    Draw,
    BlackWin,
}

impl GameResult {
    /// +1 for a White win, 0 for a draw, -1 for a Black win
    pub fn score(self) -> i8 {
        match self {
            GameResult::WhiteWin => 1,
            GameResult::Draw => 0,
            GameResult::BlackWin => -1,
        }
    }
}

/// Why a match game was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchDrawReason {
    /// The ply limit ran out before the game ended
    MoveLimit,
    Stalemate,
    InsufficientMaterial,
    FiftyMove,
    Threefold,
    /// The game stopped without the rules naming a reason
    Other,
}

impl From<DrawReason> for MatchDrawReason {
    fn from(reason: DrawReason) -> Self {
        match reason {
            DrawReason::Stalemate => MatchDrawReason::Stalemate,
            DrawReason::InsufficientMaterial => MatchDrawReason::InsufficientMaterial,
            DrawReason::FiftyMove => MatchDrawReason::FiftyMove,
            DrawReason::Threefold => MatchDrawReason::Threefold,
        }
    }
}

impl fmt::Display for MatchDrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchDrawReason::MoveLimit => f.write_str("move_limit"),
            MatchDrawReason::Other => f.write_str("other"),
            MatchDrawReason::Stalemate => write!(f, "{}", DrawReason::Stalemate),
            MatchDrawReason::InsufficientMaterial => write!(f, "{}", DrawReason::InsufficientMaterial),
            MatchDrawReason::FiftyMove => write!(f, "{}", DrawReason::FiftyMove),
            MatchDrawReason::Threefold => write!(f, "{}", DrawReason::Threefold),
        }
    }
}

/// Everything recorded about one finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: Strategy,
    pub black: Strategy,
    pub start_fen: String,
    /// Pieces per side at the start, kings included
    pub white_pieces: usize,
    pub black_pieces: usize,
    /// Starting pieces as letter plus square, uppercase for White (`Ke1`, `qd8`)
    pub pieces: Vec<String>,
    pub result: GameResult,
    pub plies: u32,
    pub draw_reason: Option<MatchDrawReason>,
    /// Moves in UCI notation
    pub moves: Vec<String>,
}

/// Draw counts by reason
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawBreakdown {
    pub move_limit: u32,
    pub insufficient_material: u32,
    pub stalemate: u32,
    pub threefold: u32,
    pub fifty_move: u32,
    pub other: u32,
}

impl DrawBreakdown {
    fn record(&mut self, reason: MatchDrawReason) {
        let slot = match reason {
            MatchDrawReason::MoveLimit => &mut self.move_limit,
            MatchDrawReason::InsufficientMaterial => &mut self.insufficient_material,
            MatchDrawReason::Stalemate => &mut self.stalemate,
            MatchDrawReason::Threefold => &mut self.threefold,
            MatchDrawReason::FiftyMove => &mut self.fifty_move,
            MatchDrawReason::Other => &mut self.other,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u32 {
        self.move_limit + self.insufficient_material + self.stalemate + self.threefold + self.fifty_move + self.other
    }
}

/// Match totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub white: Strategy,
    pub black: Strategy,
    pub games: u32,
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    pub average_plies: f64,
    pub draw_reasons: DrawBreakdown,
}

impl MatchSummary {
    fn new(white: Strategy, black: Strategy) -> Self {
        MatchSummary {
            white,
            black,
            games: 0,
            white_wins: 0,
            black_wins: 0,
            draws: 0,
            average_plies: 0.0,
            draw_reasons: DrawBreakdown::default(),
        }
    }

    /// Add one game to the totals
    pub fn record(&mut self, game: &GameRecord) {
        let total_plies = self.average_plies * f64::from(self.games) + f64::from(game.plies);
        self.games += 1;
        self.average_plies = total_plies / f64::from(self.games);

        match game.result {
            GameResult::WhiteWin => self.white_wins += 1,
            GameResult::BlackWin => self.black_wins += 1,
            GameResult::Draw => {
                self.draws += 1;
                self.draw_reasons.record(game.draw_reason.unwrap_or(MatchDrawReason::Other));
            }
        }
    }
}

/// Match parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub games: u32,
    /// Plies after which an unfinished game is scored as a draw
    pub max_plies: u32,
    /// Piece range of generated starting positions, kings included
    pub min_pieces: usize,
    pub max_pieces: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        MatchSettings {
            games: 100,
            max_plies: 100,
            min_pieces: 3,
            max_pieces: 6,
        }
    }
}

/// Full match output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub summary: MatchSummary,
    pub games: Vec<GameRecord>,
}

fn piece_labels(game: &Game) -> Vec<String> {
    game.piece_list()
        .into_iter()
        .map(|(color, letter, square)| {
            let letter = match color {
                Color::White => letter,
                Color::Black => letter.to_ascii_lowercase(),
            };
            format!("{letter}{square}")
        })
        .collect()
}

/// Play `start` to the end (or `max_plies`) with `white` and `black` choosing moves
///
/// # Errors
///
/// Propagates search failures. A start position that is already over yields a
/// zero-ply record rather than an error.
pub fn play_game<R>(
    white: Strategy,
    black: Strategy,
    start: Game,
    max_plies: u32,
    config: &SearchConfig,
    rng: &mut R,
) -> ChessEngineResult<GameRecord>
where
    R: Rng + ?Sized,
{
    let start_fen = start.to_fen();
    let white_pieces = start.piece_counts(Color::White).total();
    let black_pieces = start.piece_counts(Color::Black).total();
    let pieces = piece_labels(&start);

    let mut game = start;
    let mut moves = Vec::new();
    let mut plies = 0;

    while !game.is_terminal() && plies < max_plies {
        let strategy = match game.side_to_move() {
            Color::White => white,
            Color::Black => black,
        };
        let choice = choose_move(&mut game, strategy, config, rng)?;
        game.play(choice.mv)?;
        moves.push(choice.mv.to_string());
        plies += 1;
        debug!(ply = plies, %strategy, mv = %choice.mv, score = ?choice.score, "[MATCH] move played");
    }

    let (result, draw_reason): (GameResult, Option<MatchDrawReason>) = if game.is_terminal() {
        match game.status() {
            GameStatus::Checkmate { winner: Color::White } => (GameResult::WhiteWin, None),
            GameStatus::Checkmate { winner: Color::Black } => (GameResult::BlackWin, None),
            GameStatus::Draw(reason) => (GameResult::Draw, Some(reason.into())),
            GameStatus::Ongoing => (GameResult::Draw, Some(MatchDrawReason::Other)),
        }
    } else {
        (GameResult::Draw, Some(MatchDrawReason::MoveLimit))
    };

    Ok(GameRecord {
        white,
        black,
        start_fen,
        white_pieces,
        black_pieces,
        pieces,
        result,
        plies,
        draw_reason,
        moves,
    })
}

/// Play `settings.games` games between `white` and `black`
///
/// Games start from `openings` in turn when any are given, otherwise from random
/// endgames drawn from `rng`.
///
/// # Errors
///
/// [`ChessEngineError::InvalidConfig`] for a match of zero games, plus any error from
/// position generation or the searches.
pub fn run_matchup<R>(
    white: Strategy,
    black: Strategy,
    settings: &MatchSettings,
    openings: &[Game],
    config: &SearchConfig,
    rng: &mut R,
) -> ChessEngineResult<MatchReport>
where
    R: Rng + ?Sized,
{
    if settings.games == 0 {
        return Err(ChessEngineError::InvalidConfig {
            reason: "a match needs at least one game".to_string(),
        });
    }
    config.validate()?;
    info!(
        "[MATCH] Running {} games: {} (white) vs {} (black)",
        settings.games, white, black
    );

    let mut summary = MatchSummary::new(white, black);
    let mut games = Vec::with_capacity(settings.games as usize);

    for index in 0..settings.games as usize {
        let start = match openings.get(index % openings.len().max(1)) {
            Some(opening) => opening.clone(),
            None => random_endgame(rng, settings.min_pieces, settings.max_pieces)?,
        };
        let record = play_game(white, black, start, settings.max_plies, config, rng)?;

        info!(
            "[MATCH] Game {}/{}: result={} plies={} reason={} start={}",
            index + 1,
            settings.games,
            record.result.score(),
            record.plies,
            record.draw_reason.map_or_else(|| "-".to_string(), |reason| reason.to_string()),
            record.start_fen,
        );
        summary.record(&record);
        games.push(record);
    }

    info!(
        "[MATCH] Complete: {} wins {}, {} wins {}, draws {}, average {:.1} plies",
        white, summary.white_wins, black, summary.black_wins, summary.draws, summary.average_plies
    );
    Ok(MatchReport { summary, games })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fast_config() -> SearchConfig {
        SearchConfig {
            minimax_depth: 1,
            alphabeta_depth: 2,
            iddfs_depth: 2,
            mcts_simulations: 20,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_mate_in_one_is_a_white_win() {
        let start = Game::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let record = play_game(Strategy::AlphaBeta, Strategy::Random, start, 10, &fast_config(), &mut rng).unwrap();

        assert_eq!(record.result, GameResult::WhiteWin);
        assert_eq!(record.plies, 1);
        assert_eq!(record.moves, vec!["a1a8".to_string()]);
        assert_eq!(record.draw_reason, None);
        assert_eq!((record.white_pieces, record.black_pieces), (2, 4));
        assert!(record.pieces.contains(&"Ra1".to_string()));
        assert!(record.pieces.contains(&"kg8".to_string()));
    }

    #[test]
    fn test_ply_limit_is_a_move_limit_draw() {
        let start = Game::new();
        let mut rng = StdRng::seed_from_u64(1);
        let record = play_game(Strategy::Random, Strategy::Random, start, 4, &fast_config(), &mut rng).unwrap();

        assert_eq!(record.result, GameResult::Draw);
        assert_eq!(record.plies, 4);
        assert_eq!(record.draw_reason, Some(MatchDrawReason::MoveLimit));
    }

    #[test]
    fn test_finished_start_records_its_reason() {
        let stalemate = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let record = play_game(Strategy::Mcts, Strategy::Mcts, stalemate, 50, &fast_config(), &mut rng).unwrap();

        assert_eq!(record.plies, 0);
        assert_eq!(record.result, GameResult::Draw);
        assert_eq!(record.draw_reason, Some(MatchDrawReason::Stalemate));
    }

    #[test]
    fn test_summary_tallies() {
        let mut summary = MatchSummary::new(Strategy::Minimax, Strategy::Random);
        let mut record = GameRecord {
            white: Strategy::Minimax,
            black: Strategy::Random,
            start_fen: String::new(),
            white_pieces: 2,
            black_pieces: 2,
            pieces: Vec::new(),
            result: GameResult::WhiteWin,
            plies: 10,
            draw_reason: None,
            moves: Vec::new(),
        };
        summary.record(&record);
        record.result = GameResult::Draw;
        record.plies = 20;
        record.draw_reason = Some(MatchDrawReason::Threefold);
        summary.record(&record);

        assert_eq!(summary.games, 2);
        assert_eq!(summary.white_wins, 1);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.draw_reasons.threefold, 1);
        assert_eq!(summary.draw_reasons.total(), 1);
        assert!((summary.average_plies - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_game_match_is_rejected() {
        let settings = MatchSettings {
            games: 0,
            ..MatchSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let result = run_matchup(Strategy::Random, Strategy::Random, &settings, &[], &fast_config(), &mut rng);
        assert!(matches!(result, Err(ChessEngineError::InvalidConfig { .. })));
    }
}
