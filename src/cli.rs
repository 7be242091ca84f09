//! Command-line front end
//!
//! ```text
//! xfsearch best-move --fen "<FEN>" --strategy alphabeta --depth 5
//! xfsearch eval --fen "<FEN>"
//! xfsearch match --white iddfs --black mcts --games 50 --seed 7 --output report.json
//! xfsearch endgame --min-pieces 3 --max-pieces 6
//! ```
//!
//! `--config` points at a JSON [`SearchConfig`]; per-command flags override it.
//! Results go to stdout as JSON, logs go to stderr.

use crate::config::{load_or_default, save_json};
use crate::tournament::{run_matchup, MatchSettings};
use anyhow::{Context, Result};
use chess_engine::constants::START_FEN;
use chess_engine::game::random_endgame;
use chess_engine::{choose_move, Game, GameStatus, SearchConfig, StaticEvaluator, Strategy};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "xfsearch", version, about = "Chess search strategies and engine matches")]
pub struct Cli {
    /// JSON search configuration (depths, simulation count, MCTS parameters)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for every random choice; omitted means a fresh OS seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Choose a move for a position
    BestMove(BestMoveArgs),
    /// Print the static evaluation of a position term by term
    Eval(EvalArgs),
    /// Play an AI-vs-AI match
    Match(MatchArgs),
    /// Print a random low-material starting position
    Endgame(EndgameArgs),
}

#[derive(Args, Debug, Clone)]
pub struct BestMoveArgs {
    #[arg(long, default_value = START_FEN)]
    pub fen: String,
    /// minimax, alphabeta, iddfs, mcts or random
    #[arg(long, default_value = "alphabeta")]
    pub strategy: Strategy,
    /// Search depth for the depth-first strategies
    #[arg(long)]
    pub depth: Option<u32>,
    /// Simulation count for MCTS
    #[arg(long)]
    pub simulations: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    #[arg(long, default_value = START_FEN)]
    pub fen: String,
}

#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    #[arg(long)]
    pub white: Strategy,
    #[arg(long, default_value = "random")]
    pub black: Strategy,
    #[arg(long, default_value_t = 100)]
    pub games: u32,
    /// Plies before an unfinished game is scored as a draw
    #[arg(long, default_value_t = 100)]
    pub max_plies: u32,
    #[arg(long, default_value_t = 3)]
    pub min_pieces: usize,
    #[arg(long, default_value_t = 6)]
    pub max_pieces: usize,
    /// Starting positions to cycle through instead of random endgames (repeatable)
    #[arg(long = "fen", value_name = "FEN")]
    pub fens: Vec<String>,
    /// Write the full report, every game included, to this JSON file
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct EndgameArgs {
    #[arg(long, default_value_t = 3)]
    pub min_pieces: usize,
    #[arg(long, default_value_t = 6)]
    pub max_pieces: usize,
}

#[derive(Serialize)]
struct BestMoveOutput {
    strategy: Strategy,
    #[serde(rename = "move")]
    mv: String,
    score: Option<f64>,
    fen_after: String,
}

#[derive(Serialize)]
struct EvalOutput {
    fen: String,
    status: String,
    score: f64,
    breakdown: chess_engine::EvaluationBreakdown,
}

fn parse_fen(fen: &str) -> Result<Game> {
    Game::from_fen(fen).with_context(|| format!("could not load position {fen:?}"))
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn describe(status: GameStatus) -> String {
    match status {
        GameStatus::Ongoing => "ongoing".to_string(),
        GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
        GameStatus::Draw(reason) => format!("draw ({reason})"),
    }
}

/// Run the parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = load_or_default(cli.config.as_deref())
        .with_context(|| format!("could not load search configuration {:?}", cli.config))?;
    let mut rng = make_rng(cli.seed);

    match cli.command {
        Command::BestMove(args) => best_move(args, config, &mut rng),
        Command::Eval(args) => eval(args),
        Command::Match(args) => play_match(args, &config, &mut rng),
        Command::Endgame(args) => {
            let game = random_endgame(&mut rng, args.min_pieces, args.max_pieces)?;
            println!("{}", game.to_fen());
            Ok(())
        }
    }
}

fn best_move(args: BestMoveArgs, mut config: SearchConfig, rng: &mut StdRng) -> Result<()> {
    if let Some(depth) = args.depth {
        config = config.with_limit(args.strategy, depth);
    }
    if let Some(simulations) = args.simulations {
        config.mcts_simulations = simulations;
    }
    config.validate()?;

    let mut game = parse_fen(&args.fen)?;
    let choice = choose_move(&mut game, args.strategy, &config, rng)
        .with_context(|| format!("{} found no move", args.strategy))?;
    game.play(choice.mv)?;
    info!("[AI] {} chose {} (score {:?})", args.strategy, choice.mv, choice.score);

    print_json(&BestMoveOutput {
        strategy: args.strategy,
        mv: choice.mv.to_string(),
        score: choice.score,
        fen_after: game.to_fen(),
    })
}

fn eval(args: EvalArgs) -> Result<()> {
    let game = parse_fen(&args.fen)?;
    print_json(&EvalOutput {
        fen: game.to_fen(),
        status: describe(game.status()),
        score: chess_engine::evaluate_position(&game),
        breakdown: StaticEvaluator.breakdown(&game),
    })
}

fn play_match(args: MatchArgs, config: &SearchConfig, rng: &mut StdRng) -> Result<()> {
    let openings = args
        .fens
        .iter()
        .map(|fen| parse_fen(fen))
        .collect::<Result<Vec<_>>>()?;
    let settings = MatchSettings {
        games: args.games,
        max_plies: args.max_plies,
        min_pieces: args.min_pieces,
        max_pieces: args.max_pieces,
    };

    let report = run_matchup(args.white, args.black, &settings, &openings, config, rng)
        .context("match aborted")?;
    if let Some(path) = &args.output {
        save_json(path, &report).with_context(|| format!("could not write report to {path:?}"))?;
    }
    print_json(&report.summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best_move_flags() {
        let cli = Cli::try_parse_from([
            "xfsearch", "--seed", "7", "best-move", "--strategy", "iddfs", "--depth", "2",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Command::BestMove(args) => {
                assert_eq!(args.strategy, Strategy::IterativeDeepening);
                assert_eq!(args.depth, Some(2));
                assert_eq!(args.fen, START_FEN);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_match_flags() {
        let cli = Cli::try_parse_from([
            "xfsearch", "match", "--white", "mcts", "--games", "3", "--fen", START_FEN, "--fen", START_FEN, "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Match(args) => {
                assert_eq!(args.white, Strategy::Mcts);
                assert_eq!(args.black, Strategy::Random);
                assert_eq!(args.games, 3);
                assert_eq!(args.fens.len(), 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(Cli::try_parse_from(["xfsearch", "best-move", "--strategy", "negamax"]).is_err());
    }

    #[test]
    fn test_best_move_runs_end_to_end() {
        let cli = Cli::try_parse_from([
            "xfsearch",
            "--seed",
            "1",
            "best-move",
            "--fen",
            "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
            "--depth",
            "2",
        ])
        .unwrap();
        assert!(run(cli).is_ok());
    }
}
