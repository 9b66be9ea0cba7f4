//! Matches and tree traces for the playout MCTS engine.
//!
//! `play` seats the engine against a uniformly random baseline for a number
//! of games and reports the tally. `trace` replays a move list and prints the
//! search tree around the resulting position.

mod games;
mod runner;
mod tally;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use games::{ArenaGame, GameKind};
use playout_core::{Game, PlayoutError, Player};
use playout_mcts::config::{DEFAULT_EXPLORATION_CONSTANT, DEFAULT_MAX_ROLLOUT_STEPS};
use playout_mcts::games::{ConnectFour, TicTacToe};
use playout_mcts::{Mcts, MctsConfig, NodeId, SearchBudget, Tree};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt::{Debug, Display};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Playout MCTS arena.
#[derive(Parser, Debug)]
#[command(name = "playout-arena")]
#[command(about = "Play the MCTS engine against a random baseline and inspect its search tree")]
struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play the engine against the random baseline.
    Play {
        #[arg(long, value_enum, default_value = "tic-tac-toe")]
        game: GameKind,

        /// Number of games to play.
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        #[command(flatten)]
        search: SearchArgs,

        /// Which seat the engine takes.
        #[arg(long, value_enum, default_value = "first")]
        engine_seat: Seat,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Write the final tally as JSON to this path.
        #[arg(long)]
        summary: Option<PathBuf>,
    },

    /// Replay moves and print the search tree around the resulting position.
    Trace {
        #[arg(long, value_enum, default_value = "tic-tac-toe")]
        game: GameKind,

        /// Comma-separated moves to play from the initial position.
        #[arg(long, value_delimiter = ',')]
        moves: Vec<String>,

        /// Search cycles to run before printing. Without it only the root is shown.
        #[arg(long)]
        iterations: Option<usize>,

        /// Maximum moves in a random playout before it is scored as a draw.
        #[arg(long, default_value_t = DEFAULT_MAX_ROLLOUT_STEPS)]
        max_rollout_steps: usize,

        /// UCB1 exploration constant.
        #[arg(long, default_value_t = DEFAULT_EXPLORATION_CONSTANT)]
        exploration: f64,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

/// Search knobs shared by the engine's seat.
#[derive(clap::Args, Debug)]
struct SearchArgs {
    /// Wall-clock budget per engine move, in milliseconds.
    #[arg(long, conflicts_with = "iterations")]
    time_ms: Option<u64>,

    /// Fixed number of search cycles per engine move.
    #[arg(long)]
    iterations: Option<usize>,

    /// Maximum moves in a random playout before it is scored as a draw.
    #[arg(long, default_value_t = DEFAULT_MAX_ROLLOUT_STEPS)]
    max_rollout_steps: usize,

    /// UCB1 exploration constant.
    #[arg(long, default_value_t = DEFAULT_EXPLORATION_CONSTANT)]
    exploration: f64,
}

impl SearchArgs {
    fn to_config(&self) -> MctsConfig {
        let mut config = MctsConfig {
            max_rollout_steps: self.max_rollout_steps,
            exploration_constant: self.exploration,
            ..Default::default()
        };
        if let Some(ms) = self.time_ms {
            config.budget = SearchBudget::Time(Duration::from_millis(ms));
        }
        if let Some(iterations) = self.iterations {
            config.budget = SearchBudget::Iterations(iterations);
        }
        config
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Seat {
    First,
    Second,
}

impl From<Seat> for Player {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::First => Player::First,
            Seat::Second => Player::Second,
        }
    }
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Run the play command for one game type.
fn cmd_play<G: ArenaGame>(
    game: &G,
    config: &MctsConfig,
    engine_seat: Player,
    games: usize,
    seed: u64,
    summary: Option<&Path>,
) -> Result<()> {
    println!(
        "Playing {} games of {}: engine ({}) vs random baseline",
        games,
        G::NAME,
        engine_seat
    );
    println!("Seed: {}", seed);

    let start = Instant::now();
    let tally = runner::run_match(game, config, engine_seat, games, seed)?;
    let elapsed = start.elapsed();

    println!("\nCompleted in {:.2}s", elapsed.as_secs_f64());
    print!("{}", tally);

    if let Some(path) = summary {
        let json = serde_json::to_string_pretty(&tally).context("Failed to serialize tally")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write summary to {:?}", path))?;
        info!(path = %path.display(), "Summary written");
    }

    Ok(())
}

/// Apply `tokens` in order from the initial position, rejecting any move that
/// does not parse or is not legal where it is played.
fn replay<G: ArenaGame>(game: &G, tokens: &[String]) -> playout_core::Result<G::State> {
    let mut state = game.initial_state();
    for token in tokens {
        let mv = game
            .parse_move(token)
            .filter(|mv| !game.is_terminal(&state) && game.legal_moves(&state).contains(mv))
            .ok_or_else(|| PlayoutError::IllegalMove(token.trim().to_string()))?;
        game.apply(&mut state, mv);
    }
    Ok(state)
}

/// Render the root trace followed by each child's trace.
fn render_traces<S, M>(tree: &Tree<S, M>) -> String
where
    S: Clone + Display,
    M: Copy + Eq + Debug + Display,
{
    let root = tree.root();
    let mut out = tree.trace(NodeId::ROOT).to_string();
    for &child in root.children() {
        out.push('\n');
        out.push_str(&tree.trace(child).to_string());
    }
    out
}

/// Run the trace command for one game type.
fn cmd_trace<G>(
    game: &G,
    tokens: &[String],
    iterations: Option<usize>,
    config: MctsConfig,
    seed: u64,
) -> Result<String>
where
    G: ArenaGame,
    G::State: Display,
    G::Move: Display,
{
    let state = replay(game, tokens)?;

    let Some(iterations) = iterations else {
        return Ok(render_traces(&Tree::new(game, state)));
    };

    let config = MctsConfig {
        budget: SearchBudget::Iterations(iterations),
        ..config
    };
    let mut mcts: Mcts<G, ChaCha8Rng> = Mcts::new(config, ChaCha8Rng::seed_from_u64(seed));
    let result = mcts.search(game, &state)?;
    info!(
        best_move = %result.best_move,
        win_rate = result.win_rate,
        iterations = result.iterations,
        "Search finished"
    );

    let tree = mcts
        .tree()
        .context("search finished without keeping its tree")?;
    Ok(render_traces(tree))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Play {
            game,
            games,
            search,
            engine_seat,
            seed,
            summary,
        } => {
            let config = search.to_config();
            let seat = Player::from(engine_seat);
            match game {
                GameKind::TicTacToe => {
                    cmd_play(&TicTacToe, &config, seat, games, seed, summary.as_deref())
                }
                GameKind::ConnectFour => {
                    cmd_play(&ConnectFour, &config, seat, games, seed, summary.as_deref())
                }
            }
        }

        Commands::Trace {
            game,
            moves,
            iterations,
            max_rollout_steps,
            exploration,
            seed,
        } => {
            let config = MctsConfig {
                max_rollout_steps,
                exploration_constant: exploration,
                ..Default::default()
            };
            let output = match game {
                GameKind::TicTacToe => cmd_trace(&TicTacToe, &moves, iterations, config, seed)?,
                GameKind::ConnectFour => {
                    cmd_trace(&ConnectFour, &moves, iterations, config, seed)?
                }
            };
            print!("{}", output);
            Ok(())
        }
    }
}
