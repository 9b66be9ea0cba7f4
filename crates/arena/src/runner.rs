//! Engine-vs-baseline matches.

use crate::games::ArenaGame;
use crate::tally::{EngineResult, GameRecord, MatchTally};
use playout_core::{Player, Result};
use playout_mcts::{Controller, Mcts, MctsConfig, RandomController};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};

/// Seed for game `index` of a match. Games are spaced apart so that the
/// engine and baseline streams of neighbouring games never share a seed.
pub fn game_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add((index as u64).wrapping_mul(1000))
}

/// Play one game of the engine against the random baseline.
pub fn play_game<G: ArenaGame>(
    game: &G,
    config: &MctsConfig,
    engine_seat: Player,
    index: usize,
    seed: u64,
) -> Result<GameRecord> {
    let mut engine: Mcts<G, ChaCha8Rng> =
        Mcts::new(config.clone(), ChaCha8Rng::seed_from_u64(seed));
    let mut baseline = RandomController::new(ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)));

    let mut state = game.initial_state();
    let mut moves = 0;
    let mut engine_iterations = 0;

    while !game.is_terminal(&state) {
        let mv = if game.next_player(&state) == engine_seat {
            let result = engine.search(game, &state)?;
            engine_iterations += result.iterations;
            result.best_move
        } else {
            Controller::<G>::next_move(&mut baseline, game, &state)?
        };

        game.apply(&mut state, mv);
        moves += 1;
    }

    let outcome = game.outcome(&state);
    debug!(game = G::NAME, index, seed, moves, %outcome, "Arena game finished");

    Ok(GameRecord {
        index,
        seed,
        result: EngineResult::from_outcome(outcome, engine_seat),
        moves,
        engine_iterations,
    })
}

/// Play `games` independent games in parallel and tally them in game order.
pub fn run_match<G: ArenaGame>(
    game: &G,
    config: &MctsConfig,
    engine_seat: Player,
    games: usize,
    seed: u64,
) -> Result<MatchTally> {
    config.validate()?;

    info!(
        game = G::NAME,
        games,
        engine_seat = %engine_seat,
        budget = ?config.budget,
        "Starting match"
    );

    let records: Vec<GameRecord> = (0..games)
        .into_par_iter()
        .map(|i| play_game(game, config, engine_seat, i, game_seed(seed, i)))
        .collect::<Result<_>>()?;

    let mut tally = MatchTally::new(G::NAME, engine_seat);
    for record in records {
        tally.record(record);

        let played = tally.games;
        if played % 10 == 0 || played == games {
            println!(
                "Game {}/{}: engine {} - {} baseline ({} draws)",
                played, games, tally.wins, tally.losses, tally.draws
            );
        }
    }

    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use playout_mcts::games::{ConnectFour, TicTacToe};

    #[test]
    fn test_game_seeds_are_spaced() {
        assert_eq!(game_seed(42, 0), 42);
        assert_eq!(game_seed(42, 3), 3042);
        assert_eq!(game_seed(u64::MAX, 1), 999);
    }

    #[test]
    fn test_play_game_is_reproducible() {
        let config = MctsConfig::with_iterations(50);
        let a = play_game(&TicTacToe, &config, Player::First, 0, 7).unwrap();
        let b = play_game(&TicTacToe, &config, Player::First, 0, 7).unwrap();

        assert_eq!(a.result, b.result);
        assert_eq!(a.moves, b.moves);
        assert!(a.moves >= 5 && a.moves <= 9);
        // The engine moves first, so it moves on every odd ply.
        assert_eq!(a.engine_iterations, 50 * ((a.moves + 1) / 2));
    }

    #[test]
    fn test_run_match_tallies_every_game() {
        let config = MctsConfig::with_iterations(30);
        let tally = run_match(&ConnectFour, &config, Player::Second, 4, 1).unwrap();

        assert_eq!(tally.games, 4);
        assert_eq!(tally.wins + tally.losses + tally.draws, 4);
        let indices: Vec<usize> = tally.records.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_run_match_rejects_bad_config() {
        let config = MctsConfig {
            exploration_constant: f64::NAN,
            ..MctsConfig::with_iterations(10)
        };
        assert!(run_match(&TicTacToe, &config, Player::First, 2, 0).is_err());
    }
}
