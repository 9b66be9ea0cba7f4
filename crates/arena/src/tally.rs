//! Match results from the engine's point of view.

use playout_core::{Outcome, Player};
use serde::{Serialize, Serializer};
use std::fmt;

/// How one game ended for the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineResult {
    Win,
    Loss,
    Draw,
}

impl EngineResult {
    /// Judge a finished game's outcome for the engine seated as `engine`.
    ///
    /// An undecided outcome only reaches here from a game cut short, and
    /// counts as a draw.
    pub fn from_outcome(outcome: Outcome, engine: Player) -> Self {
        match outcome.winner() {
            Some(winner) if winner == engine => EngineResult::Win,
            Some(_) => EngineResult::Loss,
            None => EngineResult::Draw,
        }
    }
}

/// A single finished arena game.
#[derive(Clone, Debug, Serialize)]
pub struct GameRecord {
    pub index: usize,
    pub seed: u64,
    pub result: EngineResult,
    /// Plies played by both sides.
    pub moves: usize,
    /// Search cycles the engine ran over the whole game.
    pub engine_iterations: usize,
}

/// Aggregate of a match, written out with `--summary`.
#[derive(Clone, Debug, Serialize)]
pub struct MatchTally {
    pub game: &'static str,
    /// Serialized as the player index, 0 moving first.
    #[serde(serialize_with = "serialize_player")]
    pub engine_seat: Player,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub records: Vec<GameRecord>,
}

fn serialize_player<S: Serializer>(player: &Player, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(player.index() as u64)
}

impl MatchTally {
    pub fn new(game: &'static str, engine_seat: Player) -> Self {
        Self {
            game,
            engine_seat,
            games: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            records: Vec::new(),
        }
    }

    pub fn record(&mut self, record: GameRecord) {
        self.games += 1;
        match record.result {
            EngineResult::Win => self.wins += 1,
            EngineResult::Loss => self.losses += 1,
            EngineResult::Draw => self.draws += 1,
        }
        self.records.push(record);
    }

    /// Share of games won or drawn. Zero for an empty match.
    pub fn not_lost_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            (self.wins + self.draws) as f64 / self.games as f64
        }
    }

    fn percent(&self, count: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 / self.games as f64 * 100.0
        }
    }
}

impl fmt::Display for MatchTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================================================")?;
        writeln!(f, "FINAL RESULTS ({}, engine as {})", self.game, self.engine_seat)?;
        writeln!(f, "================================================")?;
        writeln!(f, "Engine wins:   {} ({:.1}%)", self.wins, self.percent(self.wins))?;
        writeln!(f, "Engine losses: {} ({:.1}%)", self.losses, self.percent(self.losses))?;
        writeln!(f, "Draws:         {} ({:.1}%)", self.draws, self.percent(self.draws))?;
        writeln!(f, "------------------------------------------------")?;
        writeln!(f, "Not lost: {:.1}%", self.not_lost_rate() * 100.0)
    }
}
