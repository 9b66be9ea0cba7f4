//! MCTS configuration parameters.
//!
//! These parameters control how long a search runs and how it explores.

use playout_core::{PlayoutError, Result};
use std::time::Duration;

/// Default wall-clock budget per move.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(1);

/// Default cap on moves played in one rollout.
pub const DEFAULT_MAX_ROLLOUT_STEPS: usize = 1000;

/// Classic UCB1 exploration constant.
pub const DEFAULT_EXPLORATION_CONSTANT: f64 = 1.0;

/// When a search stops issuing new cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchBudget {
    /// Run cycles until this much wall-clock time has elapsed.
    ///
    /// Checked between cycles only, so a search may overrun by one cycle.
    Time(Duration),

    /// Run exactly this many cycles. Used for reproducible searches.
    Iterations(usize),
}

/// MCTS configuration parameters.
#[derive(Clone, Debug)]
pub struct MctsConfig {
    /// Budget for one search.
    pub budget: SearchBudget,

    /// Maximum moves in a random playout before it is scored as a draw.
    pub max_rollout_steps: usize,

    /// Exploration constant `C` in the UCB1 formula.
    /// Higher values favor rarely-visited children.
    pub exploration_constant: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            budget: SearchBudget::Time(DEFAULT_TIME_BUDGET),
            max_rollout_steps: DEFAULT_MAX_ROLLOUT_STEPS,
            exploration_constant: DEFAULT_EXPLORATION_CONSTANT,
        }
    }
}

impl MctsConfig {
    /// Create a config that searches for the given wall-clock time.
    pub fn with_time_budget(budget: Duration) -> Self {
        Self {
            budget: SearchBudget::Time(budget),
            ..Default::default()
        }
    }

    /// Create a config that runs a fixed number of cycles.
    pub fn with_iterations(iterations: usize) -> Self {
        Self {
            budget: SearchBudget::Iterations(iterations),
            ..Default::default()
        }
    }

    /// Check that every parameter is usable.
    ///
    /// # Errors
    /// Returns `PlayoutError::InvalidConfig` for a zero budget, a zero rollout
    /// cap, or a negative / non-finite exploration constant.
    pub fn validate(&self) -> Result<()> {
        match self.budget {
            SearchBudget::Time(budget) if budget.is_zero() => {
                return Err(PlayoutError::InvalidConfig(
                    "time budget must be positive".to_string(),
                ));
            }
            SearchBudget::Iterations(0) => {
                return Err(PlayoutError::InvalidConfig(
                    "iteration budget must be positive".to_string(),
                ));
            }
            _ => {}
        }

        if self.max_rollout_steps == 0 {
            return Err(PlayoutError::InvalidConfig(
                "max_rollout_steps must be positive".to_string(),
            ));
        }

        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(PlayoutError::InvalidConfig(format!(
                "exploration constant {} must be finite and non-negative",
                self.exploration_constant
            )));
        }

        Ok(())
    }
}
