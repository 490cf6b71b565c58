//! Prediction assembly
//!
//! Builds the win/lose/most-likely rating triple from either a known win
//! probability or a pair of team ratings.

use crate::config::EloConfig;
use crate::error::Result;
use crate::rating::curve::{rating_after_loss, rating_after_win, rating_delta, win_probability};
use crate::types::{KFactor, PredictionResult, Rating, WinProbability};

/// Stateless rating predictor over a validated configuration
#[derive(Debug, Clone, Copy)]
pub struct EloPredictor {
    config: EloConfig,
}

impl EloPredictor {
    /// Create a new predictor
    pub fn new(config: EloConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// K-factor the predictor projects with
    pub fn k_factor(&self) -> KFactor {
        self.config.k_factor
    }

    /// Project ratings for both outcomes given a known win probability
    ///
    /// `p` is the probability that the player's side wins; values outside
    /// [0, 1] are the caller's responsibility. The `prediction` field holds
    /// the projection under the more probable outcome, or the current
    /// rating untouched when `p` is exactly 0.5.
    pub fn predict_from_probability(&self, own: Rating, p: WinProbability) -> PredictionResult {
        let win = rating_after_win(own, p, self.config.k_factor);
        let lose = rating_after_loss(own, p, self.config.k_factor);

        let prediction = if p > 0.5 {
            win
        } else if p < 0.5 {
            lose
        } else {
            own
        };

        PredictionResult {
            win,
            lose,
            prediction,
        }
    }

    /// Project ratings for both outcomes given the two team ratings
    ///
    /// The win probability is derived from the rating difference between
    /// the player's team and the opposing team, then merged exactly as in
    /// [`predict_from_probability`](Self::predict_from_probability).
    pub fn predict_from_teams(
        &self,
        own: Rating,
        first_team: Rating,
        second_team: Rating,
    ) -> PredictionResult {
        let delta = rating_delta(first_team, second_team);
        self.predict_from_probability(own, win_probability(delta))
    }

    /// Get current configuration as JSON
    pub fn config(&self) -> serde_json::Value {
        serde_json::to_value(self.config).unwrap_or(serde_json::Value::Null)
    }

    /// Update configuration from JSON
    pub fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        let new_config: EloConfig = serde_json::from_value(config).map_err(|e| {
            crate::error::PredictionError::Configuration {
                message: format!("Invalid predictor configuration: {}", e),
            }
        })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }
}

impl Default for EloPredictor {
    fn default() -> Self {
        Self {
            config: EloConfig::default(),
        }
    }
}
