//! Common value types used throughout the prediction library

use serde::{Deserialize, Serialize};

/// A player's or team's skill score
pub type Rating = i32;

/// Signed difference between two ratings
pub type RatingDelta = i32;

/// Logistic expectation that a side wins, in [0.0, 1.0]
pub type WinProbability = f64;

/// Sensitivity constant controlling rating adjustment per match
pub type KFactor = i32;

/// Result of a single match from the tracked player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Loss,
}

impl MatchOutcome {
    /// Actual score of the outcome: 1.0 for a win, 0.0 for a loss
    pub fn score(&self) -> f64 {
        match self {
            MatchOutcome::Win => 1.0,
            MatchOutcome::Loss => 0.0,
        }
    }
}

impl From<bool> for MatchOutcome {
    fn from(won: bool) -> Self {
        if won {
            MatchOutcome::Win
        } else {
            MatchOutcome::Loss
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Win => write!(f, "Win"),
            MatchOutcome::Loss => write!(f, "Loss"),
        }
    }
}

/// Projected ratings under each hypothetical outcome of the next match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Projected rating if the player wins
    pub win: Rating,
    /// Projected rating if the player loses
    pub lose: Rating,
    /// Projection under the more probable outcome; the current rating
    /// unchanged when both outcomes are exactly equally likely
    pub prediction: Rating,
}

/// K-factor back-solved from a match history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KFactorEstimate {
    /// Rounded mean over all observed transitions
    pub average: KFactor,
    /// Rounded value of the most recent transition alone
    pub actual: KFactor,
}
