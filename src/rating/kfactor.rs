//! Implied K-factor estimation
//!
//! Back-solves the K constant from a sequence of observed rating
//! transitions, assuming each transition followed the standard update
//! formula `next = own + k * (outcome - p)`.

use crate::error::{PredictionError, Result};
use crate::rating::curve::{rating_delta, round_half_even, win_probability};
use crate::types::{KFactorEstimate, MatchOutcome, Rating};
use tracing::debug;

/// Estimate the K-factor implied by a match history
///
/// The four slices are index-aligned: observation `i` holds the player's
/// rating going into match `i`, its outcome, and the two team ratings that
/// set the expected score. Each adjacent pair of observations yields one
/// implied K value.
///
/// The estimate reports both the rounded mean over all transitions
/// (`average`) and the rounded most recent transition alone (`actual`):
/// the latest match is the better witness of the K currently in force,
/// while the mean smooths noise. Callers choose which to trust.
///
/// # Errors
///
/// - [`PredictionError::ShapeMismatch`] if the slices differ in length
/// - [`PredictionError::InsufficientHistory`] with fewer than 2 observations
/// - [`PredictionError::DegenerateProbability`] when an outcome's score
///   equals its expected score exactly, which would divide by zero
pub fn implied_k_factor(
    own_ratings: &[Rating],
    outcomes: &[MatchOutcome],
    first_team_ratings: &[Rating],
    second_team_ratings: &[Rating],
) -> Result<KFactorEstimate> {
    if own_ratings.len() != outcomes.len()
        || own_ratings.len() != first_team_ratings.len()
        || own_ratings.len() != second_team_ratings.len()
    {
        return Err(PredictionError::ShapeMismatch {
            own: own_ratings.len(),
            outcomes: outcomes.len(),
            first_team: first_team_ratings.len(),
            second_team: second_team_ratings.len(),
        }
        .into());
    }

    if own_ratings.len() < 2 {
        return Err(PredictionError::InsufficientHistory {
            observed: own_ratings.len(),
        }
        .into());
    }

    let mut implied = Vec::with_capacity(own_ratings.len() - 1);
    for i in 0..own_ratings.len() - 1 {
        let delta = rating_delta(first_team_ratings[i], second_team_ratings[i]);
        let p = win_probability(delta);

        let denominator = outcomes[i].score() - p;
        if denominator == 0.0 {
            return Err(PredictionError::DegenerateProbability { index: i }.into());
        }

        let shift = f64::from(own_ratings[i + 1] - own_ratings[i]);
        implied.push(shift / denominator);
    }

    let mean = implied.iter().sum::<f64>() / implied.len() as f64;
    let last = implied[implied.len() - 1];
    debug!(
        "estimated K over {} transition(s): average {:.2}, last {:.2}",
        implied.len(),
        mean,
        last
    );

    Ok(KFactorEstimate {
        average: round_half_even(mean),
        actual: round_half_even(last),
    })
}
