//! Elo curve primitives
//!
//! The logistic win-probability curve and the post-match rating projections
//! it feeds. Everything here is a total pure function over caller-supplied
//! values; ratings are not bounds-checked.

use crate::types::{KFactor, Rating, RatingDelta, WinProbability};

/// Logistic base of the Elo curve
const LOGISTIC_BASE: f64 = 10.0;

/// Rating difference at which win odds reach `LOGISTIC_BASE` to one
const RATING_SCALE: f64 = 400.0;

/// Signed difference between two ratings; positive means `first` is rated
/// higher
pub fn rating_delta(first: Rating, second: Rating) -> RatingDelta {
    first - second
}

/// Expected win probability for the side ahead by `delta` rating points
///
/// Standard Elo curve: a 400-point advantage yields 10:1 win odds.
/// `win_probability(0)` is exactly 0.5, and the result stays strictly
/// inside (0, 1) until the exponent underflows f64 at extreme deltas.
pub fn win_probability(delta: RatingDelta) -> WinProbability {
    1.0 / (1.0 + LOGISTIC_BASE.powf(-f64::from(delta) / RATING_SCALE))
}

/// Projected rating after a win: `own + k * (1 - p)`, rounded
pub fn rating_after_win(own: Rating, p: WinProbability, k: KFactor) -> Rating {
    round_half_even(f64::from(own) + f64::from(k) * (1.0 - p))
}

/// Projected rating after a loss: `own + k * (0 - p)`, rounded
pub fn rating_after_loss(own: Rating, p: WinProbability, k: KFactor) -> Rating {
    round_half_even(f64::from(own) + f64::from(k) * (0.0 - p))
}

/// Single rounding policy for every float the library turns into an
/// integer: round half to even, so x.5 ties resolve the same way on every
/// platform
pub(crate) fn round_half_even(value: f64) -> i32 {
    value.round_ties_even() as i32
}
