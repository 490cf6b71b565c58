//! Elo rating prediction
//!
//! This module provides the logistic win-probability curve, post-match
//! rating projection, and implied K-factor estimation.

pub mod curve;
pub mod kfactor;
pub mod predictor;

// Re-export commonly used operations
pub use curve::{rating_after_loss, rating_after_win, rating_delta, win_probability};
pub use kfactor::implied_k_factor;
pub use predictor::EloPredictor;
