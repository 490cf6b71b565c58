//! Elo Predictor - rating projection and K-factor estimation
//!
//! This crate provides the stateless computational core behind a match
//! prediction frontend: logistic win probabilities, projected ratings for
//! either outcome of a match, and back-solving the K-factor implied by a
//! player's historical rating transitions.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types
pub use error::{PredictionError, Result};
pub use types::*;

// Re-export key components
pub use config::{EloConfig, DEFAULT_K_FACTOR};
pub use rating::{
    implied_k_factor, rating_after_loss, rating_after_win, rating_delta, win_probability,
    EloPredictor,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
