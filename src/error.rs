//! Error types for rating prediction
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the library. Every failure is a caller precondition
//! violation surfaced immediately; nothing is retried or recovered
//! internally.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific prediction scenarios
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("history sequences have mismatched lengths: own={own}, outcomes={outcomes}, first_team={first_team}, second_team={second_team}")]
    ShapeMismatch {
        own: usize,
        outcomes: usize,
        first_team: usize,
        second_team: usize,
    },

    #[error("insufficient history: got {observed} observation(s), need at least 2")]
    InsufficientHistory { observed: usize },

    #[error("degenerate win probability at observation {index}: outcome score equals expected score")]
    DegenerateProbability { index: usize },

    #[error("configuration error: {message}")]
    Configuration { message: String },
}
