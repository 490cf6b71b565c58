//! Predictor configuration
//!
//! Defaults, presets, and validation for the K-factor used when projecting
//! ratings.

use crate::error::{PredictionError, Result};
use crate::types::KFactor;
use serde::{Deserialize, Serialize};

/// K-factor applied when the caller does not override it
pub const DEFAULT_K_FACTOR: KFactor = 45;

/// Configuration for rating projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EloConfig {
    /// Magnitude of rating adjustment per match
    pub k_factor: KFactor,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
        }
    }
}

impl EloConfig {
    /// Create a configuration with an explicit K-factor
    pub fn with_k_factor(k_factor: KFactor) -> Self {
        Self { k_factor }
    }

    /// Create conservative configuration (smaller rating swings)
    pub fn conservative() -> Self {
        Self { k_factor: 24 }
    }

    /// Create aggressive configuration (larger rating swings)
    pub fn aggressive() -> Self {
        Self { k_factor: 64 }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.k_factor <= 0 {
            return Err(PredictionError::Configuration {
                message: "K-factor must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
