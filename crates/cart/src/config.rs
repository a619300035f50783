//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_MAX_LINE_QUANTITY` - Hard cap on a single line's quantity input (default: 99)
//! - `CART_LOW_STOCK_THRESHOLD` - Stock at or below which availability counts as low (default: 5)

use thiserror::Error;

use prickly_pear_core::StockLevel;

use crate::reconciler::MAX_LINE_QUANTITY;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart behavior configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartConfig {
    /// Hard cap on a single line's quantity input.
    pub max_line_quantity: u32,
    /// Stock at or below which availability counts as low.
    pub low_stock_threshold: u32,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            max_line_quantity: MAX_LINE_QUANTITY,
            low_stock_threshold: StockLevel::LOW_STOCK_THRESHOLD,
        }
    }
}

impl CartConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but is not
    /// a positive integer (the line cap must be at least 1).
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = read_u32("CART_MAX_LINE_QUANTITY")? {
            if value == 0 {
                return Err(ConfigError::InvalidEnvVar(
                    "CART_MAX_LINE_QUANTITY".to_owned(),
                    "must be at least 1".to_owned(),
                ));
            }
            config.max_line_quantity = value;
        }

        if let Some(value) = read_u32("CART_LOW_STOCK_THRESHOLD")? {
            config.low_stock_threshold = value;
        }

        Ok(config)
    }
}

/// Read an optional u32 environment variable.
fn read_u32(name: &str) -> Result<Option<u32>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<u32>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar(name.to_owned(), e.to_string())),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::InvalidEnvVar(name.to_owned(), e.to_string())),
    }
}
