//! Market and strike-grid configuration.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Market configuration: the underlying and its strike grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Underlying symbol.
    #[serde(default = "default_underlying")]
    pub underlying: String,
    /// Spacing between adjacent listed strikes.
    #[serde(default = "default_strike_interval")]
    pub strike_interval: i64,
    /// Contracts per lot; monetary metrics scale by this.
    #[serde(default = "default_lot_size")]
    pub lot_size: u32,
}

impl MarketConfig {
    /// Validate the grid parameters.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.strike_interval <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "market.strike_interval must be positive, got {}",
                self.strike_interval
            )));
        }
        if self.lot_size == 0 {
            return Err(ConfigError::ValidationError(
                "market.lot_size must be at least 1".to_string(),
            ));
        }
        if self.underlying.is_empty() {
            return Err(ConfigError::ValidationError(
                "market.underlying must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            underlying: default_underlying(),
            strike_interval: default_strike_interval(),
            lot_size: default_lot_size(),
        }
    }
}

fn default_underlying() -> String {
    "NIFTY".to_string()
}

const fn default_strike_interval() -> i64 {
    50
}

const fn default_lot_size() -> u32 {
    25
}
