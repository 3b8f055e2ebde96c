//! Mock auth flow configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Auth flow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Simulated network latency for login/signup, in milliseconds.
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
}

impl AuthConfig {
    /// The latency as a [`Duration`].
    #[must_use]
    pub const fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.simulated_latency_ms > 30_000 {
            return Err(ConfigError::ValidationError(format!(
                "auth.simulated_latency_ms too large: {}",
                self.simulated_latency_ms
            )));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_simulated_latency_ms(),
        }
    }
}

const fn default_simulated_latency_ms() -> u64 {
    1000
}
