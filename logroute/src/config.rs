//! Route configuration.
//!
//! Handles loading the redirect level and extra skip from environment
//! variables with sensible defaults.

use crate::error::ConfigError;
use crate::models::Level;
use serde::{Deserialize, Serialize};

/// Environment variable holding the redirect level.
pub const LEVEL_ENV: &str = "LOGROUTE_LEVEL";

/// Environment variable holding the extra caller skip.
pub const EXTRA_SKIP_ENV: &str = "LOGROUTE_EXTRA_SKIP";

/// Settings for a redirect.
///
/// Configuration values can be set via environment variables:
/// - `LOGROUTE_LEVEL`: level of redirected entries (default: "info")
/// - `LOGROUTE_EXTRA_SKIP`: helper layers between call site and print (default: 0)
///
/// # Example
///
/// ```
/// use logroute::{config::RouteConfig, models::Level};
///
/// let config: RouteConfig = serde_json::from_str(r#"{"level": "warn"}"#).unwrap();
/// assert_eq!(config.level, Level::Warn);
/// assert_eq!(config.extra_skip, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Level of every redirected entry.
    pub level: Level,
    /// Frames to skip beyond the calibrated depth.
    pub extra_skip: usize,
}

impl RouteConfig {
    /// Creates a configuration with no extra skip.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            extra_skip: 0,
        }
    }

    /// Sets the extra skip.
    #[must_use]
    pub fn with_extra_skip(mut self, extra_skip: usize) -> Self {
        self.extra_skip = extra_skip;
        self
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `LOGROUTE_LEVEL` is set but is not a known level
    /// - `LOGROUTE_EXTRA_SKIP` is set but is not a non-negative integer
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let level = lookup(LEVEL_ENV)
            .map(|l| l.parse::<Level>())
            .transpose()?
            .unwrap_or_default();

        let extra_skip = lookup(EXTRA_SKIP_ENV)
            .map(|s| {
                s.trim()
                    .parse::<usize>()
                    .map_err(|source| ConfigError::InvalidSkip { value: s, source })
            })
            .transpose()?
            .unwrap_or(0);

        Ok(Self { level, extra_skip })
    }
}
