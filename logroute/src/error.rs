//! Error types.

use thiserror::Error;

/// Errors returned by a structured backend [`Core`](crate::structured::Core).
///
/// The redirecting sink never passes these on to simple-logger callers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Writing to the underlying output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The entry could not be encoded.
    #[error("Failed to serialize entry: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to acquire a lock held by the core.
    #[error("Failed to acquire lock on core")]
    LockPoisoned,
}

/// Errors raised while measuring the caller depth.
#[derive(Debug, Error)]
pub enum CalibrationError {
    /// The stack walk never reached the calibration entry function.
    #[error("calibration marker `{marker}` not found after walking {frames_walked} frames")]
    MarkerNotFound {
        /// Path of the function the walk was looking for.
        marker: &'static str,
        /// Number of frames inspected before giving up.
        frames_walked: usize,
    },

    /// The probe write hook was never invoked by the simple logger.
    #[error("calibration probe was never written to")]
    ProbeNotInvoked,
}

/// Errors raised while loading route configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The level name is not one of the known levels.
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// The extra skip is not a non-negative integer.
    #[error("Invalid extra skip {value:?}: {source}")]
    InvalidSkip {
        /// The raw value.
        value: String,
        /// Parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
}
