//! Logroute
//!
//! Redirects a simple line logger into a structured, leveled backend while
//! keeping caller locations pointed at the code that called print, not at
//! the redirection shim.
//!
//! The number of stack frames between a print call and the logger's output
//! `write` is an internal detail of the simple logger, so it is measured at
//! setup time by [`calibrate`](calibrate::calibrate) instead of being
//! hardcoded.
//!
//! # Modules
//!
//! - [`stdlog`] - The simple line logger and its process-wide default instance
//! - [`structured`] - Structured cores and loggers
//! - [`route`] - Setup operations
//! - [`sink`] - The redirecting sink installed by the setup operations
//! - [`calibrate`] - Caller depth calibration
//! - [`caller`] - Stack introspection
//! - [`models`] - Levels, entries, caller locations and fields
//! - [`config`] - Route configuration from the environment
//!
//! # Example
//!
//! ```
//! use logroute::models::Level;
//! use logroute::stdlog::{Flags, Logger};
//! use logroute::structured::{observer, Logger as StructuredLogger};
//!
//! let (core, logs) = observer::new();
//! let logger = StructuredLogger::new(core).sugar().with("service", "billing");
//! let legacy = Logger::new(std::io::stderr(), "", Flags::STD);
//!
//! logroute::to_sugared(&logger, Level::Warn, &[&legacy]);
//! legacy.print("many happy returns from the logger\n");
//!
//! let entry = &logs.all()[0].entry;
//! assert_eq!(entry.level, Level::Warn);
//! assert_eq!(entry.message, "many happy returns from the logger");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calibrate;
pub mod caller;
pub mod config;
pub mod error;
pub mod models;
pub mod route;
pub mod sink;
pub mod stdlog;
pub mod structured;

pub use calibrate::{calibrate, try_calibrate};
pub use config::RouteConfig;
pub use error::{CalibrationError, ConfigError, CoreError};
pub use route::{
    to_logger, to_logger_with_config, to_logger_with_skip, to_sugared, to_sugared_with_skip,
};
pub use sink::RedirectingSink;

/// Re-export common dependencies for convenience.
pub use chrono;
pub use serde_json;
