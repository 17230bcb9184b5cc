//! Structured, leveled logging backend.
//!
//! A [`Core`] accepts one [`Entry`] plus a list of [`Field`]s per call. The
//! plain [`Logger`] and the loosely typed [`SugaredLogger`] wrap a core and
//! carry context fields that are attached to every entry written through
//! them.
//!
//! Available cores:
//!
//! - [`TracingCore`] - forwards entries as `tracing` events
//! - [`JsonCore`] - writes one JSON object per line
//! - [`observer::ObserverCore`] - records entries in memory for assertions

pub mod json;
pub mod observer;
pub mod tracing_core;

pub use json::JsonCore;
pub use tracing_core::TracingCore;

use crate::error::CoreError;
use crate::models::{CallerLocation, Entry, Field, Level};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Destination for structured entries.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait Core: Send + Sync {
    /// Writes one entry with the given fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry could not be encoded or delivered.
    fn write(&self, entry: &Entry, fields: &[Field]) -> Result<(), CoreError>;
}

/// A core that prepends fixed context fields to every write.
struct ContextCore {
    inner: Arc<dyn Core>,
    context: Vec<Field>,
}

impl Core for ContextCore {
    fn write(&self, entry: &Entry, fields: &[Field]) -> Result<(), CoreError> {
        if fields.is_empty() {
            return self.inner.write(entry, &self.context);
        }
        let mut all = Vec::with_capacity(self.context.len() + fields.len());
        all.extend_from_slice(&self.context);
        all.extend_from_slice(fields);
        self.inner.write(entry, &all)
    }
}

/// Level shorthands delegating to `log`, keeping the caller's location.
macro_rules! level_methods {
    ($($(#[$doc:meta])* $name:ident => $level:ident;)*) => {
        $(
            $(#[$doc])*
            ///
            /// # Errors
            ///
            /// Returns the core's error if the write fails.
            #[track_caller]
            pub fn $name(&self, message: impl Into<String>) -> Result<(), CoreError> {
                self.log(Level::$level, message)
            }
        )*
    };
}

/// Strongly typed structured logger.
///
/// # Example
///
/// ```
/// use logroute::models::{Field, Level};
/// use logroute::structured::{observer, Logger};
///
/// let (core, logs) = observer::new();
/// let logger = Logger::new(core).with([Field::string("service", "api")]);
///
/// logger.log(Level::Info, "ready").unwrap();
///
/// assert_eq!(logs.len(), 1);
/// assert_eq!(logs.all()[0].context, vec![Field::string("service", "api")]);
/// ```
#[derive(Clone)]
pub struct Logger {
    core: Arc<dyn Core>,
}

impl Logger {
    /// Creates a logger writing to `core`.
    #[must_use]
    pub fn new(core: impl Core + 'static) -> Self {
        Self::from_core(Arc::new(core))
    }

    /// Creates a logger from a shared core.
    #[must_use]
    pub fn from_core(core: Arc<dyn Core>) -> Self {
        Self { core }
    }

    /// Returns a child logger that attaches `fields` to every entry.
    #[must_use]
    pub fn with(&self, fields: impl IntoIterator<Item = Field>) -> Self {
        let context: Vec<Field> = fields.into_iter().collect();
        if context.is_empty() {
            return self.clone();
        }
        Self::from_core(Arc::new(ContextCore {
            inner: Arc::clone(&self.core),
            context,
        }))
    }

    /// Returns the core, including any context fields added with [`Logger::with`].
    #[must_use]
    pub fn core(&self) -> Arc<dyn Core> {
        Arc::clone(&self.core)
    }

    /// Converts into the loosely typed flavor.
    #[must_use]
    pub fn sugar(&self) -> SugaredLogger {
        SugaredLogger { base: self.clone() }
    }

    /// Writes an entry attributed to the caller of this method.
    ///
    /// # Errors
    ///
    /// Returns the core's error if the write fails.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<String>) -> Result<(), CoreError> {
        let entry = Entry::new(level, message)
            .with_caller(CallerLocation::from(std::panic::Location::caller()));
        self.core.write(&entry, &[])
    }

    level_methods! {
        /// Writes a trace entry attributed to the caller of this method.
        trace => Trace;
        /// Writes a debug entry attributed to the caller of this method.
        debug => Debug;
        /// Writes an info entry attributed to the caller of this method.
        info => Info;
        /// Writes a warn entry attributed to the caller of this method.
        warn => Warn;
        /// Writes an error entry attributed to the caller of this method.
        error => Error;
        /// Writes a fatal entry attributed to the caller of this method.
        ///
        /// Only records the entry; the process keeps running.
        fatal => Fatal;
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// Loosely typed structured logger.
///
/// Context is added one key/value pair at a time from any serializable value.
#[derive(Clone, Debug)]
pub struct SugaredLogger {
    base: Logger,
}

impl SugaredLogger {
    /// Returns a child logger with one more context field.
    #[must_use]
    pub fn with(&self, key: impl Into<String>, value: impl Serialize) -> Self {
        Self {
            base: self.base.with([Field::new(key, value)]),
        }
    }

    /// Returns the strongly typed logger sharing this logger's core and context.
    #[must_use]
    pub fn desugar(&self) -> Logger {
        self.base.clone()
    }

    /// Writes an entry attributed to the caller of this method.
    ///
    /// # Errors
    ///
    /// Returns the core's error if the write fails.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<String>) -> Result<(), CoreError> {
        self.base.log(level, message)
    }

    level_methods! {
        /// Writes a trace entry attributed to the caller of this method.
        trace => Trace;
        /// Writes a debug entry attributed to the caller of this method.
        debug => Debug;
        /// Writes an info entry attributed to the caller of this method.
        info => Info;
        /// Writes a warn entry attributed to the caller of this method.
        warn => Warn;
        /// Writes an error entry attributed to the caller of this method.
        error => Error;
        /// Writes a fatal entry attributed to the caller of this method.
        ///
        /// Only records the entry; the process keeps running.
        fatal => Fatal;
    }
}
