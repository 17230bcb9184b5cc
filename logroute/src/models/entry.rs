//! Structured log entry data model.
//!
//! An [`Entry`] is what the redirecting sink hands to a structured backend for
//! every line written by a simple logger.

use super::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source location of a log call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallerLocation {
    /// Source file path as recorded in the debug info.
    pub file: String,
    /// One-based line number.
    pub line: u32,
}

impl CallerLocation {
    /// Creates a new caller location.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Returns the final path component of the file, e.g. `main.rs`.
    #[must_use]
    pub fn short_file(&self) -> &str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.file)
    }
}

impl From<&std::panic::Location<'_>> for CallerLocation {
    fn from(location: &std::panic::Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A single structured log record.
///
/// # Example
///
/// ```
/// use logroute::models::{CallerLocation, Entry, Level};
///
/// let entry = Entry::new(Level::Warn, "disk almost full")
///     .with_caller(CallerLocation::new("src/main.rs", 42));
///
/// assert_eq!(entry.level, Level::Warn);
/// assert_eq!(entry.caller.unwrap().to_string(), "src/main.rs:42");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Severity level of the entry.
    pub level: Level,

    /// Timestamp when the entry was created.
    pub timestamp: DateTime<Utc>,

    /// The log message content.
    pub message: String,

    /// Where the log call was made, `None` when it could not be resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller: Option<CallerLocation>,
}

impl Entry {
    /// Creates a new entry with the current timestamp and an unknown caller.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            message: message.into(),
            caller: None,
        }
    }

    /// Sets the caller location.
    #[must_use]
    pub fn with_caller(mut self, caller: CallerLocation) -> Self {
        self.caller = Some(caller);
        self
    }

    /// Sets the caller location, keeping it unknown when `caller` is `None`.
    #[must_use]
    pub fn with_optional_caller(mut self, caller: Option<CallerLocation>) -> Self {
        self.caller = caller;
        self
    }
}

/// A key/value pair attached to an entry.
///
/// Values are JSON values so any serializable type can be attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field key.
    pub key: String,
    /// Field value.
    pub value: serde_json::Value,
}

impl Field {
    /// Creates a field from any serializable value.
    ///
    /// Values that fail to serialize are stored as `null`.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Serialize) -> Self {
        Self {
            key: key.into(),
            value: serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
        }
    }

    /// Creates a string-valued field.
    #[must_use]
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: serde_json::Value::String(value.into()),
        }
    }
}

/// Encodes fields as a single JSON object, later keys overwriting earlier ones.
#[must_use]
pub fn fields_to_json(fields: &[Field]) -> serde_json::Value {
    let map = fields
        .iter()
        .map(|f| (f.key.clone(), f.value.clone()))
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(map)
}
