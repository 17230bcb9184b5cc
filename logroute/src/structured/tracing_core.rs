//! Core forwarding entries to the `tracing` ecosystem.

use super::Core;
use crate::error::CoreError;
use crate::models::{fields_to_json, Entry, Field, Level};

/// Target used for every event emitted by [`TracingCore`].
pub const TARGET: &str = "logroute";

/// Emits each entry as a `tracing` event on target [`TARGET`].
///
/// `Level::Fatal` has no `tracing` counterpart and is emitted at `ERROR` with
/// `fatal = true`. The caller location, the entry timestamp and the fields
/// (encoded as one JSON object) are recorded as event fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCore;

impl TracingCore {
    /// Creates a new tracing core.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

macro_rules! emit {
    ($level:ident, $fatal:expr, $msg:expr, $ts:expr, $file:expr, $line:expr, $fields:expr) => {
        tracing::event!(
            target: TARGET,
            tracing::Level::$level,
            caller.file = $file,
            caller.line = $line,
            timestamp = $ts,
            fatal = $fatal,
            fields = $fields,
            "{}",
            $msg
        )
    };
}

impl Core for TracingCore {
    fn write(&self, entry: &Entry, fields: &[Field]) -> Result<(), CoreError> {
        let message = entry.message.as_str();
        let timestamp = entry.timestamp.to_rfc3339();
        let timestamp = timestamp.as_str();
        let caller = entry.caller.as_ref();
        let file = caller.map_or("unknown", |c| c.file.as_str());
        let line = caller.map_or(0, |c| c.line);
        let fields = if fields.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&fields_to_json(fields))?)
        };
        let fields = fields.as_deref();

        match entry.level {
            Level::Trace => emit!(TRACE, false, message, timestamp, file, line, fields),
            Level::Debug => emit!(DEBUG, false, message, timestamp, file, line, fields),
            Level::Info => emit!(INFO, false, message, timestamp, file, line, fields),
            Level::Warn => emit!(WARN, false, message, timestamp, file, line, fields),
            Level::Error => emit!(ERROR, false, message, timestamp, file, line, fields),
            Level::Fatal => emit!(ERROR, true, message, timestamp, file, line, fields),
        }
        Ok(())
    }
}
