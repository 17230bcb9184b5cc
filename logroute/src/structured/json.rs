//! Newline-delimited JSON core.

use super::Core;
use crate::error::CoreError;
use crate::models::{fields_to_json, Entry, Field};
use serde::Serialize;
use std::io::Write;
use std::sync::Mutex;

#[derive(Serialize)]
struct Line<'a> {
    #[serde(flatten)]
    entry: &'a Entry,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    fields: serde_json::Value,
}

/// Writes each entry as one JSON object followed by a newline.
///
/// ```text
/// {"level":"warn","timestamp":"2024-01-15T10:30:00Z","message":"disk almost full","caller":{"file":"src/main.rs","line":42},"fields":{"service":"api"}}
/// ```
pub struct JsonCore<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonCore<W> {
    /// Creates a core writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the core, returning the writer.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::LockPoisoned`] if a writer panicked mid-write.
    pub fn into_inner(self) -> Result<W, CoreError> {
        self.writer.into_inner().map_err(|_| CoreError::LockPoisoned)
    }
}

impl<W: Write + Send> Core for JsonCore<W> {
    fn write(&self, entry: &Entry, fields: &[Field]) -> Result<(), CoreError> {
        let line = Line {
            entry,
            fields: if fields.is_empty() {
                serde_json::Value::Null
            } else {
                fields_to_json(fields)
            },
        };
        let mut encoded = serde_json::to_vec(&line)?;
        encoded.push(b'\n');

        let mut writer = self.writer.lock().map_err(|_| CoreError::LockPoisoned)?;
        writer.write_all(&encoded)?;
        writer.flush()?;
        Ok(())
    }
}
