//! In-memory core that records every entry it receives.
//!
//! Intended for tests: build a logger over an [`ObserverCore`] and inspect
//! what was written through the paired [`ObservedLogs`].

use super::Core;
use crate::error::CoreError;
use crate::models::{Entry, Field};
use std::sync::{Arc, Mutex, PoisonError};

/// An entry together with the fields it was written with.
#[derive(Debug, Clone)]
pub struct LoggedEntry {
    /// The entry.
    pub entry: Entry,
    /// Fields passed alongside the entry, context fields first.
    pub context: Vec<Field>,
}

/// Shared view of everything an [`ObserverCore`] recorded.
#[derive(Debug, Clone, Default)]
pub struct ObservedLogs {
    entries: Arc<Mutex<Vec<LoggedEntry>>>,
}

impl ObservedLogs {
    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns a copy of all recorded entries, oldest first.
    #[must_use]
    pub fn all(&self) -> Vec<LoggedEntry> {
        self.lock().clone()
    }

    /// Removes and returns all recorded entries.
    #[must_use]
    pub fn take_all(&self) -> Vec<LoggedEntry> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns the entries whose message equals `message`.
    #[must_use]
    pub fn filter_message(&self, message: &str) -> Vec<LoggedEntry> {
        self.lock()
            .iter()
            .filter(|e| e.entry.message == message)
            .cloned()
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LoggedEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Core that appends every write to an [`ObservedLogs`].
#[derive(Debug, Clone)]
pub struct ObserverCore {
    logs: ObservedLogs,
}

impl Core for ObserverCore {
    fn write(&self, entry: &Entry, fields: &[Field]) -> Result<(), CoreError> {
        self.logs
            .entries
            .lock()
            .map_err(|_| CoreError::LockPoisoned)?
            .push(LoggedEntry {
                entry: entry.clone(),
                context: fields.to_vec(),
            });
        Ok(())
    }
}

/// Creates an observer core and the handle to read what it records.
#[must_use]
pub fn new() -> (ObserverCore, ObservedLogs) {
    let logs = ObservedLogs::default();
    (ObserverCore { logs: logs.clone() }, logs)
}
