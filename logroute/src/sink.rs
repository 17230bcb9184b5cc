//! The redirecting sink.
//!
//! A [`RedirectingSink`] is installed as the output of one or more simple
//! loggers. Every line they write becomes one structured [`Entry`] at a fixed
//! level, attributed to the code that called print.

use crate::caller;
use crate::models::{Entry, Level};
use crate::structured::Core;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Simple-logger output that forwards each line to a structured core.
///
/// Clones share the same configuration and failure counter; one clone is
/// handed to every logger redirected by a single setup call.
#[derive(Clone)]
pub struct RedirectingSink {
    calibrated_depth: usize,
    extra_skip: usize,
    level: Level,
    core: Arc<dyn Core>,
    failures: Arc<AtomicU64>,
}

impl RedirectingSink {
    /// Creates a sink writing entries at `level` to `core`.
    ///
    /// `calibrated_depth` comes from [`calibrate`](crate::calibrate::calibrate);
    /// `extra_skip` adds one frame per helper function wrapping the print call;
    /// see [`to_logger_with_skip`](crate::route::to_logger_with_skip) for what
    /// counts as a frame.
    #[must_use]
    pub fn new(
        core: Arc<dyn Core>,
        level: Level,
        calibrated_depth: usize,
        extra_skip: usize,
    ) -> Self {
        Self {
            calibrated_depth,
            extra_skip,
            level,
            core,
            failures: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The measured depth this sink was built with.
    #[must_use]
    pub fn calibrated_depth(&self) -> usize {
        self.calibrated_depth
    }

    /// Additional frames skipped on top of the calibrated depth.
    #[must_use]
    pub fn extra_skip(&self) -> usize {
        self.extra_skip
    }

    /// Level of every entry produced by this sink.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Number of entries the core failed to write.
    #[must_use]
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    fn depth(&self) -> usize {
        self.calibrated_depth.saturating_add(self.extra_skip)
    }
}

impl Write for RedirectingSink {
    /// Converts `buf` into one entry and hands it to the core.
    ///
    /// Always reports the whole buffer as written. Core failures are counted
    /// and reported through `tracing`, never returned.
    #[inline(never)]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let caller = caller::location(self.depth());
        let entry = Entry::new(self.level, String::from_utf8_lossy(buf).trim())
            .with_optional_caller(caller);

        if let Err(err) = self.core.write(&entry, &[]) {
            self.failures.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(error = %err, "Structured core rejected redirected line");
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for RedirectingSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedirectingSink")
            .field("calibrated_depth", &self.calibrated_depth)
            .field("extra_skip", &self.extra_skip)
            .field("level", &self.level)
            .field("failures", &self.failures())
            .finish_non_exhaustive()
    }
}
