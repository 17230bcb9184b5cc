//! Caller depth calibration.
//!
//! Measures how many stack frames lie between a function calling the simple
//! logger's print entry point and the output `write` hook that print ends up
//! invoking. The count depends only on the simple logger's internal call
//! chain, so it is measured at runtime rather than hardcoded.

use crate::caller::{self, FunctionId};
use crate::error::CalibrationError;
use crate::stdlog::{Flags, Logger};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Upper bound on frames inspected while looking for the calibration marker.
pub const MAX_CALIBRATION_FRAMES: usize = 128;

type Outcome = Arc<Mutex<Option<Result<usize, CalibrationError>>>>;

/// Throwaway output that records where on the stack it was written from.
struct Probe {
    marker: FunctionId,
    outcome: Outcome,
}

impl Write for Probe {
    // Must mirror the redirecting sink's `write`: one frame, then straight
    // into the `caller` module.
    #[inline(never)]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let measured = caller::find_function(&self.marker, MAX_CALIBRATION_FRAMES);
        self.outcome
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(measured);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Measures the caller depth of the simple logger.
///
/// # Panics
///
/// Panics if the stack walk cannot find the calibration entry point. That
/// means the platform cannot identify frames on the stack, and every caller
/// location reported afterwards would be wrong.
#[must_use]
pub fn calibrate() -> usize {
    match try_calibrate() {
        Ok(depth) => depth,
        Err(err) => panic!("unable to calibrate simple logger caller depth: {err}"),
    }
}

/// Measures the caller depth of the simple logger.
///
/// A throwaway [`Logger`] is pointed at a probe output and prints one empty
/// line. Inside the probe the stack is walked until this function's own
/// frame shows up; that frame's index is the depth. The default logger is
/// never touched.
///
/// # Errors
///
/// Returns [`CalibrationError::MarkerNotFound`] if this function's frame is
/// not found within [`MAX_CALIBRATION_FRAMES`] frames.
#[inline(never)]
pub fn try_calibrate() -> Result<usize, CalibrationError> {
    let marker = FunctionId::new(
        (try_calibrate as fn() -> Result<usize, CalibrationError>) as usize,
        std::any::type_name_of_val(&try_calibrate),
    );
    let outcome: Outcome = Arc::new(Mutex::new(None));
    let probe = Logger::new(
        Probe {
            marker,
            outcome: Arc::clone(&outcome),
        },
        "",
        Flags::empty(),
    );

    probe.print("");

    let measured = outcome
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
        .ok_or(CalibrationError::ProbeNotInvoked)?;
    let depth = measured?;

    tracing::debug!(depth, "Calibrated simple logger caller depth");
    Ok(depth)
}
