//! Stack introspection.
//!
//! Frame indices returned by [`find_function`] and consumed by [`location`]
//! are relative to an internal capture point shared by both functions. They
//! are only comparable when both are called directly from functions sitting
//! at the same position on the stack, which is how the calibration probe and
//! the redirecting sink use them.

use crate::error::CalibrationError;
use crate::models::CallerLocation;
use backtrace::Frame;

/// Identity of a function, used as a stack-walk marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionId {
    address: usize,
    path: &'static str,
}

impl FunctionId {
    /// Creates a marker from a function's entry address and its fully
    /// qualified path (as returned by [`std::any::type_name_of_val`]).
    #[must_use]
    pub const fn new(address: usize, path: &'static str) -> Self {
        Self { address, path }
    }

    /// Fully qualified path of the function.
    #[must_use]
    pub fn path(&self) -> &'static str {
        self.path
    }

    fn matches_address(&self, frame: &Frame) -> bool {
        self.address != 0 && frame.symbol_address() as usize == self.address
    }

    fn matches_symbol(&self, frame: &Frame) -> bool {
        let mut matched = false;
        backtrace::resolve_frame(frame, |symbol| {
            if let Some(name) = symbol.name() {
                // `{:#}` drops the trailing symbol hash.
                matched |= format!("{name:#}") == self.path;
            }
        });
        matched
    }
}

/// Captures up to `limit` raw frames of the current stack.
///
/// Never inlined: both lookups below must see the same frames between
/// themselves and the unwinder.
#[inline(never)]
fn capture(limit: usize) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(limit.min(64));
    backtrace::trace(|frame| {
        frames.push(frame.clone());
        frames.len() < limit
    });
    frames
}

/// Returns the index of the first frame executing `marker`, walking at most
/// `limit` frames.
///
/// Frames are matched by entry address first. When no frame matches by
/// address, the symbols of the captured frames are resolved and compared by
/// path instead.
///
/// # Errors
///
/// Returns [`CalibrationError::MarkerNotFound`] when no captured frame
/// belongs to `marker`.
#[inline(never)]
pub fn find_function(marker: &FunctionId, limit: usize) -> Result<usize, CalibrationError> {
    let frames = capture(limit);

    frames
        .iter()
        .position(|frame| marker.matches_address(frame))
        .or_else(|| frames.iter().position(|f| marker.matches_symbol(f)))
        .ok_or(CalibrationError::MarkerNotFound {
            marker: marker.path(),
            frames_walked: frames.len(),
        })
}

/// Resolves the source location executing at frame `depth`.
///
/// Returns `None` when the stack is shallower than `depth` or the frame has
/// no file/line debug information.
#[inline(never)]
pub fn location(depth: usize) -> Option<CallerLocation> {
    let frames = capture(depth.saturating_add(1));
    let frame = frames.get(depth)?;

    let mut found = None;
    backtrace::resolve_frame(frame, |symbol| {
        if found.is_some() {
            return;
        }
        // Inlined frames resolve innermost first; that is the call site.
        if let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) {
            found = Some(CallerLocation::new(file.to_string_lossy(), line));
        }
    });
    found
}
