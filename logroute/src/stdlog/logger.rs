//! The simple line-oriented logger.

use super::Flags;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::panic::Location;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError, RwLock};

/// A line logger writing pre-formatted text lines to a replaceable output.
///
/// Each print produces exactly one `write` call on the output, made while the
/// output lock is held, so lines from concurrent callers never interleave.
///
/// # Example
///
/// ```
/// use logroute::stdlog::{Flags, Logger};
///
/// let logger = Logger::new(Vec::new(), "app: ", Flags::empty());
/// logger.print("started");
/// ```
pub struct Logger {
    prefix: RwLock<String>,
    flags: AtomicU32,
    output: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// Creates a logger writing to `output`.
    #[must_use]
    pub fn new(
        output: impl Write + Send + 'static,
        prefix: impl Into<String>,
        flags: Flags,
    ) -> Self {
        Self {
            prefix: RwLock::new(prefix.into()),
            flags: AtomicU32::new(flags.bits()),
            output: Mutex::new(Box::new(output)),
        }
    }

    /// Replaces the output destination.
    pub fn set_output(&self, output: impl Write + Send + 'static) {
        *self.output.lock().unwrap_or_else(PoisonError::into_inner) = Box::new(output);
    }

    /// Returns the decoration flags.
    #[must_use]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.flags.load(Ordering::Relaxed))
    }

    /// Sets the decoration flags.
    pub fn set_flags(&self, flags: Flags) {
        self.flags.store(flags.bits(), Ordering::Relaxed);
    }

    /// Returns the line prefix.
    #[must_use]
    pub fn prefix(&self) -> String {
        self.prefix
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sets the line prefix.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        *self.prefix.write().unwrap_or_else(PoisonError::into_inner) = prefix.into();
    }

    /// Prints one line. A trailing newline is added if missing.
    ///
    /// Output errors are ignored.
    #[track_caller]
    #[inline(never)]
    pub fn print(&self, message: impl Display) {
        let _ = self.output(Location::caller(), &message.to_string());
    }

    /// Prints one line from pre-built format arguments. See [`log_print!`](crate::log_print).
    #[track_caller]
    #[inline(never)]
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) {
        let _ = self.output(Location::caller(), &fmt::format(args));
    }

    /// Formats and writes one line.
    ///
    /// Sits exactly one frame below every print entry point so that the
    /// output's `write` runs at the same depth for all of them.
    #[inline(never)]
    pub(crate) fn output(&self, location: &Location<'_>, message: &str) -> io::Result<()> {
        let flags = self.flags();
        let prefix = self.prefix();

        let mut line = String::with_capacity(prefix.len() + message.len() + 32);
        format_header(&mut line, flags, &prefix, location);
        line.push_str(message);
        if !line.ends_with('\n') {
            line.push('\n');
        }

        let mut guard = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        let output: &mut (dyn Write + Send) = &mut **guard;
        let written = output.write(line.as_bytes())?;
        if written < line.len() {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "short write"));
        }
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("prefix", &self.prefix())
            .field("flags", &self.flags())
            .finish_non_exhaustive()
    }
}

fn format_header(buf: &mut String, flags: Flags, prefix: &str, location: &Location<'_>) {
    if !flags.contains(Flags::MSG_PREFIX) {
        buf.push_str(prefix);
    }

    if flags.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS) {
        if flags.contains(Flags::UTC) {
            format_time(buf, flags, &Utc::now());
        } else {
            format_time(buf, flags, &Local::now());
        }
    }

    if flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE) {
        let file = location.file();
        let file = if flags.contains(Flags::SHORT_FILE) {
            file.rsplit(['/', '\\']).next().unwrap_or(file)
        } else {
            file
        };
        buf.push_str(file);
        buf.push(':');
        buf.push_str(&location.line().to_string());
        buf.push_str(": ");
    }

    if flags.contains(Flags::MSG_PREFIX) {
        buf.push_str(prefix);
    }
}

fn format_time<Tz: TimeZone>(buf: &mut String, flags: Flags, now: &DateTime<Tz>)
where
    Tz::Offset: Display,
{
    if flags.contains(Flags::DATE) {
        buf.push_str(&now.format("%Y/%m/%d ").to_string());
    }
    if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
        buf.push_str(&now.format("%H:%M:%S").to_string());
        if flags.contains(Flags::MICROSECONDS) {
            buf.push_str(&now.format("%.6f").to_string());
        }
        buf.push(' ');
    }
}

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide default logger, writing to stderr with
/// [`Flags::STD`] until reconfigured.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| Logger::new(io::stderr(), "", Flags::STD))
}

/// Prints one line through the default logger.
///
/// Runs at the same stack depth as [`Logger::print`].
#[track_caller]
#[inline(never)]
pub fn print(message: impl Display) {
    let message = message.to_string();
    let _ = default_logger().output(Location::caller(), &message);
}

/// Prints pre-built format arguments through the default logger.
#[track_caller]
#[inline(never)]
pub fn print_fmt(args: fmt::Arguments<'_>) {
    let message = fmt::format(args);
    let _ = default_logger().output(Location::caller(), &message);
}

/// Replaces the default logger's output.
pub fn set_output(output: impl Write + Send + 'static) {
    default_logger().set_output(output);
}

/// Sets the default logger's decoration flags.
pub fn set_flags(flags: Flags) {
    default_logger().set_flags(flags);
}

/// Returns the default logger's decoration flags.
pub fn flags() -> Flags {
    default_logger().flags()
}

/// Sets the default logger's prefix.
pub fn set_prefix(prefix: impl Into<String>) {
    default_logger().set_prefix(prefix);
}
