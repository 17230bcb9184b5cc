//! Simple line-oriented logger.
//!
//! A logger here has no notion of severity or fields: it decorates a message
//! with an optional prefix, timestamp and source position and writes the
//! resulting line to its output. A process-wide default instance backs the
//! free functions in this module.

mod flags;
mod logger;

pub use flags::Flags;
pub use logger::{
    default_logger, flags, print, print_fmt, set_flags, set_output, set_prefix, Logger,
};

/// Prints a formatted line through a [`Logger`].
///
/// ```
/// use logroute::{log_print, stdlog::{Flags, Logger}};
///
/// let logger = Logger::new(std::io::sink(), "", Flags::empty());
/// log_print!(logger, "{} requests served", 42);
/// ```
#[macro_export]
macro_rules! log_print {
    ($logger:expr, $($arg:tt)+) => {
        $logger.print_fmt(::std::format_args!($($arg)+))
    };
}
