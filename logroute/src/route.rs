//! Setup operations redirecting simple loggers into a structured logger.
//!
//! Every operation calibrates the caller depth once, builds one
//! [`RedirectingSink`] and installs a clone of it on each given simple logger,
//! or on the process-wide default logger when none are given. Decoration
//! flags are cleared on every redirected logger since the structured backend
//! records its own timestamp and caller; prefixes are kept.

use crate::calibrate::calibrate;
use crate::config::RouteConfig;
use crate::models::Level;
use crate::sink::RedirectingSink;
use crate::stdlog::{self, Flags};
use crate::structured::{Core, Logger, SugaredLogger};
use std::sync::Arc;

/// Redirects simple loggers to a sugared logger.
///
/// # Panics
///
/// Panics if the caller depth cannot be calibrated; see
/// [`calibrate`](crate::calibrate::calibrate).
pub fn to_sugared(
    logger: &SugaredLogger,
    level: Level,
    loggers: &[&stdlog::Logger],
) -> RedirectingSink {
    route(logger.desugar().core(), level, 0, loggers)
}

/// Redirects simple loggers to a sugared logger, skipping `extra_skip`
/// additional frames when resolving the caller.
///
/// # Helper frames
///
/// Each skipped layer must stay a real frame on the stack. A helper that is
/// inlined, or whose last action is the print call (a tail call in optimized
/// builds), leaves no frame behind and the reported caller lands above the
/// intended one. Mark such helpers `#[inline(never)]` and keep some work
/// after the print, for example `std::hint::black_box(())`.
///
/// # Panics
///
/// Panics if the caller depth cannot be calibrated.
pub fn to_sugared_with_skip(
    logger: &SugaredLogger,
    level: Level,
    extra_skip: usize,
    loggers: &[&stdlog::Logger],
) -> RedirectingSink {
    route(logger.desugar().core(), level, extra_skip, loggers)
}

/// Redirects simple loggers to a structured logger.
///
/// # Panics
///
/// Panics if the caller depth cannot be calibrated.
pub fn to_logger(logger: &Logger, level: Level, loggers: &[&stdlog::Logger]) -> RedirectingSink {
    route(logger.core(), level, 0, loggers)
}

/// Redirects simple loggers to a structured logger, skipping `extra_skip`
/// additional frames when resolving the caller.
///
/// # Helper frames
///
/// Each skipped layer must stay a real frame on the stack. A helper that is
/// inlined, or whose last action is the print call (a tail call in optimized
/// builds), leaves no frame behind and the reported caller lands above the
/// intended one. Mark such helpers `#[inline(never)]` and keep some work
/// after the print, for example `std::hint::black_box(())`.
///
/// # Panics
///
/// Panics if the caller depth cannot be calibrated.
pub fn to_logger_with_skip(
    logger: &Logger,
    level: Level,
    extra_skip: usize,
    loggers: &[&stdlog::Logger],
) -> RedirectingSink {
    route(logger.core(), level, extra_skip, loggers)
}

/// Redirects simple loggers to a structured logger using a [`RouteConfig`].
///
/// # Panics
///
/// Panics if the caller depth cannot be calibrated.
pub fn to_logger_with_config(
    logger: &Logger,
    config: &RouteConfig,
    loggers: &[&stdlog::Logger],
) -> RedirectingSink {
    route(logger.core(), config.level, config.extra_skip, loggers)
}

fn route(
    core: Arc<dyn Core>,
    level: Level,
    extra_skip: usize,
    loggers: &[&stdlog::Logger],
) -> RedirectingSink {
    let sink = RedirectingSink::new(core, level, calibrate(), extra_skip);

    if loggers.is_empty() {
        stdlog::set_flags(Flags::empty());
        stdlog::set_output(sink.clone());
    } else {
        for logger in loggers {
            logger.set_flags(Flags::empty());
            logger.set_output(sink.clone());
        }
    }

    tracing::debug!(
        level = %level,
        depth = sink.calibrated_depth(),
        extra_skip,
        loggers = loggers.len(),
        "Redirected simple loggers"
    );
    sink
}
