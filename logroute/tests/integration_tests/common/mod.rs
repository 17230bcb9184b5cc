//! Common test utilities and helpers for integration tests.

use logroute::models::Field;
use logroute::stdlog;
use logroute::structured::observer::{self, ObservedLogs};
use logroute::structured::{Logger, SugaredLogger};
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static DEFAULT_LOGGER: Mutex<()> = Mutex::new(());

/// Serializes tests that redirect the process-wide default logger.
pub fn lock_default_logger() -> MutexGuard<'static, ()> {
    DEFAULT_LOGGER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Points the default logger back at stderr with standard flags.
pub fn reset_default_logger() {
    stdlog::set_output(io::stderr());
    stdlog::set_flags(stdlog::Flags::STD);
}

/// The context field every test logger is built with.
pub fn myfield() -> Vec<Field> {
    vec![Field::string("myfield", "hassomething")]
}

/// Creates a sugared logger carrying `myfield` over an observer core.
pub fn observed_sugared() -> (SugaredLogger, ObservedLogs) {
    let (core, logs) = observer::new();
    let logger = Logger::new(core).sugar().with("myfield", "hassomething");
    (logger, logs)
}

/// Creates a plain logger carrying `myfield` over an observer core.
pub fn observed_logger() -> (Logger, ObservedLogs) {
    let (core, logs) = observer::new();
    let logger = Logger::new(core).with(myfield());
    (logger, logs)
}

/// Request-scoped context passed through [`CtxWrapper`].
pub struct Context;

/// A helper layer between the call site and the simple logger's print.
///
/// Counts as one skipped frame only while it keeps its own frame, so it is
/// never inlined and the print is not its tail call.
pub struct CtxWrapper<'a> {
    pub logger: &'a stdlog::Logger,
}

impl CtxWrapper<'_> {
    #[inline(never)]
    pub fn print(&self, _ctx: &Context, message: &str) {
        self.logger.print(message);
        std::hint::black_box(());
    }
}

/// Line of the print call inside [`print_via_helper`].
pub const HELPER_PRINT_LINE: u32 = line!() + 5;

/// Prints through one extra function layer, kept on the stack like [`CtxWrapper`].
#[inline(never)]
pub fn print_via_helper(logger: &stdlog::Logger, message: &str) {
    logger.print(message);
    std::hint::black_box(());
}

/// An in-memory writer whose contents can be read while it is installed.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
