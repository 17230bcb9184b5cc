//! Integration tests for redirecting the process-wide default logger.
//!
//! Every test holds the default-logger lock for its whole duration and
//! restores stderr output before releasing it.

use logroute::models::Level;
use logroute::stdlog::{self, Flags};
use logroute::{to_logger, to_sugared};

use super::common::{
    lock_default_logger, myfield, observed_logger, observed_sugared, reset_default_logger,
};

const FILE: &str = "default_logger_tests.rs";

#[test]
fn test_to_sugared_redirects_default_logger() {
    let _guard = lock_default_logger();
    let (logger, logs) = observed_sugared();

    to_sugared(&logger, Level::Warn, &[]);
    let line = line!() + 1;
    stdlog::print("many happy returns from the logger");
    reset_default_logger();

    assert_eq!(logs.len(), 1);
    let logged = &logs.all()[0];
    assert_eq!(logged.entry.level, Level::Warn);
    assert_eq!(logged.entry.message, "many happy returns from the logger");
    assert_eq!(logged.context, myfield());

    let caller = logged.entry.caller.as_ref().unwrap();
    assert!(caller.file.ends_with(FILE), "{}", caller.file);
    assert_eq!(caller.line, line);
}

#[test]
fn test_to_logger_redirects_default_logger() {
    let _guard = lock_default_logger();
    let (logger, logs) = observed_logger();

    to_logger(&logger, Level::Error, &[]);
    stdlog::print("  many happy returns from the logger\n");
    reset_default_logger();

    assert_eq!(logs.len(), 1);
    let logged = &logs.all()[0];
    assert_eq!(logged.entry.level, Level::Error);
    assert_eq!(logged.entry.message, "many happy returns from the logger");
    assert_eq!(logged.context, myfield());
}

#[test]
fn test_default_logger_decorations_disabled() {
    let _guard = lock_default_logger();
    let (logger, logs) = observed_logger();
    stdlog::set_flags(Flags::STD | Flags::SHORT_FILE);

    to_logger(&logger, Level::Info, &[]);
    let flags = stdlog::flags();
    stdlog::print_fmt(format_args!("{}-{}", "formatted", 1));
    reset_default_logger();

    assert!(flags.is_empty());
    assert_eq!(logs.all()[0].entry.message, "formatted-1");
}

#[test]
fn test_default_logger_method_and_function_agree() {
    let _guard = lock_default_logger();
    let (logger, logs) = observed_logger();

    to_logger(&logger, Level::Info, &[]);
    let line = line!() + 1;
    stdlog::print("via function");
    stdlog::default_logger().print("via method");
    reset_default_logger();

    let callers: Vec<u32> = logs
        .all()
        .into_iter()
        .map(|l| l.entry.caller.unwrap().line)
        .collect();
    assert_eq!(callers, vec![line, line + 1]);
}

#[test]
fn test_explicit_loggers_leave_default_untouched() {
    let _guard = lock_default_logger();
    let (logger, logs) = observed_logger();
    let explicit = stdlog::Logger::new(std::io::sink(), "", Flags::STD);
    stdlog::set_flags(Flags::STD);

    to_logger(&logger, Level::Info, &[&explicit]);
    let flags = stdlog::flags();
    stdlog::set_output(std::io::sink());
    stdlog::print("not redirected");
    reset_default_logger();

    assert_eq!(flags, Flags::STD);
    assert!(logs.is_empty());
}
