//! Integration tests for redirecting explicit simple-logger instances.
//!
//! Tests cover:
//! - Caller attribution with and without extra skip
//! - Prefix preservation and decoration stripping
//! - Multiple loggers per setup call
//! - Fixed level per setup call
//! - Context fields

use logroute::models::{Field, Level};
use logroute::stdlog::{self, Flags};
use logroute::structured::{observer, JsonCore, Logger};
use logroute::{log_print, to_logger, to_logger_with_skip, to_sugared, to_sugared_with_skip};
use serde_json::Value;

use super::common::{
    myfield, observed_logger, observed_sugared, print_via_helper, Context, CtxWrapper,
    SharedBuffer, HELPER_PRINT_LINE,
};

const FILE: &str = "redirect_tests.rs";

fn assert_caller(logs: &observer::ObservedLogs, index: usize, file: &str, line: u32) {
    let entry = &logs.all()[index].entry;
    let caller = entry.caller.as_ref().unwrap();
    assert!(caller.file.ends_with(file), "{}", caller.file);
    assert_eq!(caller.line, line, "caller was {caller}");
}

#[test]
fn test_to_logger_attributes_print_call_site() {
    let (logger, logs) = observed_logger();
    let simple = stdlog::Logger::new(std::io::stderr(), "", Flags::STD);

    to_logger(&logger, Level::Warn, &[&simple]);
    let line = line!() + 1;
    simple.print("many happy returns from the logger");

    assert_eq!(logs.len(), 1);
    let logged = &logs.all()[0];
    assert_eq!(logged.entry.level, Level::Warn);
    assert_eq!(logged.entry.message, "many happy returns from the logger");
    assert_eq!(logged.context, myfield());
    assert_caller(&logs, 0, FILE, line);
}

#[test]
fn test_to_sugared_with_skip_through_wrapper() {
    let (logger, logs) = observed_sugared();
    let simple = stdlog::Logger::new(std::io::stderr(), "", Flags::empty());
    let ctx_log = CtxWrapper { logger: &simple };

    to_sugared_with_skip(&logger, Level::Warn, 1, &[&simple]);
    let line = line!() + 1;
    ctx_log.print(&Context, "many happy returns from the logger");

    assert_eq!(logs.len(), 1);
    let logged = &logs.all()[0];
    assert!(logged.entry.message.contains("many happy returns"));
    assert_eq!(logged.context, myfield());
    assert_caller(&logs, 0, FILE, line);
}

#[test]
fn test_to_logger_with_skip_through_wrapper() {
    let (logger, logs) = observed_logger();
    let simple = stdlog::Logger::new(std::io::stderr(), "", Flags::empty());
    let ctx_log = CtxWrapper { logger: &simple };

    to_logger_with_skip(&logger, Level::Warn, 1, &[&simple]);
    let line = line!() + 1;
    ctx_log.print(&Context, "many happy returns from the logger");

    assert_eq!(logs.len(), 1);
    assert_eq!(logs.all()[0].context, myfield());
    assert_caller(&logs, 0, FILE, line);
}

#[test]
fn test_extra_skip_moves_caller_one_frame_up() {
    let (core, unskipped) = observer::new();
    let plain = stdlog::Logger::new(std::io::sink(), "", Flags::empty());
    to_logger(&Logger::new(core), Level::Info, &[&plain]);

    let (core, skipped) = observer::new();
    let wrapped = stdlog::Logger::new(std::io::sink(), "", Flags::empty());
    to_logger_with_skip(&Logger::new(core), Level::Info, 1, &[&wrapped]);

    let line = line!() + 1;
    print_via_helper(&plain, "a");
    print_via_helper(&wrapped, "b");

    assert_caller(&unskipped, 0, "mod.rs", HELPER_PRINT_LINE);
    assert_caller(&skipped, 0, FILE, line + 1);
}

#[test]
fn test_custom_prefix_is_kept_in_message() {
    let (logger, logs) = observed_sugared();
    let custom = stdlog::Logger::new(std::io::stderr(), "CUSTOM:", Flags::TIME);

    to_sugared(&logger, Level::Warn, &[&custom]);
    custom.print("Testing");

    assert_eq!(logs.len(), 1);
    let logged = &logs.all()[0];
    assert_eq!(logged.entry.message, "CUSTOM:Testing");
    assert_eq!(logged.context, myfield());
}

#[test]
fn test_custom_prefix_with_skip_through_wrapper() {
    let (logger, logs) = observed_sugared();
    let custom = stdlog::Logger::new(std::io::stderr(), "CUSTOM:", Flags::TIME);
    let ctx_log = CtxWrapper { logger: &custom };

    to_sugared_with_skip(&logger, Level::Warn, 1, &[&custom]);
    let line = line!() + 1;
    ctx_log.print(&Context, "Testing");

    assert_eq!(logs.all()[0].entry.message, "CUSTOM:Testing");
    assert_caller(&logs, 0, FILE, line);
}

#[test]
fn test_decorations_are_disabled() {
    let (core, logs) = observer::new();
    let simple = stdlog::Logger::new(
        std::io::sink(),
        "P ",
        Flags::STD | Flags::MICROSECONDS | Flags::LONG_FILE | Flags::MSG_PREFIX,
    );

    to_logger(&Logger::new(core), Level::Info, &[&simple]);
    simple.print("hello");

    assert!(simple.flags().is_empty());
    assert_eq!(simple.prefix(), "P ");
    assert_eq!(logs.all()[0].entry.message, "P hello");
}

#[test]
fn test_messages_are_trimmed() {
    let (core, logs) = observer::new();
    let simple = stdlog::Logger::new(std::io::sink(), "", Flags::empty());
    to_logger(&Logger::new(core), Level::Info, &[&simple]);

    let inputs = [
        "plain",
        "  leading",
        "trailing  ",
        "\tboth\n",
        "newline\n",
        "a b  c",
    ];
    for input in inputs {
        simple.print(input);
    }

    let messages: Vec<String> = logs.all().into_iter().map(|l| l.entry.message).collect();
    let expected = ["plain", "leading", "trailing", "both", "newline", "a b  c"];
    assert_eq!(messages, expected);
}

#[test]
fn test_multiple_loggers_one_record_per_print() {
    let (core, logs) = observer::new();
    let first = stdlog::Logger::new(std::io::sink(), "first:", Flags::STD);
    let second = stdlog::Logger::new(std::io::sink(), "second:", Flags::STD);
    let untouched_output = SharedBuffer::default();
    let untouched = stdlog::Logger::new(untouched_output.clone(), "", Flags::empty());

    to_logger(&Logger::new(core), Level::Error, &[&first, &second]);

    first.print("one");
    assert_eq!(logs.len(), 1);

    let line = line!() + 1;
    second.print("two");
    assert_eq!(logs.len(), 2);

    untouched.print("three");
    assert_eq!(logs.len(), 2);
    assert_eq!(untouched_output.contents(), "three\n");

    let messages: Vec<String> = logs.all().into_iter().map(|l| l.entry.message).collect();
    assert_eq!(messages, vec!["first:one", "second:two"]);
    assert_caller(&logs, 1, FILE, line);
}

#[test]
fn test_level_fixed_per_setup_call() {
    let (core, logs) = observer::new();
    let logger = Logger::new(core);
    let quiet = stdlog::Logger::new(std::io::sink(), "", Flags::empty());
    let loud = stdlog::Logger::new(std::io::sink(), "", Flags::empty());

    to_logger(&logger, Level::Debug, &[&quiet]);
    to_logger(&logger, Level::Fatal, &[&loud]);

    quiet.print("ERROR: this is not an error");
    loud.print("debug: this is not debug");

    let levels: Vec<Level> = logs.all().into_iter().map(|l| l.entry.level).collect();
    assert_eq!(levels, vec![Level::Debug, Level::Fatal]);
}

#[test]
fn test_no_fields_without_context() {
    let (core, logs) = observer::new();
    let simple = stdlog::Logger::new(std::io::sink(), "", Flags::empty());

    to_logger(&Logger::new(core), Level::Info, &[&simple]);
    simple.print("bare");
    simple.print("still bare");

    assert!(logs.all().iter().all(|l| l.context.is_empty()));
}

#[test]
fn test_context_fields_unchanged_across_records() {
    let (core, logs) = observer::new();
    let context = vec![Field::new("shard", 7), Field::string("region", "eu")];
    let logger = Logger::new(core).with(context.clone());
    let simple = stdlog::Logger::new(std::io::sink(), "", Flags::empty());

    to_logger(&logger, Level::Info, &[&simple]);
    for i in 0..3 {
        log_print!(simple, "record {}", i);
    }

    assert_eq!(logs.len(), 3);
    assert!(logs.all().iter().all(|l| l.context == context));
    assert_eq!(logs.filter_message("record 2").len(), 1);
}

#[test]
fn test_log_print_macro_attributes_invocation() {
    let (core, logs) = observer::new();
    let simple = stdlog::Logger::new(std::io::sink(), "", Flags::empty());

    to_logger(&Logger::new(core), Level::Info, &[&simple]);
    let line = line!() + 1;
    log_print!(simple, "{} requests served", 42);

    assert_eq!(logs.all()[0].entry.message, "42 requests served");
    assert_caller(&logs, 0, FILE, line);
}

#[test]
fn test_sink_shares_calibrated_depth() {
    let (core, _logs) = observer::new();
    let simple = stdlog::Logger::new(std::io::sink(), "", Flags::empty());

    let sink = to_logger_with_skip(&Logger::new(core), Level::Info, 2, &[&simple]);

    assert_eq!(sink.calibrated_depth(), logroute::calibrate());
    assert_eq!(sink.extra_skip(), 2);
    assert_eq!(sink.failures(), 0);
}

#[test]
fn test_json_core_end_to_end() {
    let output = SharedBuffer::default();
    let logger = Logger::new(JsonCore::new(output.clone())).with(myfield());
    let simple = stdlog::Logger::new(std::io::sink(), "", Flags::STD);

    to_logger(&logger, Level::Warn, &[&simple]);
    let line = line!() + 1;
    simple.print("written as json");

    let contents = output.contents();
    let record: Value = serde_json::from_str(contents.trim_end()).unwrap();
    assert_eq!(record["level"], "warn");
    assert_eq!(record["message"], "written as json");
    assert_eq!(record["fields"]["myfield"], "hassomething");
    assert_eq!(record["caller"]["line"], line);
    assert!(record["caller"]["file"].as_str().unwrap().ends_with(FILE));
}
