//! Integration tests for logroute.
//!
//! These tests verify the complete flow from a simple logger print call,
//! through calibration and the redirecting sink, into a structured core.

mod common;
mod default_logger_tests;
mod redirect_tests;
