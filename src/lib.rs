#![forbid(unsafe_code)]
//! Pluggable test rules for Rust test harnesses
//!
//! `testrule` lets a test harness adapt how a test body executes based on
//! declarative markers on the test's descriptor. The crate ships one rule:
//! [`RepeatRule`], which runs a marked test body N times in sequence to
//! surface flaky behavior, failing fast on the first failing repetition.
//!
//! ```
//! use testrule::{Action, BoxAction, Marker, RepeatRule, TestDescriptor, TestFailure, TestRule};
//!
//! let descriptor = TestDescriptor::new("test_flaky_cache").with_marker(Marker::repeat_times(10));
//! let body: BoxAction = Box::new(|| -> Result<(), TestFailure> { Ok(()) });
//!
//! let mut action = RepeatRule::new().apply(body, &descriptor);
//! action.evaluate().unwrap(); // runs the body 10 times
//! ```
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `rules` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! Test bodies themselves fail by returning a [`TestFailure`], never by
//! panicking; panic capture is the host harness's concern.

pub mod action;
pub mod descriptor;
pub mod rules;
pub mod runner;

pub use action::{Action, BoxAction, TestFailure};
pub use descriptor::{Marker, TestDescriptor};
pub use rules::{RepeatRule, TestRule, apply_all};
pub use runner::{ConsoleReporter, TestCase, TestReporter, TestResult, TestSummary, run_suite};
