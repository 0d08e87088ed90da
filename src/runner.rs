//! Minimal suite runner
//!
//! ## TestReporter Trait
//!
//! The runner uses a `TestReporter` trait to separate reporting from
//! execution, so custom output formats (JSON, TAP, etc.) are a trait
//! impl away. [`ConsoleReporter`] is the default.
//!
//! ## Control flow
//!
//! For each case the runner takes the action for "run this test once",
//! passes it through the configured rules with [`apply_all`], and
//! executes whatever action comes back. Rules see the raw body; the
//! runner only ever evaluates the composed action.
//!
//! Test discovery and registration live with the host; this runner
//! executes the cases it is handed, in order, on the calling thread.

use std::time::{Duration, Instant};

use crate::action::{BoxAction, TestFailure};
use crate::descriptor::TestDescriptor;
use crate::rules::{TestRule, apply_all};

// ============================================================================
// Cases and results
// ============================================================================

/// One test: its metadata plus the action that runs the body once.
pub struct TestCase {
    pub descriptor: TestDescriptor,
    pub action: BoxAction,
}

impl TestCase {
    pub fn new(descriptor: TestDescriptor, action: BoxAction) -> Self {
        Self { descriptor, action }
    }
}

/// Result of running a single test.
#[derive(Debug)]
pub enum TestResult {
    Passed(Duration),
    Failed(Duration, TestFailure),
}

impl TestResult {
    pub fn is_failed(&self) -> bool {
        matches!(self, TestResult::Failed(_, _))
    }
}

/// Summary of a suite run.
#[derive(Debug)]
pub struct TestSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration: Duration,
}

// ============================================================================
// Test Reporter Trait
// ============================================================================

/// Trait for reporting test execution results.
///
/// Implement this trait to customize test output format (JSON, TAP, etc.)
pub trait TestReporter {
    /// Called when a test run begins
    fn on_test_start(&mut self, _descriptor: &TestDescriptor) {}

    /// Called when a test completes
    fn on_test_complete(&mut self, descriptor: &TestDescriptor, result: &TestResult);

    /// Called when all tests have completed
    fn on_run_complete(&mut self, summary: &TestSummary);
}

/// Default console reporter (pytest-style)
#[derive(Default)]
pub struct ConsoleReporter {
    pub verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl TestReporter for ConsoleReporter {
    fn on_test_start(&mut self, descriptor: &TestDescriptor) {
        if self.verbose {
            eprint!("{} ... ", descriptor.name());
        }
    }

    fn on_test_complete(&mut self, descriptor: &TestDescriptor, result: &TestResult) {
        let status = match result {
            TestResult::Passed(d) => {
                if self.verbose {
                    format!("\x1b[32mPASSED\x1b[0m ({:.0}ms)", d.as_millis())
                } else {
                    "\x1b[32m.\x1b[0m".to_string()
                }
            }
            TestResult::Failed(d, _) => {
                if self.verbose {
                    format!("\x1b[31mFAILED\x1b[0m ({:.0}ms)", d.as_millis())
                } else {
                    "\x1b[31mF\x1b[0m".to_string()
                }
            }
        };

        if self.verbose {
            eprintln!("{}", status);
        } else {
            eprint!("{}", status);
        }

        // Print failure details
        if let TestResult::Failed(_, error) = result {
            eprintln!("\n\x1b[31m{}\x1b[0m", descriptor.name());
            eprintln!("{}", error);
        }
    }

    fn on_run_complete(&mut self, summary: &TestSummary) {
        if !self.verbose {
            eprintln!();
        }
        eprintln!();

        let mut parts = Vec::new();
        if summary.passed > 0 {
            parts.push(format!("\x1b[32m{} passed\x1b[0m", summary.passed));
        }
        if summary.failed > 0 {
            parts.push(format!("\x1b[31m{} failed\x1b[0m", summary.failed));
        }
        if parts.is_empty() {
            parts.push("no tests run".to_string());
        }

        eprintln!(
            "====== {} in {:.2}s ======",
            parts.join(", "),
            summary.duration.as_secs_f64()
        );
    }
}

// ============================================================================
// Suite execution
// ============================================================================

/// Run every case through `rules`, reporting as it goes.
///
/// Cases run sequentially on the calling thread. With `stop_on_fail`,
/// the run ends after the first failing case; later cases never execute
/// and are not counted in the summary total.
pub fn run_suite(
    cases: Vec<TestCase>,
    rules: &[&dyn TestRule],
    reporter: &mut dyn TestReporter,
    stop_on_fail: bool,
) -> TestSummary {
    let run_start = Instant::now();
    let mut passed = 0;
    let mut failed = 0;
    let mut total = 0;

    for case in cases {
        reporter.on_test_start(&case.descriptor);

        let mut action = apply_all(case.action, rules, &case.descriptor);

        let start = Instant::now();
        let result = match action.evaluate() {
            Ok(()) => TestResult::Passed(start.elapsed()),
            Err(failure) => TestResult::Failed(start.elapsed(), failure),
        };

        total += 1;
        match &result {
            TestResult::Passed(_) => passed += 1,
            TestResult::Failed(_, _) => failed += 1,
        }

        let stop = stop_on_fail && result.is_failed();
        reporter.on_test_complete(&case.descriptor, &result);
        if stop {
            break;
        }
    }

    let summary = TestSummary {
        total,
        passed,
        failed,
        duration: run_start.elapsed(),
    };
    reporter.on_run_complete(&summary);
    summary
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::descriptor::Marker;
    use crate::rules::RepeatRule;

    /// Reporter that only records callback order, for runner tests.
    #[derive(Default)]
    struct RecordingReporter {
        started: Vec<String>,
        completed: Vec<(String, bool)>,
        summaries: usize,
    }

    impl TestReporter for RecordingReporter {
        fn on_test_start(&mut self, descriptor: &TestDescriptor) {
            self.started.push(descriptor.name().to_string());
        }

        fn on_test_complete(&mut self, descriptor: &TestDescriptor, result: &TestResult) {
            self.completed.push((descriptor.name().to_string(), result.is_failed()));
        }

        fn on_run_complete(&mut self, _summary: &TestSummary) {
            self.summaries += 1;
        }
    }

    fn passing_case(name: &str) -> TestCase {
        TestCase::new(
            TestDescriptor::new(name),
            Box::new(|| -> Result<(), TestFailure> { Ok(()) }),
        )
    }

    fn failing_case(name: &str) -> TestCase {
        TestCase::new(
            TestDescriptor::new(name),
            Box::new(|| -> Result<(), TestFailure> { Err(TestFailure::new("boom")) }),
        )
    }

    #[test]
    fn summary_matches_executed_cases() {
        let mut reporter = RecordingReporter::default();
        let repeat = RepeatRule::new();

        let summary = run_suite(
            vec![passing_case("test_a"), failing_case("test_b"), passing_case("test_c")],
            &[&repeat],
            &mut reporter,
            false,
        );

        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(reporter.started, vec!["test_a", "test_b", "test_c"]);
        assert_eq!(reporter.summaries, 1);
    }

    #[test]
    fn stop_on_fail_skips_remaining_cases() {
        let mut reporter = RecordingReporter::default();

        let summary = run_suite(
            vec![failing_case("test_first"), passing_case("test_never_runs")],
            &[],
            &mut reporter,
            true,
        );

        assert_eq!(summary.total, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(reporter.started, vec!["test_first"]);
    }

    #[test]
    fn repeat_marker_is_honored_through_the_runner() {
        let counter = Rc::new(Cell::new(0));
        let body_counter = Rc::clone(&counter);

        let case = TestCase::new(
            TestDescriptor::new("test_repeated").with_marker(Marker::repeat_times(4)),
            Box::new(move || -> Result<(), TestFailure> {
                body_counter.set(body_counter.get() + 1);
                Ok(())
            }),
        );

        let mut reporter = RecordingReporter::default();
        let repeat = RepeatRule::new();
        let summary = run_suite(vec![case], &[&repeat], &mut reporter, false);

        assert_eq!(summary.passed, 1);
        assert_eq!(counter.get(), 4);
    }
}
