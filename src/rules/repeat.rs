//! The repeat rule
//!
//! Runs a test body N times in strict sequence when its descriptor
//! carries a repeat marker. This is repetition for flakiness detection,
//! not retry for resilience: the first failing repetition aborts the
//! remaining ones and propagates unchanged.

use crate::action::{Action, BoxAction, TestFailure};
use crate::descriptor::TestDescriptor;
use crate::rules::TestRule;

/// Honors the repeat marker on a test descriptor.
///
/// - No marker, or a marker with count 1: the input action is returned
///   unchanged. Zero overhead, zero behavior change.
/// - Count N >= 2: the returned action evaluates the inner action exactly
///   N times in order, fail-fast.
/// - Count 0: the returned action evaluates the inner action zero times
///   and succeeds. A warning is emitted, since a zero count is almost
///   certainly a declaration mistake.
#[derive(Debug, Default)]
pub struct RepeatRule;

impl RepeatRule {
    pub fn new() -> Self {
        Self
    }
}

impl TestRule for RepeatRule {
    fn apply(&self, action: BoxAction, descriptor: &TestDescriptor) -> BoxAction {
        match descriptor.repeat_count() {
            // Count 1 is behaviorally identical to no marker at all.
            None | Some(1) => action,
            Some(0) => {
                tracing::warn!(test = descriptor.name(), "repeat count is 0; body will not run");
                Box::new(RepeatAction { inner: action, count: 0 })
            }
            Some(count) => {
                tracing::debug!(test = descriptor.name(), count, "repeating test body");
                Box::new(RepeatAction { inner: action, count })
            }
        }
    }
}

/// Wrapping action built by [`RepeatRule`]: one inner action paired with
/// a repetition count. Created per test, discarded after the test runs.
struct RepeatAction {
    inner: BoxAction,
    count: u32,
}

impl Action for RepeatAction {
    fn evaluate(&mut self) -> Result<(), TestFailure> {
        for repetition in 1..=self.count {
            tracing::trace!(repetition, total = self.count, "repetition start");
            self.inner.evaluate()?;
        }
        Ok(())
    }
}
