//! Pluggable test rules
//!
//! A [`TestRule`] adapts a test's action based on its descriptor: given
//! the action for "run this test once" and the test's metadata, it
//! returns the action that should actually execute. A rule that does not
//! apply to a test returns the input action unchanged.
//!
//! Rules compose by plain function application: [`apply_all`] folds a
//! slice of rules over an action, first rule innermost. There is no
//! registration machinery; the host runner decides which rules it holds
//! and applies them per test.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod repeat;

pub use repeat::RepeatRule;

use crate::action::BoxAction;
use crate::descriptor::TestDescriptor;

// ============================================================================
// Rule seam
// ============================================================================

/// Adapt a test's action based on its descriptor.
///
/// Each `apply` call is an independent, stateless decision; rules hold
/// configuration, never per-test state.
pub trait TestRule {
    /// Given the action for one run of the test and the test's metadata,
    /// return the action to execute.
    fn apply(&self, action: BoxAction, descriptor: &TestDescriptor) -> BoxAction;
}

/// Compose `rules` over `action`, first rule innermost.
pub fn apply_all(action: BoxAction, rules: &[&dyn TestRule], descriptor: &TestDescriptor) -> BoxAction {
    rules
        .iter()
        .fold(action, |action, rule| rule.apply(action, descriptor))
}
