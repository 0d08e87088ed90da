//! The test execution abstraction
//!
//! A test body is an [`Action`]: one `evaluate` operation meaning "run
//! this test once", which may succeed or fail. Rules consume and produce
//! boxed actions, so any `FnMut` closure returning a result is usable as
//! a test body directly.

use std::error::Error;

use thiserror::Error as ThisError;

// ============================================================================
// Failure type
// ============================================================================

/// Failure raised by a test body.
///
/// There is exactly one failure category: whatever the wrapped body
/// reports. Rules never rewrap or aggregate a `TestFailure`; the first
/// failure propagates to the caller unchanged.
#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct TestFailure {
    /// User-facing failure message (assertion text, panic message, ...)
    pub message: String,
    /// Underlying error, when the body failed on something other than
    /// an assertion
    #[source]
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl TestFailure {
    /// Failure with a message only (the assertion case).
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Failure caused by an underlying error.
    pub fn caused_by(message: impl Into<String>, source: impl Error + Send + Sync + 'static) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// ============================================================================
// Action trait
// ============================================================================

/// An executable unit representing "run this test once".
///
/// `evaluate` takes `&mut self` so bodies may own mutable state (counters,
/// scratch buffers) without interior mutability. Each call is one full run
/// of the test body.
pub trait Action {
    /// Run the test body once.
    fn evaluate(&mut self) -> Result<(), TestFailure>;
}

/// Boxed action, the unit rules consume and produce.
pub type BoxAction = Box<dyn Action>;

impl<F> Action for F
where
    F: FnMut() -> Result<(), TestFailure>,
{
    fn evaluate(&mut self) -> Result<(), TestFailure> {
        self()
    }
}
