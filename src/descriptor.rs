//! Test metadata: descriptors and markers
//!
//! A [`TestDescriptor`] is the metadata a rule sees for a test case: its
//! name and any declarative markers attached to it. Markers are declared
//! when the test case is defined and never mutated afterwards; rules only
//! read them.

// ============================================================================
// Markers
// ============================================================================

/// A declarative tag attached to a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Marker {
    /// Run the test body `count` times in sequence, fail-fast.
    ///
    /// The count is unsigned, so a negative repetition count cannot be
    /// declared. A count of 1 is behaviorally identical to no marker;
    /// a count of 0 means the body runs zero times and the test passes.
    Repeat { count: u32 },
}

impl Marker {
    /// The default repeat marker (`count == 1`).
    pub fn repeat() -> Self {
        Marker::Repeat { count: 1 }
    }

    /// A repeat marker with an explicit count.
    pub fn repeat_times(count: u32) -> Self {
        Marker::Repeat { count }
    }
}

// ============================================================================
// Descriptor
// ============================================================================

/// Metadata describing one test case.
#[derive(Debug, Clone)]
pub struct TestDescriptor {
    name: String,
    markers: Vec<Marker>,
}

impl TestDescriptor {
    /// Descriptor with no markers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
        }
    }

    /// Attach a marker. Descriptors are built once, before execution.
    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Look up the repeat marker, if any.
    ///
    /// If the marker was attached more than once the first one wins,
    /// matching "a marker is declared once per test" expectations without
    /// making duplicates an error.
    pub fn repeat_count(&self) -> Option<u32> {
        self.markers.iter().find_map(|m| match m {
            Marker::Repeat { count } => Some(*count),
        })
    }
}
