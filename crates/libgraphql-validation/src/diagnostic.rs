use crate::loc::SourceLocation;
use crate::phase::PhaseId;
use serde::Serialize;
use smallvec::SmallVec;

/// A validation error attached to a [`Node`](crate::Node) by the phase that
/// detected it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostic {
    /// The phase (usually a validation rule) that produced this diagnostic.
    phase: PhaseId,

    message: String,

    /// Every source location relevant to this diagnostic. Most diagnostics
    /// have exactly one; rules that report conflicts between several
    /// definitions list all of them.
    locations: SmallVec<[SourceLocation; 1]>,
}

impl Diagnostic {
    pub fn new(phase: PhaseId, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: message.into(),
            locations: SmallVec::new(),
        }
    }

    /// Creates a diagnostic pointing at a single (optional) location.
    pub fn at(
        phase: PhaseId,
        message: impl Into<String>,
        location: Option<SourceLocation>,
    ) -> Self {
        Self::new(phase, message).with_locations(location)
    }

    pub fn with_locations(
        mut self,
        locations: impl IntoIterator<Item = SourceLocation>,
    ) -> Self {
        self.locations.extend(locations);
        self
    }

    pub fn phase(&self) -> PhaseId {
        self.phase
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn locations(&self) -> &[SourceLocation] {
        self.locations.as_slice()
    }

    /// Returns true if any of this diagnostic's locations is on `line`.
    pub fn has_line(&self, line: usize) -> bool {
        self.locations.iter().any(|loc| loc.line == line)
    }
}
impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}
