use serde::Serialize;

/// Identifies a [`Phase`](crate::Phase) by its dotted name (e.g.
/// `"Document.Validation.UniqueOperationNames"`).
///
/// Every [`Diagnostic`](crate::Diagnostic) records the `PhaseId` of the phase
/// that produced it, which is what lets assertions scope themselves to the
/// rule under test.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PhaseId(&'static str);
impl PhaseId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}
impl std::fmt::Display for PhaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
