use crate::Diagnostic;

/// The source line(s) an [`Expectation`](crate::harness::Expectation)
/// requires a diagnostic to point at.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Line {
    /// Any location (or none at all) is accepted.
    #[default]
    Any,

    /// At least one of the diagnostic's locations is on this line.
    At(usize),

    /// For *each* of these lines, at least one of the diagnostic's locations
    /// is on that line.
    All(Vec<usize>),
}
impl Line {
    pub fn matches(&self, diagnostic: &Diagnostic) -> bool {
        match self {
            Self::Any => true,
            Self::At(line) => diagnostic.has_line(*line),
            Self::All(lines) => lines.iter().all(|line| diagnostic.has_line(*line)),
        }
    }
}
impl std::convert::From<usize> for Line {
    fn from(line: usize) -> Self {
        Self::At(line)
    }
}
impl std::convert::From<Option<usize>> for Line {
    fn from(line: Option<usize>) -> Self {
        line.map_or(Self::Any, Self::At)
    }
}
impl std::convert::From<Vec<usize>> for Line {
    fn from(lines: Vec<usize>) -> Self {
        Self::All(lines)
    }
}
impl<const N: usize> std::convert::From<[usize; N]> for Line {
    fn from(lines: [usize; N]) -> Self {
        Self::All(lines.to_vec())
    }
}
impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "any line"),
            Self::At(line) => write!(f, "line {line}"),
            Self::All(lines) => write!(
                f,
                "lines {}",
                lines.iter()
                    .map(|line| line.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}
