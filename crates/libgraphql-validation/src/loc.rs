use serde::Serialize;

/// A line/column position within a GraphQL document.
///
/// Very similar to graphql_parser's [Pos](graphql_parser::Pos): both `line`
/// and `column` are 1-based.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}
impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Extracts the first `<line>:<column>` pair that follows an " at " in a
    /// `graphql_parser` error message (e.g. "Parse error at 1:9").
    pub(crate) fn from_parse_error_message(message: &str) -> Option<Self> {
        let (_, rest) = message.split_once(" at ")?;
        let coords = rest.split_whitespace().next()?;
        let (line, column) = coords.split_once(':')?;
        Some(Self::new(line.parse().ok()?, column.parse().ok()?))
    }
}
impl std::convert::From<graphql_parser::Pos> for SourceLocation {
    fn from(pos: graphql_parser::Pos) -> Self {
        Self::new(pos.line, pos.column)
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
