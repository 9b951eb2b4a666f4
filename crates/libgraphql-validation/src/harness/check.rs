use crate::AttrValue;
use crate::Node;
use indexmap::IndexMap;

/// An extra condition the node carrying an expected diagnostic must meet.
pub enum Check {
    /// No extra condition.
    None,

    /// Each listed attribute of the node equals the given value.
    FieldEquals(IndexMap<String, AttrValue>),

    /// An arbitrary condition over the node.
    Predicate(Box<dyn Fn(&Node) -> bool + Send + Sync>),
}
impl Check {
    pub fn field_equals<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        Self::FieldEquals(
            fields.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    pub fn predicate(predicate: impl Fn(&Node) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Box::new(predicate))
    }

    pub fn matches(&self, node: &Node) -> bool {
        match self {
            Self::None => true,
            Self::FieldEquals(fields) =>
                fields.iter().all(|(name, expected)| node.attr(name) == Some(expected)),
            Self::Predicate(predicate) => predicate(node),
        }
    }
}
impl std::default::Default for Check {
    fn default() -> Self {
        Self::None
    }
}
impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "Check::None"),
            Self::FieldEquals(fields) =>
                f.debug_tuple("Check::FieldEquals").field(fields).finish(),
            Self::Predicate(_) => write!(f, "Check::Predicate(..)"),
        }
    }
}
impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::FieldEquals(fields) => write!(
                f,
                "with {}",
                fields.iter()
                    .map(|(name, value)| format!("{name} = {value}"))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Predicate(_) => write!(f, "matching a custom predicate"),
        }
    }
}
