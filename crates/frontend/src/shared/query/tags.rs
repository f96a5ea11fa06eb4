use std::fmt;

/// Label attached to a cached result. A mutation names the tags it touches and
/// every query that provided one of them goes stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheTag {
    kind: &'static str,
    id: String,
}

impl CacheTag {
    /// Id used for "the collection as a whole"
    pub const LIST: &'static str = "LIST";

    pub fn new(kind: &'static str, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn list(kind: &'static str) -> Self {
        Self::new(kind, Self::LIST)
    }
}

impl fmt::Display for CacheTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
