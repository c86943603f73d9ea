/// The name being searched for.
///
/// Fixed before the search starts and shared read-only by every task.
use compact_str::CompactString;
use std::ffi::OsStr;
use std::fmt;

/// Exact entry name to match against directory listings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchQuery(CompactString);

impl SearchQuery {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(CompactString::new(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` if `name` is exactly the query. Names that are not valid
    /// UTF-8 never match.
    #[inline]
    pub fn matches(&self, name: &OsStr) -> bool {
        name.to_str() == Some(self.0.as_str())
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SearchQuery {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SearchQuery {
    fn from(name: String) -> Self {
        Self(CompactString::from(name))
    }
}
