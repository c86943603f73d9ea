/// A directory handed to a search task.
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// Path of a directory to scan. Children are formed by appending exactly
/// one entry name, so a task never re-parses or re-normalises a path it
/// received.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirPath(PathBuf);

impl DirPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Path of the entry `name` inside this directory.
    #[inline]
    pub fn child(&self, name: &OsStr) -> DirPath {
        DirPath(self.0.join(name))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl fmt::Display for DirPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
