/// In-memory directory tree implementing [`DirectoryLister`].
///
/// Useful for embedding the engine over non-disk data and for exercising
/// the coordinator with trees that are awkward to build on a real
/// filesystem (unreadable roots, very deep chains).
use super::listing::{DirectoryLister, ListedEntry};
use crate::error::{Result, SearchError};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone)]
pub struct MemoryLister {
    dirs: HashMap<PathBuf, Vec<ListedEntry>>,
    denied: HashSet<PathBuf>,
}

impl MemoryLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory, creating any missing ancestors.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.ensure_dir(path.as_ref());
        self
    }

    /// Add a non-directory entry, creating any missing ancestors.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            self.ensure_dir(parent);
            if let Some(entries) = self.dirs.get_mut(parent) {
                entries.push(ListedEntry::file(name));
            }
        }
        self
    }

    /// Make listing `path` fail with a permission error. The directory
    /// still shows up in its parent's listing.
    pub fn deny(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.denied.insert(path.as_ref().to_path_buf());
        self
    }

    fn ensure_dir(&mut self, path: &Path) {
        if self.dirs.contains_key(path) {
            return;
        }
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            self.ensure_dir(parent);
            if let Some(entries) = self.dirs.get_mut(parent) {
                entries.push(ListedEntry::dir(name));
            }
        }
        self.dirs.insert(path.to_path_buf(), Vec::new());
    }
}

impl DirectoryLister for MemoryLister {
    fn list(&self, path: &Path) -> Result<Vec<ListedEntry>> {
        let unreadable = |kind: io::ErrorKind| SearchError::Unreadable {
            path: path.to_path_buf(),
            source: io::Error::from(kind),
        };
        if self.denied.contains(path) {
            return Err(unreadable(io::ErrorKind::PermissionDenied));
        }
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| unreadable(io::ErrorKind::NotFound))
    }
}
