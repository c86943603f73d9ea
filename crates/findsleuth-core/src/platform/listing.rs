/// Directory enumeration — the only filesystem call the search engine makes.
///
/// Search tasks see the filesystem through [`DirectoryLister`] so the engine
/// can run over the real disk ([`FsLister`]) or an in-memory tree
/// ([`super::MemoryLister`]).
use crate::error::{Result, SearchError};
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One immediate entry of a listed directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListedEntry {
    /// Entry name only, not the full path.
    pub name: OsString,
    /// `true` for directories. Symlinks are never reported as directories.
    pub is_dir: bool,
}

impl ListedEntry {
    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Lists the immediate entries of a directory.
///
/// Implementations are shared by every search task, hence `Send + Sync`.
/// Any failure must come back as [`SearchError::Unreadable`]; the caller
/// treats it as an empty directory.
pub trait DirectoryLister: Send + Sync + 'static {
    fn list(&self, path: &Path) -> Result<Vec<ListedEntry>>;
}

/// Lister backed by `std::fs::read_dir`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, path: &Path) -> Result<Vec<ListedEntry>> {
        let unreadable = |source| SearchError::Unreadable {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(unreadable)? {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    debug!("Skipping unreadable entry in {}: {err}", path.display());
                    continue;
                }
            };
            // `DirEntry::file_type` does not traverse symlinks, so a
            // symlinked directory is listed but never descended.
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            entries.push(ListedEntry {
                name: entry.file_name(),
                is_dir,
            });
        }
        Ok(entries)
    }
}
