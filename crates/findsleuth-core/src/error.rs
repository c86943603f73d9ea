/// Error types for the search engine.
///
/// Only configuration problems and pool start-up failures ever reach the
/// caller. An unreadable directory is recovered inside the search task that
/// hit it and is never surfaced past a `debug!` log line.
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the core crate.
pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    /// A directory could not be enumerated (missing, permission denied,
    /// not a directory, or any other listing failure).
    #[error("cannot read directory '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("search query must not be empty")]
    EmptyQuery,

    #[error("concurrency ceiling must be at least 1")]
    ZeroCeiling,

    #[error("thread count must be at least 1")]
    ZeroThreads,

    /// The rayon pool backing the search tasks could not be created.
    #[error("failed to build search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to spawn search thread: {0}")]
    SpawnThread(#[source] std::io::Error),

    /// The background search thread panicked before producing a report.
    #[error("search thread terminated abnormally")]
    SearchThread,
}

impl SearchError {
    /// Whether a search can carry on past this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SearchError::Unreadable { .. })
    }
}
