/// Read-after-completion results of one search.
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Everything the coordinator knows once the last tracked worker is done.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchReport {
    /// Number of entries whose name equals the query.
    pub matches: u64,
    /// Matching paths, in the order the coordinator received them.
    /// Empty unless path collection was requested.
    pub match_paths: Vec<PathBuf>,
    /// Tracked workers admitted after the root.
    pub workers_spawned: u64,
    /// Highest Worker Count observed by the coordinator.
    pub peak_workers: usize,
    /// Wall-clock time from root start to termination.
    pub duration: Duration,
}
