/// Runtime configuration for one search.
///
/// Built by the caller (the CLI, a test, an embedding application) and
/// checked once with [`SearchConfig::validate`] before any task starts.
use crate::error::{Result, SearchError};
use crate::model::SearchQuery;
use std::path::PathBuf;

/// Default soft limit on simultaneously live tracked workers.
pub const DEFAULT_CEILING: usize = 32;

/// Default coordinator mailbox capacity. Zero makes every send a
/// rendezvous with the coordinator.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 0;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Directory the root worker starts in.
    pub root: PathBuf,
    pub query: SearchQuery,
    /// Concurrency Ceiling used by the admission decision.
    pub ceiling: usize,
    /// Size of the thread pool running search tasks. `None` means one
    /// thread per logical CPU.
    pub threads: Option<usize>,
    /// Record every matching path in the report, not just the count.
    pub collect_paths: bool,
    pub channel_capacity: usize,
}

impl SearchConfig {
    pub fn new(root: impl Into<PathBuf>, query: impl Into<SearchQuery>) -> Self {
        Self {
            root: root.into(),
            query: query.into(),
            ceiling: DEFAULT_CEILING,
            threads: None,
            collect_paths: false,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    pub fn with_ceiling(mut self, ceiling: usize) -> Self {
        self.ceiling = ceiling;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_collect_paths(mut self, collect: bool) -> Self {
        self.collect_paths = collect;
        self
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    /// Number of pool threads actually used.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }

    /// Reject settings the engine cannot run with.
    ///
    /// The root path is deliberately not checked here: an unreadable root
    /// is a normal search that finds nothing.
    pub fn validate(&self) -> Result<()> {
        if self.query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        if self.ceiling == 0 {
            return Err(SearchError::ZeroCeiling);
        }
        if self.threads == Some(0) {
            return Err(SearchError::ZeroThreads);
        }
        Ok(())
    }
}
