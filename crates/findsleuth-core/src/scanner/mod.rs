/// Scanner module — recursive name search over a self-balancing worker pool.
///
/// A single [`Coordinator`] owns all mutable search state. Search tasks
/// run on a rayon pool and report back over a crossbeam channel; each
/// subdirectory either becomes a new tracked worker (while the live count
/// is under the ceiling) or is searched inline by the task that found it.
pub mod coordinator;
mod message;
mod task;
pub mod worker_count;

pub use coordinator::Coordinator;
pub use worker_count::WorkerCount;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::model::SearchReport;
use crate::platform::{DirectoryLister, FsLister};
use std::thread;
use tracing::info;

/// Search the real filesystem and block until done.
pub fn search(config: &SearchConfig) -> Result<SearchReport> {
    search_with(config, FsLister)
}

/// Search through any [`DirectoryLister`] and block until done.
pub fn search_with<L: DirectoryLister>(config: &SearchConfig, lister: L) -> Result<SearchReport> {
    Ok(Coordinator::new(config, lister)?.run())
}

/// Handle to a search running on a background thread.
pub struct SearchHandle {
    thread: thread::JoinHandle<SearchReport>,
}

impl SearchHandle {
    /// `true` once the coordinator has returned.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the search to complete and take its report.
    pub fn join(self) -> Result<SearchReport> {
        self.thread.join().map_err(|_| SearchError::SearchThread)
    }
}

/// Start a filesystem search on a background thread.
///
/// Configuration and pool errors are reported here, before the thread is
/// spawned; the handle itself can only fail if the thread panics.
pub fn start_search(config: SearchConfig) -> Result<SearchHandle> {
    let coordinator = Coordinator::new(&config, FsLister)?;
    let thread = thread::Builder::new()
        .name("findsleuth-search".into())
        .spawn(move || {
            info!("Search thread started for {}", config.root.display());
            coordinator.run()
        })
        .map_err(SearchError::SpawnThread)?;

    Ok(SearchHandle { thread })
}
