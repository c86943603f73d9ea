/// Coordinator loop — the single place where search state changes.
///
/// Owns the worker count, the match count and the statistics. Tasks talk
/// to it over one bounded channel (capacity 0 by default, so each send is
/// a rendezvous) and it handles their messages one at a time:
///
/// - `Spawn(path)`: count += 1, start a tracked task on the pool.
/// - `Match(path)`: matches += 1.
/// - `WorkerDone`: count -= 1, return when it reaches zero.
///
/// Every tracked worker sends exactly one `WorkerDone`, after all of its
/// own spawn and match messages, so reaching zero means no task is left
/// that could still send anything.
use crate::config::SearchConfig;
use crate::error::Result;
use crate::model::{DirPath, SearchReport};
use crate::platform::DirectoryLister;
use crate::scanner::message::TaskMessage;
use crate::scanner::task::{TaskContext, TaskRole};
use crate::scanner::worker_count::WorkerCount;
use crossbeam_channel::Receiver;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

pub struct Coordinator<L> {
    ctx: Arc<TaskContext<L>>,
    rx: Receiver<TaskMessage>,
    pool: rayon::ThreadPool,
    root: DirPath,
    collect_paths: bool,
}

impl<L: DirectoryLister> Coordinator<L> {
    /// Validate `config` and set up the pool and mailbox. The worker count
    /// starts at 1, reserving the root worker's slot.
    pub fn new(config: &SearchConfig, lister: L) -> Result<Self> {
        config.validate()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.effective_threads())
            .thread_name(|i| format!("findsleuth-worker-{i}"))
            .build()?;
        let (tx, rx) = crossbeam_channel::bounded(config.channel_capacity);

        let ctx = Arc::new(TaskContext {
            query: config.query.clone(),
            ceiling: config.ceiling,
            workers: WorkerCount::new(1),
            lister,
            tx,
        });

        Ok(Self {
            ctx,
            rx,
            pool,
            root: DirPath::new(config.root.clone()),
            collect_paths: config.collect_paths,
        })
    }

    /// Handle to the live worker count, for observation only.
    pub fn worker_count(&self) -> WorkerCount {
        self.ctx.workers.clone()
    }

    /// Start the root worker and process messages until the last tracked
    /// worker reports done.
    pub fn run(self) -> SearchReport {
        let start = Instant::now();
        info!(
            root = %self.root,
            query = %self.ctx.query,
            ceiling = self.ctx.ceiling,
            threads = self.pool.current_num_threads(),
            "Starting search"
        );

        let mut report = SearchReport {
            peak_workers: self.ctx.workers.get(),
            ..SearchReport::default()
        };
        self.start_worker(self.root.clone());

        loop {
            let msg = match self.rx.recv() {
                Ok(msg) => msg,
                Err(_) => {
                    // Unreachable while `ctx` holds a sender; bail rather than spin.
                    error!("Coordinator mailbox closed with workers outstanding");
                    break;
                }
            };

            match msg {
                TaskMessage::Spawn(path) => {
                    let live = self.ctx.workers.increment();
                    report.workers_spawned += 1;
                    report.peak_workers = report.peak_workers.max(live);
                    self.start_worker(path);
                }
                TaskMessage::Match(path) => {
                    report.matches += 1;
                    if self.collect_paths {
                        report.match_paths.push(path);
                    }
                }
                TaskMessage::WorkerDone => {
                    if self.ctx.workers.decrement() == 0 {
                        break;
                    }
                }
            }
        }

        report.duration = start.elapsed();
        info!(
            matches = report.matches,
            workers_spawned = report.workers_spawned,
            peak_workers = report.peak_workers,
            "Search complete in {:?}",
            report.duration
        );
        report
    }

    fn start_worker(&self, path: DirPath) {
        debug!("Starting tracked worker for {path}");
        let ctx = Arc::clone(&self.ctx);
        self.pool.spawn(move || ctx.search(&path, TaskRole::Tracked));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryLister;
    use std::path::PathBuf;

    fn run(tree: MemoryLister, root: &str, ceiling: usize) -> SearchReport {
        let config = SearchConfig::new(root, "git")
            .with_ceiling(ceiling)
            .with_threads(4)
            .with_collect_paths(true);
        Coordinator::new(&config, tree).unwrap().run()
    }

    /// `/root/{a/{git/}, b/}`
    #[test]
    fn finds_single_nested_match() {
        let mut tree = MemoryLister::new();
        tree.add_dir("/root/a/git").add_dir("/root/b");

        let report = run(tree, "/root", 32);
        assert_eq!(report.matches, 1);
        assert_eq!(report.match_paths, vec![PathBuf::from("/root/a/git")]);
    }

    #[test]
    fn empty_directory_has_no_matches() {
        let mut tree = MemoryLister::new();
        tree.add_dir("/empty");

        let report = run(tree, "/empty", 32);
        assert_eq!(report.matches, 0);
        assert_eq!(report.workers_spawned, 0);
        assert_eq!(report.peak_workers, 1);
    }

    #[test]
    fn unreadable_root_still_terminates() {
        let mut tree = MemoryLister::new();
        tree.add_dir("/locked").deny("/locked");
        assert_eq!(run(tree, "/locked", 32).matches, 0);

        assert_eq!(run(MemoryLister::new(), "/missing", 32).matches, 0);
    }

    #[test]
    fn deep_match_with_ceiling_one() {
        let mut tree = MemoryLister::new();
        tree.add_dir("/d/l1/l2/l3/l4/git");

        for ceiling in [1, 2, 32] {
            assert_eq!(run(tree.clone(), "/d", ceiling).matches, 1, "ceiling {ceiling}");
        }
    }

    #[test]
    fn ceiling_one_never_spawns() {
        let mut tree = MemoryLister::new();
        for i in 0..10 {
            tree.add_file(format!("/w/d{i}/git"));
        }

        let report = run(tree, "/w", 1);
        assert_eq!(report.matches, 10);
        assert_eq!(report.workers_spawned, 0);
        assert_eq!(report.peak_workers, 1);
    }

    #[test]
    fn unreadable_subtree_contributes_nothing() {
        let mut tree = MemoryLister::new();
        tree.add_file("/r/open/git")
            .add_file("/r/locked/git")
            .deny("/r/locked");

        let report = run(tree, "/r", 32);
        assert_eq!(report.matches, 1);
        assert_eq!(report.match_paths, vec![PathBuf::from("/r/open/git")]);
    }

    #[test]
    fn wide_tree_counts_every_match_at_any_ceiling() {
        let mut tree = MemoryLister::new();
        let mut expected = 0u64;
        for i in 0..8 {
            for j in 0..8 {
                tree.add_dir(format!("/t/{i}/{j}"));
                if (i + j) % 3 == 0 {
                    tree.add_file(format!("/t/{i}/{j}/git"));
                    expected += 1;
                }
            }
        }

        for ceiling in [1, 3, 32, 1_000] {
            let report = run(tree.clone(), "/t", ceiling);
            assert_eq!(report.matches, expected, "ceiling {ceiling}");
            assert_eq!(report.match_paths.len() as u64, expected);
        }
    }

    /// Each running task holds at most one stale admission at a time, so
    /// the peak can exceed the ceiling by at most `threads - 1`.
    #[test]
    fn peak_workers_stay_within_soft_ceiling() {
        let mut tree = MemoryLister::new();
        let mut expected = 0u64;
        for i in 0..40 {
            for j in 0..20 {
                tree.add_dir(format!("/s/{i}/{j}"));
                if j == 7 {
                    tree.add_file(format!("/s/{i}/{j}/git"));
                    expected += 1;
                }
            }
        }

        for threads in [1, 2, 8] {
            for ceiling in [1, 2, 5, 32] {
                for _ in 0..5 {
                    let config = SearchConfig::new("/s", "git")
                        .with_ceiling(ceiling)
                        .with_threads(threads);
                    let report = Coordinator::new(&config, tree.clone()).unwrap().run();
                    assert_eq!(report.matches, expected, "ceiling {ceiling}, threads {threads}");
                    assert!(
                        report.peak_workers <= ceiling - 1 + threads,
                        "peak {} over bound at ceiling {ceiling}, threads {threads}",
                        report.peak_workers
                    );
                }
            }
        }
    }

    #[test]
    fn buffered_mailbox_gives_same_result() {
        let mut tree = MemoryLister::new();
        tree.add_dir("/b/x/git").add_dir("/b/y/git").add_dir("/b/z");

        let config = SearchConfig::new("/b", "git").with_channel_capacity(64);
        let report = Coordinator::new(&config, tree).unwrap().run();
        assert_eq!(report.matches, 2);
        assert!(report.match_paths.is_empty());
    }

    #[test]
    fn worker_count_returns_to_zero() {
        let mut tree = MemoryLister::new();
        tree.add_dir("/z/a/b").add_dir("/z/c");

        let coordinator = Coordinator::new(&SearchConfig::new("/z", "git"), tree).unwrap();
        let workers = coordinator.worker_count();
        assert_eq!(workers.get(), 1);
        coordinator.run();
        assert_eq!(workers.get(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SearchConfig::new("/r", "git").with_ceiling(0);
        assert!(Coordinator::new(&config, MemoryLister::new()).is_err());
    }
}
