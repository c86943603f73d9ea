/// Search task — lists one directory, reports matches, and hands each
/// subdirectory either to a new tracked worker or to itself.
use crate::model::{DirPath, SearchQuery};
use crate::platform::{DirectoryLister, ListedEntry};
use crate::scanner::message::TaskMessage;
use crate::scanner::worker_count::WorkerCount;
use crossbeam_channel::Sender;
use tracing::{debug, trace, warn};

/// Whether an invocation owes the coordinator a done signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskRole {
    /// Registered in the worker count; sends `WorkerDone` when finished.
    Tracked,
    /// Runs on the stack of a tracked worker; finishes silently.
    Inline,
}

/// State shared read-only by every task of one search.
pub(crate) struct TaskContext<L> {
    pub(crate) query: SearchQuery,
    pub(crate) ceiling: usize,
    pub(crate) workers: WorkerCount,
    pub(crate) lister: L,
    pub(crate) tx: Sender<TaskMessage>,
}

impl<L: DirectoryLister> TaskContext<L> {
    /// Search `path`. A listing failure makes the directory count as empty.
    pub(crate) fn search(&self, path: &DirPath, role: TaskRole) {
        match self.lister.list(path.as_path()) {
            Ok(entries) => {
                for entry in entries {
                    self.visit(path, entry);
                }
            }
            Err(err) => debug!("{err}; treating as empty"),
        }

        if role == TaskRole::Tracked {
            self.send(TaskMessage::WorkerDone);
        }
    }

    fn visit(&self, parent: &DirPath, entry: ListedEntry) {
        let is_match = self.query.matches(&entry.name);
        if !is_match && !entry.is_dir {
            return;
        }

        let child = parent.child(&entry.name);
        if is_match {
            self.send(TaskMessage::Match(child.as_path().to_path_buf()));
        }
        if !entry.is_dir {
            return;
        }

        if self.workers.admits(self.ceiling) {
            trace!("Requesting worker for {child}");
            self.send(TaskMessage::Spawn(child));
        } else {
            trace!("Pool saturated, searching {child} inline");
            self.search(&child, TaskRole::Inline);
        }
    }

    fn send(&self, msg: TaskMessage) {
        // The coordinator keeps a sender alive until it returns, so this
        // only fails if it has already gone away.
        if let Err(err) = self.tx.send(msg) {
            warn!("Coordinator unavailable, dropping {:?}", err.into_inner());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryLister;
    use crossbeam_channel::{unbounded, Receiver};
    use std::path::PathBuf;

    fn context(lister: MemoryLister, ceiling: usize) -> (TaskContext<MemoryLister>, Receiver<TaskMessage>) {
        let (tx, rx) = unbounded();
        let ctx = TaskContext {
            query: SearchQuery::new("git"),
            ceiling,
            workers: WorkerCount::new(1),
            lister,
            tx,
        };
        (ctx, rx)
    }

    fn sample_tree() -> MemoryLister {
        let mut tree = MemoryLister::new();
        tree.add_dir("/r/a/git").add_dir("/r/b").add_file("/r/b/notes");
        tree
    }

    #[test]
    fn saturated_pool_recurses_inline() {
        let (ctx, rx) = context(sample_tree(), 1);
        ctx.search(&DirPath::new("/r"), TaskRole::Tracked);
        drop(ctx);

        let msgs: Vec<_> = rx.iter().collect();
        assert_eq!(msgs.len(), 2, "{msgs:?}");
        assert!(matches!(&msgs[0], TaskMessage::Match(p) if p == &PathBuf::from("/r/a/git")));
        assert!(matches!(msgs[1], TaskMessage::WorkerDone));
    }

    #[test]
    fn free_slots_request_workers() {
        let (ctx, rx) = context(sample_tree(), 8);
        ctx.search(&DirPath::new("/r"), TaskRole::Tracked);
        drop(ctx);

        let spawns: Vec<_> = rx
            .iter()
            .filter_map(|m| match m {
                TaskMessage::Spawn(p) => Some(p.into_path_buf()),
                _ => None,
            })
            .collect();
        assert_eq!(spawns.len(), 2);
        assert!(spawns.contains(&PathBuf::from("/r/a")));
        assert!(spawns.contains(&PathBuf::from("/r/b")));
    }

    #[test]
    fn inline_invocation_sends_no_done() {
        let (ctx, rx) = context(sample_tree(), 1);
        ctx.search(&DirPath::new("/r/b"), TaskRole::Inline);
        drop(ctx);
        assert_eq!(rx.iter().count(), 0);
    }

    #[test]
    fn unreadable_tracked_dir_still_reports_done() {
        let mut tree = MemoryLister::new();
        tree.add_dir("/r").deny("/r");
        let (ctx, rx) = context(tree, 4);
        ctx.search(&DirPath::new("/r"), TaskRole::Tracked);
        drop(ctx);

        let msgs: Vec<_> = rx.iter().collect();
        assert_eq!(msgs.len(), 1);
        assert!(matches!(msgs[0], TaskMessage::WorkerDone));
    }

    #[test]
    fn matching_directory_is_reported_and_descended() {
        let mut tree = MemoryLister::new();
        tree.add_file("/r/git/git");
        let (ctx, rx) = context(tree, 1);
        ctx.search(&DirPath::new("/r"), TaskRole::Tracked);
        drop(ctx);

        let matches = rx
            .iter()
            .filter(|m| matches!(m, TaskMessage::Match(_)))
            .count();
        assert_eq!(matches, 2);
    }
}
