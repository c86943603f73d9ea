/// Messages sent from search tasks to the coordinator.
///
/// Every change to shared search state travels through one of these; the
/// coordinator applies them strictly one at a time.
use crate::model::DirPath;
use std::path::PathBuf;

#[derive(Debug)]
pub(crate) enum TaskMessage {
    /// Hand this subdirectory to a new tracked worker.
    Spawn(DirPath),
    /// An entry named like the query was found at this path.
    Match(PathBuf),
    /// A tracked worker has finished its directory, inline subtrees included.
    WorkerDone,
}
