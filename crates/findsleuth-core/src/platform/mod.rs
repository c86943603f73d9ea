/// Filesystem access consumed by the search engine.

pub mod listing;
pub mod memory;

pub use listing::{DirectoryLister, FsLister, ListedEntry};
pub use memory::MemoryLister;
