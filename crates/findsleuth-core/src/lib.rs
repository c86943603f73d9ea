/// FindSleuth Core — recursive name search engine.
///
/// This crate contains all search logic with zero CLI dependencies.
/// It is designed to be reusable across different frontends.
///
/// # Modules
///
/// - [`scanner`] — Coordinator loop and search tasks.
/// - [`model`] — Query, paths, report and display helpers.
/// - [`platform`] — Directory listing over the real filesystem or memory.
/// - [`config`] — Validated search settings.
/// - [`error`] — Error types.
pub mod config;
pub mod error;
pub mod model;
pub mod platform;
pub mod scanner;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use model::{SearchQuery, SearchReport};
pub use scanner::{search, search_with, start_search, SearchHandle};
