/// Data model for a single search invocation.
///
/// Nothing here outlives one call to the scanner.
pub mod dir_path;
pub mod format;
pub mod query;
pub mod report;

pub use dir_path::DirPath;
pub use format::{format_count, format_duration};
pub use query::SearchQuery;
pub use report::SearchReport;
