//! Command-line arguments for the `findsleuth` binary.

use clap::Parser;
use findsleuth_core::config::DEFAULT_CEILING;
use findsleuth_core::SearchConfig;
use std::path::PathBuf;

/// Parallel recursive search for files and directories by exact name
#[derive(Parser, Debug, Clone)]
#[command(
    name = "findsleuth",
    version,
    about = "Parallel recursive search for files and directories by exact name",
    after_help = "EXAMPLES:\n    \
        findsleuth git ~/src\n    \
        findsleuth Cargo.toml / -c 64 -p\n    \
        findsleuth node_modules . --json"
)]
pub struct CliArgs {
    /// Entry name to search for (exact match)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Directory to start from
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Soft limit on simultaneously live search workers
    #[arg(short = 'c', long, default_value_t = DEFAULT_CEILING, value_name = "NUM")]
    pub ceiling: usize,

    /// Worker threads (defaults to the number of logical CPUs)
    #[arg(short = 't', long, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Print every matching path
    #[arg(short = 'p', long)]
    pub paths: bool,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose logging on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn to_config(&self) -> SearchConfig {
        let mut config = SearchConfig::new(self.root.clone(), self.query.as_str())
            .with_ceiling(self.ceiling)
            .with_collect_paths(self.paths || self.json);
        if let Some(threads) = self.threads {
            config = config.with_threads(threads);
        }
        config
    }
}
