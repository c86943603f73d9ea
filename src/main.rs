//! FindSleuth — parallel recursive name search.
//!
//! Thin binary entry point. All search logic lives in the
//! `findsleuth-core` crate.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::CliArgs;
use findsleuth_core::model::{format_count, format_duration};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Logs go to stderr so stdout stays clean for results.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("FindSleuth starting");

    let config = args.to_config();
    let report = findsleuth_core::search(&config)
        .with_context(|| format!("search of {} failed", config.root.display()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{json}");
        return Ok(());
    }

    if args.paths {
        for path in &report.match_paths {
            println!("{}", path.display());
        }
    }
    println!("{} matches", format_count(report.matches));
    println!("{}", format_duration(report.duration));

    Ok(())
}
