/// CLI argument definitions for the `serp` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;
use crate::config::Plan;

/// Top-level CLI parser with global logging and config flags.
#[derive(Parser)]
#[command(name = "serp", version, about = "Search performance scoring tools")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./serpscore.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Diagnose pages: score, issues and opportunities per page
    #[command(long_about = cli_help::DIAGNOSE)]
    Diagnose {
        /// JSON file with page metrics
        file: PathBuf,

        /// Site identifier (default: the file's "site" field, else "default")
        #[arg(long)]
        site: Option<String>,

        /// Plan that caps how many pages are scored (default: from config)
        #[arg(long, value_enum)]
        plan: Option<Plan>,

        /// Show only the N worst pages (default: from config, 20)
        #[arg(long)]
        top: Option<usize>,

        /// List issues and opportunities under each page
        #[arg(long)]
        details: bool,

        /// Upsert results into this JSON score store
        #[arg(long)]
        store: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List stored page scores for a site, worst first
    Scores {
        /// JSON score store written by `serp diagnose --store`
        #[arg(long)]
        store: PathBuf,

        /// Site identifier
        #[arg(long, default_value = "default")]
        site: String,

        /// Show only the N worst pages (default: from config, 20)
        #[arg(long)]
        top: Option<usize>,

        /// List issues and opportunities under each page
        #[arg(long)]
        details: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score site health from a totals row
    #[command(long_about = cli_help::SITE)]
    Site {
        /// JSON file with site totals
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare the last 7 days of traffic with the previous 7
    #[command(long_about = cli_help::TRENDS)]
    Trends {
        /// JSON file with daily traffic points
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the benchmark CTR curves
    #[command(long_about = cli_help::BENCHMARK)]
    Benchmark {
        /// Last position to print (default: 30)
        #[arg(long, default_value = "30")]
        max_position: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: Shell,
    },
}
