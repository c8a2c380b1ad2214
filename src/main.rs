mod benchmark;
mod cli;
mod cli_help;
mod config;
mod diagnose;
mod error;
mod metrics;
mod report_helpers;
mod site;
mod store;
mod trends;

use std::error::Error;
use std::io;
use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::Config;
use diagnose::DiagnoseOptions;

/// Log to stderr so JSON on stdout stays clean. RUST_LOG wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = Config::load(cli.config.as_deref(), Path::new("."))?;

    match cli.command {
        Commands::Diagnose {
            file,
            site,
            plan,
            top,
            details,
            store,
            json,
        } => {
            let plan = plan.unwrap_or(config.default_plan);
            let cap = config.plans.cap(plan);
            tracing::debug!(plan = plan.as_str(), cap, "page cap");
            diagnose::run(&DiagnoseOptions {
                input: &file,
                site: site.as_deref(),
                plan,
                cap,
                top: top.unwrap_or(config.report.top),
                details,
                store: store.as_deref(),
                json,
            })
        }
        Commands::Scores {
            store,
            site,
            top,
            details,
            json,
        } => store::run(
            &store,
            &site,
            top.unwrap_or(config.report.top),
            details,
            json,
        ),
        Commands::Site { file, json } => site::run(&file, json),
        Commands::Trends { file, json } => trends::run(&file, json),
        Commands::Benchmark { max_position, json } => benchmark::run(max_position, json),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "serp", &mut io::stdout());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
