//! Page diagnostics (`serp diagnose` command).
//!
//! Loads per-page metrics, runs the diagnostic engine over the pages the
//! plan allows, prints the summary and the worst pages, and optionally
//! upserts the results into a score store.

pub(crate) mod batch;
pub(crate) mod engine;
pub(crate) mod report;
pub(crate) mod types;

use std::error::Error;
use std::path::Path;

use crate::config::Plan;
use crate::metrics::load_pages;
use crate::store::{JsonFileStore, ScoreStore};

use batch::analyze_batch;
use report::{print_json, print_report};

/// Site identifier used when neither the command line nor the input names one.
pub const DEFAULT_SITE: &str = "default";

pub struct DiagnoseOptions<'a> {
    pub input: &'a Path,
    pub site: Option<&'a str>,
    pub plan: Plan,
    pub cap: usize,
    pub top: usize,
    pub details: bool,
    pub store: Option<&'a Path>,
    pub json: bool,
}

pub fn run(opts: &DiagnoseOptions<'_>) -> Result<(), Box<dyn Error>> {
    let file = load_pages(opts.input)?;
    let site = opts
        .site
        .map(str::to_string)
        .or(file.site)
        .unwrap_or_else(|| DEFAULT_SITE.to_string());

    let result = analyze_batch(&site, &file.pages, opts.cap);

    if let Some(path) = opts.store {
        let mut store = JsonFileStore::open(path)?;
        let saved = store.upsert_all(result.results.iter().cloned())?;
        store.save()?;
        tracing::info!(saved, "page scores stored");
    }

    if opts.json {
        print_json(&result)?;
    } else {
        print_report(&result, opts.plan, opts.top, opts.details);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
