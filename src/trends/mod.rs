//! Week-over-week traffic trends (`serp trends` command).

pub(crate) mod analyzer;
mod report;

use std::error::Error;
use std::path::Path;

use crate::metrics::load_series;

use analyzer::compute_trends;
use report::{print_json, print_report};

pub fn run(input: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let series = load_series(input)?;
    let trends = compute_trends(&series);
    if !trends.sufficient_data {
        tracing::warn!(
            points = trends.points,
            "traffic series too short for a trend comparison"
        );
    }

    if json {
        print_json(&trends)?;
    } else {
        print_report(&trends);
    }

    Ok(())
}
