//! Benchmark curve listing (`serp benchmark` command).
//!
//! Prints the short-range and extended-range curves side by side so the
//! positions where the two scoring domains disagree are visible.

pub mod curve;
mod report;

use std::error::Error;

use serde::Serialize;

use curve::{extended_range_ctr, short_range_ctr};
use report::{print_json, print_report};

/// Both benchmark readings for one integer position.
#[derive(Debug, Clone, Serialize)]
pub struct CurveRow {
    pub position: u32,
    pub short_range: f64,
    pub extended_range: f64,
}

impl CurveRow {
    pub fn diverges(&self) -> bool {
        (self.short_range - self.extended_range).abs() > f64::EPSILON
    }
}

pub fn build_rows(max_position: u32) -> Vec<CurveRow> {
    (1..=max_position.max(1))
        .map(|position| CurveRow {
            position,
            short_range: short_range_ctr(position as f64),
            extended_range: extended_range_ctr(position as f64),
        })
        .collect()
}

pub fn run(max_position: u32, json: bool) -> Result<(), Box<dyn Error>> {
    let rows = build_rows(max_position);
    if json {
        print_json(&rows)?;
    } else {
        print_report(&rows);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
