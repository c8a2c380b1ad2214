//! Table and JSON output for the seven-day trend comparison.
//!
//! Positive changes print green, negative red, flat yellow. Position deltas
//! are already sign-inverted, so green always means "better".

use super::analyzer::{TrendDelta, TrendResult, WINDOW};
use crate::report_helpers::{self, format_rate, format_thousands};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

fn colored_percentage(pct: f64) -> String {
    if pct > 0.05 {
        format!("{GREEN}+{pct:.1}%{RESET}")
    } else if pct < -0.05 {
        format!("{RED}{pct:.1}%{RESET}")
    } else {
        format!("{YELLOW} 0.0%{RESET}")
    }
}

fn count(v: f64) -> String {
    format_thousands(v.max(0.0).round() as u64)
}

fn print_row(name: &str, d: &TrendDelta, fmt: fn(f64) -> String) {
    println!(
        " {:<14} {:>12}   {:>12}   {}",
        name,
        fmt(d.previous),
        fmt(d.recent),
        colored_percentage(d.percentage),
    );
}

pub fn print_report(trends: &TrendResult) {
    let separator = report_helpers::separator(60);

    println!("Traffic Trends (last {WINDOW} days vs previous {WINDOW})");
    println!("{separator}");

    if !trends.sufficient_data {
        println!(
            " Not enough data: {} daily points, need at least {}.",
            trends.points,
            WINDOW * 2
        );
        println!("{separator}");
        return;
    }

    println!(
        " {:<14} {:>12}   {:>12}   {}",
        "Metric", "Previous", "Recent", "Change"
    );
    println!("{separator}");
    print_row("Clicks", &trends.clicks, count);
    print_row("Impressions", &trends.impressions, count);
    print_row("CTR", &trends.ctr, format_rate);
    print_row("Avg. position", &trends.position, |p| format!("{p:.1}"));
    println!("{separator}");
}

pub fn print_json(trends: &TrendResult) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(trends)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
