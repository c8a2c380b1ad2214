use super::CurveRow;
use crate::report_helpers::{self, format_rate};

/// Print both curves as a table, marking rows where they disagree.
pub fn print_report(rows: &[CurveRow]) {
    let separator = report_helpers::separator(48);

    println!("CTR Benchmark Curves");
    println!("{separator}");
    println!(
        " {:>8}   {:>12}   {:>14}",
        "Position", "Short (1-10)", "Extended (1-20)"
    );
    println!("{separator}");

    for row in rows {
        let marker = if row.diverges() { "  *" } else { "" };
        println!(
            " {:>8}   {:>12}   {:>14}{marker}",
            row.position,
            format_rate(row.short_range),
            format_rate(row.extended_range),
        );
    }

    println!("{separator}");
    if rows.iter().any(CurveRow::diverges) {
        println!(" * page diagnostics and site health read different expected CTRs");
    }
}

pub fn print_json(rows: &[CurveRow]) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&rows)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
