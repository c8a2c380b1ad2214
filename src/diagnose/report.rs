use super::batch::{BatchResult, PageScore};
use super::types::Severity;
use crate::config::Plan;
use crate::report_helpers::{
    self, column_width, format_rate, format_thousands, pad_display, truncate_start,
};

const WIDTH: usize = 78;
const MAX_URL: usize = 48;

/// Print the batch summary followed by the worst-scoring pages.
pub fn print_report(result: &BatchResult, plan: Plan, top: usize, details: bool) {
    let separator = report_helpers::separator(WIDTH);
    let s = &result.summary;

    println!("Page Diagnostics: {}", result.site);
    println!("{separator}");
    if s.limit_reached {
        println!(
            " Pages Analyzed:   {} of {} ({} plan)",
            s.total_pages,
            s.pages_supplied,
            plan.as_str()
        );
    } else {
        println!(" Pages Analyzed:   {}", s.total_pages);
    }
    println!(" Average Score:    {:.1}", s.average_score);
    println!(" Critical Issues:  {}", s.critical_issues);
    println!(" Quick Wins:       {}", s.quick_wins);
    println!(" Potential Clicks: {}", format_thousands(s.potential_clicks));
    println!("{separator}");

    let mut worst: Vec<&PageScore> = result.results.iter().collect();
    sort_worst_first(&mut worst);
    print_page_table(&worst, top, details);

    if s.limit_reached {
        println!();
        println!(
            " {} pages were not analyzed: the {} plan covers {} pages per run.",
            s.pages_supplied - s.total_pages,
            plan.as_str(),
            s.cap
        );
        println!(" Upgrade the plan to diagnose every page.");
    }
}

/// Ascending by score, ties by URL.
pub fn sort_worst_first(scores: &mut [&PageScore]) {
    scores.sort_by(|a, b| a.score.cmp(&b.score).then_with(|| a.url.cmp(&b.url)));
}

/// Print up to `top` pages as a table; with `details`, list each page's
/// issues and opportunities under its row.
pub fn print_page_table(scores: &[&PageScore], top: usize, details: bool) {
    if scores.is_empty() {
        return;
    }
    let separator = report_helpers::separator(WIDTH);
    let shown = &scores[..top.min(scores.len())];
    let url_width = column_width(shown.iter().map(|p| p.url.as_str()), 3, MAX_URL);

    println!(
        " {:>5}  {:>8}  {:>8}  {:>6}  {}",
        "Score",
        "CTR",
        "Expected",
        "Pos",
        pad_display("URL", url_width)
    );
    println!("{separator}");

    for p in shown {
        let m = &p.metrics;
        println!(
            " {:>5}  {:>8}  {:>8}  {:>6.1}  {}",
            p.score,
            format_rate(m.ctr),
            format_rate(m.expected_ctr),
            m.position,
            pad_display(&truncate_start(&p.url, url_width), url_width)
        );
        if details {
            print_details(p);
        }
    }

    println!("{separator}");
    if shown.len() < scores.len() {
        println!(" ({} more pages not shown)", scores.len() - shown.len());
    }
}

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "!!",
        Severity::Warning => " !",
        Severity::Info => " i",
    }
}

fn print_details(p: &PageScore) {
    for issue in &p.issues {
        println!(
            "   {} [{}/{}] {} (impact {}, {} fix)",
            severity_marker(issue.severity),
            issue.severity,
            issue.category,
            issue.title,
            issue.impact,
            issue.effort
        );
        println!("        {}", issue.description);
        println!("        now: {}", issue.current_state);
        println!("        fix: {}", issue.recommendation);
    }
    for opp in &p.opportunities {
        println!(
            "    + [{}] {} (+{} clicks, {} effort)",
            opp.kind, opp.title, opp.potential_clicks, opp.effort
        );
    }
}

pub fn print_json(result: &BatchResult) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(result)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
