//! Batch processing of page metrics under a plan cap.
//!
//! Keeps the first `cap` pages, diagnoses each one independently and rolls
//! the retained results up into a summary. Pages beyond the cap are dropped
//! from the run (not queued); `limit_reached` tells the caller to prompt for
//! an upgrade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::engine::diagnose;
use super::types::{Issue, Opportunity, OpportunityKind, Severity};
use crate::metrics::PageMetric;

/// Metrics as analyzed, plus the benchmark they were compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
    pub position: f64,
    pub expected_ctr: f64,
    /// expected_ctr - ctr; positive when the page under-performs.
    pub ctr_gap: f64,
}

/// Persisted result for one page, keyed by (site, url).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageScore {
    pub site: String,
    pub url: String,
    pub score: u8,
    pub issues: Vec<Issue>,
    pub opportunities: Vec<Opportunity>,
    pub metrics: MetricsSnapshot,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub total_pages: usize,
    pub average_score: f64,
    pub critical_issues: usize,
    pub quick_wins: usize,
    pub potential_clicks: u64,
    pub limit_reached: bool,
    pub pages_supplied: usize,
    pub cap: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub site: String,
    pub summary: BatchSummary,
    pub results: Vec<PageScore>,
}

/// Diagnose one page and package it for storage.
pub fn score_page(site: &str, page: &PageMetric, analyzed_at: DateTime<Utc>) -> PageScore {
    let d = diagnose(page);
    PageScore {
        site: site.to_string(),
        url: page.url.clone(),
        score: d.score,
        issues: d.issues,
        opportunities: d.opportunities,
        metrics: MetricsSnapshot {
            clicks: page.clicks,
            impressions: page.impressions,
            ctr: page.ctr,
            position: page.position,
            expected_ctr: d.expected_ctr,
            ctr_gap: d.expected_ctr - page.ctr,
        },
        analyzed_at,
    }
}

/// Analyze at most `cap` pages and summarize the retained set.
pub fn analyze_batch(site: &str, pages: &[PageMetric], cap: usize) -> BatchResult {
    let limit_reached = pages.len() > cap;
    if limit_reached {
        tracing::warn!(
            supplied = pages.len(),
            cap,
            "page limit reached, analyzing the first {cap} pages"
        );
    }

    let analyzed_at = Utc::now();
    let results: Vec<PageScore> = pages
        .iter()
        .take(cap)
        .map(|p| score_page(site, p, analyzed_at))
        .collect();

    let summary = summarize(&results, pages.len(), cap);
    tracing::info!(
        site,
        pages = summary.total_pages,
        average = summary.average_score,
        "batch analyzed"
    );

    BatchResult {
        site: site.to_string(),
        summary,
        results,
    }
}

fn summarize(results: &[PageScore], pages_supplied: usize, cap: usize) -> BatchSummary {
    let total_pages = results.len();
    let average_score = if total_pages == 0 {
        0.0
    } else {
        results.iter().map(|r| r.score as f64).sum::<f64>() / total_pages as f64
    };
    let critical_issues = results
        .iter()
        .flat_map(|r| &r.issues)
        .filter(|i| i.severity == Severity::Critical)
        .count();
    let quick_wins = results
        .iter()
        .flat_map(|r| &r.opportunities)
        .filter(|o| o.kind == OpportunityKind::QuickWin)
        .count();
    let potential_clicks = results
        .iter()
        .flat_map(|r| &r.opportunities)
        .map(|o| o.potential_clicks)
        .sum();

    BatchSummary {
        total_pages,
        average_score,
        critical_issues,
        quick_wins,
        potential_clicks,
        limit_reached: pages_supplied > cap,
        pages_supplied,
        cap,
    }
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
