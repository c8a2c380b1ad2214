//! Input data model: per-page metrics, site totals and daily traffic points.
//!
//! The scoring core assumes validated numbers. Everything read from disk
//! goes through the loaders here, which derive a missing CTR from
//! clicks/impressions and reject values the core cannot interpret.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Search metrics for a single page over the reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetric {
    pub url: String,
    pub clicks: u64,
    pub impressions: u64,
    /// Click-through rate in 0–1. May be supplied independently and need
    /// not equal clicks / impressions exactly.
    pub ctr: f64,
    /// Average ranking position, 1 = top of results.
    pub position: f64,
}

/// Site-wide totals row. A position of 0 means the provider returned no
/// ranking data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteTotals {
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
    pub position: f64,
}

/// One day of site traffic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficPoint {
    pub date: NaiveDate,
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
    pub position: f64,
}

/// clicks / impressions, or 0 when there were no impressions.
pub fn ratio(clicks: u64, impressions: u64) -> f64 {
    if impressions == 0 {
        0.0
    } else {
        clicks as f64 / impressions as f64
    }
}

#[derive(Deserialize)]
struct RawPage {
    #[serde(alias = "page_url", alias = "page")]
    url: String,
    clicks: u64,
    impressions: u64,
    ctr: Option<f64>,
    position: f64,
}

#[derive(Deserialize)]
struct RawTotals {
    clicks: u64,
    impressions: u64,
    ctr: Option<f64>,
    #[serde(default)]
    position: f64,
}

#[derive(Deserialize)]
struct RawPoint {
    date: NaiveDate,
    clicks: u64,
    impressions: u64,
    ctr: Option<f64>,
    position: f64,
}

/// Page input accepts either a bare array or an object carrying the site.
#[derive(Deserialize)]
#[serde(untagged)]
enum PageInput {
    Wrapped { site: String, pages: Vec<RawPage> },
    Bare(Vec<RawPage>),
}

/// Pages read from an input file, with the site identifier if the file had one.
#[derive(Debug)]
pub struct PageFile {
    pub site: Option<String>,
    pub pages: Vec<PageMetric>,
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| Error::json(path, e))
}

fn check_ctr(item: &str, ctr: f64) -> Result<()> {
    if (0.0..=1.0).contains(&ctr) {
        Ok(())
    } else {
        Err(Error::invalid(item, format!("ctr {ctr} is outside 0..=1")))
    }
}

/// Pages must carry a real ranking position.
pub fn validate_page(page: &PageMetric) -> Result<()> {
    check_ctr(&page.url, page.ctr)?;
    if !page.position.is_finite() || page.position <= 0.0 {
        return Err(Error::invalid(
            &page.url,
            format!("position {} must be a positive number", page.position),
        ));
    }
    Ok(())
}

/// Totals may report position 0 when there is no ranking data.
pub fn validate_totals(totals: &SiteTotals) -> Result<()> {
    check_ctr("site totals", totals.ctr)?;
    if !totals.position.is_finite() || totals.position < 0.0 {
        return Err(Error::invalid(
            "site totals",
            format!("position {} must be zero or positive", totals.position),
        ));
    }
    Ok(())
}

fn validate_point(point: &TrafficPoint) -> Result<()> {
    let item = point.date.to_string();
    check_ctr(&item, point.ctr)?;
    if !point.position.is_finite() || point.position < 0.0 {
        return Err(Error::invalid(
            item,
            format!("position {} must be zero or positive", point.position),
        ));
    }
    Ok(())
}

/// Load and validate page metrics from a JSON file.
pub fn load_pages(path: &Path) -> Result<PageFile> {
    let (site, raw) = match read_json::<PageInput>(path)? {
        PageInput::Wrapped { site, pages } => (Some(site), pages),
        PageInput::Bare(pages) => (None, pages),
    };
    let pages = raw
        .into_iter()
        .map(|r| PageMetric {
            ctr: r.ctr.unwrap_or_else(|| ratio(r.clicks, r.impressions)),
            url: r.url,
            clicks: r.clicks,
            impressions: r.impressions,
            position: r.position,
        })
        .collect::<Vec<_>>();
    for page in &pages {
        validate_page(page)?;
    }
    tracing::info!(count = pages.len(), path = %path.display(), "loaded page metrics");
    Ok(PageFile { site, pages })
}

/// Load and validate a site totals row from a JSON file.
pub fn load_totals(path: &Path) -> Result<SiteTotals> {
    let raw: RawTotals = read_json(path)?;
    let totals = SiteTotals {
        ctr: raw.ctr.unwrap_or_else(|| ratio(raw.clicks, raw.impressions)),
        clicks: raw.clicks,
        impressions: raw.impressions,
        position: raw.position,
    };
    validate_totals(&totals)?;
    Ok(totals)
}

/// Load and validate a daily traffic series, sorted ascending by date.
pub fn load_series(path: &Path) -> Result<Vec<TrafficPoint>> {
    let raw: Vec<RawPoint> = read_json(path)?;
    let mut series: Vec<TrafficPoint> = raw
        .into_iter()
        .map(|r| TrafficPoint {
            ctr: r.ctr.unwrap_or_else(|| ratio(r.clicks, r.impressions)),
            date: r.date,
            clicks: r.clicks,
            impressions: r.impressions,
            position: r.position,
        })
        .collect();
    for point in &series {
        validate_point(point)?;
    }
    if !series.windows(2).all(|w| w[0].date <= w[1].date) {
        tracing::debug!("traffic series out of order, sorting by date");
        series.sort_by_key(|p| p.date);
    }
    Ok(series)
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
