//! Seven-day trend comparison over a daily traffic series.
//!
//! The last fourteen points split into a previous and a recent window of
//! seven days each. Clicks and impressions are summed per window. CTR is
//! recomputed from the window sums, not averaged per day. Position is the
//! plain mean of the seven daily positions.
//!
//! Position deltas are sign-inverted: a lower position number is an
//! improvement and reports as a positive change.

use serde::Serialize;

use crate::metrics::{TrafficPoint, ratio};

/// Days per comparison window.
pub const WINDOW: usize = 7;

/// Before/after values for one metric with absolute and percentage change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TrendDelta {
    pub previous: f64,
    pub recent: f64,
    pub value: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendResult {
    pub points: usize,
    pub sufficient_data: bool,
    pub clicks: TrendDelta,
    pub impressions: TrendDelta,
    pub ctr: TrendDelta,
    pub position: TrendDelta,
}

/// Aggregates for one seven-day window.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WindowStats {
    clicks: u64,
    impressions: u64,
    ctr: f64,
    position: f64,
}

impl WindowStats {
    fn from_points(points: &[TrafficPoint]) -> Self {
        let clicks = points.iter().map(|p| p.clicks).sum();
        let impressions = points.iter().map(|p| p.impressions).sum();
        let position = if points.is_empty() {
            0.0
        } else {
            points.iter().map(|p| p.position).sum::<f64>() / points.len() as f64
        };
        Self {
            clicks,
            impressions,
            ctr: ratio(clicks, impressions),
            position,
        }
    }
}

/// Percentage change from `previous` to `recent`. A change from zero counts
/// as +100% when the recent value is positive, 0% otherwise.
pub fn percent_change(previous: f64, recent: f64) -> f64 {
    if previous == 0.0 {
        if recent > 0.0 { 100.0 } else { 0.0 }
    } else {
        (recent - previous) / previous * 100.0
    }
}

fn delta(previous: f64, recent: f64) -> TrendDelta {
    TrendDelta {
        previous,
        recent,
        value: recent - previous,
        percentage: percent_change(previous, recent),
    }
}

/// Like [`delta`] but a decrease reports as a positive change.
fn inverted_delta(previous: f64, recent: f64) -> TrendDelta {
    let d = delta(previous, recent);
    TrendDelta {
        value: -d.value,
        percentage: -d.percentage,
        ..d
    }
}

/// Compare the last seven points against the seven before them. The series
/// must be in ascending date order. Fewer than fourteen points yields
/// all-zero deltas.
pub fn compute_trends(series: &[TrafficPoint]) -> TrendResult {
    if series.len() < WINDOW * 2 {
        tracing::debug!(points = series.len(), "not enough points for a trend");
        return TrendResult {
            points: series.len(),
            ..TrendResult::default()
        };
    }

    let tail = &series[series.len() - WINDOW * 2..];
    let (prev_days, recent_days) = tail.split_at(WINDOW);
    let previous = WindowStats::from_points(prev_days);
    let recent = WindowStats::from_points(recent_days);

    TrendResult {
        points: series.len(),
        sufficient_data: true,
        clicks: delta(previous.clicks as f64, recent.clicks as f64),
        impressions: delta(previous.impressions as f64, recent.impressions as f64),
        ctr: delta(previous.ctr, recent.ctr),
        position: inverted_delta(previous.position, recent.position),
    }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
