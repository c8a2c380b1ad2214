//! Site health score from a single site-wide totals row.
//!
//! Additive rather than subtractive: four independent banded sub-scores
//! are summed. Each band table maps a raw value to points; the first band
//! whose threshold the value meets wins.
//!
//! | Sub-score  | Max | Banded by                                 |
//! |------------|-----|-------------------------------------------|
//! | Position   | 30  | average position (lower is better)        |
//! | CTR        | 25  | CTR / extended-range benchmark            |
//! | Visibility | 25  | impressions                               |
//! | Engagement | 20  | clicks                                    |

use std::fmt;

use serde::Serialize;

use crate::benchmark::curve::extended_range_ctr;
use crate::metrics::SiteTotals;

pub const POSITION_MAX: u8 = 30;
pub const CTR_MAX: u8 = 25;
pub const VISIBILITY_MAX: u8 = 25;
pub const ENGAGEMENT_MAX: u8 = 20;

/// (position at most, points); anything deeper scores `POSITION_FLOOR`.
const POSITION_BANDS: [(f64, u8); 6] = [
    (3.0, 30),
    (5.0, 25),
    (10.0, 20),
    (20.0, 15),
    (30.0, 10),
    (50.0, 5),
];
const POSITION_FLOOR: u8 = 2;

/// (ratio at least, points) for a non-zero CTR.
const CTR_BANDS: [(f64, u8); 4] = [(1.5, 25), (1.0, 20), (0.7, 15), (0.3, 8)];
const CTR_ANY: u8 = 3;

/// (impressions at least, points).
const VISIBILITY_BANDS: [(u64, u8); 7] = [
    (10_000, 25),
    (5_000, 22),
    (1_000, 18),
    (500, 14),
    (100, 10),
    (10, 6),
    (1, 3),
];

/// (clicks at least, points).
const ENGAGEMENT_BANDS: [(u64, u8); 6] = [
    (1_000, 20),
    (500, 17),
    (100, 14),
    (50, 11),
    (10, 8),
    (1, 4),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubScore {
    pub label: &'static str,
    pub points: u8,
    pub max: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthBreakdown {
    pub position: SubScore,
    pub ctr: SubScore,
    pub visibility: SubScore,
    pub engagement: SubScore,
}

impl HealthBreakdown {
    pub fn parts(&self) -> [&SubScore; 4] {
        [&self.position, &self.ctr, &self.visibility, &self.engagement]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteHealthScore {
    pub score: u8,
    pub label: HealthLabel,
    pub breakdown: HealthBreakdown,
    /// Extended-range benchmark CTR for the site's average position.
    pub expected_ctr: f64,
    pub ctr_ratio: f64,
    /// False when the totals row carried no ranking position.
    pub has_ranking_data: bool,
}

/// Points for the average position. Position 0 (no ranking data) is not a
/// rank; it falls through to the floor band instead of the top band.
pub fn position_points(position: f64) -> u8 {
    if position <= 0.0 {
        return POSITION_FLOOR;
    }
    POSITION_BANDS
        .iter()
        .find(|(max, _)| position <= *max)
        .map_or(POSITION_FLOOR, |(_, pts)| *pts)
}

/// Points for CTR relative to the benchmark. With zero CTR, a deep average
/// position is expected to earn nothing, so it is penalized less than a
/// shallow one.
pub fn ctr_points(ratio: f64, position: f64) -> u8 {
    if ratio > 0.0 {
        return CTR_BANDS
            .iter()
            .find(|(min, _)| ratio >= *min)
            .map_or(CTR_ANY, |(_, pts)| *pts);
    }
    if position > 50.0 {
        5
    } else if position > 20.0 {
        2
    } else {
        0
    }
}

fn count_points(value: u64, bands: &[(u64, u8)]) -> u8 {
    bands
        .iter()
        .find(|(min, _)| value >= *min)
        .map_or(0, |(_, pts)| *pts)
}

pub fn visibility_points(impressions: u64) -> u8 {
    count_points(impressions, &VISIBILITY_BANDS)
}

pub fn engagement_points(clicks: u64) -> u8 {
    count_points(clicks, &ENGAGEMENT_BANDS)
}

/// Score a site totals row.
pub fn site_health(totals: &SiteTotals) -> SiteHealthScore {
    let has_ranking_data = totals.position > 0.0;
    if !has_ranking_data {
        tracing::warn!(
            position = totals.position,
            "site totals carry no ranking position, scoring position in the floor band"
        );
    }

    let expected_ctr = extended_range_ctr(totals.position);
    let ctr_ratio = if expected_ctr > 0.0 {
        totals.ctr / expected_ctr
    } else {
        0.0
    };

    let sub = |label, points: u8, max| SubScore {
        label,
        points: points.min(max),
        max,
    };
    let breakdown = HealthBreakdown {
        position: sub("Position", position_points(totals.position), POSITION_MAX),
        ctr: sub("CTR vs. Benchmark", ctr_points(ctr_ratio, totals.position), CTR_MAX),
        visibility: sub("Visibility", visibility_points(totals.impressions), VISIBILITY_MAX),
        engagement: sub("Engagement", engagement_points(totals.clicks), ENGAGEMENT_MAX),
    };

    let total: u32 = breakdown.parts().iter().map(|s| s.points as u32).sum();
    let score = total.min(100) as u8;

    SiteHealthScore {
        score,
        label: HealthLabel::from_score(score),
        breakdown,
        expected_ctr,
        ctr_ratio,
        has_ranking_data,
    }
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
