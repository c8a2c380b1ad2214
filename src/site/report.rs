use serde::Serialize;

use super::health::{HealthLabel, SiteHealthScore, SubScore};
use crate::metrics::SiteTotals;
use crate::report_helpers::{self, format_rate, format_thousands};

/// Print the site score, the totals it was computed from, and the
/// four-part breakdown.
pub fn print_report(health: &SiteHealthScore, totals: &SiteTotals) {
    let separator = report_helpers::separator(56);

    println!("Site Health Score");
    println!("{separator}");
    println!(" Score:        {} ({})", health.score, health.label);
    println!(" Clicks:       {}", format_thousands(totals.clicks));
    println!(" Impressions:  {}", format_thousands(totals.impressions));
    println!(
        " CTR:          {} ({} expected)",
        format_rate(totals.ctr),
        format_rate(health.expected_ctr)
    );
    if health.has_ranking_data {
        println!(" Position:     {:.1}", totals.position);
    } else {
        println!(" Position:     no ranking data");
    }
    println!("{separator}");
    println!(" {:<20} {:>6}   {:>4}", "Component", "Points", "Max");
    println!("{separator}");

    for part in health.breakdown.parts() {
        println!(
            " {:<20} {:>6}   {:>4}   {}",
            part.label,
            part.points,
            part.max,
            bar(part)
        );
    }

    println!("{separator}");
}

/// Ten-cell fill bar for a sub-score.
fn bar(part: &SubScore) -> String {
    let filled = if part.max == 0 {
        0
    } else {
        (part.points as usize * 10).div_ceil(part.max as usize)
    };
    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(10 - filled.min(10)))
}

#[derive(Serialize)]
struct JsonSiteHealth<'a> {
    score: u8,
    label: HealthLabel,
    totals: &'a SiteTotals,
    expected_ctr: f64,
    ctr_ratio: f64,
    has_ranking_data: bool,
    breakdown: Vec<&'a SubScore>,
}

pub fn print_json(
    health: &SiteHealthScore,
    totals: &SiteTotals,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = JsonSiteHealth {
        score: health.score,
        label: health.label,
        totals,
        expected_ctr: health.expected_ctr,
        ctr_ratio: health.ctr_ratio,
        has_ranking_data: health.has_ranking_data,
        breakdown: health.breakdown.parts().to_vec(),
    };
    report_helpers::print_json_stdout(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::health::site_health;

    fn totals(position: f64) -> SiteTotals {
        SiteTotals {
            clicks: 60,
            impressions: 2_000,
            ctr: 0.03,
            position,
        }
    }

    #[test]
    fn print_report_does_not_panic() {
        let t = totals(8.0);
        print_report(&site_health(&t), &t);
    }

    #[test]
    fn print_report_without_ranking_data() {
        let t = totals(0.0);
        print_report(&site_health(&t), &t);
    }

    #[test]
    fn print_json_does_not_panic() {
        let t = totals(8.0);
        print_json(&site_health(&t), &t).unwrap();
    }

    #[test]
    fn bar_fill() {
        let full = SubScore {
            label: "x",
            points: 30,
            max: 30,
        };
        let empty = SubScore {
            label: "x",
            points: 0,
            max: 30,
        };
        assert_eq!(bar(&full).chars().filter(|c| *c == '\u{2588}').count(), 10);
        assert_eq!(bar(&empty).chars().filter(|c| *c == '\u{2591}').count(), 10);
        assert_eq!(bar(&full).chars().count(), 10);
    }
}
