//! Per-page diagnostic engine.
//!
//! Every page starts at 100. Independent rule blocks compare its metrics
//! with the short-range CTR benchmark and its ranking band; each block may
//! record issues and opportunities and subtract a penalty. Blocks are not
//! exclusive, so penalties stack when several fire for the same page.
//!
//! Blocks and penalties:
//!
//! | Block                  | Fires when                                   | Penalty |
//! |------------------------|----------------------------------------------|---------|
//! | CTR (critical)         | ratio < 0.4, impressions > 100               | 30      |
//! | CTR (warning)          | ratio < 0.7, impressions > 50                | 15      |
//! | Position 4–10          | impressions > 200                            | 10      |
//! | Position 10–20         | impressions > 100                            | 25      |
//! | Position > 20          | always                                       | 15      |
//! | Impressions, no clicks | impressions > 500, clicks < 5                | 20      |
//! | Low impressions        | impressions < 50, position < 20              | 5       |
//!
//! Issues are ordered by impact and capped at five; opportunities keep rule
//! order and are capped at three. The function is pure: identical input
//! yields identical output apart from the generated identifiers.

use super::types::{
    Diagnosis, Effort, FixEffort, Issue, IssueCategory, IssueTemplate, Opportunity,
    OpportunityKind, Severity,
};
use crate::benchmark::curve::short_range_ctr;
use crate::metrics::PageMetric;
use crate::report_helpers::format_rate;

pub const MAX_ISSUES: usize = 5;
pub const MAX_OPPORTUNITIES: usize = 3;

const START_SCORE: i32 = 100;

const CTR_FAR_BELOW: IssueTemplate = IssueTemplate {
    severity: Severity::Critical,
    category: IssueCategory::Ctr,
    title: "CTR far below benchmark",
    impact: 9,
    effort: FixEffort::Quick,
};

const CTR_BELOW: IssueTemplate = IssueTemplate {
    severity: Severity::Warning,
    category: IssueCategory::Ctr,
    title: "CTR below benchmark",
    impact: 6,
    effort: FixEffort::Quick,
};

const NEAR_TOP_THREE: IssueTemplate = IssueTemplate {
    severity: Severity::Warning,
    category: IssueCategory::Ranking,
    title: "Ranking just below the top three",
    impact: 7,
    effort: FixEffort::Medium,
};

const PAGE_TWO: IssueTemplate = IssueTemplate {
    severity: Severity::Critical,
    category: IssueCategory::Ranking,
    title: "Stuck on page two",
    impact: 8,
    effort: FixEffort::Long,
};

const BEYOND_PAGE_TWO: IssueTemplate = IssueTemplate {
    severity: Severity::Info,
    category: IssueCategory::Ranking,
    title: "Ranking beyond page two",
    impact: 4,
    effort: FixEffort::Long,
};

const UNCLICKED_IMPRESSIONS: IssueTemplate = IssueTemplate {
    severity: Severity::Critical,
    category: IssueCategory::Content,
    title: "Impressions without clicks",
    impact: 8,
    effort: FixEffort::Quick,
};

const LOW_VISIBILITY: IssueTemplate = IssueTemplate {
    severity: Severity::Info,
    category: IssueCategory::Content,
    title: "Low search visibility",
    impact: 3,
    effort: FixEffort::Medium,
};

/// Values every rule block reads.
struct PageContext<'a> {
    page: &'a PageMetric,
    expected_ctr: f64,
    ctr_ratio: f64,
}

/// Accumulates the output of the rule blocks.
struct Findings {
    score: i32,
    issues: Vec<Issue>,
    opportunities: Vec<Opportunity>,
}

impl Findings {
    fn new() -> Self {
        Self {
            score: START_SCORE,
            issues: Vec::new(),
            opportunities: Vec::new(),
        }
    }

    fn penalize(&mut self, issue: Issue, penalty: i32) {
        self.score -= penalty;
        self.issues.push(issue);
    }

    fn finish(mut self, cx: &PageContext<'_>) -> Diagnosis {
        // stable: equal impacts keep rule order
        self.issues.sort_by(|a, b| b.impact.cmp(&a.impact));
        self.issues.truncate(MAX_ISSUES);
        self.opportunities.truncate(MAX_OPPORTUNITIES);
        Diagnosis {
            score: self.score.clamp(0, 100) as u8,
            expected_ctr: cx.expected_ctr,
            ctr_ratio: cx.ctr_ratio,
            issues: self.issues,
            opportunities: self.opportunities,
        }
    }
}

/// Round an estimated click count; negative estimates become `None`.
fn estimate(clicks: f64) -> Option<u64> {
    let rounded = clicks.round();
    (rounded > 0.0).then_some(rounded as u64)
}

/// Diagnose one page against the short-range benchmark.
pub fn diagnose(page: &PageMetric) -> Diagnosis {
    let expected_ctr = short_range_ctr(page.position);
    let ctr_ratio = if expected_ctr > 0.0 {
        page.ctr / expected_ctr
    } else {
        0.0
    };
    let cx = PageContext {
        page,
        expected_ctr,
        ctr_ratio,
    };

    let mut out = Findings::new();
    check_ctr(&cx, &mut out);
    check_position(&cx, &mut out);
    check_unclicked_impressions(&cx, &mut out);
    check_low_impressions(&cx, &mut out);
    check_striking_distance(&cx, &mut out);
    out.finish(&cx)
}

fn ctr_state(cx: &PageContext<'_>) -> String {
    format!(
        "CTR {} vs. {} expected at position {:.1}",
        format_rate(cx.page.ctr),
        format_rate(cx.expected_ctr),
        cx.page.position
    )
}

fn check_ctr(cx: &PageContext<'_>, out: &mut Findings) {
    let page = cx.page;
    if cx.ctr_ratio < 0.4 && page.impressions > 100 {
        out.penalize(
            CTR_FAR_BELOW.issue(
                format!(
                    "The page earns {:.0}% of the clicks its ranking usually gets. \
                     Searchers see it and choose another result.",
                    cx.ctr_ratio * 100.0
                ),
                ctr_state(cx),
                "Rewrite the title tag and meta description to match the query intent \
                 and give a concrete reason to click.",
            ),
            30,
        );
        let gap = page.impressions as f64 * cx.expected_ctr * 0.8 - page.clicks as f64;
        if let Some(potential) = estimate(gap) {
            out.opportunities.push(Opportunity::new(
                OpportunityKind::QuickWin,
                "Rewrite title and description",
                format!("Reaching 80% of the benchmark CTR adds about {potential} clicks."),
                potential,
                Effort::Low,
            ));
        }
    } else if cx.ctr_ratio < 0.7 && page.impressions > 50 {
        out.penalize(
            CTR_BELOW.issue(
                format!(
                    "The page earns {:.0}% of the benchmark CTR for its position.",
                    cx.ctr_ratio * 100.0
                ),
                ctr_state(cx),
                "Test a more specific title and add structured data to improve the snippet.",
            ),
            15,
        );
    } else if cx.ctr_ratio >= 1.2 {
        out.opportunities.push(Opportunity::new(
            OpportunityKind::Maintain,
            "CTR above benchmark",
            format!(
                "The snippet outperforms the benchmark at {:.0}% of expected CTR. \
                 Keep the title and description stable.",
                cx.ctr_ratio * 100.0
            ),
            0,
            Effort::Low,
        ));
    }
}

fn check_position(cx: &PageContext<'_>, out: &mut Findings) {
    let page = cx.page;
    let position = page.position;
    let state = format!("Average position {position:.1}");

    if (4.0..=10.0).contains(&position) {
        if page.impressions <= 200 {
            return;
        }
        out.penalize(
            NEAR_TOP_THREE.issue(
                "The page is on the first results page but below the top three, \
                 where most clicks go."
                    .to_string(),
                state,
                "Strengthen the content for the main query and add internal links \
                 from related pages.",
            ),
            10,
        );
        let gap = page.impressions as f64 * short_range_ctr(3.0) - page.clicks as f64;
        if let Some(potential) = estimate(gap).filter(|p| *p > 5) {
            out.opportunities.push(Opportunity::new(
                OpportunityKind::Growth,
                "Move into the top three",
                format!("Ranking at position 3 would add about {potential} clicks."),
                potential,
                Effort::Medium,
            ));
        }
    } else if position > 10.0 && position <= 20.0 {
        if page.impressions > 100 {
            out.penalize(
                PAGE_TWO.issue(
                    "The page ranks on the second results page, which few searchers reach."
                        .to_string(),
                    state,
                    "Expand the content to cover the query fully and earn links \
                     to push it onto page one.",
                ),
                25,
            );
        }
    } else if position > 20.0 {
        out.penalize(
            BEYOND_PAGE_TWO.issue(
                "The page ranks too deep to receive meaningful traffic.".to_string(),
                state,
                "Reconsider the target query or consolidate this page into a stronger one.",
            ),
            15,
        );
    } else if position <= 3.0 && page.impressions > 100 {
        out.opportunities.push(Opportunity::new(
            OpportunityKind::Maintain,
            "Protect top-three ranking",
            format!("The page holds position {position:.1}. Keep the content fresh."),
            0,
            Effort::Low,
        ));
    }
}

fn check_unclicked_impressions(cx: &PageContext<'_>, out: &mut Findings) {
    let page = cx.page;
    if page.impressions > 500 && page.clicks < 5 {
        out.penalize(
            UNCLICKED_IMPRESSIONS.issue(
                "The page is shown often but almost nobody clicks through.".to_string(),
                format!("{} impressions, {} clicks", page.impressions, page.clicks),
                "Check that the page matches what searchers expect for the queries it shows for.",
            ),
            20,
        );
    }
}

fn check_low_impressions(cx: &PageContext<'_>, out: &mut Findings) {
    let page = cx.page;
    if page.impressions < 50 && page.position < 20.0 {
        out.penalize(
            LOW_VISIBILITY.issue(
                "The page ranks but for queries with little search volume.".to_string(),
                format!("{} impressions", page.impressions),
                "Target broader queries or add sections that answer related questions.",
            ),
            5,
        );
    }
}

fn check_striking_distance(cx: &PageContext<'_>, out: &mut Findings) {
    let page = cx.page;
    if (8.0..=15.0).contains(&page.position) && page.impressions > 300 && cx.ctr_ratio < 0.8 {
        let potential = (page.clicks as f64 * 0.25).round() as u64;
        out.opportunities.push(Opportunity::new(
            OpportunityKind::QuickWin,
            "Striking-distance page",
            format!(
                "Position {:.1} with {} impressions. Small on-page improvements \
                 could add about {potential} clicks.",
                page.position, page.impressions
            ),
            potential,
            Effort::Low,
        ));
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
