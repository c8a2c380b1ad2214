use super::*;
use crate::diagnose::batch::analyze_batch;
use crate::metrics::PageMetric;

fn sample() -> BatchResult {
    let pages = vec![
        PageMetric {
            url: "https://example.com/blog/a-very-long-article-slug-that-needs-truncation-in-tables"
                .to_string(),
            clicks: 5,
            impressions: 500,
            ctr: 0.01,
            position: 5.0,
        },
        PageMetric {
            url: "/deep".to_string(),
            clicks: 0,
            impressions: 10,
            ctr: 0.0,
            position: 45.0,
        },
        PageMetric {
            url: "/strong".to_string(),
            clicks: 200,
            impressions: 500,
            ctr: 0.4,
            position: 1.2,
        },
    ];
    analyze_batch("example.com", &pages, 2)
}

#[test]
fn print_report_does_not_panic() {
    print_report(&sample(), Plan::Free, 10, false);
}

#[test]
fn print_report_with_details() {
    print_report(&sample(), Plan::Pro, 10, true);
}

#[test]
fn print_report_empty() {
    let empty = analyze_batch("example.com", &[], 5);
    print_report(&empty, Plan::Free, 10, true);
}

#[test]
fn print_report_top_smaller_than_results() {
    print_report(&sample(), Plan::Free, 1, false);
}

#[test]
fn print_json_does_not_panic() {
    print_json(&sample()).unwrap();
}

#[test]
fn sort_worst_first_orders_by_score_then_url() {
    let result = sample();
    let mut refs: Vec<&PageScore> = result.results.iter().collect();
    sort_worst_first(&mut refs);
    assert!(refs.windows(2).all(|w| w[0].score <= w[1].score));
    assert_eq!(refs[0].score, 60);
}

#[test]
fn json_has_summary_and_results() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(value["site"], "example.com");
    assert_eq!(value["summary"]["limit_reached"], true);
    assert_eq!(value["results"].as_array().unwrap().len(), 2);
}
