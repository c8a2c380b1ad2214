use super::*;
use crate::trends::analyzer::TrendResult;

fn sample() -> TrendResult {
    TrendResult {
        points: 14,
        sufficient_data: true,
        clicks: TrendDelta {
            previous: 70.0,
            recent: 140.0,
            value: 70.0,
            percentage: 100.0,
        },
        impressions: TrendDelta {
            previous: 7_000.0,
            recent: 6_300.0,
            value: -700.0,
            percentage: -10.0,
        },
        ctr: TrendDelta::default(),
        position: TrendDelta {
            previous: 8.0,
            recent: 6.0,
            value: 2.0,
            percentage: 25.0,
        },
    }
}

#[test]
fn colored_percentage_signs() {
    assert!(colored_percentage(12.3).contains("+12.3%"));
    assert!(colored_percentage(12.3).contains(GREEN));
    assert!(colored_percentage(-4.0).contains("-4.0%"));
    assert!(colored_percentage(-4.0).contains(RED));
    assert!(colored_percentage(0.01).contains(YELLOW));
}

#[test]
fn count_rounds_and_groups() {
    assert_eq!(count(1234.4), "1,234");
    assert_eq!(count(-3.0), "0");
}

#[test]
fn print_report_does_not_panic() {
    print_report(&sample());
}

#[test]
fn print_report_insufficient_does_not_panic() {
    print_report(&TrendResult {
        points: 3,
        ..TrendResult::default()
    });
}

#[test]
fn print_json_does_not_panic() {
    print_json(&sample()).unwrap();
}
