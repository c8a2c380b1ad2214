use super::*;

#[test]
fn build_rows_covers_requested_range() {
    let rows = build_rows(30);
    assert_eq!(rows.len(), 30);
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[29].position, 30);
}

#[test]
fn build_rows_zero_still_lists_first_position() {
    let rows = build_rows(0);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].position, 1);
}

#[test]
fn divergence_starts_after_first_page() {
    let rows = build_rows(25);
    assert!(rows[..10].iter().all(|r| !r.diverges()));
    assert!(rows[10..].iter().all(|r| r.diverges()));
}

#[test]
fn run_table_and_json() {
    run(12, false).unwrap();
    run(12, true).unwrap();
}
