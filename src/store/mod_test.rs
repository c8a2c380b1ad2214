use super::*;
use crate::diagnose::batch::score_page;
use crate::metrics::PageMetric;
use chrono::Utc;

fn scored(site: &str, url: &str, clicks: u64, impressions: u64, ctr: f64, position: f64) -> PageScore {
    let page = PageMetric {
        url: url.to_string(),
        clicks,
        impressions,
        ctr,
        position,
    };
    score_page(site, &page, Utc::now())
}

#[test]
fn open_missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(&dir.path().join("scores.json")).unwrap();
    assert!(store.worst_first("example.com").unwrap().is_empty());
}

#[test]
fn upsert_overwrites_same_url() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(&dir.path().join("scores.json")).unwrap();
    store
        .upsert(scored("example.com", "/a", 5, 500, 0.01, 5.0))
        .unwrap();
    store
        .upsert(scored("example.com", "/a", 200, 500, 0.4, 1.2))
        .unwrap();
    let rows = store.worst_first("example.com").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].score, 100, "last write wins");
}

#[test]
fn sites_are_kept_apart() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(&dir.path().join("scores.json")).unwrap();
    store
        .upsert(scored("a.com", "/x", 5, 500, 0.01, 5.0))
        .unwrap();
    store
        .upsert(scored("b.com", "/x", 5, 500, 0.01, 5.0))
        .unwrap();
    assert_eq!(store.worst_first("a.com").unwrap().len(), 1);
    assert_eq!(store.worst_first("b.com").unwrap().len(), 1);
    assert!(store.worst_first("c.com").unwrap().is_empty());
}

#[test]
fn worst_first_sorts_ascending() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(&dir.path().join("scores.json")).unwrap();
    let n = store
        .upsert_all(vec![
            scored("example.com", "/strong", 200, 500, 0.4, 1.2),
            scored("example.com", "/weak", 5, 500, 0.01, 5.0),
            scored("example.com", "/deep", 0, 10, 0.0, 45.0),
        ])
        .unwrap();
    assert_eq!(n, 3);
    let scores: Vec<u8> = store
        .worst_first("example.com")
        .unwrap()
        .iter()
        .map(|r| r.score)
        .collect();
    assert_eq!(scores, vec![60, 85, 100]);
}

#[test]
fn save_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    let original = scored("example.com", "/weak", 5, 500, 0.01, 5.0);
    {
        let mut store = JsonFileStore::open(&path).unwrap();
        store.upsert(original.clone()).unwrap();
        store.save().unwrap();
    }
    let reopened = JsonFileStore::open(&path).unwrap();
    let rows = reopened.worst_first("example.com").unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.url, original.url);
    assert_eq!(row.score, original.score);
    assert_eq!(row.issues, original.issues);
    assert_eq!(row.opportunities, original.opportunities);
    assert_eq!(row.analyzed_at, original.analyzed_at);
    assert_eq!(row.metrics.impressions, 500);
}

#[test]
fn open_corrupt_file_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(&path, "not json").unwrap();
    let err = JsonFileStore::open(&path).err().unwrap();
    assert!(matches!(err, Error::Json { .. }), "got {err}");
}

#[test]
fn run_lists_scores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    let mut store = JsonFileStore::open(&path).unwrap();
    store
        .upsert(scored("example.com", "/weak", 5, 500, 0.01, 5.0))
        .unwrap();
    store.save().unwrap();
    run(&path, "example.com", 10, true, false).unwrap();
    run(&path, "example.com", 10, false, true).unwrap();
    run(&path, "missing.com", 10, false, false).unwrap();
}
