use super::*;
use std::fs;

const PAGES: &str = r#"{"site": "example.com", "pages": [
    {"url": "/weak", "clicks": 5, "impressions": 500, "ctr": 0.01, "position": 5.0},
    {"url": "/deep", "clicks": 0, "impressions": 10, "ctr": 0.0, "position": 45.0},
    {"url": "/strong", "clicks": 200, "impressions": 500, "ctr": 0.4, "position": 1.2}
]}"#;

fn opts<'a>(input: &'a Path, store: Option<&'a Path>, json: bool) -> DiagnoseOptions<'a> {
    DiagnoseOptions {
        input,
        site: None,
        plan: Plan::Free,
        cap: 2,
        top: 10,
        details: true,
        store,
        json,
    }
}

#[test]
fn run_prints_table_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pages.json");
    fs::write(&input, PAGES).unwrap();
    run(&opts(&input, None, false)).unwrap();
    run(&opts(&input, None, true)).unwrap();
}

#[test]
fn run_stores_only_analyzed_pages() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pages.json");
    let store_path = dir.path().join("scores.json");
    fs::write(&input, PAGES).unwrap();
    run(&opts(&input, Some(&store_path), false)).unwrap();

    let store = JsonFileStore::open(&store_path).unwrap();
    let rows = store.worst_first("example.com").unwrap();
    let urls: Vec<&str> = rows.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["/weak", "/deep"], "cap of 2 keeps the first two pages");
}

#[test]
fn run_site_flag_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pages.json");
    let store_path = dir.path().join("scores.json");
    fs::write(&input, PAGES).unwrap();
    let mut o = opts(&input, Some(&store_path), true);
    o.site = Some("other.org");
    run(&o).unwrap();

    let store = JsonFileStore::open(&store_path).unwrap();
    assert!(store.worst_first("example.com").unwrap().is_empty());
    assert_eq!(store.worst_first("other.org").unwrap().len(), 2);
}

#[test]
fn run_bare_array_uses_default_site() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pages.json");
    let store_path = dir.path().join("scores.json");
    fs::write(
        &input,
        r#"[{"url": "/a", "clicks": 1, "impressions": 10, "ctr": 0.1, "position": 3.0}]"#,
    )
    .unwrap();
    run(&opts(&input, Some(&store_path), true)).unwrap();
    let store = JsonFileStore::open(&store_path).unwrap();
    assert_eq!(store.worst_first(DEFAULT_SITE).unwrap().len(), 1);
}

#[test]
fn run_invalid_input_errors() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pages.json");
    fs::write(&input, "{").unwrap();
    assert!(run(&opts(&input, None, false)).is_err());
}
