use super::*;

#[test]
fn defaults_match_plan_tiers() {
    let config = Config::default();
    assert_eq!(config.default_plan, Plan::Free);
    assert_eq!(config.plans.cap(Plan::Free), 5);
    assert_eq!(config.plans.cap(Plan::Pro), 50);
    assert_eq!(config.plans.cap(Plan::Agency), 500);
    assert_eq!(config.report.top, 20);
}

#[test]
fn load_without_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(None, dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_default_file_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "default_plan = \"pro\"\n\n[plans]\npro = 75\n",
    )
    .unwrap();
    let config = Config::load(None, dir.path()).unwrap();
    assert_eq!(config.default_plan, Plan::Pro);
    assert_eq!(config.plans.pro, 75);
    assert_eq!(config.plans.free, 5, "unset keys keep defaults");
    assert_eq!(config.report.top, 20);
}

#[test]
fn load_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[report]\ntop = 3\n").unwrap();
    let config = Config::load(Some(&path), dir.path()).unwrap();
    assert_eq!(config.report.top, 3);
}

#[test]
fn load_explicit_missing_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("missing.toml")), dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got {err}");
}

#[test]
fn load_invalid_plan_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "default_plan = \"enterprise\"\n").unwrap();
    let err = Config::load(Some(&path), dir.path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }), "got {err}");
}

#[test]
fn plan_names() {
    assert_eq!(Plan::Free.as_str(), "free");
    assert_eq!(Plan::Pro.as_str(), "pro");
    assert_eq!(Plan::Agency.as_str(), "agency");
}
