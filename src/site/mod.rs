//! Site health score (`serp site` command).

pub(crate) mod health;
mod report;

use std::error::Error;
use std::path::Path;

use crate::metrics::load_totals;

use health::site_health;
use report::{print_json, print_report};

pub fn run(input: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let totals = load_totals(input)?;
    let health = site_health(&totals);

    if json {
        print_json(&health, &totals)?;
    } else {
        print_report(&health, &totals);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn run_table_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("totals.json");
        fs::write(
            &input,
            r#"{"clicks": 60, "impressions": 2000, "ctr": 0.03, "position": 8.0}"#,
        )
        .unwrap();
        run(&input, false).unwrap();
        run(&input, true).unwrap();
    }

    #[test]
    fn run_rejects_invalid_ctr() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("totals.json");
        fs::write(
            &input,
            r#"{"clicks": 60, "impressions": 2000, "ctr": 3.0, "position": 8.0}"#,
        )
        .unwrap();
        assert!(run(&input, false).is_err());
    }
}
