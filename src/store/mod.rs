//! Persisted page scores (`serp scores` command and `diagnose --store`).
//!
//! One record per (site, page URL); an upsert replaces the previous record,
//! so no history is kept. Listings come back worst score first.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fs;
use std::path::{Path, PathBuf};

use crate::diagnose::batch::PageScore;
use crate::diagnose::report::print_page_table;
use crate::error::{Error, Result};
use crate::report_helpers;

/// Storage for page scores keyed by (site, url), last write wins.
pub trait ScoreStore {
    fn upsert(&mut self, score: PageScore) -> Result<()>;

    /// All records for `site`, ascending by score.
    fn worst_first(&self, site: &str) -> Result<Vec<PageScore>>;

    fn upsert_all(&mut self, scores: impl IntoIterator<Item = PageScore>) -> Result<usize>
    where
        Self: Sized,
    {
        let mut n = 0;
        for score in scores {
            self.upsert(score)?;
            n += 1;
        }
        Ok(n)
    }
}

type Records = BTreeMap<String, BTreeMap<String, PageScore>>;

/// A JSON document mapping site → url → score. Changes are written by
/// [`JsonFileStore::save`].
pub struct JsonFileStore {
    path: PathBuf,
    records: Records,
}

impl JsonFileStore {
    /// Open an existing store file, or start an empty one if it does not exist.
    pub fn open(path: &Path) -> Result<Self> {
        let records = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
            serde_json::from_str(&content).map_err(|e| Error::json(path, e))?
        } else {
            tracing::debug!(path = %path.display(), "store file not found, starting empty");
            Records::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, json).map_err(|e| Error::io(&self.path, e))?;
        tracing::info!(path = %self.path.display(), "store saved");
        Ok(())
    }
}

impl ScoreStore for JsonFileStore {
    fn upsert(&mut self, score: PageScore) -> Result<()> {
        let site = self.records.entry(score.site.clone()).or_default();
        if site.insert(score.url.clone(), score).is_some() {
            tracing::debug!("replaced existing page score");
        }
        Ok(())
    }

    fn worst_first(&self, site: &str) -> Result<Vec<PageScore>> {
        let mut scores: Vec<PageScore> = self
            .records
            .get(site)
            .map(|pages| pages.values().cloned().collect())
            .unwrap_or_default();
        scores.sort_by(|a, b| a.score.cmp(&b.score).then_with(|| a.url.cmp(&b.url)));
        Ok(scores)
    }
}

/// List stored scores for a site, worst first.
pub fn run(
    path: &Path,
    site: &str,
    top: usize,
    details: bool,
    json: bool,
) -> std::result::Result<(), Box<dyn StdError>> {
    let store = JsonFileStore::open(path)?;
    let scores = store.worst_first(site)?;

    if json {
        return report_helpers::print_json_stdout(&scores);
    }

    let separator = report_helpers::separator(78);
    println!("Stored Page Scores: {site}");
    println!("{separator}");
    if scores.is_empty() {
        println!(" No scores stored for this site.");
        return Ok(());
    }
    println!(" Pages: {}", scores.len());
    println!("{separator}");
    let refs: Vec<&PageScore> = scores.iter().collect();
    print_page_table(&refs, top, details);
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
