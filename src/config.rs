//! Optional TOML configuration: plan caps and report defaults.
//!
//! Looked up at `--config PATH`, else `serpscore.toml` in the working
//! directory, else built-in defaults. Missing keys fall back to defaults.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::{Error, Result};

/// File name picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "serpscore.toml";

/// Subscription tier; each tier caps how many pages one run may analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Pro,
    Agency,
}

impl Plan {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Agency => "agency",
        }
    }
}

/// Maximum pages analyzed per run, per plan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlanCaps {
    pub free: usize,
    pub pro: usize,
    pub agency: usize,
}

impl Default for PlanCaps {
    fn default() -> Self {
        Self {
            free: 5,
            pro: 50,
            agency: 500,
        }
    }
}

impl PlanCaps {
    pub fn cap(&self, plan: Plan) -> usize {
        match plan {
            Plan::Free => self.free,
            Plan::Pro => self.pro,
            Plan::Agency => self.agency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Rows shown in page tables.
    pub top: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top: 20 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_plan: Plan,
    pub plans: PlanCaps,
    pub report: ReportConfig,
}

impl Config {
    /// Load from an explicit path (must exist), or from the default file in
    /// `dir` if present, or fall back to defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };
        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let config: Config = toml::from_str(&content).map_err(|source| Error::Config {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
