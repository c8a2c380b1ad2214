use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issue severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Ctr,
    Ranking,
    Content,
    Technical,
    Opportunity,
}

impl IssueCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ctr => "ctr",
            Self::Ranking => "ranking",
            Self::Content => "content",
            Self::Technical => "technical",
            Self::Opportunity => "opportunity",
        }
    }
}

/// How long fixing an issue is expected to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixEffort {
    Quick,
    Medium,
    Long,
}

impl FixEffort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityKind {
    QuickWin,
    Growth,
    Maintain,
}

impl OpportunityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::QuickWin => "quick_win",
            Self::Growth => "growth",
            Self::Maintain => "maintain",
        }
    }
}

/// Effort needed to capture an opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Severity, IssueCategory, FixEffort, OpportunityKind, Effort);

/// A diagnosed problem with a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Fresh per analysis run; never compare issues by id.
    pub id: String,
    pub severity: Severity,
    pub category: IssueCategory,
    pub title: String,
    pub description: String,
    pub current_state: String,
    pub recommendation: String,
    /// 1–10, only used for ordering.
    pub impact: u8,
    pub effort: FixEffort,
}

/// A growth opportunity with an estimated click gain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub kind: OpportunityKind,
    pub title: String,
    pub description: String,
    pub potential_clicks: u64,
    pub effort: Effort,
}

/// Fixed attributes of one issue rule; the engine fills in the text that
/// depends on the page's numbers.
#[derive(Debug, Clone, Copy)]
pub struct IssueTemplate {
    pub severity: Severity,
    pub category: IssueCategory,
    pub title: &'static str,
    pub impact: u8,
    pub effort: FixEffort,
}

impl IssueTemplate {
    pub fn issue(
        &self,
        description: String,
        current_state: String,
        recommendation: impl Into<String>,
    ) -> Issue {
        Issue {
            id: Uuid::new_v4().to_string(),
            severity: self.severity,
            category: self.category,
            title: self.title.to_string(),
            description,
            current_state,
            recommendation: recommendation.into(),
            impact: self.impact.clamp(1, 10),
            effort: self.effort,
        }
    }
}

impl Opportunity {
    pub fn new(
        kind: OpportunityKind,
        title: &str,
        description: String,
        potential_clicks: u64,
        effort: Effort,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.to_string(),
            description,
            potential_clicks,
            effort,
        }
    }
}

/// Result of diagnosing a single page.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnosis {
    /// 0–100 after all penalties.
    pub score: u8,
    /// Short-range benchmark CTR for the page's position.
    pub expected_ctr: f64,
    /// Actual CTR divided by the expected CTR.
    pub ctr_ratio: f64,
    pub issues: Vec<Issue>,
    pub opportunities: Vec<Opportunity>,
}
