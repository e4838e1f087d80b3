//! In-memory lead model: a job posting plus its child records and the
//! fields the pipeline computes. Leads live for one run and are never
//! persisted.

use serde::{Deserialize, Serialize};

/// Signal type for hiring-intent signals (e.g. `growth_hire`).
pub const SIGNAL_TYPE_HIRING: &str = "hiring_signals";
/// Signal type for team-structure signals (e.g. `reports_ceo`).
pub const SIGNAL_TYPE_TEAM: &str = "team_structure";
/// Signal type for market-segment signals (e.g. `enterprise`).
pub const SIGNAL_TYPE_SEGMENT: &str = "segment";
/// Signal type for deal-size signals.
pub const SIGNAL_TYPE_DEAL_SIZE: &str = "deal_size";
/// Signal type for compensation signals.
pub const SIGNAL_TYPE_COMP: &str = "comp_signals";
/// Signal type for sales-motion signals.
pub const SIGNAL_TYPE_MOTION: &str = "motion";

/// A categorical tag attached to a posting by the upstream scraper.
///
/// The source data may contain the same `signal_id` more than once for a
/// posting; consumers deduplicate by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalTag {
    pub signal_type: String,
    pub signal_id: String,
    pub signal_value: Option<String>,
}

/// A tool or platform mentioned in a posting description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMention {
    pub name: String,
    pub category: Option<String>,
}

/// A job posting annotated with derived score and flags — the unit of
/// output in every report.
///
/// Posting fields come from the jobs store and are read-only; `score`,
/// `repost_count` and `is_search_firm` are filled in by the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub company_name_normalized: Option<String>,
    pub location_raw: Option<String>,
    pub location_metro: Option<String>,
    pub location_state: Option<String>,
    pub location_type: Option<String>,
    pub is_remote: bool,
    pub annual_salary_min: Option<i64>,
    pub annual_salary_max: Option<i64>,
    pub seniority_tier: Option<String>,
    pub function_category: Option<String>,
    pub company_industry: Option<String>,
    pub company_num_employees: Option<String>,
    pub company_stage: Option<String>,
    pub source_url: Option<String>,
    pub company_url: Option<String>,
    pub date_posted: Option<String>,
    pub description_snippet: Option<String>,

    pub signals: Vec<SignalTag>,
    pub tools: Vec<ToolMention>,

    pub score: i64,
    pub repost_count: i64,
    pub is_search_firm: bool,
}

impl Lead {
    /// Title text lowercased, or empty when the posting has no title.
    #[must_use]
    pub fn title_lower(&self) -> String {
        self.title.as_deref().unwrap_or("").to_lowercase()
    }

    /// Best available annual salary figure: prefer max, fall back to min.
    #[must_use]
    pub fn best_salary(&self) -> i64 {
        self.annual_salary_max
            .or(self.annual_salary_min)
            .unwrap_or(0)
    }

    /// True when any attached tag carries the given signal id.
    #[must_use]
    pub fn has_signal(&self, signal_id: &str) -> bool {
        self.signals.iter().any(|s| s.signal_id == signal_id)
    }

    /// Dedup identity: lowercased (normalized company, title).
    #[must_use]
    pub fn identity_key(&self) -> (String, String) {
        (
            self.company_name_normalized
                .as_deref()
                .unwrap_or("")
                .to_lowercase(),
            self.title_lower(),
        )
    }
}
