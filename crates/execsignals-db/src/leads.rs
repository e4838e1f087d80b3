//! Lead selection from the jobs store.
//!
//! Postings are selected in one query, then signals and tools are loaded
//! in two batch queries and grouped by job id in memory. The store is
//! small enough that the grouping maps stay trivially in memory.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use sqlx::SqlitePool;

use execsignals_core::{Lead, SignalTag, ToolMention};

use crate::{placeholders, DbError};

#[derive(Debug, Clone, sqlx::FromRow)]
struct PostingRow {
    id: i64,
    title: Option<String>,
    company_name: Option<String>,
    company_name_normalized: Option<String>,
    location_raw: Option<String>,
    location_metro: Option<String>,
    location_state: Option<String>,
    location_type: Option<String>,
    is_remote: Option<bool>,
    annual_salary_min: Option<i64>,
    annual_salary_max: Option<i64>,
    seniority_tier: Option<String>,
    function_category: Option<String>,
    company_industry: Option<String>,
    company_num_employees: Option<String>,
    company_stage: Option<String>,
    source_url: Option<String>,
    company_url: Option<String>,
    date_posted: Option<String>,
    description_snippet: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct SignalRow {
    job_id: i64,
    signal_type: String,
    signal_id: String,
    signal_value: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct ToolRow {
    job_id: i64,
    tool_name: String,
    tool_category: Option<String>,
}

/// Fetch qualifying postings with their signals and tools attached.
///
/// A posting qualifies when its seniority tier is in `tiers`, it carries a
/// salary, it was posted within `days` of `reference_date`, and it has at
/// least one qualifying hiring or team-structure signal.
///
/// Results are ordered newest-first; computed fields on the returned
/// [`Lead`]s are zeroed and filled in by the pipeline.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any query fails.
pub async fn fetch_hot_leads(
    pool: &SqlitePool,
    days: u32,
    tiers: &[&str],
    reference_date: NaiveDate,
) -> Result<Vec<Lead>, DbError> {
    let cutoff = reference_date
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(reference_date)
        .format("%Y-%m-%d")
        .to_string();

    let sql = format!(
        "SELECT DISTINCT j.id, j.title, j.company_name, j.company_name_normalized, \
                j.location_raw, j.location_metro, j.location_state, j.location_type, \
                j.is_remote, j.annual_salary_min, j.annual_salary_max, \
                j.seniority_tier, j.function_category, j.company_industry, \
                j.company_num_employees, j.company_stage, j.source_url, \
                j.company_url, j.date_posted, j.description_snippet \
         FROM jobs j \
         JOIN job_signals js ON j.id = js.job_id \
         WHERE j.seniority_tier IN ({tiers}) \
           AND j.has_salary = 1 \
           AND j.date_posted >= ? \
           AND ( \
               (js.signal_type = 'hiring_signals' AND js.signal_id IN ('growth_hire')) \
               OR (js.signal_type = 'team_structure' \
                   AND js.signal_id IN ('build_team', 'reports_ceo', 'reports_cro', 'first_hire')) \
           ) \
         ORDER BY j.date_posted DESC",
        tiers = placeholders(tiers.len()),
    );

    let mut query = sqlx::query_as::<_, PostingRow>(&sql);
    for tier in tiers {
        query = query.bind(*tier);
    }
    let postings = query.bind(cutoff).fetch_all(pool).await?;

    if postings.is_empty() {
        return Ok(Vec::new());
    }

    let job_ids: Vec<i64> = postings.iter().map(|p| p.id).collect();
    let mut signals = fetch_signals_batch(pool, &job_ids).await?;
    let mut tools = fetch_tools_batch(pool, &job_ids).await?;

    let leads = postings
        .into_iter()
        .map(|p| {
            let id = p.id;
            assemble_lead(p, signals.remove(&id), tools.remove(&id))
        })
        .collect();
    Ok(leads)
}

/// Load all signal tags for the given job ids, grouped by job id.
async fn fetch_signals_batch(
    pool: &SqlitePool,
    job_ids: &[i64],
) -> Result<HashMap<i64, Vec<SignalTag>>, DbError> {
    let sql = format!(
        "SELECT job_id, signal_type, signal_id, signal_value \
         FROM job_signals \
         WHERE job_id IN ({})",
        placeholders(job_ids.len()),
    );
    let mut query = sqlx::query_as::<_, SignalRow>(&sql);
    for id in job_ids {
        query = query.bind(*id);
    }
    let rows = query.fetch_all(pool).await?;

    let mut map: HashMap<i64, Vec<SignalTag>> = HashMap::new();
    for row in rows {
        map.entry(row.job_id).or_default().push(SignalTag {
            signal_type: row.signal_type,
            signal_id: row.signal_id,
            signal_value: row.signal_value,
        });
    }
    Ok(map)
}

/// Load all tool mentions for the given job ids, grouped by job id.
async fn fetch_tools_batch(
    pool: &SqlitePool,
    job_ids: &[i64],
) -> Result<HashMap<i64, Vec<ToolMention>>, DbError> {
    let sql = format!(
        "SELECT job_id, tool_name, tool_category \
         FROM job_tools \
         WHERE job_id IN ({})",
        placeholders(job_ids.len()),
    );
    let mut query = sqlx::query_as::<_, ToolRow>(&sql);
    for id in job_ids {
        query = query.bind(*id);
    }
    let rows = query.fetch_all(pool).await?;

    let mut map: HashMap<i64, Vec<ToolMention>> = HashMap::new();
    for row in rows {
        map.entry(row.job_id).or_default().push(ToolMention {
            name: row.tool_name,
            category: row.tool_category,
        });
    }
    Ok(map)
}

fn assemble_lead(
    p: PostingRow,
    signals: Option<Vec<SignalTag>>,
    tools: Option<Vec<ToolMention>>,
) -> Lead {
    Lead {
        id: p.id,
        title: p.title,
        company_name: p.company_name,
        company_name_normalized: p.company_name_normalized,
        location_raw: p.location_raw,
        location_metro: p.location_metro,
        location_state: p.location_state,
        location_type: p.location_type,
        is_remote: p.is_remote.unwrap_or(false),
        annual_salary_min: p.annual_salary_min,
        annual_salary_max: p.annual_salary_max,
        seniority_tier: p.seniority_tier,
        function_category: p.function_category,
        company_industry: p.company_industry,
        company_num_employees: p.company_num_employees,
        company_stage: p.company_stage,
        source_url: p.source_url,
        company_url: p.company_url,
        date_posted: p.date_posted,
        description_snippet: p.description_snippet,
        signals: signals.unwrap_or_default(),
        tools: tools.unwrap_or_default(),
        score: 0,
        repost_count: 0,
        is_search_firm: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_posting(id: i64) -> PostingRow {
        PostingRow {
            id,
            title: Some("VP of Sales".to_string()),
            company_name: Some("Acme".to_string()),
            company_name_normalized: Some("acme".to_string()),
            location_raw: None,
            location_metro: Some("Boston".to_string()),
            location_state: Some("MA".to_string()),
            location_type: None,
            is_remote: None,
            annual_salary_min: Some(180_000),
            annual_salary_max: Some(220_000),
            seniority_tier: Some("vp".to_string()),
            function_category: Some("sales".to_string()),
            company_industry: None,
            company_num_employees: None,
            company_stage: Some("series_b".to_string()),
            source_url: Some("https://example.com/job/1".to_string()),
            company_url: None,
            date_posted: Some("2026-07-30".to_string()),
            description_snippet: None,
        }
    }

    #[test]
    fn assemble_lead_defaults_missing_children() {
        let lead = assemble_lead(make_posting(1), None, None);
        assert!(lead.signals.is_empty());
        assert!(lead.tools.is_empty());
        assert_eq!(lead.score, 0);
        assert_eq!(lead.repost_count, 0);
        assert!(!lead.is_search_firm);
    }

    #[test]
    fn assemble_lead_null_is_remote_becomes_false() {
        let lead = assemble_lead(make_posting(2), None, None);
        assert!(!lead.is_remote);
    }

    #[test]
    fn assemble_lead_attaches_children() {
        let signals = vec![SignalTag {
            signal_type: "team_structure".to_string(),
            signal_id: "reports_ceo".to_string(),
            signal_value: None,
        }];
        let tools = vec![ToolMention {
            name: "Salesforce".to_string(),
            category: Some("crm".to_string()),
        }];
        let lead = assemble_lead(make_posting(3), Some(signals), Some(tools));
        assert_eq!(lead.signals.len(), 1);
        assert_eq!(lead.tools[0].name, "Salesforce");
    }
}
