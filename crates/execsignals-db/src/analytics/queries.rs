//! SQL behind the market analytics. Every query is restricted to active
//! postings in the VP+ tiers.

use std::collections::HashSet;

use sqlx::SqlitePool;

use execsignals_core::seniority::VP_TIERS;

use crate::{placeholders, DbError};

/// Posting-date window for an aggregate query.
///
/// `Closed` includes both endpoints; `HalfOpen` excludes the upper one.
/// Week-over-week comparisons pair a `Closed` current week with a
/// `HalfOpen` prior week so the boundary date is counted exactly once.
#[derive(Debug, Clone)]
pub(crate) enum DateWindow {
    Since(String),
    Closed(String, String),
    HalfOpen(String, String),
}

impl DateWindow {
    fn clause(&self) -> &'static str {
        match self {
            DateWindow::Since(_) => " AND date_posted >= ?",
            DateWindow::Closed(_, _) => " AND date_posted >= ? AND date_posted <= ?",
            DateWindow::HalfOpen(_, _) => " AND date_posted >= ? AND date_posted < ?",
        }
    }

    /// Bound parameters in clause order: `from` always, `to` when present.
    fn params(&self) -> (&str, Option<&str>) {
        match self {
            DateWindow::Since(from) => (from, None),
            DateWindow::Closed(from, to) | DateWindow::HalfOpen(from, to) => {
                (from, Some(to.as_str()))
            }
        }
    }
}

fn vp_tiers_in() -> String {
    placeholders(VP_TIERS.len())
}

/// Latest `date_posted` among active postings, as stored (raw text).
pub(crate) async fn max_active_date(pool: &SqlitePool) -> Result<Option<String>, DbError> {
    let raw: Option<String> =
        sqlx::query_scalar("SELECT MAX(date_posted) FROM jobs WHERE is_active = 1")
            .fetch_one(pool)
            .await?;
    Ok(raw)
}

/// Max salaries for a function category over all active postings, ascending.
pub(crate) async fn all_salaries_by_function(
    pool: &SqlitePool,
    function_category: &str,
) -> Result<Vec<i64>, DbError> {
    let sql = format!(
        "SELECT annual_salary_max FROM jobs \
         WHERE is_active = 1 \
           AND seniority_tier IN ({}) \
           AND function_category = ? \
           AND annual_salary_max > 0 \
         ORDER BY annual_salary_max",
        vp_tiers_in(),
    );
    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for tier in VP_TIERS {
        query = query.bind(*tier);
    }
    Ok(query
        .bind(function_category.to_string())
        .fetch_all(pool)
        .await?)
}

/// Max salaries for a function category within a posting-date window,
/// ascending.
pub(crate) async fn window_salaries_by_function(
    pool: &SqlitePool,
    function_category: &str,
    window: &DateWindow,
) -> Result<Vec<i64>, DbError> {
    let sql = format!(
        "SELECT annual_salary_max FROM jobs \
         WHERE is_active = 1 \
           AND seniority_tier IN ({}) \
           AND function_category = ? \
           AND annual_salary_max > 0{} \
         ORDER BY annual_salary_max",
        vp_tiers_in(),
        window.clause(),
    );
    let (from, to) = window.params();
    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for tier in VP_TIERS {
        query = query.bind(*tier);
    }
    query = query.bind(function_category.to_string());
    query = query.bind(from.to_string());
    if let Some(to) = to {
        query = query.bind(to.to_string());
    }
    Ok(query.fetch_all(pool).await?)
}

/// Posting counts per raw industry name, descending.
pub(crate) async fn industry_counts(
    pool: &SqlitePool,
    window: &DateWindow,
) -> Result<Vec<(String, i64)>, DbError> {
    let sql = format!(
        "SELECT company_industry, COUNT(*) AS cnt FROM jobs \
         WHERE is_active = 1 \
           AND seniority_tier IN ({}) \
           AND company_industry IS NOT NULL{} \
         GROUP BY company_industry \
         ORDER BY cnt DESC",
        vp_tiers_in(),
        window.clause(),
    );
    let (from, to) = window.params();
    let mut query = sqlx::query_as::<_, (String, i64)>(&sql);
    for tier in VP_TIERS {
        query = query.bind(*tier);
    }
    query = query.bind(from.to_string());
    if let Some(to) = to {
        query = query.bind(to.to_string());
    }
    Ok(query.fetch_all(pool).await?)
}

/// Distinct-title counts per normalized company, capped at 30 companies
/// with at least 3 distinct roles.
///
/// Distinct titles — not raw posting counts — so a role reposted across
/// ten locations counts once.
pub(crate) async fn company_distinct_roles(
    pool: &SqlitePool,
    window: &DateWindow,
) -> Result<Vec<(String, i64)>, DbError> {
    let sql = format!(
        "SELECT company_name_normalized, COUNT(DISTINCT title) AS unique_roles \
         FROM jobs \
         WHERE is_active = 1 \
           AND seniority_tier IN ({}) \
           AND company_name_normalized IS NOT NULL{} \
         GROUP BY company_name_normalized \
         HAVING unique_roles >= 3 \
         ORDER BY unique_roles DESC \
         LIMIT 30",
        vp_tiers_in(),
        window.clause(),
    );
    let (from, to) = window.params();
    let mut query = sqlx::query_as::<_, (String, i64)>(&sql);
    for tier in VP_TIERS {
        query = query.bind(*tier);
    }
    query = query.bind(from.to_string());
    if let Some(to) = to {
        query = query.bind(to.to_string());
    }
    Ok(query.fetch_all(pool).await?)
}

/// Set of normalized company names with any posting in the window.
pub(crate) async fn companies_present(
    pool: &SqlitePool,
    window: &DateWindow,
) -> Result<HashSet<String>, DbError> {
    let sql = format!(
        "SELECT DISTINCT company_name_normalized FROM jobs \
         WHERE is_active = 1 \
           AND seniority_tier IN ({}) \
           AND company_name_normalized IS NOT NULL{}",
        vp_tiers_in(),
        window.clause(),
    );
    let (from, to) = window.params();
    let mut query = sqlx::query_scalar::<_, String>(&sql);
    for tier in VP_TIERS {
        query = query.bind(*tier);
    }
    query = query.bind(from.to_string());
    if let Some(to) = to {
        query = query.bind(to.to_string());
    }
    Ok(query.fetch_all(pool).await?.into_iter().collect())
}

/// Posting counts per metro for on-site/hybrid roles, descending.
pub(crate) async fn metro_counts(
    pool: &SqlitePool,
    window: &DateWindow,
    limit: Option<i64>,
) -> Result<Vec<(String, i64)>, DbError> {
    let limit_clause = limit.map(|n| format!(" LIMIT {n}")).unwrap_or_default();
    let sql = format!(
        "SELECT location_metro, COUNT(*) AS cnt FROM jobs \
         WHERE is_active = 1 \
           AND seniority_tier IN ({}) \
           AND location_metro IS NOT NULL \
           AND (is_remote = 0 OR is_remote IS NULL){} \
         GROUP BY location_metro \
         ORDER BY cnt DESC{limit_clause}",
        vp_tiers_in(),
        window.clause(),
    );
    let (from, to) = window.params();
    let mut query = sqlx::query_as::<_, (String, i64)>(&sql);
    for tier in VP_TIERS {
        query = query.bind(*tier);
    }
    query = query.bind(from.to_string());
    if let Some(to) = to {
        query = query.bind(to.to_string());
    }
    Ok(query.fetch_all(pool).await?)
}

/// Count of remote postings in the window.
pub(crate) async fn remote_count(pool: &SqlitePool, window: &DateWindow) -> Result<i64, DbError> {
    let sql = format!(
        "SELECT COUNT(*) FROM jobs \
         WHERE is_active = 1 \
           AND seniority_tier IN ({}) \
           AND (is_remote = 1 OR location_type LIKE '%remote%'){}",
        vp_tiers_in(),
        window.clause(),
    );
    let (from, to) = window.params();
    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for tier in VP_TIERS {
        query = query.bind(*tier);
    }
    query = query.bind(from.to_string());
    if let Some(to) = to {
        query = query.bind(to.to_string());
    }
    Ok(query.fetch_one(pool).await?)
}

/// Posting counts per raw company-stage value (NULLs included).
pub(crate) async fn stage_counts(
    pool: &SqlitePool,
    window: &DateWindow,
) -> Result<Vec<(Option<String>, i64)>, DbError> {
    let sql = format!(
        "SELECT company_stage, COUNT(*) AS cnt FROM jobs \
         WHERE is_active = 1 \
           AND seniority_tier IN ({}){} \
         GROUP BY company_stage",
        vp_tiers_in(),
        window.clause(),
    );
    let (from, to) = window.params();
    let mut query = sqlx::query_as::<_, (Option<String>, i64)>(&sql);
    for tier in VP_TIERS {
        query = query.bind(*tier);
    }
    query = query.bind(from.to_string());
    if let Some(to) = to {
        query = query.bind(to.to_string());
    }
    Ok(query.fetch_all(pool).await?)
}

/// Top tool mentions (distinct postings per tool), capped at 8.
pub(crate) async fn tool_counts(
    pool: &SqlitePool,
    window: &DateWindow,
) -> Result<Vec<(String, i64)>, DbError> {
    let window_clause = window.clause().replace("date_posted", "j.date_posted");
    let sql = format!(
        "SELECT jt.tool_name, COUNT(DISTINCT jt.job_id) AS cnt \
         FROM job_tools jt \
         JOIN jobs j ON jt.job_id = j.id \
         WHERE j.is_active = 1 \
           AND j.seniority_tier IN ({}) \
           AND jt.tool_name IS NOT NULL \
           AND jt.tool_name <> '' \
           AND LOWER(jt.tool_name) <> '_none'{window_clause} \
         GROUP BY jt.tool_name \
         ORDER BY cnt DESC \
         LIMIT 8",
        vp_tiers_in(),
    );
    let (from, to) = window.params();
    let mut query = sqlx::query_as::<_, (String, i64)>(&sql);
    for tier in VP_TIERS {
        query = query.bind(*tier);
    }
    query = query.bind(from.to_string());
    if let Some(to) = to {
        query = query.bind(to.to_string());
    }
    Ok(query.fetch_all(pool).await?)
}

/// Total VP+ postings in the window (denominator for tool shares).
pub(crate) async fn vp_total(pool: &SqlitePool, window: &DateWindow) -> Result<i64, DbError> {
    let sql = format!(
        "SELECT COUNT(*) FROM jobs \
         WHERE is_active = 1 \
           AND seniority_tier IN ({}){}",
        vp_tiers_in(),
        window.clause(),
    );
    let (from, to) = window.params();
    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for tier in VP_TIERS {
        query = query.bind(*tier);
    }
    query = query.bind(from.to_string());
    if let Some(to) = to {
        query = query.bind(to.to_string());
    }
    Ok(query.fetch_one(pool).await?)
}

/// Remote VP+ posting counts by function category, over a scrape-date
/// cutoff (recently observed, not recently posted).
pub(crate) async fn remote_function_counts(
    pool: &SqlitePool,
    scrape_cutoff: &str,
) -> Result<Vec<(String, i64)>, DbError> {
    let sql = format!(
        "SELECT function_category, COUNT(*) AS cnt FROM jobs \
         WHERE seniority_tier IN ({}) \
           AND is_active = 1 \
           AND (is_remote = 1 OR location_type LIKE '%remote%') \
           AND date(date_scraped) >= ? \
           AND function_category IS NOT NULL \
         GROUP BY function_category",
        vp_tiers_in(),
    );
    let mut query = sqlx::query_as::<_, (String, i64)>(&sql);
    for tier in VP_TIERS {
        query = query.bind(*tier);
    }
    Ok(query
        .bind(scrape_cutoff.to_string())
        .fetch_all(pool)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_window_since_clause_and_params() {
        let w = DateWindow::Since("2026-07-01".to_string());
        assert_eq!(w.clause(), " AND date_posted >= ?");
        assert_eq!(w.params(), ("2026-07-01", None));
    }

    #[test]
    fn date_window_closed_includes_upper_bound() {
        let w = DateWindow::Closed("2026-07-01".to_string(), "2026-07-08".to_string());
        assert_eq!(w.clause(), " AND date_posted >= ? AND date_posted <= ?");
        assert_eq!(w.params(), ("2026-07-01", Some("2026-07-08")));
    }

    #[test]
    fn date_window_half_open_excludes_upper_bound() {
        let w = DateWindow::HalfOpen("2026-06-24".to_string(), "2026-07-01".to_string());
        assert_eq!(w.clause(), " AND date_posted >= ? AND date_posted < ?");
    }
}
