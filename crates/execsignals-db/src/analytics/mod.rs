//! Market analytics over the full active dataset.
//!
//! These aggregates are independent of the deduplicated/truncated lead
//! list used for the Top-N report; the two views are never conflated. All
//! "now" math is relative to the reference date derived from the data, so
//! re-running against a historical snapshot produces identical output.

mod percentile;
mod queries;

use std::collections::{HashMap, HashSet};

use chrono::{Days, NaiveDate, Utc};
use sqlx::SqlitePool;

use execsignals_core::display::{
    industry_display, stage_bucket, COMPANY_BLOCKLIST, FUNCTION_TO_ROLE, ROLE_ORDER, SEARCH_FIRMS,
    STAGE_BUCKETS,
};

use crate::DbError;
use queries::DateWindow;

pub use percentile::{percentile, trend_pct, wow_pct};

/// Salary distribution for one role, with a 4-week median trend.
#[derive(Debug, Clone)]
pub struct SalaryBenchmark {
    pub role: &'static str,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    /// Sample size behind the percentiles.
    pub count: usize,
    /// Recent-vs-prior 30-day median change, percent; 0 when either
    /// window is too thin.
    pub trend_pct: f64,
}

/// VP+ posting count for one industry with week-over-week change.
#[derive(Debug, Clone)]
pub struct IndustryVelocity {
    pub industry: String,
    pub count: i64,
    pub wow_pct: i64,
}

/// A company ranked by distinct VP+ roles in the lookback window.
#[derive(Debug, Clone)]
pub struct TopCompany {
    pub company: String,
    pub distinct_roles: i64,
    /// True when the company had no postings in the prior 7-day window.
    pub is_new: bool,
}

/// VP+ posting count for one metro (or the Remote bucket).
#[derive(Debug, Clone)]
pub struct GeoBucket {
    pub metro: String,
    pub count: i64,
    pub wow_pct: i64,
}

/// Share of VP+ postings in one company-stage bucket.
#[derive(Debug, Clone)]
pub struct StageShare {
    pub stage: &'static str,
    pub count: i64,
    pub pct: i64,
}

/// A tool ranked by distinct postings mentioning it.
#[derive(Debug, Clone)]
pub struct ToolTrend {
    pub tool: String,
    pub count: i64,
    pub pct: i64,
}

/// Everything the Market Intel surfaces consume, computed in one pass.
#[derive(Debug, Clone, Default)]
pub struct MarketAnalytics {
    pub salary_benchmarks: Vec<SalaryBenchmark>,
    pub industry_velocity: Vec<IndustryVelocity>,
    pub top_companies: Vec<TopCompany>,
    pub geo_breakdown: Vec<GeoBucket>,
    pub company_stage: Vec<StageShare>,
    pub stack_trends: Vec<ToolTrend>,
    pub remote_function_counts: HashMap<String, i64>,
}

/// Latest posting date in the active dataset — the reference point for
/// every trend and WoW window. Falls back to today only when the store
/// has no active postings at all.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn data_reference_date(pool: &SqlitePool) -> Result<NaiveDate, DbError> {
    let raw = queries::max_active_date(pool).await?;
    let parsed = raw
        .as_deref()
        .and_then(|s| NaiveDate::parse_from_str(s.get(..10).unwrap_or(s), "%Y-%m-%d").ok());
    Ok(parsed.unwrap_or_else(|| Utc::now().date_naive()))
}

/// Compute all market analytics for the given lookback window.
///
/// `lookback_days` controls the selection windows for velocity, company,
/// geo, stage and tool aggregates. Week-over-week percentages always use
/// fixed 7-day current/prior windows regardless of `lookback_days`; the
/// two are configured independently on purpose.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any underlying query fails.
pub async fn compute_all_analytics(
    pool: &SqlitePool,
    lookback_days: u32,
    reference_date: NaiveDate,
) -> Result<MarketAnalytics, DbError> {
    let cutoff = ymd(days_before(reference_date, lookback_days));
    let wow_current = DateWindow::Closed(ymd(days_before(reference_date, 7)), ymd(reference_date));
    let wow_prior = DateWindow::HalfOpen(
        ymd(days_before(reference_date, 14)),
        ymd(days_before(reference_date, 7)),
    );
    let full = DateWindow::Since(cutoff.clone());

    let salary_benchmarks = salary_benchmarks(pool, reference_date).await?;
    let industry_velocity = industry_velocity(pool, &full, &wow_current, &wow_prior).await?;
    let top_companies = top_companies(pool, &full, &wow_prior).await?;
    let geo_breakdown = geo_breakdown(pool, &full, &wow_current, &wow_prior).await?;

    let stage_rows = queries::stage_counts(pool, &full).await?;
    let company_stage = stage_shares_from_counts(&stage_rows);

    let tool_rows = queries::tool_counts(pool, &full).await?;
    let total = queries::vp_total(pool, &full).await?;
    let stack_trends = tool_shares_from_counts(&tool_rows, total);

    let remote_function_counts = queries::remote_function_counts(pool, &cutoff)
        .await?
        .into_iter()
        .collect();

    Ok(MarketAnalytics {
        salary_benchmarks,
        industry_velocity,
        top_companies,
        geo_breakdown,
        company_stage,
        stack_trends,
        remote_function_counts,
    })
}

/// P25/median/P75 per role over all active salaried postings, with a
/// trailing-30-day vs prior-30-day median trend. Roles with fewer than 3
/// samples are omitted entirely.
async fn salary_benchmarks(
    pool: &SqlitePool,
    reference_date: NaiveDate,
) -> Result<Vec<SalaryBenchmark>, DbError> {
    let trend_cutoff = ymd(days_before(reference_date, 30));
    let trend_prior = ymd(days_before(reference_date, 60));

    let mut benchmarks = Vec::new();
    for (func, role) in FUNCTION_TO_ROLE {
        if !ROLE_ORDER.contains(role) {
            continue;
        }

        let samples = queries::all_salaries_by_function(pool, func).await?;
        if samples.len() < 3 {
            continue;
        }
        let values: Vec<f64> = samples.iter().map(|&s| s as f64).collect();

        let recent = queries::window_salaries_by_function(
            pool,
            func,
            &DateWindow::Since(trend_cutoff.clone()),
        )
        .await?;
        let prior = queries::window_salaries_by_function(
            pool,
            func,
            &DateWindow::HalfOpen(trend_prior.clone(), trend_cutoff.clone()),
        )
        .await?;

        let trend = if recent.len() >= 3 && prior.len() >= 3 {
            let recent_values: Vec<f64> = recent.iter().map(|&s| s as f64).collect();
            let prior_values: Vec<f64> = prior.iter().map(|&s| s as f64).collect();
            trend_pct(
                percentile(&recent_values, 50.0),
                percentile(&prior_values, 50.0),
            )
        } else {
            0.0
        };

        benchmarks.push(SalaryBenchmark {
            role,
            p25: percentile(&values, 25.0),
            median: percentile(&values, 50.0),
            p75: percentile(&values, 75.0),
            count: samples.len(),
            trend_pct: trend,
        });
    }

    benchmarks.sort_by_key(|b| {
        ROLE_ORDER
            .iter()
            .position(|r| *r == b.role)
            .unwrap_or(usize::MAX)
    });
    Ok(benchmarks)
}

async fn industry_velocity(
    pool: &SqlitePool,
    full: &DateWindow,
    wow_current: &DateWindow,
    wow_prior: &DateWindow,
) -> Result<Vec<IndustryVelocity>, DbError> {
    let current = queries::industry_counts(pool, full).await?;
    let curr_week: HashMap<String, i64> = queries::industry_counts(pool, wow_current)
        .await?
        .into_iter()
        .collect();
    let prev_week: HashMap<String, i64> = queries::industry_counts(pool, wow_prior)
        .await?
        .into_iter()
        .collect();

    Ok(assemble_velocity(&current, &curr_week, &prev_week))
}

async fn top_companies(
    pool: &SqlitePool,
    full: &DateWindow,
    wow_prior: &DateWindow,
) -> Result<Vec<TopCompany>, DbError> {
    let current = queries::company_distinct_roles(pool, full).await?;
    let prior = queries::companies_present(pool, wow_prior).await?;
    Ok(assemble_top_companies(&current, &prior))
}

async fn geo_breakdown(
    pool: &SqlitePool,
    full: &DateWindow,
    wow_current: &DateWindow,
    wow_prior: &DateWindow,
) -> Result<Vec<GeoBucket>, DbError> {
    let current_metro = queries::metro_counts(pool, full, Some(10)).await?;
    let remote_total = queries::remote_count(pool, full).await?;
    let curr_week: HashMap<String, i64> = queries::metro_counts(pool, wow_current, None)
        .await?
        .into_iter()
        .collect();
    let prev_week: HashMap<String, i64> = queries::metro_counts(pool, wow_prior, None)
        .await?
        .into_iter()
        .collect();
    let remote_curr = queries::remote_count(pool, wow_current).await?;
    let remote_prev = queries::remote_count(pool, wow_prior).await?;

    let mut geo: Vec<GeoBucket> = current_metro
        .iter()
        .map(|(metro, count)| {
            let wc = curr_week.get(metro).copied().unwrap_or(0);
            let wp = prev_week.get(metro).copied().unwrap_or(0);
            GeoBucket {
                metro: metro.clone(),
                count: *count,
                wow_pct: wow_pct(wc, wp),
            }
        })
        .collect();
    geo.push(GeoBucket {
        metro: "Remote".to_string(),
        count: remote_total,
        wow_pct: wow_pct(remote_curr, remote_prev),
    });

    geo.sort_by(|a, b| b.count.cmp(&a.count));
    geo.truncate(8);
    Ok(geo)
}

fn assemble_velocity(
    current: &[(String, i64)],
    curr_week: &HashMap<String, i64>,
    prev_week: &HashMap<String, i64>,
) -> Vec<IndustryVelocity> {
    current
        .iter()
        .take(8)
        .map(|(raw, count)| {
            let wc = curr_week.get(raw).copied().unwrap_or(0);
            let wp = prev_week.get(raw).copied().unwrap_or(0);
            IndustryVelocity {
                industry: industry_display(raw).to_string(),
                count: *count,
                wow_pct: wow_pct(wc, wp),
            }
        })
        .collect()
}

fn assemble_top_companies(
    current: &[(String, i64)],
    prior_present: &HashSet<String>,
) -> Vec<TopCompany> {
    current
        .iter()
        .filter(|(name, _)| {
            let lowered = name.to_lowercase();
            let lowered = lowered.trim();
            !SEARCH_FIRMS.contains(&lowered) && !COMPANY_BLOCKLIST.contains(&lowered)
        })
        .take(10)
        .map(|(name, count)| TopCompany {
            company: name.clone(),
            distinct_roles: *count,
            is_new: !prior_present.contains(name),
        })
        .collect()
}

/// Bucket raw stage counts and convert to whole-percent shares.
fn stage_shares_from_counts(rows: &[(Option<String>, i64)]) -> Vec<StageShare> {
    let mut buckets: HashMap<&'static str, i64> = HashMap::new();
    let mut total = 0;
    for (stage_raw, count) in rows {
        total += count;
        let bucket = stage_bucket(stage_raw.as_deref().unwrap_or(""));
        *buckets.entry(bucket).or_insert(0) += count;
    }

    STAGE_BUCKETS
        .iter()
        .map(|name| {
            let count = buckets.get(name).copied().unwrap_or(0);
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            let pct = if total > 0 {
                (count as f64 / total as f64 * 100.0).round() as i64
            } else {
                0
            };
            StageShare {
                stage: name,
                count,
                pct,
            }
        })
        .collect()
}

/// Convert tool counts into share-of-postings percentages.
fn tool_shares_from_counts(rows: &[(String, i64)], total: i64) -> Vec<ToolTrend> {
    rows.iter()
        .map(|(tool, count)| {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            let pct = if total > 0 {
                (*count as f64 / total as f64 * 100.0).round() as i64
            } else {
                0
            };
            ToolTrend {
                tool: tool.clone(),
                count: *count,
                pct,
            }
        })
        .collect()
}

fn ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn days_before(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(date)
}
