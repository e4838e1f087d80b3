//! Repost detection: how many distinct scrape dates each
//! (company, title) pair has been observed on.
//!
//! Grouping by distinct `date(date_scraped)` means a role posted in five
//! locations on one day counts as a single observation; only pairs seen
//! on two or more dates are returned.

use std::collections::HashMap;

use sqlx::SqlitePool;

use execsignals_core::seniority::VP_TIERS;

use crate::{placeholders, DbError};

/// Lowercased (normalized company, title) identity of a posting.
pub type RepostKey = (String, String);

#[derive(Debug, Clone, sqlx::FromRow)]
struct RepostRow {
    company: String,
    title: String,
    scrape_count: i64,
}

/// Count distinct scrape dates per (company, title) pair across the active
/// VP+ dataset. Only pairs observed on 2+ dates are included.
///
/// The counts are display-only ("REPOSTED Nx"); they never feed scoring.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn repost_counts(pool: &SqlitePool) -> Result<HashMap<RepostKey, i64>, DbError> {
    let sql = format!(
        "SELECT LOWER(company_name_normalized) AS company, LOWER(title) AS title, \
                COUNT(DISTINCT date(date_scraped)) AS scrape_count \
         FROM jobs \
         WHERE seniority_tier IN ({}) \
           AND is_active = 1 \
           AND company_name_normalized IS NOT NULL \
         GROUP BY LOWER(company_name_normalized), LOWER(title) \
         HAVING scrape_count > 1",
        placeholders(VP_TIERS.len()),
    );
    let mut query = sqlx::query_as::<_, RepostRow>(&sql);
    for tier in VP_TIERS {
        query = query.bind(*tier);
    }
    let rows = query.fetch_all(pool).await?;

    Ok(rows
        .into_iter()
        .map(|r| ((r.company, r.title), r.scrape_count))
        .collect())
}
