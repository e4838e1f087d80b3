use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

pub mod analytics;
pub mod leads;
pub mod reposts;

pub use analytics::{
    compute_all_analytics, data_reference_date, GeoBucket, IndustryVelocity, MarketAnalytics,
    SalaryBenchmark, StageShare, ToolTrend, TopCompany,
};
pub use leads::fetch_hot_leads;
pub use reposts::{repost_counts, RepostKey};

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database not found at {0}")]
    DatabaseNotFound(String),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Open the jobs database read-only.
///
/// The pipeline never writes to the store; a read-only handle keeps a
/// concurrent scraper run safe.
///
/// # Errors
///
/// Returns [`DbError::DatabaseNotFound`] if `path` does not exist, or
/// [`DbError::Sqlx`] if the pool cannot be opened.
pub async fn connect(path: &Path) -> Result<SqlitePool, DbError> {
    if !path.exists() {
        return Err(DbError::DatabaseNotFound(path.display().to_string()));
    }
    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Build a `?, ?, ...` placeholder list for a dynamic `IN` clause.
pub(crate) fn placeholders(n: usize) -> String {
    let mut out = String::with_capacity(n * 3);
    for i in 0..n {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('?');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_empty() {
        assert_eq!(placeholders(0), "");
    }

    #[test]
    fn placeholders_one() {
        assert_eq!(placeholders(1), "?");
    }

    #[test]
    fn placeholders_many() {
        assert_eq!(placeholders(4), "?, ?, ?, ?");
    }
}
