use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_DB_PATH: &str = "./data/jobs.db";
const DEFAULT_OUTPUT_DIR: &str = "./output";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOOKBACK_DAYS: &str = "7";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// The parsing logic is decoupled from the real environment so tests can
/// drive it with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let db_path = PathBuf::from(or_default("EXECSIGNALS_DB_PATH", DEFAULT_DB_PATH));
    let output_dir = PathBuf::from(or_default("EXECSIGNALS_OUTPUT_DIR", DEFAULT_OUTPUT_DIR));
    let log_level = or_default("EXECSIGNALS_LOG_LEVEL", DEFAULT_LOG_LEVEL);
    let lookback_days = parse_u32("EXECSIGNALS_LOOKBACK_DAYS", DEFAULT_LOOKBACK_DAYS)?;

    Ok(AppConfig {
        db_path,
        output_dir,
        log_level,
        lookback_days,
    })
}
