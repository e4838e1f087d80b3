use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod display;
pub mod lead;
pub mod seniority;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use lead::{Lead, SignalTag, ToolMention};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
