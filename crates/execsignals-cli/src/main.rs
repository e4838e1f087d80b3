use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod brief;
mod hot_leads;
mod pages;

#[derive(Debug, Parser)]
#[command(name = "execsignals")]
#[command(about = "ExecSignals weekly lead-report generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the Hot Leads Weekly report (CSV + email bodies)
    HotLeads {
        /// Path to the jobs database (defaults to EXECSIGNALS_DB_PATH)
        #[arg(long)]
        db: Option<PathBuf>,
        /// Days back to search for leads (defaults to EXECSIGNALS_LOOKBACK_DAYS)
        #[arg(long)]
        days: Option<u32>,
        /// Minimum seniority tier (e.g. vp, director, c_level)
        #[arg(long, default_value = "vp")]
        min_seniority: String,
        /// Directory for output files (defaults to EXECSIGNALS_OUTPUT_DIR)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Only include the top N leads by score
        #[arg(long)]
        top: Option<usize>,
    },
    /// Generate the full Monday Brief (CSV, workbook, intel, emails)
    Brief {
        /// Path to the jobs database (defaults to EXECSIGNALS_DB_PATH)
        #[arg(long)]
        db: Option<PathBuf>,
        /// Days back to search for leads (defaults to EXECSIGNALS_LOOKBACK_DAYS)
        #[arg(long)]
        days: Option<u32>,
        /// Limit to the top N leads
        #[arg(long, default_value_t = 50)]
        top: usize,
        /// Directory for output files (defaults to EXECSIGNALS_OUTPUT_DIR)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Generate the static marketing pages and sitemap
    Pages {
        /// Directory for the generated site (defaults to EXECSIGNALS_OUTPUT_DIR/site)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = execsignals_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::HotLeads {
            db,
            days,
            min_seniority,
            output_dir,
            top,
        } => {
            let days = days.unwrap_or(config.lookback_days);
            hot_leads::run(&config, db, days, &min_seniority, output_dir, top).await
        }
        Commands::Brief {
            db,
            days,
            top,
            output_dir,
        } => {
            let days = days.unwrap_or(config.lookback_days);
            brief::run(&config, db, days, top, output_dir).await
        }
        Commands::Pages { output_dir } => pages::run(&config, output_dir),
    }
}
