//! The `hot-leads` command: query, score, rank, and write the weekly
//! CSV plus email bodies.

use std::fs;
use std::path::PathBuf;

use execsignals_core::{seniority, AppConfig};
use execsignals_leads::enrich::{
    extract_hiring_signal, extract_team_structure, format_salary,
};
use execsignals_leads::prepare_hot_leads;
use execsignals_report::{csv_out, hot_leads_email};

/// Run the Hot Leads Weekly generation.
///
/// Exits cleanly (without writing files) when no leads match; a missing
/// database path is an error before any output is attempted.
///
/// # Errors
///
/// Returns an error if the database is missing, a query fails, or an
/// output file cannot be written.
pub(crate) async fn run(
    config: &AppConfig,
    db: Option<PathBuf>,
    days: u32,
    min_seniority: &str,
    output_dir: Option<PathBuf>,
    top: Option<usize>,
) -> anyhow::Result<()> {
    let db_path = db.unwrap_or_else(|| config.db_path.clone());
    if !db_path.exists() {
        anyhow::bail!("database not found at {}", db_path.display());
    }
    let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());

    let mut tiers = seniority::tiers_at_or_above(min_seniority);
    if tiers.is_empty() {
        tracing::warn!("unknown seniority tier '{min_seniority}', defaulting to vp+");
        tiers = seniority::tiers_at_or_above(seniority::DEFAULT_MIN_SENIORITY);
    }

    println!("Querying {}...", db_path.display());
    println!("Parameters: last {days} days, min seniority: {min_seniority}");
    println!();

    let pool = execsignals_db::connect(&db_path).await?;
    let reference_date = execsignals_db::data_reference_date(&pool).await?;
    let leads = execsignals_db::fetch_hot_leads(&pool, days, &tiers, reference_date).await?;
    println!("Found {} qualifying leads", leads.len());

    if leads.is_empty() {
        println!("No hot leads found for the given criteria.");
        println!("Try increasing --days or lowering --min-seniority.");
        return Ok(());
    }

    let leads = prepare_hot_leads(leads, top);
    if let Some(n) = top {
        println!("Filtered to top {n} leads");
    }

    let scores: Vec<i64> = leads.iter().map(|l| l.score).collect();
    let min = scores.iter().min().copied().unwrap_or(0);
    let max = scores.iter().max().copied().unwrap_or(0);
    #[allow(clippy::cast_precision_loss)]
    let avg = scores.iter().sum::<i64>() as f64 / scores.len() as f64;
    println!("Score range: {min} - {max} (avg: {avg:.1})");
    println!();

    println!("Top 5 leads:");
    println!("{}", "-".repeat(70));
    for (i, lead) in leads.iter().take(5).enumerate() {
        println!(
            "  {}. [{}] {}",
            i + 1,
            lead.score,
            lead.title.as_deref().unwrap_or("Untitled")
        );
        println!(
            "     {} | {}",
            lead.company_name.as_deref().unwrap_or("Confidential"),
            format_salary(lead.annual_salary_min, lead.annual_salary_max)
        );
        println!(
            "     {} | {}",
            extract_hiring_signal(lead),
            extract_team_structure(lead)
        );
        println!();
    }

    fs::create_dir_all(&output_dir)?;

    let csv_path = output_dir.join("hot_leads.csv");
    csv_out::write_leads_csv(&leads, &csv_path)?;
    println!("CSV:        {} ({} rows)", csv_path.display(), leads.len());

    let html_path = output_dir.join("hot_leads_email.html");
    fs::write(
        &html_path,
        hot_leads_email::render_html(&leads, days, reference_date),
    )?;
    println!("HTML email: {}", html_path.display());

    let txt_path = output_dir.join("hot_leads_email.txt");
    fs::write(
        &txt_path,
        hot_leads_email::render_text(&leads, days, reference_date),
    )?;
    println!("Text email: {}", txt_path.display());

    println!();
    println!("Done. Attach hot_leads.csv to the email and send hot_leads_email.html as the body.");
    Ok(())
}
