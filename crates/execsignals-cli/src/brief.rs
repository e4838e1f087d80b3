//! The `brief` command: the full Monday Brief deliverable.

use std::fs;
use std::path::PathBuf;

use chrono::{Days, Local};

use execsignals_core::{seniority, AppConfig};
use execsignals_leads::{prepare_brief_leads, summary_stats};
use execsignals_report::{brief_email, csv_out, excel, intel};

/// Run the Monday Brief generation: fetch, correct, score, dedup,
/// filter, then render every deliverable into the output directory.
///
/// # Errors
///
/// Returns an error if the database is missing, a query fails, or an
/// output file cannot be written.
pub(crate) async fn run(
    config: &AppConfig,
    db: Option<PathBuf>,
    days: u32,
    top: usize,
    output_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let db_path = db.unwrap_or_else(|| config.db_path.clone());
    if !db_path.exists() {
        anyhow::bail!("database not found at {}", db_path.display());
    }
    let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());

    println!("Connecting to {}...", db_path.display());
    let pool = execsignals_db::connect(&db_path).await?;

    // Latest data date anchors every window and display header; the wall
    // clock only names the output files.
    let reference_date = execsignals_db::data_reference_date(&pool).await?;
    println!("Latest data date: {}", reference_date.format("%Y-%m-%d"));
    let window_start = reference_date
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(reference_date);
    let date_str = format!(
        "{} \u{2013} {}",
        window_start.format("%b %d"),
        reference_date.format("%b %d, %Y")
    );
    let date_range = format!(
        "{} - {}",
        window_start.format("%b %d"),
        reference_date.format("%b %d, %Y")
    );
    let file_date = Local::now().format("%b%d").to_string();

    println!("Fetching VP+ leads from last {days} days...");
    let tiers = seniority::tiers_at_or_above(seniority::DEFAULT_MIN_SENIORITY);
    let raw_leads =
        execsignals_db::fetch_hot_leads(&pool, days, &tiers, reference_date).await?;

    if raw_leads.is_empty() {
        println!("No leads found. Try increasing --days.");
        return Ok(());
    }
    println!("Found {} raw leads (before dedup)", raw_leads.len());

    let repost_counts = execsignals_db::repost_counts(&pool).await?;
    let leads = prepare_brief_leads(raw_leads, reference_date, &repost_counts, Some(top));
    println!("After dedup and filtering: {} leads", leads.len());

    let reposted = leads.iter().filter(|l| l.repost_count > 1).count();
    println!("Reposted roles (appeared in 2+ scrapes): {reposted}");

    let scores: Vec<i64> = leads.iter().map(|l| l.score).collect();
    if let (Some(min), Some(max)) = (scores.iter().min(), scores.iter().max()) {
        #[allow(clippy::cast_precision_loss)]
        let avg = scores.iter().sum::<i64>() as f64 / scores.len() as f64;
        println!("Score range: {min} - {max} (avg: {avg:.1})");
    }
    println!();

    println!("Computing market analytics...");
    let analytics = execsignals_db::compute_all_analytics(&pool, days, reference_date).await?;
    let summary = summary_stats(&leads);

    println!(
        "  Salary benchmarks: {} roles",
        analytics.salary_benchmarks.len()
    );
    println!(
        "  Industry velocity: {} industries",
        analytics.industry_velocity.len()
    );
    println!("  Top companies: {}", analytics.top_companies.len());
    println!("  Geo breakdown: {} metros", analytics.geo_breakdown.len());
    println!("  Stack trends: {} tools", analytics.stack_trends.len());
    println!();

    println!("Generating deliverables...");
    fs::create_dir_all(&output_dir)?;

    let csv_path = output_dir.join("hot_leads.csv");
    csv_out::write_leads_csv(&leads, &csv_path)?;
    println!("  CSV:           {} ({} rows)", csv_path.display(), leads.len());

    let xlsx_path = output_dir.join(format!("ExecSignals_{file_date}.xlsx"));
    excel::write_workbook(&leads, &analytics, &xlsx_path, &date_str, reference_date)?;
    println!("  Excel:         {}", xlsx_path.display());

    let intel_path = output_dir.join(format!("MarketIntel_{file_date}.html"));
    fs::write(&intel_path, intel::render(&analytics, &summary, &date_str))?;
    println!(
        "  Market Intel:  {} (open in browser, then print to PDF)",
        intel_path.display()
    );

    let email_html_path = output_dir.join(format!("MondayBrief_{file_date}.html"));
    fs::write(
        &email_html_path,
        brief_email::render_html(&leads, &analytics, &summary, &date_range),
    )?;
    println!("  Email HTML:    {}", email_html_path.display());

    let email_txt_path = output_dir.join(format!("MondayBrief_{file_date}.txt"));
    fs::write(
        &email_txt_path,
        brief_email::render_text(&leads, &analytics, &summary, &date_range),
    )?;
    println!("  Email text:    {}", email_txt_path.display());

    println!();
    println!("{}", "=".repeat(60));
    println!("The Monday Brief generated successfully!");
    println!(
        "  {} leads scored | {} salary benchmarks",
        leads.len(),
        analytics.salary_benchmarks.len()
    );
    println!(
        "  {} industries | {} metros",
        analytics.industry_velocity.len(),
        analytics.geo_breakdown.len()
    );
    println!("  Output: {}/", output_dir.display());
    println!("{}", "=".repeat(60));

    Ok(())
}
