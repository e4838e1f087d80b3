//! The Monday Brief email, HTML and plain-text variants.

use execsignals_core::display::function_role;
use execsignals_core::{seniority, Lead};
use execsignals_db::MarketAnalytics;
use execsignals_leads::enrich::{
    best_job_url, clean_location, estimate_placement_fee, extract_hiring_signal,
    extract_team_structure, format_company_name, format_salary, signal_note,
};
use execsignals_leads::filters::filter_signals_for_role;
use execsignals_leads::SummaryStats;

use crate::{esc, salary_k, signed_pct, signed_pct_f};

/// How many leads the email body shows; the rest ride in the workbook.
const EMAIL_LEAD_COUNT: usize = 10;

/// Curation context for a lead card: how many screened roles it beat.
///
/// Remote roles use the function-specific remote count when available,
/// then the Remote geo bucket; located roles use their metro's count.
fn contextual_stat(lead: &Lead, analytics: &MarketAnalytics) -> String {
    let func = lead.function_category.as_deref().unwrap_or("");
    let role_display = function_role(func).unwrap_or("VP+");

    let loc_type = lead
        .location_type
        .as_deref()
        .unwrap_or("")
        .to_lowercase();
    if lead.is_remote || loc_type == "remote" {
        if let Some(count) = analytics.remote_function_counts.get(func) {
            return format!("Top-scored of {count} remote {role_display} roles screened");
        }
        if let Some(remote) = analytics.geo_breakdown.iter().find(|g| g.metro == "Remote") {
            return format!("Top-scored of {} remote VP+ roles screened", remote.count);
        }
    }

    if let Some(metro) = lead.location_metro.as_deref() {
        if let Some(bucket) = analytics.geo_breakdown.iter().find(|g| g.metro == metro) {
            return format!("Top-scored of {} VP+ roles in {metro}", bucket.count);
        }
    }

    String::new()
}

fn lead_card_html(rank: usize, lead: &Lead, analytics: &MarketAnalytics) -> String {
    let mut filtered = lead.clone();
    filtered.signals = filter_signals_for_role(lead);

    let title = esc(lead.title.as_deref().unwrap_or("Untitled"));
    let company = esc(&format_company_name(lead.company_name.as_deref()));
    let location = esc(&clean_location(lead));
    let salary = esc(&format_salary(
        lead.annual_salary_min,
        lead.annual_salary_max,
    ));
    let url = esc(best_job_url(lead));
    let note = esc(&signal_note(&filtered));
    let stat = esc(&contextual_stat(lead, analytics));
    let score = lead.score;

    let mut badges = String::new();
    let hiring_sig = extract_hiring_signal(&filtered);
    if !hiring_sig.is_empty() {
        badges.push_str(&format!(
            "<span style=\"display:inline-block;background:#e8f5e9;color:#2e7d32;padding:2px 8px;border-radius:3px;font-size:11px;margin-right:4px;\">{}</span>",
            esc(&hiring_sig)
        ));
    }
    let team_sig = extract_team_structure(&filtered);
    if !team_sig.is_empty() {
        badges.push_str(&format!(
            "<span style=\"display:inline-block;background:#e3f2fd;color:#1565c0;padding:2px 8px;border-radius:3px;font-size:11px;margin-right:4px;\">{}</span>",
            esc(&team_sig)
        ));
    }
    if lead.repost_count > 1 {
        badges.push_str(&format!(
            "<span style=\"display:inline-block;background:#fff3cd;color:#856404;padding:2px 8px;border-radius:3px;font-size:11px;margin-right:4px;\">REPOSTED {}x</span>",
            lead.repost_count
        ));
    }
    if lead.is_search_firm {
        badges.push_str(
            "<span style=\"display:inline-block;background:#ede9fe;color:#7c3aed;padding:2px 8px;border-radius:3px;font-size:11px;margin-right:4px;\">RETAINED SEARCH</span>",
        );
    }

    let fee_line = estimate_placement_fee(lead)
        .map(|fee| {
            format!(
                "<div style=\"color:#2e7d32;font-size:12px;margin-top:2px;\">Est. fee: {fee}</div>"
            )
        })
        .unwrap_or_default();
    let stat_line = if stat.is_empty() {
        String::new()
    } else {
        format!("<div style=\"color:#999;font-size:11px;margin-top:4px;\">{stat}</div>")
    };

    format!(
        r#"
        <tr>
            <td style="padding:16px 20px;border-bottom:1px solid #eee;">
                <div style="font-size:11px;color:#888;margin-bottom:2px;">#{rank} &middot; Score: {score}</div>
                <a href="{url}" style="color:#0c0f1a;font-size:16px;font-weight:600;text-decoration:none;">{title}</a>
                <div style="color:#555;font-size:14px;margin-top:4px;">{company}</div>
                <div style="color:#777;font-size:13px;margin-top:2px;">{location} &middot; {salary}</div>
                {fee_line}
                <div style="margin-top:8px;">{badges}</div>
                <div style="color:#666;font-size:12px;margin-top:6px;font-style:italic;">{note}</div>
                {stat_line}
            </td>
        </tr>"#
    )
}

/// Render the Monday Brief HTML email body.
#[must_use]
pub fn render_html(
    leads: &[Lead],
    analytics: &MarketAnalytics,
    summary: &SummaryStats,
    date_range: &str,
) -> String {
    let cards: String = leads
        .iter()
        .take(EMAIL_LEAD_COUNT)
        .enumerate()
        .map(|(i, lead)| lead_card_html(i + 1, lead, analytics))
        .collect();

    let mut benchmark_rows = String::new();
    for b in analytics.salary_benchmarks.iter().take(3) {
        benchmark_rows.push_str(&format!(
            "<tr><td style=\"padding:4px 8px;color:#555;font-size:13px;\">{}</td><td style=\"padding:4px 8px;font-weight:600;font-size:13px;\">{}</td><td style=\"padding:4px 8px;color:#27763d;font-size:13px;\">{}</td></tr>",
            esc(b.role),
            salary_k(b.median),
            signed_pct_f(b.trend_pct),
        ));
    }

    let mut velocity_rows = String::new();
    for v in analytics.industry_velocity.iter().take(3) {
        velocity_rows.push_str(&format!(
            "<tr><td style=\"padding:4px 8px;color:#555;font-size:13px;\">{}</td><td style=\"padding:4px 8px;font-weight:600;font-size:13px;\">{}</td><td style=\"padding:4px 8px;color:#27763d;font-size:13px;\">{}</td></tr>",
            esc(&v.industry),
            v.count,
            signed_pct(v.wow_pct),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>The Monday Brief</title>
</head>
<body style="margin:0;padding:0;background:#f4f4f7;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,Helvetica,Arial,sans-serif;">
    <table role="presentation" width="100%" cellpadding="0" cellspacing="0" style="background:#f4f4f7;">
        <tr>
            <td align="center" style="padding:24px 16px;">
                <table role="presentation" width="640" cellpadding="0" cellspacing="0" style="background:#fff;border-radius:8px;overflow:hidden;box-shadow:0 1px 3px rgba(0,0,0,0.08);">
                    <tr>
                        <td style="background:#0c0f1a;padding:32px 24px;text-align:center;">
                            <h1 style="color:#d4a054;margin:0;font-size:26px;font-weight:700;letter-spacing:-0.5px;">The Monday Brief</h1>
                            <p style="color:#a0a0c0;margin:8px 0 0;font-size:14px;">{date_range}</p>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding:24px;">
                            <table role="presentation" width="100%" cellpadding="0" cellspacing="0">
                                <tr>
                                    <td width="25%" align="center" style="padding:12px;">
                                        <div style="font-size:26px;font-weight:700;color:#0c0f1a;">{total}</div>
                                        <div style="font-size:11px;color:#888;text-transform:uppercase;letter-spacing:0.5px;">Top Leads</div>
                                    </td>
                                    <td width="25%" align="center" style="padding:12px;">
                                        <div style="font-size:26px;font-weight:700;color:#0c0f1a;">${avg_salary}K</div>
                                        <div style="font-size:11px;color:#888;text-transform:uppercase;letter-spacing:0.5px;">Avg Salary</div>
                                    </td>
                                    <td width="25%" align="center" style="padding:12px;">
                                        <div style="font-size:26px;font-weight:700;color:#0c0f1a;">{avg_score}</div>
                                        <div style="font-size:11px;color:#888;text-transform:uppercase;letter-spacing:0.5px;">Avg Score</div>
                                    </td>
                                    <td width="25%" align="center" style="padding:12px;">
                                        <div style="font-size:26px;font-weight:700;color:#27763d;">{growth_pct}%</div>
                                        <div style="font-size:11px;color:#888;text-transform:uppercase;letter-spacing:0.5px;">Growth Hires</div>
                                    </td>
                                </tr>
                            </table>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding:8px 24px 0;">
                            <h2 style="font-size:16px;color:#0c0f1a;margin:0;padding-bottom:12px;border-bottom:2px solid #d4a054;">This Week's Top Leads</h2>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding:0 4px;">
                            <table role="presentation" width="100%" cellpadding="0" cellspacing="0">
                                {cards}
                            </table>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding:24px;">
                            <h2 style="font-size:16px;color:#0c0f1a;margin:0 0 12px;padding-bottom:12px;border-bottom:2px solid #d4a054;">Market Snapshot</h2>
                            <table role="presentation" width="100%" cellpadding="0" cellspacing="0" style="margin-bottom:12px;">
                                <tr><td colspan="3" style="padding:4px 8px;font-size:12px;color:#888;text-transform:uppercase;letter-spacing:0.5px;">Median Salaries</td></tr>
                                {benchmark_rows}
                                <tr><td colspan="3" style="padding:12px 8px 4px;font-size:12px;color:#888;text-transform:uppercase;letter-spacing:0.5px;">Hottest Industries</td></tr>
                                {velocity_rows}
                            </table>
                            <p style="margin:0;color:#777;font-size:13px;">Full benchmarks, velocity, and company tables are in the attached workbook.</p>
                        </td>
                    </tr>
                    <tr>
                        <td style="background:#f8f9fa;padding:20px 24px;border-top:1px solid #eee;">
                            <p style="margin:0;color:#999;font-size:12px;text-align:center;">
                                ExecSignals &middot; The Monday Brief<br>
                                Scored from the full VP+ dataset; {total} curated leads this week.
                            </p>
                        </td>
                    </tr>
                </table>
            </td>
        </tr>
    </table>
</body>
</html>"#,
        total = summary.total,
        avg_salary = summary.avg_salary_k,
        avg_score = summary.avg_score,
        growth_pct = summary.growth_pct,
    )
}

/// Render the plain-text fallback body.
#[must_use]
pub fn render_text(
    leads: &[Lead],
    analytics: &MarketAnalytics,
    summary: &SummaryStats,
    date_range: &str,
) -> String {
    let rule = "=".repeat(64);
    let thin_rule = "-".repeat(64);
    let mut lines: Vec<String> = Vec::new();

    lines.push(rule.clone());
    lines.push("THE MONDAY BRIEF \u{2014} EXECSIGNALS".to_string());
    lines.push(date_range.to_string());
    lines.push(rule.clone());
    lines.push(String::new());
    lines.push(format!(
        "  {} Top Leads  |  Avg Salary: ${}K  |  Avg Score: {}  |  Growth Hires: {}%",
        summary.total, summary.avg_salary_k, summary.avg_score, summary.growth_pct
    ));
    lines.push(String::new());
    lines.push(thin_rule.clone());
    lines.push("TOP LEADS".to_string());
    lines.push(thin_rule.clone());

    for (i, lead) in leads.iter().take(EMAIL_LEAD_COUNT).enumerate() {
        let mut filtered = lead.clone();
        filtered.signals = filter_signals_for_role(lead);

        lines.push(String::new());
        lines.push(format!("  #{} (Score: {})", i + 1, lead.score));
        lines.push(format!("  {}", lead.title.as_deref().unwrap_or("Untitled")));
        lines.push(format!(
            "  {} | {}",
            format_company_name(lead.company_name.as_deref()),
            seniority::display_name(lead.seniority_tier.as_deref().unwrap_or(""))
        ));
        lines.push(format!(
            "  {}  |  {}",
            clean_location(lead),
            format_salary(lead.annual_salary_min, lead.annual_salary_max)
        ));
        if let Some(fee) = estimate_placement_fee(lead) {
            lines.push(format!("  Est. fee: {fee}"));
        }
        let mut flags: Vec<String> = Vec::new();
        if lead.repost_count > 1 {
            flags.push(format!("REPOSTED {}x", lead.repost_count));
        }
        if lead.is_search_firm {
            flags.push("RETAINED SEARCH".to_string());
        }
        if !flags.is_empty() {
            lines.push(format!("  Flags: {}", flags.join(" | ")));
        }
        lines.push(format!("  {}", signal_note(&filtered)));
        lines.push(format!("  {}", best_job_url(lead)));
    }

    lines.push(String::new());
    lines.push(thin_rule.clone());
    lines.push("MARKET SNAPSHOT".to_string());
    lines.push(thin_rule.clone());
    for b in analytics.salary_benchmarks.iter().take(3) {
        lines.push(format!(
            "  {} median {} ({} 4-week trend)",
            b.role,
            salary_k(b.median),
            signed_pct_f(b.trend_pct)
        ));
    }
    for v in analytics.industry_velocity.iter().take(3) {
        lines.push(format!(
            "  {}: {} openings ({} WoW)",
            v.industry,
            v.count,
            signed_pct(v.wow_pct)
        ));
    }
    lines.push(String::new());
    lines.push("Full tables are in the attached workbook.".to_string());
    lines.push(String::new());
    lines.push(thin_rule);
    lines.push("ExecSignals | The Monday Brief".to_string());

    lines.join("\n")
}
