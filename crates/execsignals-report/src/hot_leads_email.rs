//! The legacy Hot Leads Weekly email, HTML and plain-text variants.
//!
//! Inline-styled single-document HTML so mail clients render it as-is.

use chrono::{Days, NaiveDate};

use execsignals_core::display::title_case_id;
use execsignals_core::lead::{SIGNAL_TYPE_HIRING, SIGNAL_TYPE_TEAM};
use execsignals_core::Lead;
use execsignals_leads::enrich::{
    extract_hiring_signal, extract_team_structure, format_location, format_salary,
};

use crate::esc;

/// "Jul 27 - Aug 03, 2026" style range ending at the reference date.
#[must_use]
pub fn date_range(reference_date: NaiveDate, days: u32) -> String {
    let start = reference_date
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(reference_date);
    format!(
        "{} - {}",
        start.format("%b %d"),
        reference_date.format("%b %d, %Y")
    )
}

/// Most frequent hiring/team signal label across the leads, or "N/A".
fn top_signal(leads: &[Lead]) -> String {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for lead in leads {
        for sig in &lead.signals {
            if sig.signal_type == SIGNAL_TYPE_HIRING || sig.signal_type == SIGNAL_TYPE_TEAM {
                let label = title_case_id(&sig.signal_id);
                match counts.iter_mut().find(|(l, _)| *l == label) {
                    Some((_, c)) => *c += 1,
                    None => counts.push((label, 1)),
                }
            }
        }
    }
    counts
        .into_iter()
        .max_by_key(|(_, c)| *c)
        .map_or_else(|| "N/A".to_string(), |(label, _)| label)
}

fn seniority_counts(leads: &[Lead]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for lead in leads {
        let tier = title_case_id(lead.seniority_tier.as_deref().unwrap_or("unknown"));
        match counts.iter_mut().find(|(l, _)| *l == tier) {
            Some((_, c)) => *c += 1,
            None => counts.push((tier, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[allow(clippy::cast_precision_loss)]
fn avg_score(leads: &[Lead]) -> f64 {
    if leads.is_empty() {
        return 0.0;
    }
    leads.iter().map(|l| l.score).sum::<i64>() as f64 / leads.len() as f64
}

/// Render the HTML email body.
#[must_use]
pub fn render_html(leads: &[Lead], days: u32, reference_date: NaiveDate) -> String {
    let range = date_range(reference_date, days);
    let total = leads.len();
    let avg = avg_score(leads);
    let top_sig = top_signal(leads);

    let mut seniority_html = String::new();
    for (tier, count) in seniority_counts(leads) {
        seniority_html.push_str(&format!("<li>{}: {count}</li>", esc(&tier)));
    }

    let mut cards = String::new();
    for (i, lead) in leads.iter().take(5).enumerate() {
        let title = esc(lead.title.as_deref().unwrap_or("Untitled"));
        let company = esc(lead.company_name.as_deref().unwrap_or("Confidential"));
        let salary = esc(&format_salary(
            lead.annual_salary_min,
            lead.annual_salary_max,
        ));
        let location = esc(&format_location(lead));
        let hiring_sig = esc(&extract_hiring_signal(lead));
        let team_sig = esc(&extract_team_structure(lead));
        let source = esc(lead.source_url.as_deref().unwrap_or("#"));
        let score = lead.score;
        let rank = i + 1;

        let mut badges = String::new();
        if !hiring_sig.is_empty() {
            badges.push_str(&format!(
                "<span style=\"display:inline-block;background:#e8f5e9;color:#2e7d32;padding:2px 8px;border-radius:3px;font-size:12px;margin-right:4px;\">{hiring_sig}</span>"
            ));
        }
        if !team_sig.is_empty() {
            badges.push_str(&format!(
                "<span style=\"display:inline-block;background:#e3f2fd;color:#1565c0;padding:2px 8px;border-radius:3px;font-size:12px;margin-right:4px;\">{team_sig}</span>"
            ));
        }

        cards.push_str(&format!(
            r#"
        <tr>
            <td style="padding:16px 20px;border-bottom:1px solid #eee;">
                <div style="font-size:11px;color:#888;margin-bottom:2px;">#{rank} &middot; Score: {score}</div>
                <a href="{source}" style="color:#1a1a2e;font-size:16px;font-weight:600;text-decoration:none;">{title}</a>
                <div style="color:#555;font-size:14px;margin-top:4px;">{company}</div>
                <div style="color:#777;font-size:13px;margin-top:2px;">{location} &middot; {salary}</div>
                <div style="margin-top:8px;">{badges}</div>
            </td>
        </tr>"#
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Hot Leads Weekly</title>
</head>
<body style="margin:0;padding:0;background:#f4f4f7;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,Helvetica,Arial,sans-serif;">
    <table role="presentation" width="100%" cellpadding="0" cellspacing="0" style="background:#f4f4f7;">
        <tr>
            <td align="center" style="padding:24px 16px;">
                <table role="presentation" width="600" cellpadding="0" cellspacing="0" style="background:#fff;border-radius:8px;overflow:hidden;box-shadow:0 1px 3px rgba(0,0,0,0.08);">
                    <tr>
                        <td style="background:#1a1a2e;padding:32px 24px;text-align:center;">
                            <h1 style="color:#fff;margin:0;font-size:24px;font-weight:700;letter-spacing:-0.5px;">Hot Leads Weekly</h1>
                            <p style="color:#a0a0c0;margin:8px 0 0;font-size:14px;">{range}</p>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding:24px;">
                            <table role="presentation" width="100%" cellpadding="0" cellspacing="0">
                                <tr>
                                    <td width="33%" align="center" style="padding:12px;">
                                        <div style="font-size:28px;font-weight:700;color:#1a1a2e;">{total}</div>
                                        <div style="font-size:12px;color:#888;text-transform:uppercase;letter-spacing:0.5px;">Hot Leads</div>
                                    </td>
                                    <td width="33%" align="center" style="padding:12px;">
                                        <div style="font-size:28px;font-weight:700;color:#1a1a2e;">{avg:.0}</div>
                                        <div style="font-size:12px;color:#888;text-transform:uppercase;letter-spacing:0.5px;">Avg Score</div>
                                    </td>
                                    <td width="33%" align="center" style="padding:12px;">
                                        <div style="font-size:16px;font-weight:700;color:#2e7d32;">{top_sig}</div>
                                        <div style="font-size:12px;color:#888;text-transform:uppercase;letter-spacing:0.5px;">Top Signal</div>
                                    </td>
                                </tr>
                            </table>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding:0 24px 16px;">
                            <div style="background:#f8f9fa;border-radius:6px;padding:16px;">
                                <div style="font-size:13px;font-weight:600;color:#555;margin-bottom:8px;text-transform:uppercase;letter-spacing:0.5px;">Seniority Breakdown</div>
                                <ul style="margin:0;padding-left:20px;color:#555;font-size:14px;line-height:1.6;">
                                    {seniority_html}
                                </ul>
                            </div>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding:8px 24px 0;">
                            <h2 style="font-size:16px;color:#1a1a2e;margin:0;padding-bottom:12px;border-bottom:2px solid #1a1a2e;">Top 5 Leads This Week</h2>
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
                        <td style="padding:24px;text-align:center;">
                            <div style="background:#f0f7ff;border-radius:6px;padding:16px;">
                                <p style="margin:0;color:#1565c0;font-size:14px;font-weight:500;">
                                    Full list of {total} leads attached as CSV
                                </p>
                                <p style="margin:4px 0 0;color:#777;font-size:13px;">
                                    Sortable by score, salary, seniority, and signals
                                </p>
                            </div>
                        </td>
                    </tr>
                    <tr>
                        <td style="background:#f8f9fa;padding:20px 24px;border-top:1px solid #eee;">
                            <p style="margin:0;color:#999;font-size:12px;text-align:center;">
                                Hot Leads Weekly by ExecSignals<br>
                                Curated from {total} qualifying VP+ executive postings.
                            </p>
                        </td>
                    </tr>
                </table>
            </td>
        </tr>
    </table>
</body>
</html>"#
    )
}

/// Render the fixed-width plain-text fallback body.
#[must_use]
pub fn render_text(leads: &[Lead], days: u32, reference_date: NaiveDate) -> String {
    let range = date_range(reference_date, days);
    let total = leads.len();
    let avg = avg_score(leads);
    let top_sig = top_signal(leads);
    let rule = "=".repeat(60);
    let thin_rule = "-".repeat(60);

    let mut lines: Vec<String> = Vec::new();
    lines.push(rule.clone());
    lines.push("HOT LEADS WEEKLY".to_string());
    lines.push(range);
    lines.push(rule.clone());
    lines.push(String::new());
    lines.push(format!(
        "  {total} Hot Leads  |  Avg Score: {avg:.0}  |  Top Signal: {top_sig}"
    ));
    lines.push(String::new());

    lines.push("SENIORITY BREAKDOWN:".to_string());
    for (tier, count) in seniority_counts(leads) {
        lines.push(format!("  {tier}: {count}"));
    }
    lines.push(String::new());

    lines.push(thin_rule.clone());
    lines.push("TOP 5 LEADS THIS WEEK".to_string());
    lines.push(thin_rule.clone());

    for (i, lead) in leads.iter().take(5).enumerate() {
        let title = lead.title.as_deref().unwrap_or("Untitled");
        let company = lead.company_name.as_deref().unwrap_or("Confidential");
        let salary = format_salary(lead.annual_salary_min, lead.annual_salary_max);
        let location = format_location(lead);
        let hiring_sig = extract_hiring_signal(lead);
        let team_sig = extract_team_structure(lead);
        let source = lead.source_url.as_deref().unwrap_or("N/A");

        lines.push(String::new());
        lines.push(format!("  #{} (Score: {})", i + 1, lead.score));
        lines.push(format!("  {title}"));
        lines.push(format!("  {company}"));
        lines.push(format!("  {location}  |  {salary}"));
        let signals: Vec<&str> = [hiring_sig.as_str(), team_sig.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if !signals.is_empty() {
            lines.push(format!("  Signals: {}", signals.join("  |  ")));
        }
        lines.push(format!("  {source}"));
        lines.push(String::new());
    }

    lines.push(thin_rule.clone());
    lines.push(String::new());
    lines.push(format!("Full list of {total} leads attached as CSV."));
    lines.push("Sortable by score, salary, seniority, and signals.".to_string());
    lines.push(String::new());
    lines.push(thin_rule);
    lines.push("Hot Leads Weekly by ExecSignals".to_string());
    lines.push(format!(
        "Curated from {total} qualifying VP+ executive postings."
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use execsignals_core::SignalTag;

    fn lead(title: &str, score: i64) -> Lead {
        Lead {
            title: Some(title.to_string()),
            company_name: Some("Acme".to_string()),
            seniority_tier: Some("vp".to_string()),
            score,
            ..Lead::default()
        }
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
    }

    #[test]
    fn date_range_spans_lookback() {
        assert_eq!(date_range(reference(), 7), "Jul 27 - Aug 03, 2026");
    }

    #[test]
    fn html_contains_leads_and_stats() {
        let html = render_html(&[lead("VP of Sales", 40), lead("CFO", 35)], 7, reference());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("VP of Sales"));
        assert!(html.contains("Hot Leads Weekly"));
        assert!(html.contains("Jul 27 - Aug 03, 2026"));
    }

    #[test]
    fn html_escapes_titles() {
        let html = render_html(&[lead("VP <Sales & Ops>", 40)], 7, reference());
        assert!(html.contains("VP &lt;Sales &amp; Ops&gt;"));
        assert!(!html.contains("VP <Sales & Ops>"));
    }

    #[test]
    fn top_signal_picks_most_frequent() {
        let mut a = lead("VP of Sales", 40);
        a.signals = vec![
            SignalTag {
                signal_type: "team_structure".to_string(),
                signal_id: "build_team".to_string(),
                signal_value: None,
            },
            SignalTag {
                signal_type: "hiring_signals".to_string(),
                signal_id: "growth_hire".to_string(),
                signal_value: None,
            },
        ];
        let mut b = lead("CFO", 35);
        b.signals = vec![SignalTag {
            signal_type: "team_structure".to_string(),
            signal_id: "build_team".to_string(),
            signal_value: None,
        }];
        assert_eq!(top_signal(&[a, b]), "Build Team");
    }

    #[test]
    fn top_signal_empty_is_na() {
        assert_eq!(top_signal(&[]), "N/A");
    }

    #[test]
    fn text_variant_has_header_and_top_five() {
        let leads: Vec<Lead> = (0..7_i64)
            .map(|i| lead(&format!("Role {i}"), 40 - i))
            .collect();
        let text = render_text(&leads, 7, reference());
        assert!(text.contains("HOT LEADS WEEKLY"));
        assert!(text.contains("Role 0"));
        assert!(text.contains("Role 4"));
        // Only the top five are listed.
        assert!(!text.contains("Role 5"));
    }
}
