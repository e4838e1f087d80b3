//! Auto-generated key takeaways for the intel surfaces.

use execsignals_core::Lead;
use execsignals_db::MarketAnalytics;

use crate::{salary_k, signed_pct, signed_pct_f};

/// Up to six one-line takeaways from the week's leads and analytics.
#[must_use]
pub fn key_takeaways(leads: &[Lead], analytics: &MarketAnalytics) -> Vec<String> {
    let mut takeaways = Vec::new();

    if let Some(top) = analytics.industry_velocity.first() {
        takeaways.push(format!(
            "{} leads VP+ hiring with {} openings ({} WoW)",
            top.industry,
            top.count,
            signed_pct(top.wow_pct)
        ));
    }

    if let Some(highest) = analytics
        .salary_benchmarks
        .iter()
        .max_by(|a, b| a.median.total_cmp(&b.median))
    {
        takeaways.push(format!(
            "{} has the highest median salary at {} ({} 4-week trend)",
            highest.role,
            salary_k(highest.median),
            signed_pct_f(highest.trend_pct)
        ));
    }

    let c_level_count = leads
        .iter()
        .filter(|l| l.seniority_tier.as_deref() == Some("c_level"))
        .count();
    if c_level_count >= 2 {
        takeaways.push(format!(
            "{c_level_count} C-Level roles posted this week — retained search opportunities"
        ));
    }

    if let Some(top_geo) = analytics.geo_breakdown.first() {
        takeaways.push(format!(
            "{} leads with {} VP+ openings ({} WoW)",
            top_geo.metro,
            top_geo.count,
            signed_pct(top_geo.wow_pct)
        ));
    }

    let build_team_count = leads.iter().filter(|l| l.has_signal("build_team")).count();
    if build_team_count >= 3 && !leads.is_empty() {
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let pct = (build_team_count as f64 / leads.len() as f64 * 100.0).round() as i64;
        takeaways.push(format!(
            "\"Build Team\" signal in {build_team_count} of {} top leads ({pct}%) — companies investing in org growth",
            leads.len()
        ));
    }

    let enterprise_pct = analytics
        .company_stage
        .iter()
        .find(|s| s.stage.contains("Enterprise"))
        .map_or(0, |s| s.pct);
    if enterprise_pct > 0 {
        takeaways.push(format!(
            "Enterprise/Public companies account for {enterprise_pct}% of VP+ hiring"
        ));
    }

    takeaways.truncate(6);
    takeaways
}
