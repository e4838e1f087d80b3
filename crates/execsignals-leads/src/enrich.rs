//! Display enrichment: salary/location/company formatting, signal
//! extraction and the per-lead signal note.
//!
//! Every formatter tolerates missing fields with an explicit fallback
//! value; no field absence is ever fatal to a run.

use execsignals_core::display::{title_case_id, COMPANY_NAME_OVERRIDES};
use execsignals_core::lead::{
    SIGNAL_TYPE_COMP, SIGNAL_TYPE_DEAL_SIZE, SIGNAL_TYPE_HIRING, SIGNAL_TYPE_MOTION,
    SIGNAL_TYPE_SEGMENT, SIGNAL_TYPE_TEAM,
};
use execsignals_core::seniority;
use execsignals_core::Lead;

/// Hiring signals worth surfacing as the primary badge, in scan order.
const PRIMARY_HIRING_SIGNALS: &[&str] = &["growth_hire", "turnaround", "immediate"];

/// Acronyms that title-casing would mangle ("Llc" → "LLC").
const ACRONYMS: &[&str] = &[
    "Llc", "Inc", "Llp", "Lp", "Pc", "Pllc", "Dds", "Md", "Nyc", "Usa", "Us", "Ai",
];

/// Extra signal context grouped by type for rich displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraSignals {
    pub segment: Vec<String>,
    pub deal_size: Vec<String>,
    pub comp: Vec<String>,
    pub motion: Vec<String>,
}

/// Format a salary range as a human-readable string.
#[must_use]
pub fn format_salary(min_salary: Option<i64>, max_salary: Option<i64>) -> String {
    let min_str = min_salary.map(format_salary_value);
    let max_str = max_salary.map(format_salary_value);
    match (min_str, max_str) {
        (Some(min), Some(max)) => format!("{min} - {max}"),
        (None, Some(max)) => format!("Up to {max}"),
        (Some(min), None) => format!("{min}+"),
        (None, None) => "Not specified".to_string(),
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn format_salary_value(value: i64) -> String {
    if value >= 1_000_000 {
        format!("${:.1}M", value as f64 / 1_000_000.0)
    } else {
        format!("${}K", (value as f64 / 1000.0).round() as i64)
    }
}

/// Legacy location string: metro, then state, then raw, with a remote or
/// hybrid marker appended.
#[must_use]
pub fn format_location(lead: &Lead) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(metro) = lead.location_metro.as_deref() {
        parts.push(metro.to_string());
    } else if let Some(state) = lead.location_state.as_deref() {
        parts.push(state.to_string());
    } else if let Some(raw) = lead.location_raw.as_deref() {
        parts.push(raw.to_string());
    }

    let loc_type = lead
        .location_type
        .as_deref()
        .unwrap_or("")
        .to_lowercase();
    if lead.is_remote || loc_type.contains("remote") {
        if parts.is_empty() {
            parts.push("Remote".to_string());
        } else {
            parts.push("(Remote)".to_string());
        }
    } else if loc_type.contains("hybrid") {
        parts.push("(Hybrid)".to_string());
    }

    if parts.is_empty() {
        "Location not specified".to_string()
    } else {
        parts.join(", ")
    }
}

/// Cleaned location string for the brief: strips the scraper's redundant
/// country suffixes and stray "Remote" prefixes before adding markers.
///
/// "Remote, US" → "Remote", "Elgin, IL, US" → "Elgin, IL",
/// "Boston, (Remote)" → "Boston (Remote)".
#[must_use]
pub fn clean_location(lead: &Lead) -> String {
    let mut raw = lead.location_raw.clone().unwrap_or_default();
    if let Some(stripped) = raw.strip_suffix(", US") {
        raw = stripped.to_string();
    }
    if let Some(stripped) = raw.strip_prefix("Remote, ") {
        raw = stripped.to_string();
    }
    if raw == "Remote" || raw == "US" {
        raw.clear();
    }

    let mut parts: Vec<String> = Vec::new();
    if let Some(metro) = lead.location_metro.as_deref() {
        parts.push(metro.to_string());
    } else if !raw.is_empty() {
        parts.push(raw);
    }

    let loc_type = lead
        .location_type
        .as_deref()
        .unwrap_or("")
        .to_lowercase();
    if lead.is_remote || loc_type.contains("remote") {
        if parts.is_empty() {
            parts.push("Remote".to_string());
        } else {
            parts.push("(Remote)".to_string());
        }
    } else if loc_type.contains("hybrid") {
        parts.push("(Hybrid)".to_string());
    }

    if parts.is_empty() {
        "Location not specified".to_string()
    } else {
        parts.join(" ")
    }
}

/// Display form of a company name: overrides first, already-mixed-case
/// names untouched, everything else title-cased with acronym fixes.
#[must_use]
pub fn format_company_name(name: Option<&str>) -> String {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return "Confidential".to_string();
    };

    let lower = name.to_lowercase();
    if let Some((_, display)) = COMPANY_NAME_OVERRIDES
        .iter()
        .find(|(k, _)| *k == lower.trim())
    {
        return (*display).to_string();
    }

    let tail: String = name.chars().skip(1).collect();
    let has_upper = tail.chars().any(char::is_uppercase);
    let has_lower = tail.chars().any(char::is_lowercase);
    if has_upper && has_lower {
        return name.to_string();
    }

    name.split_whitespace()
        .map(|w| {
            let cased = title_case_word(w);
            let trimmed = cased.trim_end_matches(['.', ',']);
            if ACRONYMS.contains(&trimmed) {
                cased.to_uppercase()
            } else {
                cased
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Estimated recruiter placement fee: 25% of the salary midpoint.
/// `None` when the posting carries no salary at all.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn estimate_placement_fee(lead: &Lead) -> Option<String> {
    let min = lead.annual_salary_min.unwrap_or(0);
    let max = lead.annual_salary_max.unwrap_or(0);
    let midpoint = if max > 0 {
        if min > 0 {
            (min + max) as f64 / 2.0
        } else {
            max as f64
        }
    } else if min > 0 {
        min as f64
    } else {
        return None;
    };

    let fee = midpoint * 0.25;
    if fee >= 1000.0 {
        Some(format!("${}K", (fee / 1000.0).round() as i64))
    } else {
        Some(format!("${fee:.0}"))
    }
}

/// The primary hiring signal for display, or empty when none qualifies.
#[must_use]
pub fn extract_hiring_signal(lead: &Lead) -> String {
    for sig in &lead.signals {
        if sig.signal_type == SIGNAL_TYPE_HIRING
            && PRIMARY_HIRING_SIGNALS.contains(&sig.signal_id.as_str())
        {
            return title_case_id(&sig.signal_id);
        }
    }
    String::new()
}

/// Distinct team-structure signals, title-cased and comma-joined.
#[must_use]
pub fn extract_team_structure(lead: &Lead) -> String {
    let mut seen: Vec<&str> = Vec::new();
    let mut labels: Vec<String> = Vec::new();
    for sig in &lead.signals {
        if sig.signal_type == SIGNAL_TYPE_TEAM && !seen.contains(&sig.signal_id.as_str()) {
            labels.push(title_case_id(&sig.signal_id));
            seen.push(&sig.signal_id);
        }
    }
    labels.join(", ")
}

/// Group the remaining signal types for rich displays.
#[must_use]
pub fn extract_extra_signals(lead: &Lead) -> ExtraSignals {
    let mut extras = ExtraSignals::default();
    for sig in &lead.signals {
        let label = title_case_id(&sig.signal_id);
        match sig.signal_type.as_str() {
            SIGNAL_TYPE_SEGMENT => extras.segment.push(label),
            SIGNAL_TYPE_DEAL_SIZE => extras.deal_size.push(label),
            SIGNAL_TYPE_COMP => extras.comp.push(label),
            SIGNAL_TYPE_MOTION => extras.motion.push(label),
            _ => {}
        }
    }
    extras
}

/// Up to `max_tools` distinct tool names, comma-joined.
#[must_use]
pub fn extract_key_tools(lead: &Lead, max_tools: usize) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for tool in &lead.tools {
        if !seen.contains(&tool.name.as_str()) {
            seen.push(&tool.name);
        }
        if seen.len() >= max_tools {
            break;
        }
    }
    seen.join(", ")
}

/// A one-line contextual note built from the lead's signal combination.
#[must_use]
pub fn signal_note(lead: &Lead) -> String {
    let has = |id: &str| lead.has_signal(id);
    let title = lead.title.as_deref().unwrap_or("");
    let stage = lead
        .company_stage
        .as_deref()
        .unwrap_or("")
        .to_lowercase();

    let mut fragments: Vec<String> = Vec::new();

    if has("first_hire") {
        fragments.push(format!(
            "First {title} hire — building function from scratch"
        ));
    } else if has("reports_ceo") && has("build_team") {
        fragments.push("Reports to CEO with team build mandate".to_string());
    } else if has("reports_ceo") {
        fragments.push("Reports directly to CEO — high-visibility role".to_string());
    } else if has("reports_cro") && has("build_team") {
        fragments.push("Reports to CRO with team build mandate".to_string());
    } else if has("build_team") {
        fragments.push("Team build mandate — scaling org".to_string());
    }

    if has("growth_hire") && fragments.is_empty() {
        if stage.contains("series") || stage.contains("growth") {
            let stage_display = stage
                .split_whitespace()
                .map(title_case_word)
                .collect::<Vec<_>>()
                .join(" ");
            fragments.push(format!("Growth hire at {stage_display} company"));
        } else {
            fragments.push("Growth hire — expansion role".to_string());
        }
    }

    if has("immediate") {
        fragments.push("Urgent fill — likely replacing departed leader".to_string());
    }
    if has("turnaround") {
        fragments.push("Turnaround/transformation mandate".to_string());
    }

    if fragments.is_empty() {
        if has("growth_hire") {
            fragments.push("Growth hire".to_string());
        } else {
            let tier = lead.seniority_tier.as_deref().unwrap_or("vp");
            fragments.push(format!(
                "{} role with strong signals",
                seniority::display_name(tier)
            ));
        }
    }

    fragments.truncate(2);
    fragments.join(" — ")
}

/// Best URL for applying: direct ATS link first, company site second.
#[must_use]
pub fn best_job_url(lead: &Lead) -> &str {
    lead.source_url
        .as_deref()
        .or(lead.company_url.as_deref())
        .unwrap_or("#")
}

#[cfg(test)]
mod tests {
    use super::*;
    use execsignals_core::{SignalTag, ToolMention};

    fn tag(signal_type: &str, signal_id: &str) -> SignalTag {
        SignalTag {
            signal_type: signal_type.to_string(),
            signal_id: signal_id.to_string(),
            signal_value: None,
        }
    }

    #[test]
    fn format_salary_range() {
        assert_eq!(format_salary(Some(150_000), Some(200_000)), "$150K - $200K");
    }

    #[test]
    fn format_salary_single_sided() {
        assert_eq!(format_salary(None, Some(250_000)), "Up to $250K");
        assert_eq!(format_salary(Some(180_000), None), "$180K+");
    }

    #[test]
    fn format_salary_absent() {
        assert_eq!(format_salary(None, None), "Not specified");
    }

    #[test]
    fn format_salary_millions() {
        assert_eq!(format_salary(None, Some(1_500_000)), "Up to $1.5M");
    }

    #[test]
    fn format_location_prefers_metro() {
        let lead = Lead {
            location_metro: Some("Boston".to_string()),
            location_state: Some("MA".to_string()),
            ..Lead::default()
        };
        assert_eq!(format_location(&lead), "Boston");
    }

    #[test]
    fn format_location_remote_marker() {
        let lead = Lead {
            location_metro: Some("Boston".to_string()),
            is_remote: true,
            ..Lead::default()
        };
        assert_eq!(format_location(&lead), "Boston, (Remote)");
    }

    #[test]
    fn format_location_fallback() {
        assert_eq!(format_location(&Lead::default()), "Location not specified");
    }

    #[test]
    fn clean_location_strips_country_suffix() {
        let lead = Lead {
            location_raw: Some("Elgin, IL, US".to_string()),
            ..Lead::default()
        };
        assert_eq!(clean_location(&lead), "Elgin, IL");
    }

    #[test]
    fn clean_location_collapses_remote_only() {
        let lead = Lead {
            location_raw: Some("Remote, US".to_string()),
            is_remote: true,
            ..Lead::default()
        };
        assert_eq!(clean_location(&lead), "Remote");
    }

    #[test]
    fn clean_location_metro_with_remote_marker() {
        let lead = Lead {
            location_metro: Some("Boston".to_string()),
            is_remote: true,
            ..Lead::default()
        };
        assert_eq!(clean_location(&lead), "Boston (Remote)");
    }

    #[test]
    fn clean_location_hybrid_marker() {
        let lead = Lead {
            location_metro: Some("Austin".to_string()),
            location_type: Some("Hybrid".to_string()),
            ..Lead::default()
        };
        assert_eq!(clean_location(&lead), "Austin (Hybrid)");
    }

    #[test]
    fn company_name_confidential_when_missing() {
        assert_eq!(format_company_name(None), "Confidential");
        assert_eq!(format_company_name(Some("")), "Confidential");
    }

    #[test]
    fn company_name_override_applies() {
        assert_eq!(format_company_name(Some("JPMORGANCHASE")), "JPMorgan Chase");
        assert_eq!(format_company_name(Some("att")), "AT&T");
    }

    #[test]
    fn company_name_mixed_case_preserved() {
        assert_eq!(format_company_name(Some("DataRobot")), "DataRobot");
    }

    #[test]
    fn company_name_all_caps_title_cased() {
        assert_eq!(format_company_name(Some("ACME HOLDINGS")), "Acme Holdings");
    }

    #[test]
    fn company_name_acronym_suffix_uppercased() {
        assert_eq!(
            format_company_name(Some("acme partners llc")),
            "Acme Partners LLC"
        );
    }

    #[test]
    fn placement_fee_uses_midpoint() {
        let lead = Lead {
            annual_salary_min: Some(200_000),
            annual_salary_max: Some(300_000),
            ..Lead::default()
        };
        // midpoint 250K, 25% = 62.5K
        assert_eq!(estimate_placement_fee(&lead).as_deref(), Some("$63K"));
    }

    #[test]
    fn placement_fee_max_only() {
        let lead = Lead {
            annual_salary_max: Some(200_000),
            ..Lead::default()
        };
        assert_eq!(estimate_placement_fee(&lead).as_deref(), Some("$50K"));
    }

    #[test]
    fn placement_fee_none_without_salary() {
        assert_eq!(estimate_placement_fee(&Lead::default()), None);
    }

    #[test]
    fn hiring_signal_picks_first_qualifying_tag() {
        let lead = Lead {
            signals: vec![
                tag(SIGNAL_TYPE_TEAM, "growth_hire"),
                tag(SIGNAL_TYPE_HIRING, "turnaround"),
                tag(SIGNAL_TYPE_HIRING, "growth_hire"),
            ],
            ..Lead::default()
        };
        // The team-typed tag doesn't qualify; the first hiring-typed one does.
        assert_eq!(extract_hiring_signal(&lead), "Turnaround");
    }

    #[test]
    fn hiring_signal_empty_when_none_qualify() {
        let lead = Lead {
            signals: vec![tag(SIGNAL_TYPE_HIRING, "backfill")],
            ..Lead::default()
        };
        assert_eq!(extract_hiring_signal(&lead), "");
    }

    #[test]
    fn team_structure_dedupes_and_labels() {
        let lead = Lead {
            signals: vec![
                tag(SIGNAL_TYPE_TEAM, "reports_ceo"),
                tag(SIGNAL_TYPE_TEAM, "build_team"),
                tag(SIGNAL_TYPE_TEAM, "reports_ceo"),
            ],
            ..Lead::default()
        };
        assert_eq!(extract_team_structure(&lead), "Reports Ceo, Build Team");
    }

    #[test]
    fn extra_signals_grouped_by_type() {
        let lead = Lead {
            signals: vec![
                tag(SIGNAL_TYPE_SEGMENT, "enterprise"),
                tag(SIGNAL_TYPE_MOTION, "plg"),
                tag(SIGNAL_TYPE_COMP, "equity_heavy"),
            ],
            ..Lead::default()
        };
        let extras = extract_extra_signals(&lead);
        assert_eq!(extras.segment, vec!["Enterprise"]);
        assert_eq!(extras.motion, vec!["Plg"]);
        assert_eq!(extras.comp, vec!["Equity Heavy"]);
        assert!(extras.deal_size.is_empty());
    }

    #[test]
    fn key_tools_distinct_and_capped() {
        let tools: Vec<ToolMention> = ["Salesforce", "HubSpot", "Salesforce", "Looker"]
            .iter()
            .map(|name| ToolMention {
                name: (*name).to_string(),
                category: None,
            })
            .collect();
        let lead = Lead {
            tools,
            ..Lead::default()
        };
        assert_eq!(extract_key_tools(&lead, 5), "Salesforce, HubSpot, Looker");
        assert_eq!(extract_key_tools(&lead, 2), "Salesforce, HubSpot");
    }

    #[test]
    fn signal_note_first_hire_takes_priority() {
        let lead = Lead {
            title: Some("VP Marketing".to_string()),
            signals: vec![
                tag(SIGNAL_TYPE_TEAM, "first_hire"),
                tag(SIGNAL_TYPE_TEAM, "reports_ceo"),
            ],
            ..Lead::default()
        };
        assert!(signal_note(&lead).starts_with("First VP Marketing hire"));
    }

    #[test]
    fn signal_note_growth_hire_with_stage() {
        let lead = Lead {
            company_stage: Some("series b".to_string()),
            signals: vec![tag(SIGNAL_TYPE_HIRING, "growth_hire")],
            ..Lead::default()
        };
        assert_eq!(signal_note(&lead), "Growth hire at Series B company");
    }

    #[test]
    fn signal_note_caps_at_two_fragments() {
        let lead = Lead {
            signals: vec![
                tag(SIGNAL_TYPE_TEAM, "reports_ceo"),
                tag(SIGNAL_TYPE_HIRING, "immediate"),
                tag(SIGNAL_TYPE_HIRING, "turnaround"),
            ],
            ..Lead::default()
        };
        let note = signal_note(&lead);
        // Three fragments qualify; only the first two survive.
        assert!(note.contains("Reports directly to CEO"));
        assert!(note.contains("Urgent fill"));
        assert!(!note.contains("Turnaround"));
    }

    #[test]
    fn signal_note_fallback_uses_seniority() {
        let lead = Lead {
            seniority_tier: Some("svp".to_string()),
            ..Lead::default()
        };
        assert_eq!(signal_note(&lead), "SVP role with strong signals");
    }

    #[test]
    fn best_job_url_prefers_source() {
        let lead = Lead {
            source_url: Some("https://jobs.example.com/1".to_string()),
            company_url: Some("https://example.com".to_string()),
            ..Lead::default()
        };
        assert_eq!(best_job_url(&lead), "https://jobs.example.com/1");

        let lead = Lead {
            company_url: Some("https://example.com".to_string()),
            ..Lead::default()
        };
        assert_eq!(best_job_url(&lead), "https://example.com");
        assert_eq!(best_job_url(&Lead::default()), "#");
    }
}
