//! Post-dedup filters and signal hygiene.

use execsignals_core::display::SEARCH_FIRMS;
use execsignals_core::{Lead, SignalTag};

/// Title fragments that mark a posting as something other than a real
/// opening (training programs, internships).
const FALSE_POSITIVE_CONTAINS: &[&str] = &[
    "certification program",
    "future leaders program",
    "internship",
    "in-training",
];

const FALSE_POSITIVE_PREFIXES: &[&str] = &["intern ", "intern-"];

/// Function categories where a `reports_cro` signal is meaningful.
const SALES_FUNCTIONS: &[&str] = &["sales", "business_development", "revenue", "partnerships"];

/// Title keywords that identify a sales-side role regardless of the
/// function category the scraper assigned.
const SALES_TITLE_KEYWORDS: &[&str] = &[
    "sales",
    "revenue",
    "business development",
    "account",
    "partnerships",
    "growth",
    "commercial",
    "sdr",
    "bdr",
];

/// True when the title matches a known non-job pattern. Runs after dedup
/// so a false positive can't win a dedup slot from a real posting, and
/// before any top-N truncation.
#[must_use]
pub fn is_false_positive(lead: &Lead) -> bool {
    let title = lead.title_lower();
    FALSE_POSITIVE_CONTAINS.iter().any(|p| title.contains(p))
        || FALSE_POSITIVE_PREFIXES.iter().any(|p| title.starts_with(p))
}

/// True when the posting company is a known executive search or staffing
/// firm — flagged as a retained search rather than excluded.
#[must_use]
pub fn is_search_firm(lead: &Lead) -> bool {
    let name = lead
        .company_name_normalized
        .as_deref()
        .unwrap_or("")
        .to_lowercase();
    SEARCH_FIRMS.contains(&name.trim())
}

/// Drop `reports_cro` tags from non-sales roles; a CRO reporting line only
/// means something for revenue-side positions.
#[must_use]
pub fn filter_signals_for_role(lead: &Lead) -> Vec<SignalTag> {
    let title = lead.title_lower();
    let func = lead
        .function_category
        .as_deref()
        .unwrap_or("")
        .to_lowercase();
    let is_sales_role = SALES_FUNCTIONS.contains(&func.as_str())
        || SALES_TITLE_KEYWORDS.iter().any(|kw| title.contains(kw));
    if is_sales_role {
        return lead.signals.clone();
    }
    lead.signals
        .iter()
        .filter(|s| s.signal_id != "reports_cro")
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use execsignals_core::lead::SIGNAL_TYPE_TEAM;

    fn titled(title: &str) -> Lead {
        Lead {
            title: Some(title.to_string()),
            ..Lead::default()
        }
    }

    #[test]
    fn certification_program_is_false_positive() {
        assert!(is_false_positive(&titled(
            "Sales Leadership Certification Program"
        )));
    }

    #[test]
    fn internship_variants_are_false_positives() {
        assert!(is_false_positive(&titled("VP Internship Program")));
        assert!(is_false_positive(&titled("Intern - Finance")));
        assert!(is_false_positive(&titled("Manager-In-Training")));
        assert!(is_false_positive(&titled("Future Leaders Program 2026")));
    }

    #[test]
    fn real_roles_are_retained() {
        assert!(!is_false_positive(&titled("VP of Sales")));
        assert!(!is_false_positive(&titled("Chief Financial Officer")));
        // "International" contains "intern" but not as a prefix word.
        assert!(!is_false_positive(&titled("VP International Markets")));
    }

    #[test]
    fn search_firms_are_detected_case_insensitively() {
        let lead = Lead {
            company_name_normalized: Some("Korn Ferry".to_string()),
            ..Lead::default()
        };
        assert!(is_search_firm(&lead));
    }

    #[test]
    fn employers_are_not_search_firms() {
        let lead = Lead {
            company_name_normalized: Some("acme".to_string()),
            ..Lead::default()
        };
        assert!(!is_search_firm(&lead));
        assert!(!is_search_firm(&Lead::default()));
    }

    fn with_cro_signal(title: &str, func: Option<&str>) -> Lead {
        Lead {
            title: Some(title.to_string()),
            function_category: func.map(String::from),
            signals: vec![
                SignalTag {
                    signal_type: SIGNAL_TYPE_TEAM.to_string(),
                    signal_id: "reports_cro".to_string(),
                    signal_value: None,
                },
                SignalTag {
                    signal_type: SIGNAL_TYPE_TEAM.to_string(),
                    signal_id: "build_team".to_string(),
                    signal_value: None,
                },
            ],
            ..Lead::default()
        }
    }

    #[test]
    fn sales_function_keeps_reports_cro() {
        let lead = with_cro_signal("VP Enterprise Accounts", Some("sales"));
        let signals = filter_signals_for_role(&lead);
        assert!(signals.iter().any(|s| s.signal_id == "reports_cro"));
    }

    #[test]
    fn sales_title_keyword_keeps_reports_cro() {
        let lead = with_cro_signal("VP of Revenue Operations", Some("operations"));
        let signals = filter_signals_for_role(&lead);
        assert!(signals.iter().any(|s| s.signal_id == "reports_cro"));
    }

    #[test]
    fn non_sales_role_drops_reports_cro() {
        let lead = with_cro_signal("VP of Engineering", Some("engineering"));
        let signals = filter_signals_for_role(&lead);
        assert!(!signals.iter().any(|s| s.signal_id == "reports_cro"));
        assert!(signals.iter().any(|s| s.signal_id == "build_team"));
    }
}
