//! Fixed display-name tables shared by the analytics and report layers.
//!
//! All tables are immutable compile-time data; nothing here mutates at
//! runtime.

/// Raw scraper industry names mapped to subscriber-facing display names.
pub const INDUSTRY_MAP: &[(&str, &str)] = &[
    ("Banks And Financial Services", "Financial Services"),
    ("Health Care", "Healthcare"),
    ("Education And Schools", "Education"),
    ("Internet And Software", "Software / SaaS"),
    ("Government", "Government"),
    ("Organization", "Nonprofit"),
    ("Consulting And Business Services", "Consulting"),
    ("Media News And Publishing", "Media"),
    ("Restaurants Travel And Leisure", "Hospitality"),
    ("Insurance", "Insurance"),
    ("Real Estate", "Real Estate"),
    ("Transport And Freight", "Transport"),
    ("Retail", "Retail"),
    ("Consumer Goods And Services", "Consumer Goods"),
    ("Industrial Manufacturing", "Manufacturing"),
    ("Energy Mining And Utilities", "Energy"),
    ("Telecommunications", "Telecom"),
    ("Construction", "Construction"),
    ("Agriculture", "Agriculture"),
    ("Automotive", "Automotive"),
];

/// Function categories mapped to the role name used in benchmarks.
pub const FUNCTION_TO_ROLE: &[(&str, &str)] = &[
    ("sales", "VP Sales"),
    ("finance", "CFO"),
    ("engineering", "VP Engineering"),
    ("marketing", "VP Marketing"),
    ("operations", "VP Operations"),
    ("product", "VP Product"),
    ("people", "VP People/HR"),
    ("data", "VP Data"),
    ("legal", "VP Legal"),
];

/// Roles shown in the salary-benchmark table, in display order.
pub const ROLE_ORDER: &[&str] = &[
    "VP Sales",
    "CFO",
    "VP Engineering",
    "VP Marketing",
    "VP Operations",
    "VP Product",
    "VP People/HR",
];

/// Company-stage display buckets, in display order.
pub const STAGE_BUCKETS: &[&str] = &[
    "Enterprise / Public",
    "Late Stage",
    "Growth",
    "Early Stage",
    "Unknown",
];

const STAGE_MAP: &[(&str, &str)] = &[
    ("enterprise", "Enterprise / Public"),
    ("public", "Enterprise / Public"),
    ("late_stage", "Late Stage"),
    ("late stage", "Late Stage"),
    ("growth", "Growth"),
    ("series_a", "Growth"),
    ("series_b", "Growth"),
    ("series_c", "Late Stage"),
    ("series_d", "Late Stage"),
    ("early_stage", "Early Stage"),
    ("early stage", "Early Stage"),
    ("seed", "Early Stage"),
    ("startup", "Early Stage"),
];

/// Company names whose scraped form needs a fixed display spelling.
pub const COMPANY_NAME_OVERRIDES: &[(&str, &str)] = &[
    ("jpmorganchase", "JPMorgan Chase"),
    ("jpmorgan chase", "JPMorgan Chase"),
    ("blackrock", "BlackRock"),
    ("mckinsey", "McKinsey"),
    ("deloitte", "Deloitte"),
    ("pwc", "PwC"),
    ("ey", "EY"),
    ("kpmg", "KPMG"),
    ("ibm", "IBM"),
    ("att", "AT&T"),
    ("cvs", "CVS Health"),
    ("ge", "GE"),
    ("hp", "HP"),
    ("sap", "SAP"),
    ("bny", "BNY Mellon"),
    ("ymca", "YMCA"),
    ("usaa", "USAA"),
    ("hca", "HCA Healthcare"),
    ("bcg", "BCG"),
];

/// Known executive search / staffing firms. Their postings are retained
/// searches, not direct-employer openings.
pub const SEARCH_FIRMS: &[&str] = &[
    "korn ferry",
    "heidrick & struggles",
    "heidrick and struggles",
    "spencer stuart",
    "russell reynolds",
    "egon zehnder",
    "boyden",
    "odgers berndtson",
    "stanton chase",
    "dhr international",
    "jm search",
    "witt/kieffer",
    "wittkieffer",
    "diversified search",
    "caldwell partners",
    "isaacson miller",
    "robert half",
    "randstad",
    "adecco",
    "manpower",
    "manpowergroup",
    "kelly services",
    "hays",
    "page executive",
    "michael page",
];

/// Companies excluded from Top Hiring Companies (venture studios, job
/// boards posting on behalf of others).
pub const COMPANY_BLOCKLIST: &[&str] = &["futuresight"];

/// Display name for a raw industry string, falling back to the raw value.
#[must_use]
pub fn industry_display(raw: &str) -> &str {
    INDUSTRY_MAP
        .iter()
        .find(|(k, _)| *k == raw)
        .map_or(raw, |(_, v)| *v)
}

/// Display role for a function category, or `None` when unmapped.
#[must_use]
pub fn function_role(function_category: &str) -> Option<&'static str> {
    FUNCTION_TO_ROLE
        .iter()
        .find(|(k, _)| *k == function_category)
        .map(|(_, v)| *v)
}

/// Bucket a raw company-stage string into one of [`STAGE_BUCKETS`].
///
/// Exact-map lookup first, then substring fallback for free-text stages
/// the scraper emits ("Series C funded", "late-stage SaaS", ...).
#[must_use]
pub fn stage_bucket(raw: &str) -> &'static str {
    let stage = raw.trim().to_lowercase();
    if stage.is_empty() {
        return "Unknown";
    }
    if let Some((_, bucket)) = STAGE_MAP.iter().find(|(k, _)| *k == stage) {
        return bucket;
    }
    if stage.contains("enterprise") || stage.contains("public") {
        "Enterprise / Public"
    } else if stage.contains("late") || stage.contains("series c") || stage.contains("series d") {
        "Late Stage"
    } else if stage.contains("growth") || stage.contains("series a") || stage.contains("series b") {
        "Growth"
    } else if stage.contains("early") || stage.contains("seed") || stage.contains("startup") {
        "Early Stage"
    } else {
        "Unknown"
    }
}

/// Turn a snake_case id into a title-cased label: `growth_hire` →
/// `Growth Hire`.
#[must_use]
pub fn title_case_id(id: &str) -> String {
    id.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industry_display_maps_known_names() {
        assert_eq!(
            industry_display("Banks And Financial Services"),
            "Financial Services"
        );
    }

    #[test]
    fn industry_display_passes_through_unknown_names() {
        assert_eq!(industry_display("Space Mining"), "Space Mining");
    }

    #[test]
    fn function_role_maps_sales() {
        assert_eq!(function_role("sales"), Some("VP Sales"));
        assert_eq!(function_role("finance"), Some("CFO"));
    }

    #[test]
    fn function_role_unknown_is_none() {
        assert_eq!(function_role("astrology"), None);
    }

    #[test]
    fn stage_bucket_exact_matches() {
        assert_eq!(stage_bucket("series_b"), "Growth");
        assert_eq!(stage_bucket("series_c"), "Late Stage");
        assert_eq!(stage_bucket("seed"), "Early Stage");
        assert_eq!(stage_bucket("public"), "Enterprise / Public");
    }

    #[test]
    fn stage_bucket_substring_fallback() {
        assert_eq!(stage_bucket("Series C funded"), "Late Stage");
        assert_eq!(stage_bucket("high-growth SaaS"), "Growth");
        assert_eq!(stage_bucket("publicly traded"), "Enterprise / Public");
    }

    #[test]
    fn stage_bucket_empty_and_unmatched() {
        assert_eq!(stage_bucket(""), "Unknown");
        assert_eq!(stage_bucket("  "), "Unknown");
        assert_eq!(stage_bucket("family business"), "Unknown");
    }

    #[test]
    fn title_case_id_basic() {
        assert_eq!(title_case_id("growth_hire"), "Growth Hire");
        assert_eq!(title_case_id("reports_ceo"), "Reports Ceo");
        assert_eq!(title_case_id("vp"), "Vp");
    }

    #[test]
    fn title_case_id_empty() {
        assert_eq!(title_case_id(""), "");
    }
}
