//! Seniority correction for upstream misclassifications.
//!
//! The scraper tags a posting `c_level` whenever a C-suite keyword appears
//! near the title — "Senior Director, CEO Initiatives" comes through as
//! c_level because it mentions the CEO. Only the top tier is corrected;
//! everything else is passed through untouched.

use execsignals_core::Lead;

/// Title prefixes that confirm an actual C-level role.
const CONFIRM_PREFIXES: &[&str] = &[
    "chief ",
    "ceo",
    "cfo",
    "coo",
    "cto",
    "cio",
    "cmo",
    "cro",
    "cso",
    "cpo",
    "president",
    "executive director",
    "general counsel",
    "managing director",
];

/// Subordinate-role keywords that mark a c_level tag as a false positive.
/// Matched as a prefix or within the first 30 characters of the title.
const DOWNGRADE_PATTERNS: &[&str] = &[
    "director,",
    "director ",
    "sr. director",
    "senior director",
    "manager,",
    "manager ",
    "sr. manager",
    "senior manager",
    "coordinator",
    "analyst",
    "specialist",
    "associate",
    "advisor",
    "intern",
    "assistant",
];

/// Downgrade a `c_level` tag to `vp` when the title is clearly a
/// subordinate role, keep it when the title confirms a real C-level role.
///
/// Titles that match neither list keep the upstream classification — a
/// conservative default carried over from the source system pending
/// product review.
pub fn correct_seniority(lead: &mut Lead) {
    if lead.seniority_tier.as_deref() != Some("c_level") {
        return;
    }
    let title = lead.title_lower();
    let title = title.trim();

    if CONFIRM_PREFIXES.iter().any(|p| title.starts_with(p)) {
        return;
    }
    if title.contains("president and") || title.contains("president &") {
        return;
    }
    if title.contains("founding")
        && (title.contains("president") || title.contains("ceo") || title.contains("chief"))
    {
        return;
    }

    let head: String = title.chars().take(30).collect();
    for pattern in DOWNGRADE_PATTERNS {
        if title.starts_with(pattern) || head.contains(&format!(" {pattern}")) {
            lead.seniority_tier = Some("vp".to_string());
            return;
        }
    }
    // Neither confirmed nor downgraded: keep the scraper's classification.
}
