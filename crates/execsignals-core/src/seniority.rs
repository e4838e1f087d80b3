//! Seniority tier ranking.
//!
//! Tiers form a fixed ordered set; anything the scraper emits outside this
//! table ranks below every known tier.

/// Tier ranks, highest first. `head_of` and `head` share a rank between
/// `vp` and `senior_director`, hence the fractional values.
pub const SENIORITY_RANK: &[(&str, f64)] = &[
    ("c_level", 7.0),
    ("evp", 6.0),
    ("svp", 5.0),
    ("vp", 4.0),
    ("head_of", 3.5),
    ("head", 3.5),
    ("senior_director", 3.0),
    ("director", 2.0),
    ("senior_manager", 1.0),
    ("manager", 0.0),
];

/// The tiers treated as "VP-plus" by every market-analytics query.
pub const VP_TIERS: &[&str] = &["vp", "svp", "evp", "c_level"];

/// Fallback floor when the operator passes an unknown tier.
pub const DEFAULT_MIN_SENIORITY: &str = "vp";

/// Rank of a tier, or `None` for unknown tiers.
#[must_use]
pub fn rank(tier: &str) -> Option<f64> {
    SENIORITY_RANK
        .iter()
        .find(|(name, _)| *name == tier)
        .map(|(_, r)| *r)
}

/// All tiers at or above the given minimum, in table order.
///
/// Returns an empty vec when `min_tier` is unknown; callers fall back to
/// [`DEFAULT_MIN_SENIORITY`] with a warning.
#[must_use]
pub fn tiers_at_or_above(min_tier: &str) -> Vec<&'static str> {
    let Some(min_rank) = rank(min_tier) else {
        return Vec::new();
    };
    SENIORITY_RANK
        .iter()
        .filter(|(_, r)| *r >= min_rank)
        .map(|(name, _)| *name)
        .collect()
}

/// Display name for a tier: fixed names for the VP+ tiers, snake-case
/// title-cased for everything else.
#[must_use]
pub fn display_name(tier: &str) -> String {
    match tier {
        "c_level" => "C-Level".to_string(),
        "evp" => "EVP".to_string(),
        "svp" => "SVP".to_string(),
        "vp" => "VP".to_string(),
        other => crate::display::title_case_id(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_known_tier() {
        assert_eq!(rank("c_level"), Some(7.0));
        assert_eq!(rank("manager"), Some(0.0));
    }

    #[test]
    fn rank_unknown_tier_is_none() {
        assert_eq!(rank("wizard"), None);
    }

    #[test]
    fn tiers_at_or_above_vp() {
        let tiers = tiers_at_or_above("vp");
        assert_eq!(tiers, vec!["c_level", "evp", "svp", "vp"]);
    }

    #[test]
    fn tiers_at_or_above_director_includes_head_roles() {
        let tiers = tiers_at_or_above("director");
        assert!(tiers.contains(&"head_of"));
        assert!(tiers.contains(&"head"));
        assert!(tiers.contains(&"senior_director"));
        assert!(!tiers.contains(&"manager"));
    }

    #[test]
    fn tiers_at_or_above_manager_is_everything() {
        assert_eq!(tiers_at_or_above("manager").len(), SENIORITY_RANK.len());
    }

    #[test]
    fn tiers_at_or_above_unknown_is_empty() {
        assert!(tiers_at_or_above("intern").is_empty());
    }

    #[test]
    fn display_name_fixed_tiers() {
        assert_eq!(display_name("c_level"), "C-Level");
        assert_eq!(display_name("svp"), "SVP");
        assert_eq!(display_name("vp"), "VP");
    }

    #[test]
    fn display_name_title_cases_other_tiers() {
        assert_eq!(display_name("senior_director"), "Senior Director");
    }
}
