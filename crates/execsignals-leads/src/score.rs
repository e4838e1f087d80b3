//! Lead scoring: a deterministic weighted sum over seniority, signal
//! richness, salary and company stage.

use chrono::NaiveDate;

use execsignals_core::Lead;

/// Every lead starts here; bonuses only add, except the stale-posting
/// penalty in [`apply_freshness_bonus`].
pub const SCORE_BASE: i64 = 10;

const SENIORITY_BONUS: &[(&str, i64)] = &[
    ("c_level", 15),
    ("evp", 12),
    ("svp", 10),
    ("vp", 5),
    ("head_of", 3),
    ("head", 3),
    ("senior_director", 1),
    ("director", 0),
];

const SIGNAL_BONUS: &[(&str, i64)] = &[
    ("reports_ceo", 10),
    ("first_hire", 8),
    ("reports_cro", 6),
    ("build_team", 5),
    ("growth_hire", 4),
    ("immediate", 2),
    ("turnaround", 1),
];

/// Salary thresholds, descending; the first threshold the best salary
/// figure meets or exceeds wins, and only one salary bonus ever applies.
const SALARY_THRESHOLDS: &[(i64, i64)] = &[(300_000, 10), (200_000, 7), (150_000, 4), (100_000, 2)];

/// Signals that indicate growth/expansion hiring; three or more of these
/// on one lead earns the multi-signal richness bonus.
const GROWTH_SIGNALS: &[&str] = &[
    "growth_hire",
    "build_team",
    "reports_ceo",
    "reports_cro",
    "first_hire",
];

const MULTI_SIGNAL_BONUS: i64 = 5;
const STAGE_BONUS: i64 = 2;

/// Score a lead from its seniority tier, distinct signal ids, salary and
/// company stage. Pure: identical input always yields an identical score.
#[must_use]
pub fn score_lead(lead: &Lead) -> i64 {
    let mut score = SCORE_BASE;

    let tier = lead.seniority_tier.as_deref().unwrap_or("");
    score += lookup(SENIORITY_BONUS, tier);

    // Each distinct qualifying signal id counts once, however many times
    // the scraper tagged it.
    let mut seen: Vec<&str> = Vec::new();
    for sig in &lead.signals {
        if !seen.contains(&sig.signal_id.as_str()) {
            score += lookup(SIGNAL_BONUS, &sig.signal_id);
            seen.push(&sig.signal_id);
        }
    }

    // Multi-signal richness: counted over tag occurrences, not distinct ids.
    let growth_tags = lead
        .signals
        .iter()
        .filter(|s| GROWTH_SIGNALS.contains(&s.signal_id.as_str()))
        .count();
    if growth_tags >= 3 {
        score += MULTI_SIGNAL_BONUS;
    }

    let best_salary = lead.best_salary();
    for (threshold, bonus) in SALARY_THRESHOLDS {
        if best_salary >= *threshold {
            score += bonus;
            break;
        }
    }

    if let Some(stage) = &lead.company_stage {
        let stage = stage.to_lowercase();
        if stage.contains("series") || stage.contains("growth") {
            score += STAGE_BONUS;
        }
    }

    score
}

/// Add the freshness bonus relative to `reference_date`: ≤2 days +10,
/// ≤4 days +5, ≤7 days +2, >14 days −5. Missing or malformed posting
/// dates leave the score untouched.
pub fn apply_freshness_bonus(lead: &mut Lead, reference_date: NaiveDate) {
    let Some(days_ago) = days_since_posted(lead.date_posted.as_deref(), reference_date) else {
        return;
    };
    if days_ago <= 2 {
        lead.score += 10;
    } else if days_ago <= 4 {
        lead.score += 5;
    } else if days_ago <= 7 {
        lead.score += 2;
    } else if days_ago > 14 {
        lead.score -= 5;
    }
}

/// Days between a raw posting-date string and the reference date.
/// `None` when the date is absent or unparseable.
#[must_use]
pub fn days_since_posted(date_posted: Option<&str>, reference_date: NaiveDate) -> Option<i64> {
    let raw = date_posted?;
    let date = NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), "%Y-%m-%d").ok()?;
    Some((reference_date - date).num_days())
}

fn lookup(table: &[(&str, i64)], key: &str) -> i64 {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(0, |(_, v)| *v)
}
